pub mod create;
pub mod tracking;

pub use create::CreditNoteCreatePage;
pub use tracking::CreditNoteTrackingPage;
