pub mod create;
pub mod tracking;

pub use create::ReceiptCreatePage;
pub use tracking::ReceiptTrackingPage;
