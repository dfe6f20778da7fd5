pub mod create;
pub mod tracking;

pub use create::DispatchCreatePage;
pub use tracking::DispatchTrackingPage;
