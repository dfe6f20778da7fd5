pub mod create;
pub mod tracking;

pub use create::ProductionCreatePage;
pub use tracking::ProductionTrackingPage;
