pub mod create;
pub mod tracking;

pub use create::InternalConsumptionCreatePage;
pub use tracking::InternalConsumptionTrackingPage;
