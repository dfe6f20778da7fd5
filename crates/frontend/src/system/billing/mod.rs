pub mod api;
pub mod page;
pub mod schedule;

pub use page::BillingPage;
