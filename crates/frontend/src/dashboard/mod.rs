pub mod chart;
pub mod page;

pub use page::DashboardPage;
