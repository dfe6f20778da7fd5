pub mod add;
pub mod list;

pub use add::ProductAddPage;
pub use list::ProductListPage;
