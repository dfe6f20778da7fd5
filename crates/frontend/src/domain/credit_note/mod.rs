pub mod api;
pub mod collection;
pub mod ui;
