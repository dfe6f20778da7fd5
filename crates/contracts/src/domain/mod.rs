pub mod credit_note;
pub mod dispatch;
pub mod internal_consumption;
pub mod line_item;
pub mod product;
pub mod production;
pub mod receipt;
pub mod registry;
