pub mod input;
pub mod line_item_editor;
pub mod line_items_form;
pub mod select;
pub mod status_line;

pub use input::Input;
pub use line_item_editor::LineItemEditor;
pub use line_items_form::LineItemsForm;
pub use select::Select;
pub use status_line::StatusLine;
