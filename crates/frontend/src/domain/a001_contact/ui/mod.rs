pub mod create;
pub mod list;
pub mod picker;

pub use list::ContactList;
pub use picker::ContactPicker;
