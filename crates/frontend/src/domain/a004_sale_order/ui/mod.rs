pub mod create;
pub mod list;
pub mod picker;

pub use list::SaleOrderList;
pub use picker::SaleOrderPicker;
