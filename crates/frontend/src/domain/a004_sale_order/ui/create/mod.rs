pub mod view;
pub mod view_model;

pub use view::SaleOrderCreateForm;
pub use view_model::{SaleOrderCreateVm, SaleOrderForm};
