pub mod view;
pub mod view_model;

pub use view::InvoiceCreateForm;
pub use view_model::{InvoiceCreateVm, InvoiceForm};
