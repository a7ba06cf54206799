pub mod view;
pub mod view_model;

pub use view::ProductCreateForm;
pub use view_model::{ProductCreateVm, ProductForm};
