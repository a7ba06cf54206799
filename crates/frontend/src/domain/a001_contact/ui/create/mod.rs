pub mod view;
pub mod view_model;

pub use view::ContactCreateForm;
pub use view_model::{ContactCreateVm, ContactForm};
