pub mod view;
pub mod view_model;

pub use view::DealCreateForm;
pub use view_model::{DealCreateVm, DealForm};
