pub mod view;
pub mod view_model;

pub use view::ProjectCreateForm;
pub use view_model::{ProjectCreateVm, ProjectForm};
