pub mod create;
pub mod list;

pub use list::ProjectList;
