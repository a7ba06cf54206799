pub mod aggregate;

pub use aggregate::{Contact, ContactDto, ContactId};
