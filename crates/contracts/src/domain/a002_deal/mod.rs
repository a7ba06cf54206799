pub mod aggregate;

pub use aggregate::{Deal, DealDto, DealId};
