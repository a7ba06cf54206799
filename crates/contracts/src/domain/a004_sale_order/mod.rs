pub mod aggregate;

pub use aggregate::{SaleOrder, SaleOrderDto, SaleOrderId};
