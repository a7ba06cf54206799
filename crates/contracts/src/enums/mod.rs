pub mod deal_stage;
pub mod invoice_status;
pub mod project_status;
pub mod sale_order_status;
pub mod stock_level;

pub use deal_stage::DealStage;
pub use invoice_status::InvoiceStatus;
pub use project_status::ProjectStatus;
pub use sale_order_status::SaleOrderStatus;
pub use stock_level::StockLevel;
