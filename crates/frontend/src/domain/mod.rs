pub mod a001_contact;
pub mod a002_deal;
pub mod a003_product;
pub mod a004_sale_order;
pub mod a005_invoice;
pub mod a006_project;
