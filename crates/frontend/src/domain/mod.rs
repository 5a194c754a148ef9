pub mod a001_client;
pub mod a002_contract;
pub mod a003_product;
pub mod a004_supplier;
pub mod a005_internal_order;
pub mod a006_supplier_order;
pub mod a007_sale;
