pub mod inventory_log;
pub mod product;
