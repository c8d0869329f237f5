pub mod inventory_logs;
pub mod products;

pub use inventory_logs::{InventoryLog, NewInventoryLog};
pub use products::{NewProduct, Product, ProductChangeset};
