pub mod error;
pub mod product;
pub mod product_io;
