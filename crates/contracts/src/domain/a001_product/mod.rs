pub mod aggregate;
pub mod catalog;

pub use aggregate::{Product, ProductKey};
pub use catalog::Catalog;
