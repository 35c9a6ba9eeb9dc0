pub mod aggregate;

pub use aggregate::SizeOptionSet;
