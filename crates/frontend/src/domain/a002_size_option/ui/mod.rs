pub mod selector;

pub use selector::SizeSelector;
