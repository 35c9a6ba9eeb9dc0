pub mod browser;
pub mod components;
