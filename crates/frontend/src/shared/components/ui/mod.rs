pub mod input;

pub use input::Input;
