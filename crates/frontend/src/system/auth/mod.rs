pub mod field;
pub mod form_view;

pub use field::AuthField;
pub use form_view::{AuthFormViewModel, FieldModel};
