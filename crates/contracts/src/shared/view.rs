//! View abstraction between the use cases and whatever renders the page.
//!
//! The frontend implements these with reactive signals and browser calls;
//! tests use the in-memory fakes below.

use crate::domain::a001_product::Product;
use crate::system::auth::FormField;

/// Form fields with an inline error display
pub trait FormView {
    /// Current raw value of the input
    fn field_value(&self, field: FormField) -> String;

    /// Show `message` and mark the input with the error border
    fn show_error(&mut self, field: FormField, message: &str);

    /// Hide the message and reset the border
    fn clear_error(&mut self, field: FormField);
}

/// Regions of the product page
pub trait ProductView {
    /// Write title, category, price and description as text and place an
    /// image with `src = product.image` and `alt = product.title`
    fn write_product(&mut self, product: &Product);
}

/// Blocking acknowledgments and navigation
pub trait Presenter {
    fn alert(&self, message: &str);
    fn navigate(&self, href: &str);
}

#[cfg(test)]
pub mod fakes {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Debug, Default)]
    pub struct FakeFormView {
        pub values: HashMap<FormField, String>,
        pub errors: HashMap<FormField, String>,
    }

    impl FakeFormView {
        pub fn with(values: &[(FormField, &str)]) -> Self {
            Self {
                values: values.iter().map(|(f, v)| (*f, v.to_string())).collect(),
                errors: HashMap::new(),
            }
        }
    }

    impl FormView for FakeFormView {
        fn field_value(&self, field: FormField) -> String {
            self.values.get(&field).cloned().unwrap_or_default()
        }

        fn show_error(&mut self, field: FormField, message: &str) {
            self.errors.insert(field, message.to_string());
        }

        fn clear_error(&mut self, field: FormField) {
            self.errors.remove(&field);
        }
    }

    #[derive(Debug, Default)]
    pub struct FakeProductView {
        pub rendered: Option<Product>,
    }

    impl ProductView for FakeProductView {
        fn write_product(&mut self, product: &Product) {
            self.rendered = Some(product.clone());
        }
    }

    #[derive(Debug, Default)]
    pub struct FakePresenter {
        pub alerts: RefCell<Vec<String>>,
        pub navigations: RefCell<Vec<String>>,
    }

    impl Presenter for FakePresenter {
        fn alert(&self, message: &str) {
            self.alerts.borrow_mut().push(message.to_string());
        }

        fn navigate(&self, href: &str) {
            self.navigations.borrow_mut().push(href.to_string());
        }
    }
}
