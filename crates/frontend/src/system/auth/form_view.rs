use contracts::shared::view::FormView;
use contracts::system::auth::{FormField, FormKind};
use leptos::prelude::*;

/// Reactive state of one input: its value and its inline error
#[derive(Clone, Copy)]
pub struct FieldModel {
    pub value: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
}

impl FieldModel {
    pub fn new() -> Self {
        Self {
            value: RwSignal::new(String::new()),
            error: RwSignal::new(None),
        }
    }
}

impl Default for FieldModel {
    fn default() -> Self {
        Self::new()
    }
}

/// ViewModel for the login and signup forms.
///
/// Login uses only `email` and `password`.
#[derive(Clone, Copy)]
pub struct AuthFormViewModel {
    pub kind: FormKind,
    pub name: FieldModel,
    pub email: FieldModel,
    pub password: FieldModel,
    pub confirm_password: FieldModel,
}

impl AuthFormViewModel {
    pub fn new(kind: FormKind) -> Self {
        Self {
            kind,
            name: FieldModel::new(),
            email: FieldModel::new(),
            password: FieldModel::new(),
            confirm_password: FieldModel::new(),
        }
    }

    /// DOM id of the `<form>` element
    pub fn form_id(&self) -> &'static str {
        self.kind.form_id()
    }

    pub fn field(&self, field: FormField) -> FieldModel {
        match field {
            FormField::SignupName => self.name,
            FormField::LoginEmail | FormField::SignupEmail => self.email,
            FormField::LoginPassword | FormField::SignupPassword => self.password,
            FormField::SignupConfirmPassword => self.confirm_password,
        }
    }

    pub fn set_value(&self, field: FormField, value: String) {
        self.field(field).value.set(value);
    }
}

impl FormView for AuthFormViewModel {
    fn field_value(&self, field: FormField) -> String {
        self.field(field).value.get_untracked()
    }

    fn show_error(&mut self, field: FormField, message: &str) {
        self.field(field).error.set(Some(message.to_string()));
    }

    fn clear_error(&mut self, field: FormField) {
        self.field(field).error.set(None);
    }
}
