//! Login and signup submission.
//!
//! Values are read from the view, validated as a whole, and every field's
//! error display is updated before the outcome is presented.

use crate::shared::config::SiteConfig;
use crate::shared::view::{FormView, Presenter};
use crate::system::auth::{
    validate_login, validate_signup, FormField, LoginForm, SignupForm, ValidationReport,
};

/// Show or clear each field's error according to `report`
pub fn apply_report(view: &mut impl FormView, report: &ValidationReport) {
    for (field, error) in report.outcomes() {
        match error {
            Some(err) => view.show_error(*field, &err.message),
            None => view.clear_error(*field),
        }
    }
}

pub fn read_login(view: &impl FormView) -> LoginForm {
    LoginForm {
        email: view.field_value(FormField::LoginEmail),
        password: view.field_value(FormField::LoginPassword),
    }
}

pub fn read_signup(view: &impl FormView) -> SignupForm {
    SignupForm {
        name: view.field_value(FormField::SignupName),
        email: view.field_value(FormField::SignupEmail),
        password: view.field_value(FormField::SignupPassword),
        confirm_password: view.field_value(FormField::SignupConfirmPassword),
    }
}

pub fn submit_login(
    view: &mut impl FormView,
    presenter: &impl Presenter,
    config: &SiteConfig,
) -> Result<(), ValidationReport> {
    let report = validate_login(&read_login(view));
    finish(
        view,
        presenter,
        config,
        report,
        &format!(
            "Login successful! Welcome back to {}",
            config.site.brand_sentence()
        ),
    )
}

pub fn submit_signup(
    view: &mut impl FormView,
    presenter: &impl Presenter,
    config: &SiteConfig,
) -> Result<(), ValidationReport> {
    let report = validate_signup(&read_signup(view));
    finish(
        view,
        presenter,
        config,
        report,
        &format!(
            "Account created successfully! Welcome to {}",
            config.site.brand_sentence()
        ),
    )
}

fn finish(
    view: &mut impl FormView,
    presenter: &impl Presenter,
    config: &SiteConfig,
    report: ValidationReport,
    success_message: &str,
) -> Result<(), ValidationReport> {
    apply_report(view, &report);
    if !report.is_valid() {
        log::debug!("form rejected with {} error(s)", report.errors().count());
        return Err(report);
    }
    presenter.alert(success_message);
    presenter.navigate(&config.site.landing_page);
    Ok(())
}

/// Clear the field's error as soon as the user edits it, without re-validating
pub fn on_field_input(view: &mut impl FormView, field: FormField) {
    view.clear_error(field);
}
