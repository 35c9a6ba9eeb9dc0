use crate::layout::global_context::use_site_config;
use crate::shared::browser::BrowserPresenter;
use crate::system::auth::{AuthField, AuthFormViewModel};
use contracts::system::auth::{FormField, FormKind};
use contracts::usecases::u501_submit_form::submit_signup;
use leptos::prelude::*;

#[component]
pub fn SignupPage() -> impl IntoView {
    let config = use_site_config();
    let vm = AuthFormViewModel::new(FormKind::Signup);
    let subtitle = format!("Join {}", config.site.brand);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let mut view = vm;
        if submit_signup(&mut view, &BrowserPresenter, &config).is_err() {
            log::debug!("signup form has errors");
        }
    };

    view! {
        <section class="auth">
            <div class="auth__box">
                <h1 class="auth__title">"Create Account"</h1>
                <p class="auth__subtitle">{subtitle}</p>

                <form id={vm.form_id()} class="form" novalidate on:submit=on_submit>
                    <AuthField
                        vm=vm
                        field=FormField::SignupName
                        label="Full Name"
                        placeholder="Your full name"
                        autocomplete="name"
                    />
                    <AuthField
                        vm=vm
                        field=FormField::SignupEmail
                        label="Email Address"
                        input_type="email"
                        placeholder="you@example.com"
                        autocomplete="email"
                    />
                    <AuthField
                        vm=vm
                        field=FormField::SignupPassword
                        label="Password"
                        input_type="password"
                        placeholder="At least 6 characters"
                        autocomplete="new-password"
                    />
                    <AuthField
                        vm=vm
                        field=FormField::SignupConfirmPassword
                        label="Confirm Password"
                        input_type="password"
                        placeholder="Repeat your password"
                        autocomplete="new-password"
                    />
                    <button type="submit" class="button button--primary">"Create Account"</button>
                </form>

                <p class="auth__footer">
                    "Already have an account? " <a href="/login">"Login"</a>
                </p>
            </div>
        </section>
    }
}
