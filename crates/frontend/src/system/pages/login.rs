use crate::layout::global_context::use_site_config;
use crate::shared::browser::BrowserPresenter;
use crate::system::auth::{AuthField, AuthFormViewModel};
use contracts::system::auth::{FormField, FormKind};
use contracts::usecases::u501_submit_form::submit_login;
use leptos::prelude::*;

#[component]
pub fn LoginPage() -> impl IntoView {
    let config = use_site_config();
    let vm = AuthFormViewModel::new(FormKind::Login);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let mut view = vm;
        if submit_login(&mut view, &BrowserPresenter, &config).is_err() {
            log::debug!("login form has errors");
        }
    };

    view! {
        <section class="auth">
            <div class="auth__box">
                <h1 class="auth__title">"Welcome Back"</h1>
                <p class="auth__subtitle">"Sign in to your account"</p>

                <form id={vm.form_id()} class="form" novalidate on:submit=on_submit>
                    <AuthField
                        vm=vm
                        field=FormField::LoginEmail
                        label="Email Address"
                        input_type="email"
                        placeholder="you@example.com"
                        autocomplete="email"
                    />
                    <AuthField
                        vm=vm
                        field=FormField::LoginPassword
                        label="Password"
                        input_type="password"
                        placeholder="Enter your password"
                        autocomplete="current-password"
                    />
                    <button type="submit" class="button button--primary">"Login"</button>
                </form>

                <p class="auth__footer">
                    "Don't have an account? " <a href="/signup">"Sign up"</a>
                </p>
            </div>
        </section>
    }
}
