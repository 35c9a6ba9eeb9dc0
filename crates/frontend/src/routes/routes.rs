use crate::domain::a001_product::ui::details::ProductDetails;
use crate::layout::Shell;
use crate::system::pages::home::HomePage;
use crate::system::pages::login::LoginPage;
use crate::system::pages::signup::SignupPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <section class="section">
            <h1 class="section__title">"Page not found"</h1>
            <a href="/">"Back to the shop"</a>
        </section>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/login") view=LoginPage />
                    <Route path=path!("/signup") view=SignupPage />
                    <Route path=path!("/product") view=ProductDetails />
                </Routes>
            </Shell>
        </Router>
    }
}
