use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use contracts::shared::config::SiteConfig;
use leptos::prelude::*;

#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    // Provide the immutable site configuration to the whole app via context.
    provide_context(AppGlobalContext::new(config));

    view! {
        <AppRoutes />
    }
}
