use crate::layout::global_context::use_site_config;
use crate::shared::components::anchor_link::AnchorLink;
use contracts::usecases::u504_anchor_scroll::section_href;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

#[component]
pub fn Header() -> impl IntoView {
    let config = use_site_config();
    let pathname = use_location().pathname;
    let collections = Signal::derive(move || section_href(&pathname.get(), "collections"));
    let about = Signal::derive(move || section_href(&pathname.get(), "about"));

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <a class="header__title" href="/">{config.site.brand.clone()}</a>
                <nav class="header__nav">
                    <AnchorLink href=collections class="header__link">"Collections"</AnchorLink>
                    <AnchorLink href=about class="header__link">"About"</AnchorLink>
                    <a class="header__link" href="/product">"Shop"</a>
                </nav>
            </div>
            <div class="header__actions">
                <a class="button button--ghost" href="/login">"Login"</a>
                <a class="button button--primary" href="/signup">"Sign Up"</a>
            </div>
        </header>
    }
}
