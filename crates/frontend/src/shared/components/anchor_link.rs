use crate::shared::browser::DomAnchorScroller;
use contracts::usecases::u504_anchor_scroll::{handle_anchor_click, AnchorClick};
use leptos::prelude::*;

/// Same-page link that scrolls smoothly to its `#fragment` target.
///
/// Falls back to the browser default when the fragment is `#` alone or names
/// no element on the page.
#[component]
pub fn AnchorLink(
    /// Link target, e.g. "#collections"
    #[prop(into)]
    href: Signal<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <a
            href=move || href.get()
            class=move || class.get().unwrap_or_default()
            on:click=move |ev| {
                if let AnchorClick::Intercepted { .. } = handle_anchor_click(&href.get_untracked(), &DomAnchorScroller) {
                    ev.prevent_default();
                }
            }
        >
            {children()}
        </a>
    }
}
