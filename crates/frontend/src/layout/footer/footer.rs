use crate::layout::global_context::use_site_config;
use chrono::Datelike;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let config = use_site_config();
    let year = chrono::Local::now().year();

    view! {
        <footer class="footer">
            <span class="footer__copyright">
                {format!("© {} {}. All rights reserved.", year, config.site.brand)}
            </span>
            <a class="footer__link" href="#">"Back to top"</a>
        </footer>
    }
}
