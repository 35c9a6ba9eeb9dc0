pub mod footer;
pub mod global_context;
pub mod header;

use footer::footer::Footer;
use header::header::Header;
use leptos::prelude::*;

/// Page shell shared by every route.
///
/// ```text
/// +------------------------------------------+
/// |                 Header                   |
/// +------------------------------------------+
/// |              page content                |
/// +------------------------------------------+
/// |                 Footer                   |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <Header />
            <main class="app-main">{children()}</main>
            <Footer />
        </div>
    }
}
