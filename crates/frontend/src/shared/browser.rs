//! Browser-backed implementations of the view traits.

use contracts::shared::view::Presenter;
use contracts::usecases::u504_anchor_scroll::AnchorScroller;
use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

fn element_by_id(id: &str) -> Option<Element> {
    web_sys::window()?.document()?.get_element_by_id(id)
}

/// Shows acknowledgments with `window.alert` and redirects via `location.href`
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserPresenter;

impl Presenter for BrowserPresenter {
    fn alert(&self, message: &str) {
        let Some(window) = web_sys::window() else {
            log::warn!("no window to show alert: {}", message);
            return;
        };
        if let Err(e) = window.alert_with_message(message) {
            log::warn!("alert failed: {:?}", e);
        }
    }

    fn navigate(&self, href: &str) {
        let Some(window) = web_sys::window() else {
            log::warn!("no window to navigate to {}", href);
            return;
        };
        if let Err(e) = window.location().set_href(href) {
            log::warn!("navigation to {} failed: {:?}", href, e);
        }
    }
}

/// Scrolls page elements into view with smooth behavior
#[derive(Clone, Copy, Debug, Default)]
pub struct DomAnchorScroller;

impl AnchorScroller for DomAnchorScroller {
    fn target_exists(&self, id: &str) -> bool {
        element_by_id(id).is_some()
    }

    fn scroll_to(&self, id: &str) {
        let Some(element) = element_by_id(id) else {
            return;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}
