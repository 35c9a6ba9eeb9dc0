//! Smooth scrolling for same-page `#fragment` links.

/// Page element lookup and scrolling
pub trait AnchorScroller {
    fn target_exists(&self, id: &str) -> bool;

    /// Smoothly align the top of element `id` with the top of the viewport
    fn scroll_to(&self, id: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnchorClick {
    /// Leave the click to the browser
    PassThrough,
    /// Scrolled to `target`; the caller must suppress default navigation
    Intercepted { target: String },
}

/// Element id named by a `#fragment` href, percent-decoded when possible
pub fn fragment_target(href: &str) -> Option<String> {
    let fragment = href.strip_prefix('#')?;
    if fragment.is_empty() {
        return None;
    }
    Some(
        urlencoding::decode(fragment)
            .map(|d| d.into_owned())
            .unwrap_or_else(|_| fragment.to_string()),
    )
}

/// Href of the home page section `id` as seen from `current_path`.
///
/// A bare fragment only resolves on the home page itself; elsewhere the link
/// has to navigate home first.
pub fn section_href(current_path: &str, id: &str) -> String {
    if current_path.is_empty() || current_path == "/" {
        format!("#{id}")
    } else {
        format!("/#{id}")
    }
}

pub fn handle_anchor_click(href: &str, scroller: &impl AnchorScroller) -> AnchorClick {
    let Some(target) = fragment_target(href) else {
        return AnchorClick::PassThrough;
    };
    if !scroller.target_exists(&target) {
        log::debug!("anchor '{}' has no target on this page", href);
        return AnchorClick::PassThrough;
    }
    scroller.scroll_to(&target);
    AnchorClick::Intercepted { target }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct FakePage {
        ids: Vec<&'static str>,
        scrolled: RefCell<Vec<String>>,
    }

    impl FakePage {
        fn with(ids: &[&'static str]) -> Self {
            Self {
                ids: ids.to_vec(),
                scrolled: RefCell::new(Vec::new()),
            }
        }
    }

    impl AnchorScroller for FakePage {
        fn target_exists(&self, id: &str) -> bool {
            self.ids.iter().any(|i| *i == id)
        }

        fn scroll_to(&self, id: &str) {
            self.scrolled.borrow_mut().push(id.to_string());
        }
    }

    #[test]
    fn test_existing_target_is_intercepted() {
        let page = FakePage::with(&["section2"]);
        assert_eq!(
            handle_anchor_click("#section2", &page),
            AnchorClick::Intercepted {
                target: "section2".into()
            }
        );
        assert_eq!(page.scrolled.borrow().as_slice(), ["section2"]);
    }

    #[test]
    fn test_bare_hash_passes_through() {
        let page = FakePage::with(&["section2"]);
        assert_eq!(handle_anchor_click("#", &page), AnchorClick::PassThrough);
        assert!(page.scrolled.borrow().is_empty());
    }

    #[test]
    fn test_missing_target_passes_through() {
        let page = FakePage::with(&["section2"]);
        assert_eq!(handle_anchor_click("#section9", &page), AnchorClick::PassThrough);
        assert_eq!(handle_anchor_click("/login", &page), AnchorClick::PassThrough);
        assert!(page.scrolled.borrow().is_empty());
    }

    #[test]
    fn test_fragment_is_decoded() {
        assert_eq!(fragment_target("#our%20story").as_deref(), Some("our story"));
        assert_eq!(fragment_target("#bad%ZZ").as_deref(), Some("bad%ZZ"));
        assert_eq!(fragment_target("plain"), None);
    }

    #[test]
    fn test_section_href_on_home_scrolls_in_place() {
        assert_eq!(section_href("/", "collections"), "#collections");
        assert_eq!(section_href("", "about"), "#about");
    }

    #[test]
    fn test_section_href_elsewhere_goes_home() {
        let href = section_href("/product", "collections");
        assert_eq!(href, "/#collections");
        assert_eq!(section_href("/login", "about"), "/#about");

        let page = FakePage::with(&["collections"]);
        assert_eq!(handle_anchor_click(&href, &page), AnchorClick::PassThrough);
        assert!(page.scrolled.borrow().is_empty());
    }
}
