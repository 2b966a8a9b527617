//! Skip link - jump keyboard focus past repeated navigation
//!
//! A skip link is an anchor whose `href` fragment names the content element.
//! Activating it moves input focus to that element; because most content
//! elements are not focusable, the widget grants a temporary `tabindex="-1"`
//! (plus a class suppressing the native focus outline) and takes both back
//! when focus moves on. An element that declares its own tabindex is left
//! untouched.

use crate::component::Component;
use crate::dom::{Document, NodeId};
use crate::error::InitError;
use crate::event::Event;
use crate::init;
use crate::validate;

/// Skip link widget
#[derive(Debug)]
pub struct SkipLink {
    root: NodeId,
    linked_element: NodeId,
    managed_focus: bool,
    initialised: bool,
}

impl SkipLink {
    /// Display name used in errors and logs
    pub const NAME: &'static str = "Skip link";

    /// `data-module` marker value
    pub const MODULE: &'static str = "uplift-skip-link";

    /// Class added to the linked element while it holds managed focus
    pub const FOCUSED_CLASS: &'static str = "uplift-skip-link-focused-element";

    /// Construct against a root element, validating the markup
    ///
    /// The root must be a connected `<a>` element whose `href` carries a URL
    /// fragment resolving to an element in the document; the document must
    /// carry the support marker. The widget takes no configuration options.
    pub fn new(dom: &Document, root: NodeId) -> Result<Self, InitError> {
        validate::root_element(dom, Self::NAME, root, Some("a"))?;
        validate::check_support(dom)?;

        let fragment = dom
            .attr(root, "href")
            .and_then(url_fragment)
            .ok_or_else(|| {
                InitError::element(
                    Self::NAME,
                    "Root element attribute (`href`) has no URL fragment",
                )
            })?;
        let linked_element =
            validate::target_element(dom, Self::NAME, "Target content", fragment)?;

        Ok(SkipLink {
            root,
            linked_element,
            managed_focus: false,
            initialised: false,
        })
    }

    /// Apply the behavior; calling twice is a no-op
    pub fn init(&mut self, dom: &mut Document) {
        if self.initialised {
            return;
        }
        self.initialised = true;
        dom.set_attr(self.root, init::init_marker(Self::MODULE), "");
    }

    /// The element the link's fragment resolved to
    pub fn linked_element(&self) -> NodeId {
        self.linked_element
    }

    fn focus_linked_element(&mut self, dom: &mut Document) {
        if !dom.has_attr(self.linked_element, "tabindex") {
            dom.set_attr(self.linked_element, "tabindex", "-1");
            dom.add_class(self.linked_element, Self::FOCUSED_CLASS);
            self.managed_focus = true;
        }
        dom.focus(self.linked_element);
    }

    fn remove_focus_properties(&mut self, dom: &mut Document) {
        dom.remove_attr(self.linked_element, "tabindex");
        dom.remove_class(self.linked_element, Self::FOCUSED_CLASS);
        self.managed_focus = false;
    }
}

impl Component for SkipLink {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn root(&self) -> NodeId {
        self.root
    }

    fn handle_event(&mut self, dom: &mut Document, event: &Event) -> bool {
        match *event {
            Event::Click { target } if target == self.root => {
                self.focus_linked_element(dom);
                true
            }
            // Only take back what this widget granted; a pre-existing
            // custom tabindex is never removed.
            Event::Blur { target } if target == self.linked_element && self.managed_focus => {
                self.remove_focus_properties(dom);
                false
            }
            _ => false,
        }
    }
}

/// Fragment of an `href` value, if it has a non-empty one
fn url_fragment(href: &str) -> Option<&str> {
    match href.split_once('#') {
        Some((_, fragment)) if !fragment.is_empty() => Some(fragment),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::Page;

    fn skip_link_page() -> (Page, NodeId, NodeId) {
        let mut dom = Document::new();
        let body = dom.append_element(dom.root(), "body");
        let link = dom.append_element(body, "a");
        dom.set_attr(link, "data-module", SkipLink::MODULE);
        dom.set_attr(link, "href", "#content");
        let main = dom.append_element(body, "main");
        dom.set_attr(main, "id", "content");
        dom.mark_supported();

        let mut widget = SkipLink::new(&dom, link).unwrap();
        widget.init(&mut dom);
        let mut page = Page::new(dom);
        page.add(Box::new(widget));
        (page, link, main)
    }

    #[test]
    fn test_click_focuses_linked_element() {
        let (mut page, link, main) = skip_link_page();
        page.click(link);

        assert_eq!(page.document().active_element(), Some(main));
        assert_eq!(page.document().attr(main, "tabindex"), Some("-1"));
        assert!(page.document().has_class(main, SkipLink::FOCUSED_CLASS));
    }

    #[test]
    fn test_blur_removes_focus_properties() {
        let (mut page, link, main) = skip_link_page();
        page.click(link);
        page.blur(main);

        assert_eq!(page.document().attr(main, "tabindex"), None);
        assert!(!page.document().has_class(main, SkipLink::FOCUSED_CLASS));
    }

    #[test]
    fn test_custom_tabindex_left_untouched() {
        let (mut page, link, main) = skip_link_page();
        page.document_mut().set_attr(main, "tabindex", "2");

        page.click(link);
        assert_eq!(page.document().active_element(), Some(main));
        assert_eq!(page.document().attr(main, "tabindex"), Some("2"));
        assert!(!page.document().has_class(main, SkipLink::FOCUSED_CLASS));

        page.blur(main);
        assert_eq!(page.document().attr(main, "tabindex"), Some("2"));
    }

    #[test]
    fn test_repeated_clicks_then_blur() {
        let (mut page, link, main) = skip_link_page();
        page.click(link);
        page.click(link);
        page.blur(main);

        assert_eq!(page.document().attr(main, "tabindex"), None);
        assert!(!page.document().has_class(main, SkipLink::FOCUSED_CLASS));
    }

    #[test]
    fn test_detached_root_is_element_error() {
        let mut dom = Document::new();
        let body = dom.append_element(dom.root(), "body");
        let link = dom.append_element(body, "a");
        dom.mark_supported();
        dom.detach(link);

        let err = SkipLink::new(&dom, link).unwrap_err();
        assert_eq!(err.to_string(), "Skip link: Root element not found");
    }

    #[test]
    fn test_wrong_root_tag() {
        let mut dom = Document::new();
        let body = dom.append_element(dom.root(), "body");
        let div = dom.append_element(body, "div");
        dom.mark_supported();

        let err = SkipLink::new(&dom, div).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Skip link: Root element is not a `<a>` element"
        );
    }

    #[test]
    fn test_missing_support_marker() {
        let mut dom = Document::new();
        let body = dom.append_element(dom.root(), "body");
        let link = dom.append_element(body, "a");
        dom.set_attr(link, "href", "#content");

        let err = SkipLink::new(&dom, link).unwrap_err();
        assert!(err.is_fatal());
        assert_eq!(err.to_string(), "Uplift is not supported in this document");
    }

    #[test]
    fn test_href_without_fragment() {
        let mut dom = Document::new();
        let body = dom.append_element(dom.root(), "body");
        let link = dom.append_element(body, "a");
        dom.set_attr(link, "href", "this-element-does-not-exist");
        dom.mark_supported();

        let err = SkipLink::new(&dom, link).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Skip link: Root element attribute (`href`) has no URL fragment"
        );
    }

    #[test]
    fn test_missing_linked_element() {
        let mut dom = Document::new();
        let body = dom.append_element(dom.root(), "body");
        let link = dom.append_element(body, "a");
        dom.set_attr(link, "href", "#this-element-does-not-exist");
        dom.mark_supported();

        let err = SkipLink::new(&dom, link).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Skip link: Target content (`id=\"this-element-does-not-exist\"`) not found"
        );
    }
}
