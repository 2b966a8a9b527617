//! Structural validation of widget markup
//!
//! Checks are read-only and short-circuit on the first failure; a widget
//! either gets the validated references it asked for or a structured
//! [`InitError`] naming the component and what was missing.

use crate::dom::{Document, NodeId};
use crate::error::InitError;

/// Check that the host has marked the document as supporting enhanced
/// widgets
pub fn check_support(dom: &Document) -> Result<(), InitError> {
    if dom.is_supported() {
        Ok(())
    } else {
        Err(InitError::Support)
    }
}

/// Check that `root` is a connected element node of the expected tag
pub fn root_element(
    dom: &Document,
    component: &'static str,
    root: NodeId,
    expected_tag: Option<&str>,
) -> Result<(), InitError> {
    if dom.element(root).is_none() || !dom.is_connected(root) {
        return Err(InitError::element(component, "Root element not found"));
    }
    if let Some(expected) = expected_tag {
        if dom.tag(root) != Some(expected) {
            return Err(InitError::element(
                component,
                format!("Root element is not a `<{expected}>` element"),
            ));
        }
    }
    Ok(())
}

/// Resolve an additionally-required element by its `id` attribute
///
/// `description` names the element's role in the error message, e.g.
/// "Target content".
pub fn target_element(
    dom: &Document,
    component: &'static str,
    description: &str,
    id: &str,
) -> Result<NodeId, InitError> {
    dom.get_element_by_id(id).ok_or_else(|| {
        InitError::element(component, format!("{description} (`id=\"{id}\"`) not found"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn supported_dom() -> (Document, NodeId) {
        let mut dom = Document::new();
        let body = dom.append_element(dom.root(), "body");
        dom.mark_supported();
        (dom, body)
    }

    #[test]
    fn test_support_check() {
        let dom = Document::new();
        assert!(matches!(check_support(&dom), Err(InitError::Support)));

        let (dom, _) = supported_dom();
        assert!(check_support(&dom).is_ok());
    }

    #[test]
    fn test_root_element_missing() {
        let (mut dom, body) = supported_dom();
        let link = dom.append_element(body, "a");
        dom.detach(link);

        let err = root_element(&dom, "Skip link", link, Some("a")).unwrap_err();
        assert_eq!(err.to_string(), "Skip link: Root element not found");
    }

    #[test]
    fn test_root_element_wrong_tag() {
        let (mut dom, body) = supported_dom();
        let div = dom.append_element(body, "div");

        let err = root_element(&dom, "Skip link", div, Some("a")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Skip link: Root element is not a `<a>` element"
        );
    }

    #[test]
    fn test_root_element_any_tag() {
        let (mut dom, body) = supported_dom();
        let div = dom.append_element(body, "div");
        assert!(root_element(&dom, "Banner", div, None).is_ok());
    }

    #[test]
    fn test_target_element() {
        let (mut dom, body) = supported_dom();
        let main = dom.append_element(body, "main");
        dom.set_attr(main, "id", "content");

        assert_eq!(
            target_element(&dom, "Skip link", "Target content", "content").unwrap(),
            main
        );

        let err = target_element(&dom, "Skip link", "Target content", "nope").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Skip link: Target content (`id=\"nope\"`) not found"
        );
    }
}
