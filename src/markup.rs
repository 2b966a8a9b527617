//! HTML parsing - build a [`Document`] from server-rendered markup
//!
//! Parses through html5ever's `RcDom` and converts into the arena tree.
//! Whitespace-only text nodes are skipped; widgets never read text layout.

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData as RcNodeData, RcDom};

use crate::dom::{Document, NodeId};

/// Parse an HTML string into a [`Document`]
///
/// html5ever recovers from malformed input the way browsers do, so this
/// never fails; structural problems surface later as validation errors.
pub fn parse(html: &str) -> Document {
    let rcdom = parse_document(RcDom::default(), Default::default()).one(html);

    let mut dom = Document::new();
    let root = dom.root();
    convert_node(&rcdom.document, &mut dom, root);
    dom
}

fn convert_node(handle: &Handle, dom: &mut Document, parent: NodeId) {
    match &handle.data {
        RcNodeData::Document => {
            for child in handle.children.borrow().iter() {
                convert_node(child, dom, parent);
            }
        }
        RcNodeData::Element { name, attrs, .. } => {
            let id = dom.create_element(&*name.local);
            for attr in attrs.borrow().iter() {
                dom.set_attr(id, &*attr.name.local, &*attr.value);
            }
            dom.append_child(parent, id);

            for child in handle.children.borrow().iter() {
                convert_node(child, dom, id);
            }
        }
        RcNodeData::Text { contents } => {
            let text = contents.borrow();
            if !text.trim().is_empty() {
                let id = dom.create_text(text.to_string());
                dom.append_child(parent, id);
            }
        }
        RcNodeData::Comment { contents } => {
            let id = dom.create_comment(contents.to_string());
            dom.append_child(parent, id);
        }
        RcNodeData::Doctype { .. } | RcNodeData::ProcessingInstruction { .. } => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_builds_tree_in_document_order() {
        let dom = parse(
            r##"<html><body class="uplift-supported">
                 <a href="#content" data-module="uplift-skip-link">Skip</a>
                 <main id="content">Hello</main>
               </body></html>"##,
        );

        assert!(dom.is_supported());

        let link = dom
            .elements_with_attr(dom.root(), "data-module")
            .next()
            .unwrap();
        assert_eq!(dom.tag(link), Some("a"));
        assert_eq!(dom.attr(link, "href"), Some("#content"));

        let main = dom.get_element_by_id("content").unwrap();
        assert_eq!(dom.tag(main), Some("main"));
    }

    #[test]
    fn test_parse_recovers_missing_html_wrapper() {
        let dom = parse(r#"<div role="alert" data-module="uplift-notification-banner"></div>"#);

        // html5ever synthesizes html/body around the fragment.
        assert!(dom.body().is_some());
        let banner = dom
            .elements_with_attr(dom.root(), "data-module")
            .next()
            .unwrap();
        assert_eq!(dom.attr(banner, "role"), Some("alert"));
    }

    #[test]
    fn test_whitespace_only_text_skipped() {
        let dom = parse("<body>  \n  <p>kept</p>  </body>");
        let p = dom
            .descendants(dom.root())
            .find(|id| dom.tag(*id) == Some("p"))
            .unwrap();
        let text = dom.get(dom.descendants(p).next().unwrap()).unwrap();
        assert_eq!(text.as_text(), Some("kept"));
    }
}
