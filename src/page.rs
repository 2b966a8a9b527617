//! Page - owns the document and its widgets, and dispatches events
//!
//! Everything runs on one thread: an event is delivered to each widget in
//! registration (document) order until one consumes it, then any focus/blur
//! events the handlers queued on the document are delivered the same way.
//! Widgets clean up after themselves on the corresponding teardown event
//! (blur); there is no explicit disposal call.

use crate::component::Component;
use crate::dom::{Document, NodeId};
use crate::event::Event;

/// A document plus the widgets enhancing it
pub struct Page {
    dom: Document,
    components: Vec<Box<dyn Component>>,
}

impl Page {
    /// Wrap a document with no widgets attached yet
    pub fn new(dom: Document) -> Self {
        Page {
            dom,
            components: Vec::new(),
        }
    }

    /// The underlying document
    pub fn document(&self) -> &Document {
        &self.dom
    }

    /// Mutable access to the underlying document
    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.dom
    }

    /// Attach an already-constructed widget
    pub fn add(&mut self, component: Box<dyn Component>) {
        self.components.push(component);
    }

    /// Widgets attached to this page, in initialization order
    pub fn components(&self) -> &[Box<dyn Component>] {
        &self.components
    }

    /// Dispatch an event to the widgets, then drain any focus/blur events
    /// the handlers queued on the document
    pub fn dispatch(&mut self, event: Event) {
        self.deliver(&event);
        self.drain_queued();
    }

    /// Simulate activating an element
    pub fn click(&mut self, target: NodeId) {
        self.dispatch(Event::Click { target });
    }

    /// Simulate an element losing input focus
    pub fn blur(&mut self, target: NodeId) {
        self.dom.blur(target);
        self.drain_queued();
    }

    fn deliver(&mut self, event: &Event) {
        // Widgets borrow the document mutably during delivery, so the
        // component list is detached for the duration.
        let mut components = std::mem::take(&mut self.components);
        for component in &mut components {
            if component.handle_event(&mut self.dom, event) {
                break;
            }
        }
        self.components = components;
    }

    pub(crate) fn drain_queued(&mut self) {
        loop {
            let queued = self.dom.take_pending();
            if queued.is_empty() {
                break;
            }
            for event in queued {
                self.deliver(&event);
            }
        }
    }
}
