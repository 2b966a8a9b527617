//! Component trait - the behavior attached to a validated root element

use crate::dom::{Document, NodeId};
use crate::event::Event;

/// A widget behavior bound to a root element
///
/// Widgets are constructed against a validated root (construction resolves
/// configuration and fails with a structured error on bad markup) and then
/// react to events dispatched by the owning [`Page`](crate::page::Page).
/// They hold [`NodeId`] handles, never nodes: the document stays
/// single-writer, passed in mutably for the duration of each event.
pub trait Component {
    /// Display name used in errors and logs, e.g. "Skip link"
    fn name(&self) -> &'static str;

    /// The root element this widget is bound to
    fn root(&self) -> NodeId;

    /// Handle an event, returning true if consumed (stops propagation)
    fn handle_event(&mut self, _dom: &mut Document, _event: &Event) -> bool {
        false
    }
}
