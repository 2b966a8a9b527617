//! Events delivered to widgets

use crate::dom::NodeId;

/// Document events
///
/// All widget logic runs in response to dispatched events; there are no
/// timers and no background work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The element was activated (mouse click or keyboard)
    Click {
        /// Element the activation landed on
        target: NodeId,
    },
    /// The element lost input focus
    Blur {
        /// Element losing focus
        target: NodeId,
    },
}

impl Event {
    /// The element this event landed on
    pub fn target(&self) -> NodeId {
        match *self {
            Event::Click { target } | Event::Blur { target } => target,
        }
    }
}
