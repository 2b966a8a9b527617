//! Notification banner - announce important updates and pull focus to them
//!
//! A banner with `role="alert"` is focused when the page initializes so the
//! update is read out immediately; auto-focus can be declined declaratively
//! (`data-disable-auto-focus`) or by the caller. The banner grants itself a
//! temporary `tabindex="-1"` to become focusable and removes it again on
//! blur, unless the markup already declared a custom tabindex.

use crate::component::Component;
use crate::config::{self, Config, ConfigValue, Overrides, Schema};
use crate::dom::{Document, NodeId};
use crate::error::InitError;
use crate::event::Event;
use crate::init;
use crate::validate;

/// Notification banner widget
#[derive(Debug)]
pub struct NotificationBanner {
    root: NodeId,
    config: Config,
    managed_tabindex: bool,
    initialised: bool,
}

impl NotificationBanner {
    /// Display name used in errors and logs
    pub const NAME: &'static str = "Notification banner";

    /// `data-module` marker value
    pub const MODULE: &'static str = "uplift-notification-banner";

    fn schema() -> Schema {
        Schema::new().option("disable-auto-focus", ConfigValue::Bool(false))
    }

    /// Construct against a root element, validating the markup and
    /// resolving the effective configuration
    pub fn new(dom: &Document, root: NodeId, overrides: Overrides) -> Result<Self, InitError> {
        validate::root_element(dom, Self::NAME, root, None)?;
        validate::check_support(dom)?;
        let config = config::resolve(
            Self::NAME,
            &Self::schema(),
            |name| dom.attr(root, name),
            &overrides,
        )?;

        Ok(NotificationBanner {
            root,
            config,
            managed_tabindex: false,
            initialised: false,
        })
    }

    /// Apply the behavior; calling twice is a no-op
    ///
    /// Focuses the banner when its `role` is `alert` and auto-focus has not
    /// been disabled by any configuration layer.
    pub fn init(&mut self, dom: &mut Document) {
        if self.initialised {
            return;
        }
        self.initialised = true;
        dom.set_attr(self.root, init::init_marker(Self::MODULE), "");

        if dom.attr(self.root, "role") == Some("alert") && !self.config.bool("disable-auto-focus") {
            self.set_focus(dom);
        }
    }

    /// The effective configuration this instance resolved at construction
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn set_focus(&mut self, dom: &mut Document) {
        if !dom.has_attr(self.root, "tabindex") {
            dom.set_attr(self.root, "tabindex", "-1");
            self.managed_tabindex = true;
        }
        dom.focus(self.root);
    }
}

impl Component for NotificationBanner {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn root(&self) -> NodeId {
        self.root
    }

    fn handle_event(&mut self, dom: &mut Document, event: &Event) -> bool {
        match *event {
            // A declared custom tabindex was never ours to manage.
            Event::Blur { target } if target == self.root && self.managed_tabindex => {
                dom.remove_attr(self.root, "tabindex");
                self.managed_tabindex = false;
                false
            }
            _ => false,
        }
    }
}
