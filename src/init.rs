//! Bulk initialization - discover widget roots and enhance them all
//!
//! Widget root elements are identified by the [`MODULE_ATTR`] marker
//! attribute. [`init_all`] walks a scope in document order, constructs the
//! registered widget for every recognized marker, and isolates per-element
//! failures: a widget whose markup is malformed is reported through
//! `tracing` and left as plain HTML while the rest of the page initializes.
//! Only a missing support marker fails the whole call, since no widget can
//! safely proceed without it.
//!
//! # Example
//!
//! ```
//! use uplift::{init_all, InitOptions, Page, Registry};
//! use uplift::dom::Document;
//!
//! let mut dom = Document::new();
//! let body = dom.append_element(dom.root(), "body");
//! dom.mark_supported();
//!
//! let mut page = Page::new(dom);
//! let count = init_all(&mut page, &Registry::standard(), InitOptions::new()).unwrap();
//! assert_eq!(count, 0);
//! ```

use std::collections::HashMap;

use crate::component::Component;
use crate::components::{NotificationBanner, SkipLink};
use crate::config::Overrides;
use crate::dom::{Document, NodeId};
use crate::error::InitError;
use crate::page::Page;
use crate::validate;

/// Marker attribute associating an element with a widget implementation
pub const MODULE_ATTR: &str = "data-module";

/// Constructor entry: validates the root, builds the widget, and applies
/// its init behavior
pub type CreateFn =
    fn(&mut Document, NodeId, Overrides) -> Result<Box<dyn Component>, InitError>;

/// Attribute marking a root element as already initialized, so re-running
/// [`init_all`] over the same subtree skips it
pub fn init_marker(module: &str) -> String {
    format!("data-{module}-init")
}

/// Explicit table mapping marker attribute values to widget constructors
///
/// Statically constructed and passed into [`init_all`]; there is no ambient
/// global registry.
#[derive(Default)]
pub struct Registry {
    entries: Vec<(&'static str, CreateFn)>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Registry::default()
    }

    /// Register a constructor for a marker value, replacing any previous
    /// entry for the same value
    pub fn register(mut self, module: &'static str, create: CreateFn) -> Self {
        self.entries.retain(|(name, _)| *name != module);
        self.entries.push((module, create));
        self
    }

    /// Registry of the widgets shipped with this crate
    pub fn standard() -> Self {
        Registry::new()
            .register(SkipLink::MODULE, create_skip_link)
            .register(NotificationBanner::MODULE, create_notification_banner)
    }

    /// Look up the constructor for a marker value
    pub fn get(&self, module: &str) -> Option<CreateFn> {
        self.entries
            .iter()
            .find(|(name, _)| *name == module)
            .map(|(_, create)| *create)
    }
}

fn create_skip_link(
    dom: &mut Document,
    root: NodeId,
    _overrides: Overrides,
) -> Result<Box<dyn Component>, InitError> {
    let mut widget = SkipLink::new(dom, root)?;
    widget.init(dom);
    Ok(Box::new(widget))
}

fn create_notification_banner(
    dom: &mut Document,
    root: NodeId,
    overrides: Overrides,
) -> Result<Box<dyn Component>, InitError> {
    let mut widget = NotificationBanner::new(dom, root, overrides)?;
    widget.init(dom);
    Ok(Box::new(widget))
}

/// Options for [`init_all`]: an optional scope and per-component
/// configuration overrides
#[derive(Default)]
pub struct InitOptions {
    scope: Option<NodeId>,
    overrides: HashMap<String, Overrides>,
}

impl InitOptions {
    /// Default options: whole document, no overrides
    pub fn new() -> Self {
        InitOptions::default()
    }

    /// Restrict discovery to the descendants of `scope`
    pub fn scope(mut self, scope: NodeId) -> Self {
        self.scope = Some(scope);
        self
    }

    /// Supply caller configuration for every instance of a component,
    /// keyed by its marker value
    pub fn configure(mut self, module: impl Into<String>, overrides: Overrides) -> Self {
        self.overrides.insert(module.into(), overrides);
        self
    }
}

/// Discover and initialize every recognized widget under the scope
///
/// Returns the number of widgets initialized. Fails only when the document
/// lacks the support marker; any single widget's error is logged with its
/// component name and cause, and the remaining elements still initialize.
pub fn init_all(
    page: &mut Page,
    registry: &Registry,
    options: InitOptions,
) -> Result<usize, InitError> {
    validate::check_support(page.document())?;

    let scope = options.scope.unwrap_or_else(|| page.document().root());
    let roots: Vec<(NodeId, String)> = page
        .document()
        .elements_with_attr(scope, MODULE_ATTR)
        .filter_map(|id| {
            page.document()
                .attr(id, MODULE_ATTR)
                .map(|module| (id, module.to_string()))
        })
        .collect();

    let mut initialised = 0;
    for (root, module) in roots {
        let Some(create) = registry.get(&module) else {
            tracing::debug!(%module, %root, "no widget registered for marker");
            continue;
        };
        if page.document().has_attr(root, &init_marker(&module)) {
            tracing::debug!(%module, %root, "already initialised, skipping");
            continue;
        }
        let overrides = options
            .overrides
            .get(module.as_str())
            .cloned()
            .unwrap_or_default();

        match create(page.document_mut(), root, overrides) {
            Ok(widget) => {
                page.add(widget);
                initialised += 1;
            }
            Err(error) => {
                tracing::warn!(%module, %root, %error, "failed to initialise widget");
            }
        }
    }

    // Auto-focus during init may have moved focus between widgets; deliver
    // the queued blur events before returning to the host.
    page.drain_queued();

    Ok(initialised)
}
