//! uplift - a progressive-enhancement widget library for server-rendered markup
//!
//! Widgets bind to elements of a host document identified by `data-module`
//! marker attributes, with:
//! - Schema-driven configuration resolution (caller > attribute > default)
//! - Fail-fast structural validation with a structured error taxonomy
//! - Focus management that cleans up after itself on blur
//! - Bulk initialization that isolates per-element failures, leaving broken
//!   markup working as plain HTML
//!
//! # Example
//!
//! ```
//! use uplift::{init_all, InitOptions, Page, Registry};
//!
//! let dom = uplift::markup::parse(
//!     r##"<body class="uplift-supported">
//!          <a href="#content" data-module="uplift-skip-link">Skip to content</a>
//!          <main id="content">...</main>
//!        </body>"##,
//! );
//!
//! let mut page = Page::new(dom);
//! let count = init_all(&mut page, &Registry::standard(), InitOptions::new()).unwrap();
//! assert_eq!(count, 1);
//! ```

pub mod component;
pub mod components;
pub mod config;
pub mod dom;
pub mod error;
pub mod event;
pub mod init;
#[cfg(feature = "markup")]
pub mod markup;
pub mod page;
pub mod validate;

// Re-export commonly used types
pub use component::Component;
pub use components::{NotificationBanner, SkipLink};
pub use config::{Config, ConfigValue, Kind, Overrides, Schema};
pub use dom::{Document, NodeId, SUPPORT_CLASS};
pub use error::InitError;
pub use event::Event;
pub use init::{init_all, init_marker, InitOptions, Registry, MODULE_ATTR};
pub use page::Page;
