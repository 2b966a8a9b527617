//! Initialization errors
//!
//! Three kinds, matching the three ways enhancement can fail: the document
//! as a whole cannot run widgets ([`InitError::Support`]), one widget's
//! markup does not meet its structural preconditions
//! ([`InitError::Element`]), or a required configuration value is absent
//! ([`InitError::Config`]). Errors never self-heal: they abort that widget's
//! construction, and the markup keeps working as plain HTML.

/// Error raised while constructing or initializing a widget
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    /// The document lacks the support marker; fatal to every widget
    #[error("Uplift is not supported in this document")]
    Support,

    /// A structural precondition on the markup is not met; fatal to the
    /// single widget
    #[error("{component}: {message}")]
    Element {
        /// Display name of the component, e.g. "Skip link"
        component: &'static str,
        /// What was expected and what is missing
        message: String,
    },

    /// A required configuration value is absent from every layer
    #[error("{component}: {message}")]
    Config {
        /// Display name of the component
        component: &'static str,
        /// Which option is missing
        message: String,
    },
}

impl InitError {
    /// Build an [`InitError::Element`]
    pub fn element(component: &'static str, message: impl Into<String>) -> Self {
        InitError::Element {
            component,
            message: message.into(),
        }
    }

    /// Build an [`InitError::Config`]
    pub fn config(component: &'static str, message: impl Into<String>) -> Self {
        InitError::Config {
            component,
            message: message.into(),
        }
    }

    /// Whether this error is fatal to the whole page rather than a single
    /// widget
    pub fn is_fatal(&self) -> bool {
        matches!(self, InitError::Support)
    }
}
