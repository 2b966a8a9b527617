//! Configuration resolution for widgets
//!
//! Every interactive widget resolves one effective configuration from three
//! layers, highest precedence first:
//!
//! 1. caller-supplied [`Overrides`]
//! 2. declarative `data-*` attributes on the root element
//! 3. compiled-in defaults from the widget's [`Schema`]
//!
//! Resolution is pure and synchronous: it reads attribute values through a
//! lookup closure and never touches the document. Attribute values are typed
//! by the schema; a value that fails to parse against its expected type is
//! dropped silently and resolution falls through to the next layer. Unknown
//! attribute and override keys are ignored.
//!
//! Nested option groups use dotted names one level deep
//! (`i18n.dismiss-label`). Each dotted key is its own schema entry, so
//! overriding one key of a group never erases its siblings.
//!
//! # Example
//!
//! ```
//! use uplift::config::{self, ConfigValue, Overrides, Schema};
//!
//! let schema = Schema::new().option("disable-auto-focus", ConfigValue::Bool(false));
//! let overrides = Overrides::new().bool("disable-auto-focus", true);
//!
//! let config = config::resolve("Banner", &schema, |_| None, &overrides).unwrap();
//! assert!(config.bool("disable-auto-focus"));
//! ```

use std::collections::BTreeMap;

use crate::error::InitError;

/// The type a configuration option is parsed against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// `"true"`/`"false"`, or a bare attribute meaning true
    Bool,
    /// Integer, e.g. a tabindex value
    Number,
    /// Free-form string, e.g. an identifier or a message
    Str,
}

/// A typed configuration value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValue {
    Bool(bool),
    Number(i64),
    Str(String),
}

impl ConfigValue {
    /// The type of this value
    pub fn kind(&self) -> Kind {
        match self {
            ConfigValue::Bool(_) => Kind::Bool,
            ConfigValue::Number(_) => Kind::Number,
            ConfigValue::Str(_) => Kind::Str,
        }
    }

    fn parse(kind: Kind, raw: &str) -> Option<ConfigValue> {
        match kind {
            // A bare attribute (empty value) marks the flag as set.
            Kind::Bool => match raw {
                "" | "true" => Some(ConfigValue::Bool(true)),
                "false" => Some(ConfigValue::Bool(false)),
                _ => None,
            },
            Kind::Number => raw.trim().parse().ok().map(ConfigValue::Number),
            Kind::Str => Some(ConfigValue::Str(raw.to_string())),
        }
    }
}

/// Declarative description of a widget's options: name, expected type, and
/// default value
///
/// An option declared without a default is required: resolution fails with
/// [`InitError::Config`] when no layer provides it.
#[derive(Debug, Default)]
pub struct Schema {
    options: Vec<OptionSpec>,
}

#[derive(Debug)]
struct OptionSpec {
    name: &'static str,
    kind: Kind,
    default: Option<ConfigValue>,
}

impl Schema {
    /// Create an empty schema
    pub fn new() -> Self {
        Schema::default()
    }

    /// Declare an option with a compiled-in default; the default's type is
    /// the option's expected type
    pub fn option(mut self, name: &'static str, default: ConfigValue) -> Self {
        self.options.push(OptionSpec {
            name,
            kind: default.kind(),
            default: Some(default),
        });
        self
    }

    /// Declare a required option with no default
    pub fn required(mut self, name: &'static str, kind: Kind) -> Self {
        self.options.push(OptionSpec {
            name,
            kind,
            default: None,
        });
        self
    }
}

/// Caller-supplied partial configuration
///
/// The highest-precedence layer. A value whose type does not match the
/// schema is dropped, the same way a malformed attribute is.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    values: BTreeMap<String, ConfigValue>,
}

impl Overrides {
    /// Create an empty override set
    pub fn new() -> Self {
        Overrides::default()
    }

    /// Override a boolean option
    pub fn bool(self, name: impl Into<String>, value: bool) -> Self {
        self.set(name, ConfigValue::Bool(value))
    }

    /// Override a numeric option
    pub fn number(self, name: impl Into<String>, value: i64) -> Self {
        self.set(name, ConfigValue::Number(value))
    }

    /// Override a string option
    pub fn string(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, ConfigValue::Str(value.into()))
    }

    /// Override an option with an already-typed value
    pub fn set(mut self, name: impl Into<String>, value: ConfigValue) -> Self {
        self.values.insert(name.into(), value);
        self
    }

    fn get(&self, name: &str) -> Option<&ConfigValue> {
        self.values.get(name)
    }
}

/// The effective configuration of a widget instance
///
/// Immutable once resolved; every schema option is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    values: BTreeMap<&'static str, ConfigValue>,
}

impl Config {
    /// Get an option's resolved value
    pub fn get(&self, name: &str) -> Option<&ConfigValue> {
        self.values.get(name)
    }

    /// Resolved boolean option; false when absent or not a boolean
    pub fn bool(&self, name: &str) -> bool {
        matches!(self.get(name), Some(ConfigValue::Bool(true)))
    }

    /// Resolved numeric option
    pub fn number(&self, name: &str) -> Option<i64> {
        match self.get(name) {
            Some(ConfigValue::Number(value)) => Some(*value),
            _ => None,
        }
    }

    /// Resolved string option
    pub fn str(&self, name: &str) -> Option<&str> {
        match self.get(name) {
            Some(ConfigValue::Str(value)) => Some(value),
            _ => None,
        }
    }
}

/// Resolve a widget's effective configuration
///
/// `attr` looks up raw attribute values by full attribute name; option
/// `name` is read from `data-<name>`. Fails only when a required option is
/// provided by no layer.
pub fn resolve<'a>(
    component: &'static str,
    schema: &Schema,
    attr: impl Fn(&str) -> Option<&'a str>,
    overrides: &Overrides,
) -> Result<Config, InitError> {
    let mut values = BTreeMap::new();

    for spec in &schema.options {
        let from_caller = overrides
            .get(spec.name)
            .filter(|value| value.kind() == spec.kind)
            .cloned();
        let resolved = from_caller
            .or_else(|| {
                attr(&format!("data-{}", spec.name))
                    .and_then(|raw| ConfigValue::parse(spec.kind, raw))
            })
            .or_else(|| spec.default.clone());

        match resolved {
            Some(value) => {
                values.insert(spec.name, value);
            }
            None => {
                return Err(InitError::config(
                    component,
                    format!("Required option `{}` was not provided", spec.name),
                ));
            }
        }
    }

    Ok(Config { values })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve_with(
        component: &'static str,
        schema: &Schema,
        attrs: &[(&str, &str)],
        overrides: &Overrides,
    ) -> Result<Config, InitError> {
        let map: BTreeMap<String, String> = attrs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        resolve(
            component,
            schema,
            |name| map.get(name).map(String::as_str),
            overrides,
        )
    }

    #[test]
    fn test_default_when_no_other_layer() {
        let schema = Schema::new().option("disable-auto-focus", ConfigValue::Bool(false));
        let config = resolve("Test", &schema, |_| None, &Overrides::new()).unwrap();
        assert!(!config.bool("disable-auto-focus"));
    }

    #[test]
    fn test_attribute_beats_default() {
        let schema = Schema::new().option("disable-auto-focus", ConfigValue::Bool(false));
        let attrs = [("data-disable-auto-focus", "true")];
        let config = resolve_with("Test", &schema, &attrs, &Overrides::new()).unwrap();
        assert!(config.bool("disable-auto-focus"));
    }

    #[test]
    fn test_caller_beats_attribute_per_key() {
        let schema = Schema::new()
            .option("disable-auto-focus", ConfigValue::Bool(false))
            .option("label", ConfigValue::Str("default".into()));
        let attrs = [
            ("data-disable-auto-focus", "true"),
            ("data-label", "from-attribute"),
        ];
        let overrides = Overrides::new().bool("disable-auto-focus", false);

        let config = resolve_with("Test", &schema, &attrs, &overrides).unwrap();
        // Caller wins for the key it set; the attribute still wins elsewhere.
        assert!(!config.bool("disable-auto-focus"));
        assert_eq!(config.str("label"), Some("from-attribute"));
    }

    #[test]
    fn test_malformed_attribute_falls_through() {
        let schema = Schema::new()
            .option("delay", ConfigValue::Number(5))
            .option("enabled", ConfigValue::Bool(true));
        let attrs = [("data-delay", "soon"), ("data-enabled", "yes")];
        let config = resolve_with("Test", &schema, &attrs, &Overrides::new()).unwrap();
        assert_eq!(config.number("delay"), Some(5));
        assert!(config.bool("enabled"));
    }

    #[test]
    fn test_bare_attribute_sets_flag() {
        let schema = Schema::new().option("disable-auto-focus", ConfigValue::Bool(false));
        let attrs = [("data-disable-auto-focus", "")];
        let config = resolve_with("Test", &schema, &attrs, &Overrides::new()).unwrap();
        assert!(config.bool("disable-auto-focus"));
    }

    #[test]
    fn test_wrongly_typed_override_is_dropped() {
        let schema = Schema::new().option("delay", ConfigValue::Number(5));
        let overrides = Overrides::new().string("delay", "soon");
        let config = resolve("Test", &schema, |_| None, &overrides).unwrap();
        assert_eq!(config.number("delay"), Some(5));
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let schema = Schema::new().option("known", ConfigValue::Bool(false));
        let overrides = Overrides::new().bool("also-unknown", true);
        let config =
            resolve_with("Test", &schema, &[("data-unknown", "true")], &overrides).unwrap();
        assert_eq!(config.get("unknown"), None);
        assert_eq!(config.get("also-unknown"), None);
        assert!(!config.bool("known"));
    }

    #[test]
    fn test_nested_group_merges_key_by_key() {
        let schema = Schema::new()
            .option("i18n.dismiss-label", ConfigValue::Str("Dismiss".into()))
            .option("i18n.confirm-label", ConfigValue::Str("Confirm".into()));
        let overrides = Overrides::new().string("i18n.dismiss-label", "Close");

        let config = resolve_with(
            "Test",
            &schema,
            &[("data-i18n.confirm-label", "OK")],
            &overrides,
        )
        .unwrap();
        // One key overridden by the caller, its sibling by the attribute;
        // neither erases the other.
        assert_eq!(config.str("i18n.dismiss-label"), Some("Close"));
        assert_eq!(config.str("i18n.confirm-label"), Some("OK"));
    }

    #[test]
    fn test_required_option_missing_everywhere() {
        let schema = Schema::new().required("maxlength", Kind::Number);
        let err = resolve("Counter", &schema, |_| None, &Overrides::new()).unwrap_err();
        assert!(matches!(err, InitError::Config { .. }));
        assert_eq!(
            err.to_string(),
            "Counter: Required option `maxlength` was not provided"
        );
    }

    #[test]
    fn test_required_option_satisfied_by_attribute() {
        let schema = Schema::new().required("maxlength", Kind::Number);
        let attrs = [("data-maxlength", "120")];
        let config = resolve_with("Counter", &schema, &attrs, &Overrides::new()).unwrap();
        assert_eq!(config.number("maxlength"), Some(120));
    }

    #[test]
    fn test_number_attribute_parsing() {
        let schema = Schema::new().option("tabindex", ConfigValue::Number(0));
        let attrs = [("data-tabindex", " -1 ")];
        let config = resolve_with("Test", &schema, &attrs, &Overrides::new()).unwrap();
        assert_eq!(config.number("tabindex"), Some(-1));
    }
}
