//! Client-side plugin options and inline initialization scripts.
//!
//! The popover-x markup is normally activated declaratively through a
//! toggle element's `data-toggle` attribute. When no toggle exists, the
//! widget instead asks the registry for an inline script that boots the
//! plugin on the container element directly; the options travel as JSON.

use serde_json::{Map, Value};

/// Options forwarded to the browser-side plugin constructor.
///
/// `Disabled` suppresses plugin configuration entirely. The enabled form
/// is a JSON object; widget normalization merges `show: false` in as a
/// default, and caller-supplied keys always win.
#[derive(Debug, Clone, PartialEq)]
pub enum PluginOptions {
    /// No plugin configuration is emitted.
    Disabled,
    /// JSON object passed to the plugin constructor.
    Enabled(Map<String, Value>),
}

impl Default for PluginOptions {
    fn default() -> Self {
        Self::Enabled(Map::new())
    }
}

impl PluginOptions {
    /// Enabled, empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Suppress plugin configuration.
    #[must_use]
    pub fn disabled() -> Self {
        Self::Disabled
    }

    /// Whether plugin configuration is suppressed.
    pub fn is_disabled(&self) -> bool {
        matches!(self, Self::Disabled)
    }

    /// Insert or overwrite an option. No-op when disabled.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        if let Self::Enabled(map) = self {
            map.insert(key.into(), value.into());
        }
    }

    /// Insert an option only when the key is absent. No-op when disabled.
    pub fn set_default(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        if let Self::Enabled(map) = self {
            map.entry(key.into()).or_insert_with(|| value.into());
        }
    }

    /// Look up an option value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Self::Disabled => None,
            Self::Enabled(map) => map.get(key),
        }
    }

    /// Builder-style [`set`](Self::set).
    #[must_use]
    pub fn option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    /// Render the options as a JSON object literal. Disabled options
    /// render as the empty object.
    pub fn to_json(&self) -> String {
        match self {
            Self::Disabled => "{}".to_owned(),
            Self::Enabled(map) => Value::Object(map.clone()).to_string(),
        }
    }
}

/// Render the inline script that boots `plugin` on one element.
///
/// The element id is interpolated as-is; correctness of the selector is
/// the caller's concern, matching the widget's permissive markup policy.
pub fn plugin_init_script(plugin: &str, element_id: &str, options: &PluginOptions) -> String {
    format!("jQuery('#{element_id}').{plugin}({});", options.to_json())
}
