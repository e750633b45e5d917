//! Insertion-ordered HTML attribute maps.
//!
//! # Invariants
//!
//! 1. **Order is insertion order**: rendering visits attributes in the
//!    order they were first set. Overwriting a value keeps its position.
//!
//! 2. **Class merges are additive**: [`Attributes::add_class`] appends
//!    missing tokens to the `class` attribute and never erases tokens
//!    the caller already supplied. Re-adding a token is a no-op, so the
//!    operation is idempotent.
//!
//! 3. **Flags render bare**: a `Flag(true)` value renders as the bare
//!    attribute name; `Flag(false)` renders nothing at all.

use std::fmt;

use crate::escape::escape;

/// An attribute value: text, or a boolean flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    /// Rendered as `name="escaped value"`.
    Text(String),
    /// `true` renders the bare attribute name; `false` renders nothing.
    Flag(bool),
}

impl AttrValue {
    /// The text content, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            Self::Flag(_) => None,
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for AttrValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

/// An insertion-ordered `name -> value` attribute map.
///
/// Widget normalization merges defaults into caller-supplied maps; every
/// merge operation here is duplicate-safe so running a merge twice
/// produces the same map.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Attributes {
    entries: Vec<(String, AttrValue)>,
}

impl Attributes {
    /// Create an empty attribute map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no attributes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|(n, _)| n == name)
    }

    /// Whether `name` is present.
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Look up a value by name.
    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Look up a text value by name.
    pub fn get_text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(AttrValue::as_text)
    }

    /// Insert or overwrite a value. An overwritten attribute keeps its
    /// original position.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        let name = name.into();
        let value = value.into();
        match self.position(&name) {
            Some(i) => self.entries[i].1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Insert a value only when `name` is absent.
    pub fn set_default(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        let name = name.into();
        if !self.contains(&name) {
            self.entries.push((name, value.into()));
        }
    }

    /// Remove an attribute, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<AttrValue> {
        self.position(name).map(|i| self.entries.remove(i).1)
    }

    /// Append CSS class tokens that are not already present.
    ///
    /// The argument is split on whitespace; each missing token is appended
    /// to the `class` attribute (created on first use). Tokens already in
    /// the class list are left alone, so the caller's classes survive and
    /// repeated calls are no-ops.
    pub fn add_class(&mut self, classes: &str) {
        if classes.trim().is_empty() {
            return;
        }
        let i = match self.position("class") {
            Some(i) => {
                // A flag-valued `class` carries no tokens; replace it.
                if !matches!(self.entries[i].1, AttrValue::Text(_)) {
                    self.entries[i].1 = AttrValue::Text(String::new());
                }
                i
            }
            None => {
                self.entries
                    .push(("class".to_owned(), AttrValue::Text(String::new())));
                self.entries.len() - 1
            }
        };
        let AttrValue::Text(current) = &mut self.entries[i].1 else {
            return;
        };
        for token in classes.split_whitespace() {
            if !current.split_whitespace().any(|t| t == token) {
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(token);
            }
        }
    }

    /// Iterate attributes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Render the attributes as ` name="value"` pairs, escaped, in
    /// insertion order.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }

    /// Render into an existing buffer.
    pub fn render_into(&self, out: &mut String) {
        for (name, value) in &self.entries {
            match value {
                AttrValue::Text(text) => {
                    out.push(' ');
                    out.push_str(name);
                    out.push_str("=\"");
                    out.push_str(&escape(text));
                    out.push('"');
                }
                AttrValue::Flag(true) => {
                    out.push(' ');
                    out.push_str(name);
                }
                AttrValue::Flag(false) => {}
            }
        }
    }

    /// Builder-style [`set`](Self::set).
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Builder-style [`add_class`](Self::add_class).
    #[must_use]
    pub fn class(mut self, classes: &str) -> Self {
        self.add_class(classes);
        self
    }
}

impl FromIterator<(String, AttrValue)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (String, AttrValue)>>(iter: I) -> Self {
        let mut attrs = Self::new();
        for (name, value) in iter {
            attrs.set(name, value);
        }
        attrs
    }
}

impl fmt::Display for Attributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn set_preserves_insertion_order() {
        let attrs = Attributes::new()
            .attr("id", "pop1")
            .attr("role", "dialog")
            .attr("data-x", "1");
        assert_eq!(attrs.render(), r#" id="pop1" role="dialog" data-x="1""#);
    }

    #[test]
    fn overwrite_keeps_position() {
        let mut attrs = Attributes::new().attr("a", "1").attr("b", "2");
        attrs.set("a", "9");
        assert_eq!(attrs.render(), r#" a="9" b="2""#);
    }

    #[test]
    fn set_default_does_not_overwrite() {
        let mut attrs = Attributes::new().attr("role", "tooltip");
        attrs.set_default("role", "dialog");
        assert_eq!(attrs.get_text("role"), Some("tooltip"));
    }

    #[test]
    fn set_default_appends_when_absent() {
        let mut attrs = Attributes::new().attr("id", "x");
        attrs.set_default("role", "dialog");
        assert_eq!(attrs.render(), r#" id="x" role="dialog""#);
    }

    #[test]
    fn add_class_creates_attribute() {
        let mut attrs = Attributes::new();
        attrs.add_class("popover popover-danger");
        assert_eq!(attrs.get_text("class"), Some("popover popover-danger"));
    }

    #[test]
    fn add_class_preserves_caller_classes() {
        let mut attrs = Attributes::new().attr("class", "my-popover");
        attrs.add_class("popover popover-info");
        assert_eq!(
            attrs.get_text("class"),
            Some("my-popover popover popover-info")
        );
    }

    #[test]
    fn add_class_skips_existing_tokens() {
        let mut attrs = Attributes::new().attr("class", "popover custom");
        attrs.add_class("popover popover-default");
        assert_eq!(
            attrs.get_text("class"),
            Some("popover custom popover-default")
        );
    }

    #[test]
    fn add_class_empty_is_noop() {
        let mut attrs = Attributes::new();
        attrs.add_class("   ");
        assert!(attrs.is_empty());
    }

    #[test]
    fn remove_returns_value() {
        let mut attrs = Attributes::new().attr("tag", "span").attr("id", "x");
        assert_eq!(attrs.remove("tag"), Some(AttrValue::Text("span".into())));
        assert_eq!(attrs.render(), r#" id="x""#);
        assert_eq!(attrs.remove("tag"), None);
    }

    #[test]
    fn flag_true_renders_bare() {
        let attrs = Attributes::new().attr("disabled", true).attr("id", "b");
        assert_eq!(attrs.render(), r#" disabled id="b""#);
    }

    #[test]
    fn flag_false_renders_nothing() {
        let attrs = Attributes::new().attr("disabled", false).attr("id", "b");
        assert_eq!(attrs.render(), r#" id="b""#);
    }

    #[test]
    fn values_are_escaped_on_render() {
        let attrs = Attributes::new().attr("title", r#"a "quoted" <b>"#);
        assert_eq!(
            attrs.render(),
            r#" title="a &quot;quoted&quot; &lt;b&gt;""#
        );
    }

    proptest! {
        #[test]
        fn add_class_is_idempotent(
            tokens in prop::collection::vec("[a-z][a-z0-9-]{0,8}", 1..5),
            existing in prop::option::of("[a-z][a-z0-9-]{0,8}"),
        ) {
            let mut attrs = Attributes::new();
            if let Some(existing) = existing {
                attrs.set("class", existing.as_str());
            }
            let class_list = tokens.join(" ");
            attrs.add_class(&class_list);
            let once = attrs.render();
            attrs.add_class(&class_list);
            prop_assert_eq!(once, attrs.render());
        }

        #[test]
        fn set_then_get_round_trips(name in "[a-z][a-z0-9-]{0,12}", value in ".{0,24}") {
            let mut attrs = Attributes::new();
            attrs.set(name.as_str(), value.as_str());
            prop_assert_eq!(attrs.get_text(&name), Some(value.as_str()));
        }
    }
}
