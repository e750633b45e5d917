//! Configuration for the popover dialog widget.

use std::fmt;

use popx_assets::PluginOptions;
use popx_html::{AttrValue, Attributes};

/// Contextual color variant of the dialog.
///
/// The variant token is interpolated into the container's CSS class list
/// without validation; the stylesheet decides what it means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ContextType {
    #[default]
    Default,
    Primary,
    Info,
    Success,
    Danger,
    Warning,
}

impl ContextType {
    /// The CSS token for this variant.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Primary => "primary",
            Self::Info => "info",
            Self::Success => "success",
            Self::Danger => "danger",
            Self::Warning => "warning",
        }
    }
}

impl fmt::Display for ContextType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Placement of the dialog relative to its trigger.
///
/// Corner variants carry two tokens (edge + corner refinement), matching
/// the class names the client-side plugin expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Placement {
    #[default]
    Right,
    Left,
    Top,
    Bottom,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    LeftTop,
    LeftBottom,
    RightTop,
    RightBottom,
}

impl Placement {
    /// The placement token rendered into `data-placement`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Right => "right",
            Self::Left => "left",
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::TopLeft => "top top-left",
            Self::TopRight => "top top-right",
            Self::BottomLeft => "bottom bottom-left",
            Self::BottomRight => "bottom bottom-right",
            Self::LeftTop => "left left-top",
            Self::LeftBottom => "left left-bottom",
            Self::RightTop => "right right-top",
            Self::RightBottom => "right right-bottom",
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dialog size variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Size {
    Large,
    Medium,
}

impl Size {
    /// The CSS token for this size.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Large => "lg",
            Self::Medium => "md",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rendering options for the toggle and close buttons.
///
/// `tag` and `label` are structural; everything in `attrs` renders as
/// HTML attributes of the button element.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ButtonSpec {
    /// Tag name override. Defaults to `button`.
    pub tag: Option<String>,
    /// Inner label markup override. Defaults per button kind
    /// (`&times;` for close, `Show` for toggle).
    pub label: Option<String>,
    /// HTML attributes of the button element.
    pub attrs: Attributes,
}

impl ButtonSpec {
    /// A button with all defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the tag name.
    #[must_use]
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Override the label markup.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set an HTML attribute.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attrs.set(name, value);
        self
    }
}

/// Configuration of a [`PopoverX`](super::PopoverX) dialog.
///
/// Constructed once per render and never mutated by the widget;
/// normalization builds fresh attribute maps from it.
#[derive(Debug, Clone, PartialEq)]
pub struct PopoverConfig {
    /// Contextual color variant.
    pub context: ContextType,
    /// Dialog placement relative to the toggle element.
    pub placement: Placement,
    /// Optional size variant.
    pub size: Option<Size>,
    /// Header markup.
    pub header: Option<String>,
    /// Header attributes; a `tag` entry overrides the wrapping tag
    /// (default `div`) and is not rendered as an attribute.
    pub header_attrs: Attributes,
    /// Body markup emitted by `close`, ahead of the body wrapper's
    /// closing tag. Callers may also write directly between the
    /// `open`/`close` halves.
    pub body: String,
    /// Attributes of the indicator arrow element.
    pub arrow_attrs: Attributes,
    /// Footer markup.
    pub footer: Option<String>,
    /// Footer attributes; `tag` overrides the wrapping tag (default `div`).
    pub footer_attrs: Attributes,
    /// Close button in the dialog header. `None` suppresses it.
    pub close_button: Option<ButtonSpec>,
    /// Toggle button controlling dialog visibility. `None` suppresses it,
    /// in which case the plugin is initialized by inline script instead.
    pub toggle_button: Option<ButtonSpec>,
    /// Attributes of the dialog container; an `id` is assigned
    /// automatically when absent.
    pub container_attrs: Attributes,
    /// Options forwarded to the browser-side plugin.
    pub plugin_options: PluginOptions,
    /// Name of the browser-side plugin function.
    pub plugin_name: String,
}

impl Default for PopoverConfig {
    fn default() -> Self {
        Self {
            context: ContextType::Default,
            placement: Placement::Right,
            size: None,
            header: None,
            header_attrs: Attributes::new(),
            body: String::new(),
            arrow_attrs: Attributes::new(),
            footer: None,
            footer_attrs: Attributes::new(),
            close_button: Some(ButtonSpec::new()),
            toggle_button: None,
            container_attrs: Attributes::new(),
            plugin_options: PluginOptions::new(),
            plugin_name: "popoverX".to_owned(),
        }
    }
}

impl PopoverConfig {
    /// Configuration with all defaults: default context, right placement,
    /// a close button, and no toggle button.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the contextual color variant.
    #[must_use]
    pub fn context(mut self, context: ContextType) -> Self {
        self.context = context;
        self
    }

    /// Set the placement.
    #[must_use]
    pub fn placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    /// Set the size variant.
    #[must_use]
    pub fn size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    /// Set the header markup.
    #[must_use]
    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Set the header attributes.
    #[must_use]
    pub fn header_attrs(mut self, attrs: Attributes) -> Self {
        self.header_attrs = attrs;
        self
    }

    /// Set the body markup.
    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Set the arrow attributes.
    #[must_use]
    pub fn arrow_attrs(mut self, attrs: Attributes) -> Self {
        self.arrow_attrs = attrs;
        self
    }

    /// Set the footer markup.
    #[must_use]
    pub fn footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    /// Set the footer attributes.
    #[must_use]
    pub fn footer_attrs(mut self, attrs: Attributes) -> Self {
        self.footer_attrs = attrs;
        self
    }

    /// Configure the close button.
    #[must_use]
    pub fn close_button(mut self, spec: ButtonSpec) -> Self {
        self.close_button = Some(spec);
        self
    }

    /// Render no close button.
    #[must_use]
    pub fn without_close_button(mut self) -> Self {
        self.close_button = None;
        self
    }

    /// Configure the toggle button.
    #[must_use]
    pub fn toggle_button(mut self, spec: ButtonSpec) -> Self {
        self.toggle_button = Some(spec);
        self
    }

    /// Set the container attributes.
    #[must_use]
    pub fn container_attrs(mut self, attrs: Attributes) -> Self {
        self.container_attrs = attrs;
        self
    }

    /// Set the container element id.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.container_attrs.set("id", id.into());
        self
    }

    /// Set the plugin options.
    #[must_use]
    pub fn plugin_options(mut self, options: PluginOptions) -> Self {
        self.plugin_options = options;
        self
    }
}
