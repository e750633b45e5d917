//! Markup assembly for the popover dialog.
//!
//! # Invariants
//!
//! 1. **Config is never mutated**: normalization builds fresh attribute
//!    maps; caller-owned maps survive the render untouched.
//!
//! 2. **Merges are additive**: caller-supplied CSS classes and
//!    attributes are never erased, only extended (forced keys overwrite
//!    values but keep the caller's position).
//!
//! 3. **Normalization is idempotent**: feeding already-normalized
//!    attributes back through normalization changes nothing.
//!
//! 4. **Rendering never fails**: unknown tokens and missing pieces
//!    degrade to odd markup, not to errors.
//!
//! The container id is fixed during normalization, before the toggle
//! button is finalized: the toggle's default `data-target` refers to it.

use std::sync::atomic::{AtomicUsize, Ordering};

use popx_assets::{AssetManifest, AssetRegistry, PluginOptions};
use popx_html::{Attributes, begin_tag, end_tag, tag};

use crate::ScopedWidget;
use crate::popover::config::{ButtonSpec, PopoverConfig};

static NEXT_WIDGET_ID: AtomicUsize = AtomicUsize::new(0);

/// Allocate a page-unique container id.
fn next_container_id() -> String {
    let n = NEXT_WIDGET_ID.fetch_add(1, Ordering::Relaxed);
    format!("popover-x-{n}")
}

/// The popover dialog widget.
///
/// Renders in two halves around caller-supplied body content:
///
/// ```text
/// [toggle button]
/// <div role="dialog" id=... class="popover popover-...">
///   <div class="arrow"></div>
///   <div class="popover-title">[close button] header</div>
///   <div class="popover-content">      <- open() ends here
///     ... caller content ...
///   </div>                             <- close() starts here
///   <div class="popover-footer">footer</div>
/// </div>
/// ```
#[derive(Debug, Clone)]
pub struct PopoverX {
    config: PopoverConfig,
    normalized: Option<Normalized>,
}

/// Attribute maps and derived values computed from the config.
#[derive(Debug, Clone, PartialEq)]
struct Normalized {
    container: Attributes,
    arrow: Attributes,
    close_button: Option<ButtonSpec>,
    toggle_button: Option<ButtonSpec>,
    plugin_options: PluginOptions,
    container_id: String,
}

impl PopoverX {
    /// Create a widget from its configuration.
    #[must_use]
    pub fn new(config: PopoverConfig) -> Self {
        Self {
            config,
            normalized: None,
        }
    }

    /// The configuration this widget renders.
    pub fn config(&self) -> &PopoverConfig {
        &self.config
    }

    fn ensure_normalized(&mut self) {
        if self.normalized.is_none() {
            self.normalized = Some(normalize(&self.config));
        }
    }

    fn register_assets(&self, norm: &Normalized, assets: &mut dyn AssetRegistry) {
        assets.register_bundle(&AssetManifest::popover_x());
        if norm.toggle_button.is_none() {
            // No data-toggle hook exists in the markup; boot the plugin
            // on the container directly.
            assets.register_plugin_init(
                &self.config.plugin_name,
                &norm.container_id,
                &norm.plugin_options,
            );
        }
    }
}

impl ScopedWidget for PopoverX {
    fn open(&mut self) -> String {
        self.ensure_normalized();
        let norm = self.normalized.as_ref().expect("normalized above");
        tracing::trace!(id = %norm.container_id, "rendering popover open half");

        let mut out = String::new();
        if let Some(button) = &norm.toggle_button {
            out.push_str(&button_fragment(button, "Show"));
        }
        out.push('\n');
        out.push_str(&begin_tag("div", &norm.container));
        out.push('\n');
        out.push_str(&tag("div", "", &norm.arrow));
        out.push_str(&header_fragment(
            norm.close_button.as_ref(),
            self.config.header.as_deref(),
            &self.config.header_attrs,
        ));
        out.push('\n');
        out.push_str(&begin_tag(
            "div",
            &Attributes::new().class("popover-content"),
        ));
        out.push('\n');
        out
    }

    fn close(&mut self, assets: &mut dyn AssetRegistry) -> String {
        self.ensure_normalized();
        let norm = self.normalized.as_ref().expect("normalized above");
        tracing::trace!(id = %norm.container_id, "rendering popover close half");

        let mut out = String::new();
        out.push('\n');
        out.push_str(&self.config.body);
        out.push('\n');
        out.push_str(&end_tag("div"));
        out.push('\n');
        out.push_str(&footer_fragment(
            self.config.footer.as_deref(),
            &self.config.footer_attrs,
        ));
        out.push('\n');
        out.push_str(&end_tag("div"));

        self.register_assets(norm, assets);
        out
    }
}

/// Build the normalized attribute maps from an untouched config.
fn normalize(config: &PopoverConfig) -> Normalized {
    // Container: role first (caller value wins), then the caller's
    // attributes in their order, then id and variant classes.
    let mut container = Attributes::new();
    container.set(
        "role",
        config.container_attrs.get_text("role").unwrap_or("dialog"),
    );
    for (name, value) in config.container_attrs.iter() {
        if name != "role" {
            container.set(name, value.clone());
        }
    }
    let container_id = match container.get_text("id") {
        Some(id) => id.to_owned(),
        None => {
            let id = next_container_id();
            container.set("id", id.as_str());
            id
        }
    };
    let mut classes = format!("popover popover-{}", config.context.as_str());
    if let Some(size) = config.size {
        classes.push_str(" popover-");
        classes.push_str(size.as_str());
    }
    container.add_class(&classes);

    let mut arrow = config.arrow_attrs.clone();
    arrow.add_class("arrow");

    let mut plugin_options = config.plugin_options.clone();
    plugin_options.set_default("show", false);

    let close_button = config.close_button.as_ref().map(|spec| {
        let mut spec = spec.clone();
        spec.attrs.set("data-dismiss", "popover-x");
        spec.attrs.set("aria-hidden", "true");
        spec.attrs.set("class", "close");
        spec
    });

    let toggle_button = config.toggle_button.as_ref().map(|spec| {
        let mut spec = spec.clone();
        spec.attrs.set("data-toggle", "popover-x");
        spec.attrs.set("data-placement", config.placement.as_str());
        if !spec.attrs.contains("data-target") && !spec.attrs.contains("href") {
            spec.attrs.set("data-target", format!("#{container_id}"));
        }
        spec
    });

    Normalized {
        container,
        arrow,
        close_button,
        toggle_button,
        plugin_options,
        container_id,
    }
}

/// Render a toggle or close button from its normalized spec.
///
/// A `button`-tagged element with no caller-supplied `type` gets
/// `type="button"` rendered first; the label is raw markup.
fn button_fragment(spec: &ButtonSpec, default_label: &str) -> String {
    let tag_name = spec.tag.as_deref().unwrap_or("button");
    let label = spec.label.as_deref().unwrap_or(default_label);
    let mut attrs = Attributes::new();
    if tag_name == "button" && !spec.attrs.contains("type") {
        attrs.set("type", "button");
    }
    for (name, value) in spec.attrs.iter() {
        attrs.set(name, value.clone());
    }
    tag(tag_name, label, &attrs)
}

/// Render the header block: close button (if any) prepended to the
/// header markup, wrapped in the header tag with class `popover-title`.
/// Produces nothing when both pieces are empty.
fn header_fragment(
    close_button: Option<&ButtonSpec>,
    header: Option<&str>,
    header_attrs: &Attributes,
) -> String {
    let mut content = String::new();
    if let Some(button) = close_button {
        content.push_str(&button_fragment(button, "&times;"));
        content.push('\n');
    }
    if let Some(header) = header {
        content.push_str(header);
    }
    if content.is_empty() {
        return String::new();
    }
    wrapped_block(&content, header_attrs, "popover-title")
}

/// Render the footer block, or nothing when the footer is empty.
fn footer_fragment(footer: Option<&str>, footer_attrs: &Attributes) -> String {
    match footer {
        Some(footer) if !footer.is_empty() => {
            wrapped_block(footer, footer_attrs, "popover-footer")
        }
        _ => String::new(),
    }
}

/// Wrap newline-padded content in the block tag named by the `tag`
/// attribute entry (default `div`; the entry itself is not rendered).
fn wrapped_block(content: &str, attrs: &Attributes, class: &str) -> String {
    let mut attrs = attrs.clone();
    let tag_name = match attrs.remove("tag") {
        Some(value) => value.as_text().unwrap_or("div").to_owned(),
        None => "div".to_owned(),
    };
    attrs.add_class(class);
    tag(&tag_name, &format!("\n{content}\n"), &attrs)
}
