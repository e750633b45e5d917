//! Page-level asset registration.
//!
//! # Invariants
//!
//! 1. **Once per page**: registering the same bundle name twice is a
//!    no-op; a page never links a file twice however many widget
//!    instances render into it.
//!
//! 2. **Dependencies order first**: a bundle's `depends` entries resolve
//!    before the bundle itself, transitively. Cycles terminate (each
//!    bundle is visited once).
//!
//! 3. **Registration never fails**: a dependency name with no definition
//!    is carried along and only surfaces as [`AssetError::UnknownBundle`]
//!    when the resolved file lists are requested. Widget rendering stays
//!    infallible.

use ahash::{AHashMap, AHashSet};
use popx_html::{Attributes, begin_tag, tag};
use thiserror::Error;

use crate::manifest::{AssetManifest, framework_bundles};
use crate::plugin::{PluginOptions, plugin_init_script};

/// Errors from asset resolution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssetError {
    /// A bundle was named as a dependency but never defined.
    #[error("asset bundle '{0}' was required but never defined")]
    UnknownBundle(String),
}

/// Capability surface a widget uses to enqueue page resources.
///
/// Implemented by [`PageAssets`] here and by host asset pipelines
/// elsewhere. Widgets call these unconditionally on every render;
/// deduplication is the implementor's job.
pub trait AssetRegistry {
    /// Enqueue a bundle, and transitively its dependencies, for this page.
    fn register_bundle(&mut self, manifest: &AssetManifest);

    /// Record an inline script that boots `plugin` on the element with
    /// id `element_id`.
    fn register_plugin_init(&mut self, plugin: &str, element_id: &str, options: &PluginOptions);
}

/// In-memory asset registry scoped to a single page render.
#[derive(Debug, Clone, Default)]
pub struct PageAssets {
    defined: AHashMap<String, AssetManifest>,
    seen: AHashSet<String>,
    resolved: Vec<String>,
    plugin_inits: Vec<String>,
}

impl PageAssets {
    /// An empty registry with no bundle definitions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry pre-seeded with the framework bundle definitions the
    /// popover-x bundle depends on.
    #[must_use]
    pub fn with_framework_bundles() -> Self {
        let mut assets = Self::new();
        for bundle in framework_bundles() {
            assets.define(bundle);
        }
        assets
    }

    /// Define a bundle without registering it. An existing definition
    /// under the same name is kept.
    pub fn define(&mut self, manifest: AssetManifest) {
        self.defined.entry(manifest.name.clone()).or_insert(manifest);
    }

    /// Whether a bundle has been registered (directly or as a dependency).
    pub fn is_registered(&self, name: &str) -> bool {
        self.seen.contains(name)
    }

    /// Registered bundle names in resolution order (dependencies first).
    pub fn registered(&self) -> &[String] {
        &self.resolved
    }

    /// Recorded inline plugin-initialization scripts, in order.
    pub fn plugin_inits(&self) -> &[String] {
        &self.plugin_inits
    }

    /// Resolved stylesheet files of every registered bundle.
    pub fn css_files(&self, minified: bool) -> Result<Vec<String>, AssetError> {
        let mut files = Vec::new();
        for name in &self.resolved {
            let manifest = self.lookup(name)?;
            files.extend(manifest.css_files(minified));
        }
        Ok(files)
    }

    /// Resolved script files of every registered bundle.
    pub fn js_files(&self, minified: bool) -> Result<Vec<String>, AssetError> {
        let mut files = Vec::new();
        for name in &self.resolved {
            let manifest = self.lookup(name)?;
            files.extend(manifest.js_files(minified));
        }
        Ok(files)
    }

    /// Markup for the page `<head>` region: one `<link>` per stylesheet.
    pub fn head_markup(&self, minified: bool) -> Result<String, AssetError> {
        let mut out = String::new();
        for file in self.css_files(minified)? {
            let attrs = Attributes::new()
                .attr("href", file.as_str())
                .attr("rel", "stylesheet");
            out.push_str(&begin_tag("link", &attrs));
            out.push('\n');
        }
        Ok(out)
    }

    /// Markup for the before-`</body>` region: script files followed by
    /// the recorded inline plugin initializations.
    pub fn body_end_markup(&self, minified: bool) -> Result<String, AssetError> {
        let mut out = String::new();
        for file in self.js_files(minified)? {
            let attrs = Attributes::new().attr("src", file.as_str());
            out.push_str(&tag("script", "", &attrs));
            out.push('\n');
        }
        for script in &self.plugin_inits {
            out.push_str(&tag("script", script, &Attributes::new()));
            out.push('\n');
        }
        Ok(out)
    }

    fn lookup(&self, name: &str) -> Result<&AssetManifest, AssetError> {
        self.defined
            .get(name)
            .ok_or_else(|| AssetError::UnknownBundle(name.to_owned()))
    }

    fn mark(&mut self, name: &str) {
        if self.seen.contains(name) {
            return;
        }
        self.seen.insert(name.to_owned());
        if let Some(depends) = self.defined.get(name).map(|m| m.depends.clone()) {
            for dep in depends {
                self.mark(&dep);
            }
        }
        self.resolved.push(name.to_owned());
    }
}

impl AssetRegistry for PageAssets {
    fn register_bundle(&mut self, manifest: &AssetManifest) {
        self.define(manifest.clone());
        if !self.seen.contains(&manifest.name) {
            tracing::debug!(bundle = %manifest.name, "registering asset bundle");
        }
        self.mark(&manifest.name);
    }

    fn register_plugin_init(&mut self, plugin: &str, element_id: &str, options: &PluginOptions) {
        tracing::debug!(plugin, element = element_id, "registering inline plugin init");
        self.plugin_inits
            .push(plugin_init_script(plugin, element_id, options));
    }
}
