//! Asset bundle descriptors.
//!
//! A manifest names a bundle, the source path its files live under, the
//! stylesheet/script stems it contributes, and the bundles that must be
//! registered before it. Stems carry no extension; [`AssetManifest::css_files`]
//! and [`AssetManifest::js_files`] expand them, optionally to the minified
//! variant.

/// Names of the framework-level bundles the popover-x bundle depends on.
pub mod framework {
    /// jQuery runtime.
    pub const JQUERY: &str = "jquery";
    /// Bootstrap stylesheet bundle.
    pub const BOOTSTRAP: &str = "bootstrap";
    /// Bootstrap plugin scripts (modal, transition).
    pub const BOOTSTRAP_PLUGIN: &str = "bootstrap-plugin";
}

/// A named bundle of stylesheet/script resources plus the bundles that
/// must be registered before it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssetManifest {
    /// Unique bundle key used for page-level deduplication.
    pub name: String,
    /// Base path all css/js stems are resolved against.
    pub source_path: String,
    /// Stylesheet stems, extension-less.
    pub css: Vec<String>,
    /// Script stems, extension-less.
    pub js: Vec<String>,
    /// Bundle names that must be registered before this bundle.
    pub depends: Vec<String>,
}

impl AssetManifest {
    /// Create an empty manifest.
    #[must_use]
    pub fn new(name: impl Into<String>, source_path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source_path: source_path.into(),
            css: Vec::new(),
            js: Vec::new(),
            depends: Vec::new(),
        }
    }

    /// Add a stylesheet stem.
    #[must_use]
    pub fn css(mut self, stem: impl Into<String>) -> Self {
        self.css.push(stem.into());
        self
    }

    /// Add a script stem.
    #[must_use]
    pub fn js(mut self, stem: impl Into<String>) -> Self {
        self.js.push(stem.into());
        self
    }

    /// Add a dependency bundle name.
    #[must_use]
    pub fn depends(mut self, bundle: impl Into<String>) -> Self {
        self.depends.push(bundle.into());
        self
    }

    /// The bundle shipped with the popover-x widget.
    #[must_use]
    pub fn popover_x() -> Self {
        Self::new("popover-x", "@vendor/kartik-v/bootstrap-popover-x")
            .css("css/bootstrap-popover-x")
            .js("js/bootstrap-popover-x")
            .depends(framework::JQUERY)
            .depends(framework::BOOTSTRAP)
            .depends(framework::BOOTSTRAP_PLUGIN)
    }

    /// Resolved stylesheet files, minified on request.
    pub fn css_files(&self, minified: bool) -> Vec<String> {
        self.css
            .iter()
            .map(|stem| expand(&self.source_path, stem, "css", minified))
            .collect()
    }

    /// Resolved script files, minified on request.
    pub fn js_files(&self, minified: bool) -> Vec<String> {
        self.js
            .iter()
            .map(|stem| expand(&self.source_path, stem, "js", minified))
            .collect()
    }
}

/// Definitions of the framework bundles named in [`framework`].
///
/// Hosts that serve these from elsewhere define their own manifests under
/// the same names instead.
pub fn framework_bundles() -> Vec<AssetManifest> {
    vec![
        AssetManifest::new(framework::JQUERY, "@web/assets/jquery").js("jquery"),
        AssetManifest::new(framework::BOOTSTRAP, "@web/assets/bootstrap").css("css/bootstrap"),
        AssetManifest::new(framework::BOOTSTRAP_PLUGIN, "@web/assets/bootstrap")
            .js("js/bootstrap")
            .depends(framework::JQUERY)
            .depends(framework::BOOTSTRAP),
    ]
}

fn expand(source_path: &str, stem: &str, ext: &str, minified: bool) -> String {
    if minified {
        format!("{source_path}/{stem}.min.{ext}")
    } else {
        format!("{source_path}/{stem}.{ext}")
    }
}
