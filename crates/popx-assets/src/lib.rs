#![forbid(unsafe_code)]

//! Asset bundle manifests and page-level registration for popover-x.
//!
//! A widget declares the stylesheet/script resources its markup needs
//! client-side as an [`AssetManifest`] and hands it to an
//! [`AssetRegistry`]. The registry owns once-per-page deduplication and
//! dependency ordering; the widget registers unconditionally on every
//! render and never assumes it is the only instance on the page.
//!
//! [`PageAssets`] is the in-memory registry implementation; hosts with
//! their own asset pipeline implement [`AssetRegistry`] instead.

pub mod manifest;
pub mod plugin;
pub mod registry;

pub use manifest::{AssetManifest, framework, framework_bundles};
pub use plugin::{PluginOptions, plugin_init_script};
pub use registry::{AssetError, AssetRegistry, PageAssets};
