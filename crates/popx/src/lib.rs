#![forbid(unsafe_code)]

//! Public facade for the popover-x widget stack.
//!
//! The widget renders the markup of an openable popover/modal dialog in
//! two halves so the caller can write arbitrary body content between
//! them, and registers the stylesheet/script bundle the markup needs
//! client-side with an injected [`AssetRegistry`](prelude::AssetRegistry).
//!
//! # Example
//!
//! ```
//! use popx::prelude::*;
//!
//! let config = PopoverConfig::new()
//!     .context(ContextType::Info)
//!     .header("Hello world")
//!     .toggle_button(ButtonSpec::new().label("Open Popover"))
//!     .id("hello");
//!
//! let mut assets = PageAssets::with_framework_bundles();
//! let mut popover = PopoverX::new(config);
//!
//! let mut page = popover.open();
//! page.push_str("Say hello...");
//! page.push_str(&popover.close(&mut assets));
//!
//! assert!(page.contains(r#"class="popover popover-info""#));
//! assert!(assets.is_registered("popover-x"));
//! ```

pub use popx_assets as assets;
pub use popx_html as html;
pub use popx_widgets as widgets;

/// Common imports for rendering popover dialogs.
pub mod prelude {
    pub use popx_assets::{
        AssetError, AssetManifest, AssetRegistry, PageAssets, PluginOptions,
    };
    pub use popx_html::{AttrValue, Attributes};
    pub use popx_widgets::{
        ButtonSpec, ContextType, Placement, PopoverConfig, PopoverX, ScopedWidget, Size,
    };
}
