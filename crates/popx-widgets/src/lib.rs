#![forbid(unsafe_code)]

//! Server-rendered dialog widgets for popover-x.

pub mod popover;

pub use popover::{
    ButtonSpec, ContextType, Placement, PopoverConfig, PopoverX, Size,
};

use popx_assets::AssetRegistry;

/// A widget rendered as two markup halves around caller-supplied body
/// content.
///
/// `open` emits everything up to and including the body opening tag;
/// the caller then writes arbitrary markup, and `close` emits everything
/// after it. `close` also hands the widget's asset bundle to `assets` —
/// unconditionally, since page-level deduplication belongs to the
/// registry, not the widget.
pub trait ScopedWidget {
    /// Render the opening half of the widget markup.
    fn open(&mut self) -> String;

    /// Render the closing half and register the widget's assets.
    fn close(&mut self, assets: &mut dyn AssetRegistry) -> String;
}
