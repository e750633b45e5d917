//! The popover-x dialog widget: an extended popover combining popover
//! positioning with modal features (header, footer, toggle and close
//! controls).
//!
//! # Example
//!
//! ```
//! use popx_assets::PageAssets;
//! use popx_widgets::popover::{ButtonSpec, PopoverConfig, PopoverX};
//! use popx_widgets::ScopedWidget;
//!
//! let config = PopoverConfig::new()
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
//! assert!(page.contains(r##"data-target="#hello""##));
//! ```

mod config;
mod widget;

pub use config::{ButtonSpec, ContextType, Placement, PopoverConfig, Size};
pub use widget::PopoverX;
