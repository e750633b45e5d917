#![forbid(unsafe_code)]

//! HTML primitives for popover-x.
//!
//! This crate provides:
//! - [`escape`] for HTML entity escaping of attribute values
//! - [`Attributes`] an insertion-ordered attribute map with additive
//!   CSS-class semantics
//! - [`begin_tag`], [`end_tag`], and [`tag`] for tag assembly
//!
//! Inner tag content is treated as raw markup and is never escaped; the
//! caller owns what goes between a tag pair. Attribute values are always
//! escaped on render.

pub mod attrs;
pub mod escape;
pub mod tag;

pub use attrs::{AttrValue, Attributes};
pub use escape::escape;
pub use tag::{begin_tag, end_tag, tag};
