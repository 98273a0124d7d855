#![deny(missing_docs)]
//! Image types and helpers for 8-bit raster editing.

/// image representation for editing purposes.
pub mod image;

/// Error types for the image module.
pub mod error;

/// image casting operations.
pub mod ops;

pub use crate::error::ImageError;
pub use crate::image::{Image, ImageDtype, ImageSize};
