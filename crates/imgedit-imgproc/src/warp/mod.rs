//! Geometric image transformations using affine warps.
//!
//! This module provides functions for applying 2D affine transformations to images:
//!
//! - Affine warping with inverse mapping and constant (black) border
//! - Rotation and translation matrix generation
//! - Affine transform inversion
//!
//! # Examples
//!
//! Rotating an image by 45 degrees:
//!
//! ```
//! use imgedit_imgproc::warp::get_rotation_matrix2d;
//!
//! let rotation_matrix = get_rotation_matrix2d((128.0, 128.0), 45.0, 1.0);
//! // Use with warp_affine to rotate the image
//! assert_eq!(rotation_matrix.len(), 6);
//! ```

mod affine;

pub use affine::{
    get_rotation_matrix2d, get_translation_matrix2d, invert_affine_transform, warp_affine,
    warp_affine_u8,
};
