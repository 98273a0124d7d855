//! One function per editor operation.
//!
//! Geometric and gamma operations work on the processing representation and
//! keep its channel layout. Color operations may change it.

use imgedit_image::{Image, ImageError};
use imgedit_imgproc::{
    color, enhance,
    interpolation::InterpolationMode,
    resize,
    warp::{get_rotation_matrix2d, get_translation_matrix2d, warp_affine_u8},
};

use crate::codec::{DisplayImage, ProcessingImage};
use crate::error::EditorError;

fn warp_same_size<const C: usize>(
    src: &Image<u8, C>,
    m: &[f32; 6],
) -> Result<Image<u8, C>, ImageError> {
    let mut dst = Image::from_size_val(src.size(), 0u8)?;
    warp_affine_u8(src, &mut dst, m, InterpolationMode::Bilinear)?;
    Ok(dst)
}

fn warp(image: &ProcessingImage, m: &[f32; 6]) -> Result<ProcessingImage, ImageError> {
    Ok(match image {
        ProcessingImage::Bgr8(bgr) => ProcessingImage::Bgr8(warp_same_size(bgr, m)?),
        ProcessingImage::Gray8(gray) => ProcessingImage::Gray8(warp_same_size(gray, m)?),
    })
}

/// Shift the image by `(dx, dy)` pixels on a canvas of the same size.
///
/// Pixels uncovered by the shift are black.
pub fn translate(image: &ProcessingImage, dx: f32, dy: f32) -> Result<ProcessingImage, ImageError> {
    warp(image, &get_translation_matrix2d(dx, dy))
}

/// Rotate the image by `angle` degrees counter-clockwise about its center.
///
/// The center is `(width / 2, height / 2)` in integer pixels and the canvas keeps
/// the input size, so corners may be cut and uncovered pixels are black.
pub fn rotate(image: &ProcessingImage, angle: f32) -> Result<ProcessingImage, ImageError> {
    let size = image.size();
    let center = ((size.width / 2) as f32, (size.height / 2) as f32);
    warp(image, &get_rotation_matrix2d(center, angle, 1.0))
}

/// Largest number of pixels a scaled image may hold.
pub const MAX_SCALED_PIXELS: usize = 1 << 28;

fn resize_by<const C: usize>(src: &Image<u8, C>, factor: f32) -> Result<Image<u8, C>, EditorError> {
    let new_size = resize::scaled_size(src.size(), factor);
    let pixels = new_size.width.checked_mul(new_size.height);
    if !matches!(pixels, Some(1..=MAX_SCALED_PIXELS)) {
        return Err(EditorError::InvalidParameter {
            name: "scale",
            value: factor,
        });
    }

    let mut dst = Image::from_size_val(new_size, 0u8)?;
    resize::resize_u8(src, &mut dst, InterpolationMode::Bilinear)?;
    Ok(dst)
}

/// Resize the image by `factor` on both axes with bilinear interpolation.
///
/// # Errors
///
/// Returns [`EditorError::InvalidParameter`] when the scaled image would be empty
/// or hold more than [`MAX_SCALED_PIXELS`] pixels.
pub fn scale(image: &ProcessingImage, factor: f32) -> Result<ProcessingImage, EditorError> {
    Ok(match image {
        ProcessingImage::Bgr8(bgr) => ProcessingImage::Bgr8(resize_by(bgr, factor)?),
        ProcessingImage::Gray8(gray) => ProcessingImage::Gray8(resize_by(gray, factor)?),
    })
}

fn gamma_with<const C: usize>(src: &Image<u8, C>, lut: &[u8; 256]) -> Result<Image<u8, C>, ImageError> {
    let mut dst = Image::from_size_val(src.size(), 0u8)?;
    enhance::apply_lut(src, &mut dst, lut)?;
    Ok(dst)
}

/// Apply a gamma correction through a 256-entry lookup table.
pub fn gamma(image: &ProcessingImage, gamma: f32) -> Result<ProcessingImage, ImageError> {
    let lut = enhance::gamma_lut(gamma);
    Ok(match image {
        ProcessingImage::Bgr8(bgr) => ProcessingImage::Bgr8(gamma_with(bgr, &lut)?),
        ProcessingImage::Gray8(gray) => ProcessingImage::Gray8(gamma_with(gray, &lut)?),
    })
}

/// Collapse the image to a single luminance channel.
///
/// Grayscale inputs are returned as they are.
pub fn grayscale(image: &ProcessingImage) -> Result<ProcessingImage, ImageError> {
    Ok(match image {
        ProcessingImage::Bgr8(bgr) => {
            let mut gray = Image::from_size_val(bgr.size(), 0u8)?;
            color::gray_from_bgr_u8(bgr, &mut gray)?;
            ProcessingImage::Gray8(gray)
        }
        ProcessingImage::Gray8(gray) => ProcessingImage::Gray8(gray.clone()),
    })
}

/// Convert the image to HSV and back to a three channel RGB image.
///
/// The output is already in the display representation. Grayscale inputs are
/// replicated to three channels first.
pub fn hsv_roundtrip(image: &ProcessingImage) -> Result<DisplayImage, ImageError> {
    let bgr = match image {
        ProcessingImage::Bgr8(bgr) => bgr.clone(),
        ProcessingImage::Gray8(gray) => {
            let mut bgr = Image::from_size_val(gray.size(), 0u8)?;
            color::rgb_from_gray(gray, &mut bgr)?;
            bgr
        }
    };

    let mut hsv = Image::from_size_val(bgr.size(), 0u8)?;
    color::hsv_from_bgr_u8(&bgr, &mut hsv)?;

    let mut rgb = Image::from_size_val(bgr.size(), 0u8)?;
    color::rgb_from_hsv_u8(&hsv, &mut rgb)?;

    Ok(DisplayImage::Rgb8(rgb))
}

fn contrast_with<const C: usize>(src: &Image<u8, C>, factor: f32) -> Result<Image<u8, C>, ImageError> {
    let mut dst = Image::from_size_val(src.size(), 0u8)?;
    enhance::adjust_contrast_u8(src, factor, &mut dst)?;
    Ok(dst)
}

/// Multiply every channel value by `factor`, clamping to `[0, 255]` and truncating.
///
/// Channel order is irrelevant here, so the display image is used directly.
pub fn contrast(image: &DisplayImage, factor: f32) -> Result<DisplayImage, ImageError> {
    Ok(match image {
        DisplayImage::Rgb8(rgb) => DisplayImage::Rgb8(contrast_with(rgb, factor)?),
        DisplayImage::Gray8(gray) => DisplayImage::Gray8(contrast_with(gray, factor)?),
    })
}
