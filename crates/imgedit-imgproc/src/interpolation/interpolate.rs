use super::bilinear::{bilinear_interpolation, bilinear_interpolation_zero_border};
use super::nearest::{
    nearest_neighbor_interpolation, nearest_neighbor_interpolation_zero_border,
};
use imgedit_image::Image;

/// Interpolation mode for the resampling operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InterpolationMode {
    /// Bilinear interpolation
    #[default]
    Bilinear,
    /// Nearest neighbor interpolation
    Nearest,
}

/// Kernel for interpolating a pixel value
///
/// # Arguments
///
/// * `image` - The input image container with shape (height, width, C).
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
/// * `interpolation` - The interpolation mode to use.
///
/// # Returns
///
/// The interpolated values of every channel.
pub fn interpolate_pixel<const C: usize>(
    image: &Image<f32, C>,
    u: f32,
    v: f32,
    interpolation: InterpolationMode,
) -> [f32; C] {
    match interpolation {
        InterpolationMode::Bilinear => bilinear_interpolation(image, u, v),
        InterpolationMode::Nearest => nearest_neighbor_interpolation(image, u, v),
    }
}

/// Kernel for interpolating a pixel value where everything outside the image is zero.
///
/// Used by the warps, which fill pixels mapped outside of the source with black.
pub(crate) fn interpolate_pixel_zero_border<const C: usize>(
    image: &Image<f32, C>,
    u: f32,
    v: f32,
    interpolation: InterpolationMode,
) -> [f32; C] {
    match interpolation {
        InterpolationMode::Bilinear => bilinear_interpolation_zero_border(image, u, v),
        InterpolationMode::Nearest => nearest_neighbor_interpolation_zero_border(image, u, v),
    }
}
