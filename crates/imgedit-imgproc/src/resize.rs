use crate::interpolation::{grid::meshgrid_from_fn, remap, InterpolationMode};
use imgedit_image::{ops, Image, ImageError, ImageSize};

/// Compute the size of an image scaled by `factor` on both axes.
///
/// Each side is rounded to the nearest integer.
///
/// # Example
///
/// ```
/// use imgedit_image::ImageSize;
/// use imgedit_imgproc::resize::scaled_size;
///
/// let size = scaled_size(ImageSize { width: 100, height: 50 }, 1.5);
/// assert_eq!(size, ImageSize { width: 150, height: 75 });
/// ```
pub fn scaled_size(size: ImageSize, factor: f32) -> ImageSize {
    ImageSize {
        width: (size.width as f64 * factor as f64).round() as usize,
        height: (size.height as f64 * factor as f64).round() as usize,
    }
}

/// Resize an image to the size of `dst`.
///
/// Destination pixel centers are mapped onto the source grid, i.e.
/// `u = (x + 0.5) * src_width / dst_width - 0.5`, and the source is sampled
/// with the given interpolation mode. Samples are clamped to the image borders.
///
/// # Arguments
///
/// * `src` - The input image container.
/// * `dst` - The output image container.
/// * `interpolation` - The interpolation mode to use.
///
/// # Example
///
/// ```
/// use imgedit_image::{Image, ImageSize};
/// use imgedit_imgproc::resize::resize_native;
/// use imgedit_imgproc::interpolation::InterpolationMode;
///
/// let image = Image::<_, 3>::new(
///     ImageSize {
///         width: 4,
///         height: 5,
///     },
///     vec![0f32; 4 * 5 * 3],
/// )
/// .unwrap();
///
/// let new_size = ImageSize {
///     width: 2,
///     height: 3,
/// };
///
/// let mut image_resized = Image::<_, 3>::from_size_val(new_size, 0.0).unwrap();
///
/// resize_native(&image, &mut image_resized, InterpolationMode::Nearest).unwrap();
///
/// assert_eq!(image_resized.num_channels(), 3);
/// assert_eq!(image_resized.size().width, 2);
/// assert_eq!(image_resized.size().height, 3);
/// ```
pub fn resize_native<const C: usize>(
    src: &Image<f32, C>,
    dst: &mut Image<f32, C>,
    interpolation: InterpolationMode,
) -> Result<(), ImageError> {
    if src.width() == 0 || src.height() == 0 || dst.width() == 0 || dst.height() == 0 {
        return Err(ImageError::InvalidImageSize(
            src.width(),
            src.height(),
            dst.width(),
            dst.height(),
        ));
    }

    let ratio_x = src.width() as f32 / dst.width() as f32;
    let ratio_y = src.height() as f32 / dst.height() as f32;

    // create a grid of x and y coordinates for the output image
    let (map_x, map_y) = meshgrid_from_fn(dst.width(), dst.height(), |x, y| {
        let u = ((x as f32 + 0.5) * ratio_x - 0.5).max(0.0);
        let v = ((y as f32 + 0.5) * ratio_y - 0.5).max(0.0);
        Ok((u, v))
    })?;

    remap(src, dst, &map_x, &map_y, interpolation)
}

/// Resize an 8-bit image to the size of `dst`.
///
/// Interpolation runs in float; results are rounded back to `u8`.
pub fn resize_u8<const C: usize>(
    src: &Image<u8, C>,
    dst: &mut Image<u8, C>,
    interpolation: InterpolationMode,
) -> Result<(), ImageError> {
    let src_f32 = src.cast::<f32>()?;
    let mut dst_f32 = Image::<f32, C>::from_size_val(dst.size(), 0.0)?;

    resize_native(&src_f32, &mut dst_f32, interpolation)?;

    ops::saturate_cast(&dst_f32, dst)
}
