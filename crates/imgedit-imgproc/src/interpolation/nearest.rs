use imgedit_image::Image;

/// Kernel for nearest neighbor interpolation
///
/// # Arguments
///
/// * `image` - The input image container.
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
///
/// # Returns
///
/// The interpolated pixel values.
pub(crate) fn nearest_neighbor_interpolation<const C: usize>(
    image: &Image<f32, C>,
    u: f32,
    v: f32,
) -> [f32; C] {
    let (rows, cols) = (image.rows(), image.cols());

    let iu = (u.round() as usize).min(cols - 1);
    let iv = (v.round() as usize).min(rows - 1);

    let base = (iv * cols + iu) * C;

    let mut pixel = [0.0; C];
    pixel.copy_from_slice(&image.as_slice()[base..base + C]);

    pixel
}

/// Kernel for nearest neighbor interpolation with a constant zero border.
///
/// Returns zeros when the rounded position falls outside of the image.
pub(crate) fn nearest_neighbor_interpolation_zero_border<const C: usize>(
    image: &Image<f32, C>,
    u: f32,
    v: f32,
) -> [f32; C] {
    let (iu, iv) = (u.round(), v.round());

    let mut pixel = [0.0; C];
    if !(iu >= 0.0 && iu < image.cols() as f32 && iv >= 0.0 && iv < image.rows() as f32) {
        return pixel;
    }

    let base = (iv as usize * image.cols() + iu as usize) * C;
    pixel.copy_from_slice(&image.as_slice()[base..base + C]);

    pixel
}
