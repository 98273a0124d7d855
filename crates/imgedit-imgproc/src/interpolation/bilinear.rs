use imgedit_image::Image;

/// Kernel for bilinear interpolation
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
pub(crate) fn bilinear_interpolation<const C: usize>(
    image: &Image<f32, C>,
    u: f32,
    v: f32,
) -> [f32; C] {
    let (rows, cols) = (image.rows(), image.cols());

    let iu0 = (u.trunc() as usize).min(cols - 1);
    let iv0 = (v.trunc() as usize).min(rows - 1);

    let frac_u = u.fract();
    let frac_v = v.fract();

    let frac_uu = 1.0 - frac_u;
    let frac_vv = 1.0 - frac_v;

    let w00 = frac_uu * frac_vv;
    let w01 = frac_u * frac_vv;
    let w10 = frac_uu * frac_v;
    let w11 = frac_u * frac_v;

    // the last row/column repeats at the border
    let iu1 = if iu0 + 1 < cols { iu0 + 1 } else { iu0 };
    let iv1 = if iv0 + 1 < rows { iv0 + 1 } else { iv0 };

    let base00 = (iv0 * cols + iu0) * C;
    let base01 = (iv0 * cols + iu1) * C;
    let base10 = (iv1 * cols + iu0) * C;
    let base11 = (iv1 * cols + iu1) * C;

    let data = image.as_slice();

    let p00 = &data[base00..base00 + C];
    let p01 = &data[base01..base01 + C];
    let p10 = &data[base10..base10 + C];
    let p11 = &data[base11..base11 + C];

    let mut pixel = [0.0; C];
    for k in 0..C {
        pixel[k] = p00[k] * w00 + p01[k] * w01 + p10[k] * w10 + p11[k] * w11;
    }

    pixel
}

/// Kernel for bilinear interpolation with a constant zero border.
///
/// Neighbours falling outside of the image contribute zero instead of
/// repeating the edge, so samples within one pixel of the border fade to black.
///
/// # Arguments
///
/// * `image` - The input image container.
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
///
/// # Returns
///
/// The interpolated pixel values, all zero when no neighbour lies inside the image.
pub(crate) fn bilinear_interpolation_zero_border<const C: usize>(
    image: &Image<f32, C>,
    u: f32,
    v: f32,
) -> [f32; C] {
    let (rows, cols) = (image.rows(), image.cols());
    let mut pixel = [0.0; C];

    let (u0, v0) = (u.floor(), v.floor());

    // also rejects NaN coordinates
    if !(u0 >= -1.0 && u0 < cols as f32 && v0 >= -1.0 && v0 < rows as f32) {
        return pixel;
    }

    let (iu0, iv0) = (u0 as isize, v0 as isize);
    let (frac_u, frac_v) = (u - u0, v - v0);

    let data = image.as_slice();

    for (iv, weight_v) in [(iv0, 1.0 - frac_v), (iv0 + 1, frac_v)] {
        if iv < 0 || iv as usize >= rows || weight_v == 0.0 {
            continue;
        }
        for (iu, weight_u) in [(iu0, 1.0 - frac_u), (iu0 + 1, frac_u)] {
            if iu < 0 || iu as usize >= cols || weight_u == 0.0 {
                continue;
            }
            let base = (iv as usize * cols + iu as usize) * C;
            let weight = weight_u * weight_v;
            for (p, &value) in pixel.iter_mut().zip(&data[base..base + C]) {
                *p += weight * value;
            }
        }
    }

    pixel
}
