use std::f32::consts::PI;

use imgedit_image::{ops, Image, ImageError};

use crate::interpolation::{
    grid::meshgrid_from_fn, interpolate::interpolate_pixel_zero_border, InterpolationMode,
};
use crate::parallel;

/// Inverts a 2x3 affine transformation matrix.
///
/// Arguments:
///
/// * `m` - The 2x3 affine transformation matrix.
///
/// Returns:
///
/// The inverted 2x3 affine transformation matrix.
pub fn invert_affine_transform(m: &[f32; 6]) -> [f32; 6] {
    let (a, b, c, d, e, f) = (m[0], m[1], m[2], m[3], m[4], m[5]);

    // a singular matrix maps everything to the origin
    let determinant = a * e - b * d;
    let inv_determinant = if determinant != 0.0 {
        1.0 / determinant
    } else {
        0.0
    };

    let new_a = e * inv_determinant;
    let new_b = -b * inv_determinant;
    let new_d = -d * inv_determinant;
    let new_e = a * inv_determinant;
    let new_c = -(new_a * c + new_b * f);
    let new_f = -(new_d * c + new_e * f);

    [new_a, new_b, new_c, new_d, new_e, new_f]
}

/// Returns a 2x3 rotation matrix for a 2D rotation around a center point.
///
/// The rotation matrix is defined as:
///
/// | alpha  beta  tx |
/// | -beta  alpha ty |
///
/// where:
///
/// alpha = scale * cos(angle)
/// beta = scale * sin(angle)
/// tx = (1 - alpha) * center.x - beta * center.y
/// ty = beta * center.x + (1 - alpha) * center.y
///
/// Positive angles rotate counter-clockwise with the origin at the top-left corner.
///
/// # Arguments
///
/// * `center` - The center point of the rotation.
/// * `angle` - The angle of rotation in degrees.
/// * `scale` - The scale factor.
///
/// # Example
///
/// ```
/// use imgedit_imgproc::warp::get_rotation_matrix2d;
///
/// let rotation_matrix = get_rotation_matrix2d((0.0, 0.0), 0.0, 1.0);
/// assert_eq!(rotation_matrix, [1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
/// ```
pub fn get_rotation_matrix2d(center: (f32, f32), angle: f32, scale: f32) -> [f32; 6] {
    let angle = angle * PI / 180.0f32;
    let alpha = scale * angle.cos();
    let beta = scale * angle.sin();

    let tx = (1.0 - alpha) * center.0 - beta * center.1;
    let ty = beta * center.0 + (1.0 - alpha) * center.1;

    [alpha, beta, tx, -beta, alpha, ty]
}

/// Returns a 2x3 matrix shifting points by `(dx, dy)`.
///
/// | 1 0 dx |
/// | 0 1 dy |
///
/// # Example
///
/// ```
/// use imgedit_imgproc::warp::get_translation_matrix2d;
///
/// let m = get_translation_matrix2d(10.0, -5.0);
/// assert_eq!(m, [1.0, 0.0, 10.0, 0.0, 1.0, -5.0]);
/// ```
pub fn get_translation_matrix2d(dx: f32, dy: f32) -> [f32; 6] {
    [1.0, 0.0, dx, 0.0, 1.0, dy]
}

/// Number of sub-pixel positions per pixel the warps resolve.
const SUBPIXEL_STEPS: f32 = 32.0;

/// Round a source coordinate to the nearest 1/32 of a pixel.
///
/// Removes the float noise of the inverse mapping, e.g. a rotation by 180
/// degrees lands on exact integers instead of `-1e-6`.
fn snap_to_subpixel(u: f32) -> f32 {
    (u * SUBPIXEL_STEPS).round() / SUBPIXEL_STEPS
}

/// Applies an affine transformation to a point.
fn transform_point(x: f32, y: f32, m: &[f32; 6]) -> (f32, f32) {
    let u = m[0] * x + m[1] * y + m[2];
    let v = m[3] * x + m[4] * y + m[5];
    (u, v)
}

/// Applies an affine transformation to an image.
///
/// Every destination pixel is sampled from `src` at the position given by the
/// inverse of `m`, resolved to 1/32 of a pixel. Pixels outside of `src` count
/// as zero: destination pixels that map outside are black and samples
/// straddling the border blend with black.
///
/// # Arguments
///
/// * `src` - The input image with shape (height, width, channels).
/// * `dst` - The output image with shape (new_height, new_width, channels).
/// * `m` - The 2x3 affine transformation matrix.
/// * `interpolation` - The interpolation mode to use.
///
/// # Example
///
/// ```
/// use imgedit_image::{Image, ImageSize};
/// use imgedit_imgproc::interpolation::InterpolationMode;
/// use imgedit_imgproc::warp::warp_affine;
///
/// let src = Image::<_, 3>::from_size_val(
///     ImageSize {
///         width: 4,
///         height: 5,
///     },
///     1f32,
/// )
/// .unwrap();
///
/// let m = [1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
///
/// let mut dst = Image::<_, 3>::from_size_val(src.size(), 0.0).unwrap();
///
/// warp_affine(&src, &mut dst, &m, InterpolationMode::Nearest).unwrap();
///
/// assert_eq!(dst.as_slice(), src.as_slice());
/// ```
pub fn warp_affine<const C: usize>(
    src: &Image<f32, C>,
    dst: &mut Image<f32, C>,
    m: &[f32; 6],
    interpolation: InterpolationMode,
) -> Result<(), ImageError> {
    // invert affine transform matrix to find corresponding positions in src from dst
    let m_inv = invert_affine_transform(m);

    // create meshgrid to find corresponding positions in dst from src
    let (dst_rows, dst_cols) = (dst.rows(), dst.cols());
    let (map_x, map_y) = meshgrid_from_fn(dst_cols, dst_rows, |x, y| {
        let (u, v) = transform_point(x as f32, y as f32, &m_inv);
        Ok((snap_to_subpixel(u), snap_to_subpixel(v)))
    })?;

    // apply affine transformation
    parallel::par_iter_rows_resample(dst, &map_x, &map_y, |&x, &y, dst_pixel| {
        dst_pixel.copy_from_slice(&interpolate_pixel_zero_border(src, x, y, interpolation));
    });

    Ok(())
}

/// Applies an affine transformation to an 8-bit image.
///
/// The output keeps the size of `dst`; values are interpolated in float and
/// rounded back to `u8`.
///
/// # Arguments
///
/// * `src` - The input image.
/// * `dst` - The output image.
/// * `m` - The 2x3 affine transformation matrix.
/// * `interpolation` - The interpolation mode to use.
pub fn warp_affine_u8<const C: usize>(
    src: &Image<u8, C>,
    dst: &mut Image<u8, C>,
    m: &[f32; 6],
    interpolation: InterpolationMode,
) -> Result<(), ImageError> {
    let src_f32 = src.cast::<f32>()?;
    let mut dst_f32 = Image::<f32, C>::from_size_val(dst.size(), 0.0)?;

    warp_affine(&src_f32, &mut dst_f32, m, interpolation)?;

    ops::saturate_cast(&dst_f32, dst)
}

#[cfg(test)]
mod tests {
    use imgedit_image::{Image, ImageError, ImageSize};

    use super::InterpolationMode;

    #[test]
    fn warp_affine_smoke_ch3() -> Result<(), ImageError> {
        let image = Image::<_, 3>::new(
            ImageSize {
                width: 4,
                height: 5,
            },
            vec![0f32; 4 * 5 * 3],
        )?;

        let new_size = ImageSize {
            width: 2,
            height: 3,
        };

        let mut image_transformed = Image::<_, 3>::from_size_val(new_size, 0.0)?;

        super::warp_affine(
            &image,
            &mut image_transformed,
            &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
            InterpolationMode::Bilinear,
        )?;

        assert_eq!(image_transformed.num_channels(), 3);
        assert_eq!(image_transformed.size().width, 2);
        assert_eq!(image_transformed.size().height, 3);

        Ok(())
    }

    #[test]
    fn warp_affine_correctness_identity() -> Result<(), ImageError> {
        let image = Image::<_, 1>::new(
            ImageSize {
                width: 4,
                height: 5,
            },
            (0..20).map(|x| x as f32).collect(),
        )?;

        let mut image_transformed = Image::<_, 1>::from_size_val(image.size(), 0.0)?;

        super::warp_affine(
            &image,
            &mut image_transformed,
            &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
            InterpolationMode::Nearest,
        )?;

        assert_eq!(image_transformed.as_slice(), image.as_slice());
        assert_eq!(image_transformed.size(), image.size());

        Ok(())
    }

    #[test]
    fn warp_affine_correctness_rot90() -> Result<(), ImageError> {
        let image = Image::<_, 1>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![0.0f32, 1.0f32, 2.0f32, 3.0f32],
        )?;

        let mut image_transformed = Image::<_, 1>::from_size_val(image.size(), 0.0)?;

        super::warp_affine(
            &image,
            &mut image_transformed,
            &super::get_rotation_matrix2d((0.5, 0.5), 90.0, 1.0),
            InterpolationMode::Nearest,
        )?;

        assert_eq!(
            image_transformed.as_slice(),
            &[1.0f32, 3.0f32, 0.0f32, 2.0f32]
        );

        Ok(())
    }

    #[test]
    fn warp_affine_translation_fills_black() -> Result<(), ImageError> {
        let size = ImageSize {
            width: 3,
            height: 2,
        };
        let image = Image::<u8, 1>::new(size, vec![1, 2, 3, 4, 5, 6])?;
        // stale values in dst must not leak into the revealed border
        let mut shifted = Image::<u8, 1>::from_size_val(size, 99)?;

        super::warp_affine_u8(
            &image,
            &mut shifted,
            &super::get_translation_matrix2d(1.0, 1.0),
            InterpolationMode::Bilinear,
        )?;

        assert_eq!(shifted.as_slice(), &[0, 0, 0, 0, 1, 2]);

        Ok(())
    }

    fn rotate_u8(size: ImageSize, angle: f32) -> Result<Vec<u8>, ImageError> {
        let image = Image::<u8, 1>::new(
            size,
            (1..=size.width * size.height).map(|v| v as u8).collect(),
        )?;
        let mut rotated = Image::<u8, 1>::from_size_val(size, 0)?;

        let center = ((size.width / 2) as f32, (size.height / 2) as f32);
        super::warp_affine_u8(
            &image,
            &mut rotated,
            &super::get_rotation_matrix2d(center, angle, 1.0),
            InterpolationMode::Bilinear,
        )?;

        Ok(rotated.as_slice().to_vec())
    }

    #[test]
    fn warp_affine_rot180_odd_size() -> Result<(), ImageError> {
        // the center (2, 2) maps every pixel onto another pixel of the grid
        let rotated = rotate_u8([5, 5].into(), 180.0)?;
        let expected: Vec<u8> = (1..=25).rev().collect();
        assert_eq!(rotated, expected);
        Ok(())
    }

    #[test]
    fn warp_affine_rot90_even_size() -> Result<(), ImageError> {
        // dst(x, y) = src(4 - y, x): the first row reads the missing column 4
        let rotated = rotate_u8([4, 4].into(), 90.0)?;
        assert_eq!(
            rotated,
            vec![0, 0, 0, 0, 4, 8, 12, 16, 3, 7, 11, 15, 2, 6, 10, 14]
        );
        Ok(())
    }

    #[test]
    fn warp_affine_rot270_odd_width() -> Result<(), ImageError> {
        let rotated = rotate_u8([5, 3].into(), 270.0)?;
        assert_eq!(rotated, vec![0, 12, 7, 2, 0, 0, 13, 8, 3, 0, 0, 14, 9, 4, 0]);
        Ok(())
    }

    #[test]
    fn warp_affine_half_pixel_blends_border() -> Result<(), ImageError> {
        let image = Image::<f32, 1>::new([2, 1].into(), vec![10.0, 20.0])?;
        let mut shifted = Image::<f32, 1>::from_size_val(image.size(), 0.0)?;

        super::warp_affine(
            &image,
            &mut shifted,
            &super::get_translation_matrix2d(0.5, 0.0),
            InterpolationMode::Bilinear,
        )?;

        assert_eq!(shifted.as_slice(), &[5.0, 15.0]);
        Ok(())
    }

    #[test]
    fn invert_affine_transform_roundtrip() {
        let m = super::get_rotation_matrix2d((3.0, 2.0), 30.0, 2.0);
        let m_inv = super::invert_affine_transform(&m);

        let (u, v) = super::transform_point(5.0, 7.0, &m);
        let (x, y) = super::transform_point(u, v, &m_inv);

        approx::assert_relative_eq!(x, 5.0, epsilon = 1e-4);
        approx::assert_relative_eq!(y, 7.0, epsilon = 1e-4);
    }

    #[test]
    fn invert_affine_transform_singular() {
        let m_inv = super::invert_affine_transform(&[0.0, 0.0, 1.0, 0.0, 0.0, 1.0]);
        assert_eq!(m_inv, [0.0, 0.0, -0.0, 0.0, 0.0, -0.0]);
    }
}
