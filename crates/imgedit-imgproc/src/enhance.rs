use imgedit_image::{Image, ImageError};

use crate::parallel;

/// Scale the contrast of an 8-bit image.
///
/// The formula used is:
///
/// dst(x,y,c) = trunc(clamp(src(x,y,c) * factor, 0, 255))
///
/// # Arguments
///
/// * `src` - The input image.
/// * `factor` - The multiplicative contrast factor.
/// * `dst` - The output image.
///
/// # Errors
///
/// Returns an error if the sizes of `src` and `dst` do not match.
///
/// # Example
///
/// ```
/// use imgedit_image::{Image, ImageSize};
/// use imgedit_imgproc::enhance::adjust_contrast_u8;
///
/// let image = Image::<u8, 1>::new(
///     ImageSize {
///         width: 3,
///         height: 1,
///     },
///     vec![10, 100, 200],
/// )
/// .unwrap();
///
/// let mut out = Image::<u8, 1>::from_size_val(image.size(), 0).unwrap();
/// adjust_contrast_u8(&image, 1.5, &mut out).unwrap();
///
/// assert_eq!(out.as_slice(), &[15, 150, 255]);
/// ```
pub fn adjust_contrast_u8<const C: usize>(
    src: &Image<u8, C>,
    factor: f32,
    dst: &mut Image<u8, C>,
) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.width(),
            src.height(),
            dst.width(),
            dst.height(),
        ));
    }

    parallel::par_iter_rows_val(src, dst, |&src_pixel, dst_pixel| {
        *dst_pixel = (src_pixel as f32 * factor).clamp(0.0, 255.0) as u8;
    });

    Ok(())
}

/// Build the 256-entry lookup table of a power-law (gamma) correction.
///
/// Every entry is `trunc(255 * (i / 255) ^ (1 / gamma))`.
///
/// The caller is responsible for passing a finite, strictly positive `gamma`.
///
/// # Example
///
/// ```
/// use imgedit_imgproc::enhance::gamma_lut;
///
/// let lut = gamma_lut(1.0);
/// assert!(lut.iter().enumerate().all(|(i, &v)| v as usize == i));
/// ```
pub fn gamma_lut(gamma: f32) -> [u8; 256] {
    let inv_gamma = 1.0 / gamma as f64;

    let mut lut = [0u8; 256];
    for (i, entry) in lut.iter_mut().enumerate() {
        *entry = ((i as f64 / 255.0).powf(inv_gamma) * 255.0) as u8;
    }

    lut
}

/// Apply a lookup table element-wise to every channel of an 8-bit image.
///
/// # Arguments
///
/// * `src` - The input image.
/// * `dst` - The output image.
/// * `lut` - The table mapping an input intensity to an output intensity.
///
/// # Errors
///
/// Returns an error if the sizes of `src` and `dst` do not match.
pub fn apply_lut<const C: usize>(
    src: &Image<u8, C>,
    dst: &mut Image<u8, C>,
    lut: &[u8; 256],
) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.width(),
            src.height(),
            dst.width(),
            dst.height(),
        ));
    }

    parallel::par_iter_rows_val(src, dst, |&src_pixel, dst_pixel| {
        *dst_pixel = lut[src_pixel as usize];
    });

    Ok(())
}

/// Apply a power-law (gamma) correction to an 8-bit image.
///
/// The lookup table is computed once per call with [`gamma_lut`] and applied with [`apply_lut`].
pub fn adjust_gamma_u8<const C: usize>(
    src: &Image<u8, C>,
    gamma: f32,
    dst: &mut Image<u8, C>,
) -> Result<(), ImageError> {
    let lut = gamma_lut(gamma);
    apply_lut(src, dst, &lut)
}

#[cfg(test)]
mod tests {
    use imgedit_image::{Image, ImageError, ImageSize};
    use rand::Rng;

    #[test]
    fn test_adjust_contrast() -> Result<(), ImageError> {
        let src = Image::<u8, 1>::new(
            ImageSize {
                width: 4,
                height: 1,
            },
            vec![0, 51, 101, 255],
        )?;

        let mut dst = Image::<u8, 1>::from_size_val(src.size(), 0)?;

        // 101 * 0.5 = 50.5 truncates to 50
        super::adjust_contrast_u8(&src, 0.5, &mut dst)?;
        assert_eq!(dst.as_slice(), &[0, 25, 50, 127]);

        super::adjust_contrast_u8(&src, 3.0, &mut dst)?;
        assert_eq!(dst.as_slice(), &[0, 153, 255, 255]);

        super::adjust_contrast_u8(&src, 1.0, &mut dst)?;
        assert_eq!(dst, src);

        Ok(())
    }

    #[test]
    fn test_gamma_lut() {
        let lut = super::gamma_lut(2.0);
        assert_eq!(lut[0], 0);
        assert_eq!(lut[255], 255);
        // sqrt(64 / 255) * 255 = 127.74...
        assert_eq!(lut[64], 127);
        assert!(lut.windows(2).all(|w| w[0] <= w[1]));

        let lut = super::gamma_lut(0.5);
        // (128 / 255)^2 * 255 = 64.25...
        assert_eq!(lut[128], 64);
    }

    #[test]
    fn test_adjust_gamma_identity() -> Result<(), ImageError> {
        let mut rng = rand::rng();
        let size = ImageSize {
            width: 8,
            height: 5,
        };
        let src = Image::<u8, 3>::new(
            size,
            (0..size.width * size.height * 3)
                .map(|_| rng.random::<u8>())
                .collect(),
        )?;

        let mut dst = Image::<u8, 3>::from_size_val(size, 0)?;
        super::adjust_gamma_u8(&src, 1.0, &mut dst)?;

        assert_eq!(dst, src);

        Ok(())
    }

    #[test]
    fn test_apply_lut_invert() -> Result<(), ImageError> {
        let mut lut = [0u8; 256];
        for (i, v) in lut.iter_mut().enumerate() {
            *v = 255 - i as u8;
        }

        let src = Image::<u8, 1>::new(
            ImageSize {
                width: 3,
                height: 1,
            },
            vec![0, 100, 255],
        )?;
        let mut dst = Image::<u8, 1>::from_size_val(src.size(), 0)?;
        super::apply_lut(&src, &mut dst, &lut)?;

        assert_eq!(dst.as_slice(), &[255, 155, 0]);

        Ok(())
    }
}
