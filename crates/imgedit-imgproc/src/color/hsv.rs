use crate::parallel;
use imgedit_image::{Image, ImageError};

/// Convert a BGR8 image to an 8-bit HSV image.
///
/// The channels of the output image are:
///
/// * H: The hue channel in the range [0, 180) (degrees divided by two).
/// * S: The saturation channel in the range [0, 255].
/// * V: The value channel in the range [0, 255].
///
/// # Arguments
///
/// * `src` - The input BGR image.
/// * `dst` - The output HSV image.
///
/// Precondition: the input and output images must have the same size.
///
/// # Example
///
/// ```
/// use imgedit_image::{Image, ImageSize};
/// use imgedit_imgproc::color::hsv_from_bgr_u8;
///
/// // a single pure green pixel
/// let image = Image::<u8, 3>::new(
///     ImageSize {
///         width: 1,
///         height: 1,
///     },
///     vec![0, 255, 0],
/// )
/// .unwrap();
///
/// let mut hsv = Image::<u8, 3>::from_size_val(image.size(), 0).unwrap();
///
/// hsv_from_bgr_u8(&image, &mut hsv).unwrap();
/// assert_eq!(hsv.as_slice(), &[60, 255, 255]);
/// ```
pub fn hsv_from_bgr_u8(src: &Image<u8, 3>, dst: &mut Image<u8, 3>) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    parallel::par_iter_rows(src, dst, |src_pixel, dst_pixel| {
        let b = src_pixel[0] as f32;
        let g = src_pixel[1] as f32;
        let r = src_pixel[2] as f32;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let h = if delta == 0.0 {
            0.0
        } else if max == r {
            60.0 * (g - b) / delta
        } else if max == g {
            120.0 + 60.0 * (b - r) / delta
        } else {
            240.0 + 60.0 * (r - g) / delta
        };

        // ensure h is in the range [0, 360)
        let h = if h < 0.0 { h + 360.0 } else { h };

        let s = if max == 0.0 {
            0.0
        } else {
            delta * 255.0 / max
        };

        dst_pixel[0] = ((h / 2.0).round() as u32 % 180) as u8;
        dst_pixel[1] = s.round() as u8;
        dst_pixel[2] = max as u8;
    });

    Ok(())
}

/// Convert an 8-bit HSV image (hue in [0, 180)) to RGB8.
///
/// # Arguments
///
/// * `src` - The input HSV image.
/// * `dst` - The output RGB image.
///
/// Precondition: the input and output images must have the same size.
pub fn rgb_from_hsv_u8(src: &Image<u8, 3>, dst: &mut Image<u8, 3>) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    parallel::par_iter_rows(src, dst, |src_pixel, dst_pixel| {
        let h = src_pixel[0] as f32 * 2.0;
        let s = src_pixel[1] as f32 / 255.0;
        let v = src_pixel[2] as f32 / 255.0;

        let (r, g, b) = if s == 0.0 {
            (v, v, v)
        } else {
            let h = h / 60.0;
            let sector = h.floor();
            let frac = h - sector;

            let p = v * (1.0 - s);
            let q = v * (1.0 - s * frac);
            let t = v * (1.0 - s * (1.0 - frac));

            match (sector as i32).rem_euclid(6) {
                0 => (v, t, p),
                1 => (q, v, p),
                2 => (p, v, t),
                3 => (p, q, v),
                4 => (t, p, v),
                _ => (v, p, q),
            }
        };

        dst_pixel[0] = (r * 255.0).round().clamp(0.0, 255.0) as u8;
        dst_pixel[1] = (g * 255.0).round().clamp(0.0, 255.0) as u8;
        dst_pixel[2] = (b * 255.0).round().clamp(0.0, 255.0) as u8;
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use imgedit_image::{Image, ImageError, ImageSize};

    #[test]
    fn hsv_from_bgr_u8() -> Result<(), ImageError> {
        // red, green, blue and mid gray in BGR order
        let image = Image::<u8, 3>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![0, 0, 255, 0, 255, 0, 255, 0, 0, 128, 128, 128],
        )?;

        let mut hsv = Image::<u8, 3>::from_size_val(image.size(), 0)?;
        super::hsv_from_bgr_u8(&image, &mut hsv)?;

        assert_eq!(
            hsv.as_slice(),
            &[0, 255, 255, 60, 255, 255, 120, 255, 255, 0, 0, 128]
        );

        Ok(())
    }

    #[test]
    fn hsv_hue_wraps() -> Result<(), ImageError> {
        // R=255, G=0, B=1 sits just below 360 degrees
        let image = Image::<u8, 3>::new(
            ImageSize {
                width: 1,
                height: 1,
            },
            vec![1, 0, 255],
        )?;

        let mut hsv = Image::<u8, 3>::from_size_val(image.size(), 0)?;
        super::hsv_from_bgr_u8(&image, &mut hsv)?;

        assert_eq!(hsv.as_slice()[0], 0);

        Ok(())
    }

    #[test]
    fn rgb_from_hsv_u8() -> Result<(), ImageError> {
        let hsv = Image::<u8, 3>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![0, 255, 255, 60, 255, 255, 120, 255, 255, 0, 0, 128],
        )?;

        let mut rgb = Image::<u8, 3>::from_size_val(hsv.size(), 0)?;
        super::rgb_from_hsv_u8(&hsv, &mut rgb)?;

        assert_eq!(
            rgb.as_slice(),
            &[255, 0, 0, 0, 255, 0, 0, 0, 255, 128, 128, 128]
        );

        Ok(())
    }

    #[test]
    fn hsv_roundtrip_is_close() -> Result<(), ImageError> {
        let bgr = Image::<u8, 3>::new(
            ImageSize {
                width: 3,
                height: 1,
            },
            vec![30, 100, 200, 10, 240, 90, 180, 60, 20],
        )?;

        let mut hsv = Image::<u8, 3>::from_size_val(bgr.size(), 0)?;
        super::hsv_from_bgr_u8(&bgr, &mut hsv)?;

        let mut rgb = Image::<u8, 3>::from_size_val(bgr.size(), 0)?;
        super::rgb_from_hsv_u8(&hsv, &mut rgb)?;

        // hue is quantized to two degrees
        for (rgb_pixel, bgr_pixel) in rgb
            .as_slice()
            .chunks_exact(3)
            .zip(bgr.as_slice().chunks_exact(3))
        {
            for (a, b) in rgb_pixel.iter().zip(bgr_pixel.iter().rev()) {
                assert!((*a as i32 - *b as i32).abs() <= 4, "{a} vs {b}");
            }
        }

        Ok(())
    }
}
