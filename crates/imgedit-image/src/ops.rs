use crate::{Image, ImageDtype, ImageError};

/// Convert a float image into `T`, rounding and saturating each value.
///
/// For `u8` this maps every value to `round(v)` clamped to `[0, 255]`.
///
/// # Arguments
///
/// * `src` - The source float image.
/// * `dst` - The destination image.
pub fn saturate_cast<T, const C: usize>(
    src: &Image<f32, C>,
    dst: &mut Image<T, C>,
) -> Result<(), ImageError>
where
    T: ImageDtype,
{
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.width(),
            src.height(),
            dst.width(),
            dst.height(),
        ));
    }

    dst.as_slice_mut()
        .iter_mut()
        .zip(src.as_slice().iter())
        .for_each(|(out, &inp)| *out = T::from_f32(inp));

    Ok(())
}
