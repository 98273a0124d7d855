//! Bridges between the channel ordering shown to the user and the one the
//! processing primitives work on.
//!
//! The display layer holds RGB images, the processing layer holds BGR images.
//! Single channel images are the same in both layers, and the adapter keeps
//! them single channel in both directions.

use imgedit_image::{Image, ImageError, ImageSize};
use imgedit_imgproc::color;

/// An image in the representation consumed by the display layer.
#[derive(Clone, Debug, PartialEq)]
pub enum DisplayImage {
    /// 8-bit RGB image
    Rgb8(Image<u8, 3>),
    /// 8-bit grayscale image
    Gray8(Image<u8, 1>),
}

/// An image in the representation consumed by the processing primitives.
#[derive(Clone, Debug, PartialEq)]
pub enum ProcessingImage {
    /// 8-bit BGR image
    Bgr8(Image<u8, 3>),
    /// 8-bit grayscale image
    Gray8(Image<u8, 1>),
}

impl DisplayImage {
    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        match self {
            DisplayImage::Rgb8(image) => image.size(),
            DisplayImage::Gray8(image) => image.size(),
        }
    }

    /// Get the number of channels in the image.
    pub fn num_channels(&self) -> usize {
        match self {
            DisplayImage::Rgb8(image) => image.num_channels(),
            DisplayImage::Gray8(image) => image.num_channels(),
        }
    }

    /// Borrow the raw pixel buffer.
    pub fn as_slice(&self) -> &[u8] {
        match self {
            DisplayImage::Rgb8(image) => image.as_slice(),
            DisplayImage::Gray8(image) => image.as_slice(),
        }
    }
}

impl ProcessingImage {
    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        match self {
            ProcessingImage::Bgr8(image) => image.size(),
            ProcessingImage::Gray8(image) => image.size(),
        }
    }

    /// Get the number of channels in the image.
    pub fn num_channels(&self) -> usize {
        match self {
            ProcessingImage::Bgr8(image) => image.num_channels(),
            ProcessingImage::Gray8(image) => image.num_channels(),
        }
    }
}

impl From<Image<u8, 3>> for DisplayImage {
    fn from(image: Image<u8, 3>) -> Self {
        DisplayImage::Rgb8(image)
    }
}

impl From<Image<u8, 1>> for DisplayImage {
    fn from(image: Image<u8, 1>) -> Self {
        DisplayImage::Gray8(image)
    }
}

/// Convert a display image into the processing representation.
///
/// RGB images have their red and blue channels swapped; grayscale images are copied.
///
/// # Example
///
/// ```
/// use imgedit_editor::codec::{to_processing_format, DisplayImage, ProcessingImage};
/// use imgedit_image::{Image, ImageSize};
///
/// let rgb = Image::<u8, 3>::new(ImageSize { width: 1, height: 1 }, vec![1, 2, 3]).unwrap();
///
/// let processing = to_processing_format(&DisplayImage::Rgb8(rgb)).unwrap();
/// match processing {
///     ProcessingImage::Bgr8(bgr) => assert_eq!(bgr.as_slice(), &[3, 2, 1]),
///     ProcessingImage::Gray8(_) => unreachable!(),
/// }
/// ```
pub fn to_processing_format(image: &DisplayImage) -> Result<ProcessingImage, ImageError> {
    Ok(match image {
        DisplayImage::Rgb8(rgb) => {
            let mut bgr = Image::from_size_val(rgb.size(), 0u8)?;
            color::bgr_from_rgb(rgb, &mut bgr)?;
            ProcessingImage::Bgr8(bgr)
        }
        DisplayImage::Gray8(gray) => ProcessingImage::Gray8(gray.clone()),
    })
}

/// Convert a processing image back into the display representation.
///
/// BGR images have their blue and red channels swapped; single channel
/// results stay single channel.
pub fn to_display_format(image: &ProcessingImage) -> Result<DisplayImage, ImageError> {
    Ok(match image {
        ProcessingImage::Bgr8(bgr) => {
            let mut rgb = Image::from_size_val(bgr.size(), 0u8)?;
            color::rgb_from_bgr(bgr, &mut rgb)?;
            DisplayImage::Rgb8(rgb)
        }
        ProcessingImage::Gray8(gray) => DisplayImage::Gray8(gray.clone()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_rgb() -> Result<(), ImageError> {
        let rgb = Image::<u8, 3>::new(
            ImageSize {
                width: 2,
                height: 1,
            },
            vec![10, 20, 30, 40, 50, 60],
        )?;
        let display = DisplayImage::Rgb8(rgb);

        let processing = to_processing_format(&display)?;
        assert_eq!(processing.num_channels(), 3);
        assert!(matches!(
            &processing,
            ProcessingImage::Bgr8(bgr) if bgr.as_slice() == [30, 20, 10, 60, 50, 40]
        ));

        assert_eq!(to_display_format(&processing)?, display);

        Ok(())
    }

    #[test]
    fn gray_stays_single_channel() -> Result<(), ImageError> {
        let gray = Image::<u8, 1>::new(
            ImageSize {
                width: 3,
                height: 1,
            },
            vec![1, 2, 3],
        )?;

        let processing = to_processing_format(&DisplayImage::Gray8(gray.clone()))?;
        assert_eq!(processing, ProcessingImage::Gray8(gray.clone()));

        let display = to_display_format(&processing)?;
        assert_eq!(display.num_channels(), 1);
        assert_eq!(display, DisplayImage::Gray8(gray));

        Ok(())
    }
}
