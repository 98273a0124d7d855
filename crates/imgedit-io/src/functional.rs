use std::path::Path;

use image::{ExtendedColorType, ImageFormat};
use imgedit_image::{Image, ImageSize};

use crate::error::IoError;

/// Read and decode the file, guessing the format from its content.
fn decode_any(file_path: &Path) -> Result<image::DynamicImage, IoError> {
    // verify the file exists
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    let bytes = std::fs::read(file_path)?;

    let img = image::ImageReader::new(std::io::Cursor::new(bytes))
        .with_guessed_format()?
        .decode()?;

    Ok(img)
}

/// Reads an image from the given file path as RGB8.
///
/// The method reads any image format supported by the image crate and converts
/// it to three 8-bit channels. Alpha channels are dropped and grayscale images
/// are expanded.
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
///
/// # Returns
///
/// An image with three channels (rgb8).
pub fn read_image_any_rgb8(file_path: impl AsRef<Path>) -> Result<Image<u8, 3>, IoError> {
    let img = decode_any(file_path.as_ref())?;

    let size = ImageSize {
        width: img.width() as usize,
        height: img.height() as usize,
    };

    Ok(Image::new(size, img.into_rgb8().into_raw())?)
}

/// Reads an image from the given file path as a single 8-bit channel.
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
///
/// # Returns
///
/// A grayscale image with a single channel (mono8).
pub fn read_image_any_mono8(file_path: impl AsRef<Path>) -> Result<Image<u8, 1>, IoError> {
    let img = decode_any(file_path.as_ref())?;

    let size = ImageSize {
        width: img.width() as usize,
        height: img.height() as usize,
    };

    Ok(Image::new(size, img.into_luma8().into_raw())?)
}

/// Resolve the output format from the file extension (png, jpg or jpeg).
fn format_from_path(file_path: &Path) -> Result<ImageFormat, IoError> {
    match ImageFormat::from_path(file_path) {
        Ok(format @ (ImageFormat::Png | ImageFormat::Jpeg)) => Ok(format),
        _ => Err(IoError::InvalidFileExtension(file_path.to_path_buf())),
    }
}

fn write_impl<const C: usize>(
    file_path: &Path,
    image: &Image<u8, C>,
    color: ExtendedColorType,
) -> Result<(), IoError> {
    let format = format_from_path(file_path)?;

    image::save_buffer_with_format(
        file_path,
        image.as_slice(),
        image.width() as u32,
        image.height() as u32,
        color,
        format,
    )?;

    Ok(())
}

/// Writes an RGB8 image to the given file path.
///
/// The encoding (PNG or JPEG) is chosen from the file extension.
///
/// # Arguments
///
/// * `file_path` - The path to the output file.
/// * `image` - The image to encode.
pub fn write_image_rgb8(file_path: impl AsRef<Path>, image: &Image<u8, 3>) -> Result<(), IoError> {
    write_impl(file_path.as_ref(), image, ExtendedColorType::Rgb8)
}

/// Writes a single channel 8-bit image to the given file path.
///
/// The encoding (PNG or JPEG) is chosen from the file extension.
///
/// # Arguments
///
/// * `file_path` - The path to the output file.
/// * `image` - The image to encode.
pub fn write_image_mono8(file_path: impl AsRef<Path>, image: &Image<u8, 1>) -> Result<(), IoError> {
    write_impl(file_path.as_ref(), image, ExtendedColorType::L8)
}
