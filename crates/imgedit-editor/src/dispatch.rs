use crate::codec::{to_display_format, to_processing_format, DisplayImage};
use crate::error::EditorError;
use crate::locale::Locale;
use crate::request::{OperationRequest, OperationResult, SubOption};
use crate::transforms;

/// Run the operation selected by `request` on `image`, describing it in English.
///
/// See [`dispatch_localized`].
pub fn dispatch(
    image: &DisplayImage,
    request: &OperationRequest,
) -> Result<OperationResult, EditorError> {
    dispatch_localized(image, request, Locale::English)
}

/// Run the operation selected by `request` on `image`.
///
/// At most one transformation runs. When the request carries no category, no
/// sub-option, or a sub-option from another category, the input image is
/// returned unchanged together with the locale's "no operation" text.
///
/// # Errors
///
/// Returns [`EditorError::InvalidParameter`] when a parameter read by the
/// selected operation is not finite, when `scale` or `gamma` is not strictly
/// positive, or when the scaled image would be empty or too large.
///
/// # Example
///
/// ```
/// use imgedit_editor::{dispatch, Category, DisplayImage, OperationParams, OperationRequest, SubOption};
/// use imgedit_image::{Image, ImageSize};
///
/// let image = DisplayImage::Rgb8(
///     Image::<u8, 3>::from_size_val(ImageSize { width: 4, height: 3 }, 128).unwrap(),
/// );
/// let request = OperationRequest::new(
///     Category::ColorOperation,
///     SubOption::RgbToGrayscale,
///     OperationParams::default(),
/// );
///
/// let result = dispatch(&image, &request).unwrap();
/// assert_eq!(result.image.num_channels(), 1);
/// assert_eq!(result.description, "ColorOperation - RGB to Grayscale");
/// ```
pub fn dispatch_localized(
    image: &DisplayImage,
    request: &OperationRequest,
    locale: Locale,
) -> Result<OperationResult, EditorError> {
    let Some((category, sub_option)) = request.selection() else {
        log::debug!(
            "no operation for category {:?} and sub-option {:?}",
            request.category,
            request.sub_option
        );
        return Ok(OperationResult {
            image: image.clone(),
            description: locale.no_operation().to_string(),
        });
    };

    let params = &request.params;
    params.validate_for(sub_option)?;

    log::debug!(
        "dispatching {:?} / {:?} on a {}x{} image with {} channel(s)",
        category,
        sub_option,
        image.size().width,
        image.size().height,
        image.num_channels()
    );

    let output = match sub_option {
        SubOption::ContrastAdjust => transforms::contrast(image, params.contrast)?,
        SubOption::RgbToHsv => transforms::hsv_roundtrip(&to_processing_format(image)?)?,
        _ => {
            let processing = to_processing_format(image)?;
            let processed = match sub_option {
                SubOption::RgbToGrayscale => transforms::grayscale(&processing)?,
                SubOption::Translation => {
                    transforms::translate(&processing, params.dx, params.dy)?
                }
                SubOption::Rotation => transforms::rotate(&processing, params.angle)?,
                SubOption::Scale => transforms::scale(&processing, params.scale)?,
                SubOption::GammaControl => transforms::gamma(&processing, params.gamma)?,
                SubOption::ContrastAdjust | SubOption::RgbToHsv => processing,
            };
            to_display_format(&processed)?
        }
    };

    Ok(OperationResult {
        image: output,
        description: locale.describe(category, sub_option, params.gamma),
    })
}
