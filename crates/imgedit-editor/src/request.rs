use std::str::FromStr;

use crate::codec::DisplayImage;
use crate::controls::ParamKind;
use crate::error::EditorError;
use crate::locale::Locale;

/// The family of transformations picked first in the editor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Category {
    /// Translation, rotation and scaling.
    GeometricTransform,
    /// Color-space conversions and contrast.
    ColorOperation,
    /// Power-law intensity correction.
    GammaCorrection,
}

/// The concrete operation picked inside a [`Category`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum SubOption {
    /// Convert to a single channel grayscale image.
    RgbToGrayscale,
    /// Convert to HSV and back to three channels.
    RgbToHsv,
    /// Multiply every value by the contrast factor.
    ContrastAdjust,
    /// Shift by (dx, dy).
    Translation,
    /// Rotate about the image center.
    Rotation,
    /// Resize by a uniform factor.
    Scale,
    /// Apply a gamma lookup table.
    GammaControl,
}

impl Category {
    /// Every category, in the order the editor lists them.
    pub const ALL: [Category; 3] = [
        Category::GeometricTransform,
        Category::ColorOperation,
        Category::GammaCorrection,
    ];

    /// The sub-options a user may pick once this category is selected.
    pub fn sub_options(&self) -> &'static [SubOption] {
        match self {
            Category::ColorOperation => &[
                SubOption::RgbToGrayscale,
                SubOption::RgbToHsv,
                SubOption::ContrastAdjust,
            ],
            Category::GeometricTransform => &[
                SubOption::Translation,
                SubOption::Rotation,
                SubOption::Scale,
            ],
            Category::GammaCorrection => &[SubOption::GammaControl],
        }
    }

    /// Stable identifier used on the command line and in request files.
    pub fn id(&self) -> &'static str {
        match self {
            Category::GeometricTransform => "geometric-transform",
            Category::ColorOperation => "color-operation",
            Category::GammaCorrection => "gamma-correction",
        }
    }
}

impl SubOption {
    /// Every sub-option across all categories.
    pub const ALL: [SubOption; 7] = [
        SubOption::RgbToGrayscale,
        SubOption::RgbToHsv,
        SubOption::ContrastAdjust,
        SubOption::Translation,
        SubOption::Rotation,
        SubOption::Scale,
        SubOption::GammaControl,
    ];

    /// The category this sub-option belongs to.
    pub fn category(&self) -> Category {
        match self {
            SubOption::RgbToGrayscale | SubOption::RgbToHsv | SubOption::ContrastAdjust => {
                Category::ColorOperation
            }
            SubOption::Translation | SubOption::Rotation | SubOption::Scale => {
                Category::GeometricTransform
            }
            SubOption::GammaControl => Category::GammaCorrection,
        }
    }

    /// The parameter fields revealed when this sub-option is selected.
    pub fn parameters(&self) -> &'static [ParamKind] {
        match self {
            SubOption::RgbToGrayscale | SubOption::RgbToHsv => &[],
            SubOption::ContrastAdjust => &[ParamKind::Contrast],
            SubOption::Translation => &[ParamKind::Dx, ParamKind::Dy],
            SubOption::Rotation => &[ParamKind::Angle],
            SubOption::Scale => &[ParamKind::Scale],
            SubOption::GammaControl => &[ParamKind::Gamma],
        }
    }

    /// Stable identifier used on the command line and in request files.
    pub fn id(&self) -> &'static str {
        match self {
            SubOption::RgbToGrayscale => "rgb-to-grayscale",
            SubOption::RgbToHsv => "rgb-to-hsv",
            SubOption::ContrastAdjust => "contrast-adjust",
            SubOption::Translation => "translation",
            SubOption::Rotation => "rotation",
            SubOption::Scale => "scale",
            SubOption::GammaControl => "gamma-control",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(Locale::English.category_label(*self))
    }
}

impl std::fmt::Display for SubOption {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(Locale::English.sub_option_label(*self))
    }
}

/// Lowercase and drop separators so "Geometric Transform", "geometric-transform"
/// and "GeometricTransform" compare equal.
fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

impl FromStr for Category {
    type Err = EditorError;

    /// Parse an identifier or a label of any locale.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Category::ALL
            .into_iter()
            .find(|category| {
                normalize(category.id()) == wanted
                    || Locale::ALL
                        .iter()
                        .any(|locale| normalize(locale.category_label(*category)) == wanted)
            })
            .ok_or_else(|| EditorError::UnknownCategory(s.to_string()))
    }
}

impl FromStr for SubOption {
    type Err = EditorError;

    /// Parse an identifier or a label of any locale.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        SubOption::ALL
            .into_iter()
            .find(|sub_option| {
                normalize(sub_option.id()) == wanted
                    || Locale::ALL
                        .iter()
                        .any(|locale| normalize(locale.sub_option_label(*sub_option)) == wanted)
            })
            .ok_or_else(|| EditorError::UnknownSubOption(s.to_string()))
    }
}

/// Numeric values of the editor sliders.
///
/// Every field is read only by the sub-option that needs it.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct OperationParams {
    /// Contrast factor.
    pub contrast: f32,
    /// Horizontal shift in pixels.
    pub dx: f32,
    /// Vertical shift in pixels.
    pub dy: f32,
    /// Rotation angle in degrees, counter-clockwise.
    pub angle: f32,
    /// Uniform scale factor.
    pub scale: f32,
    /// Gamma value.
    pub gamma: f32,
}

impl Default for OperationParams {
    fn default() -> Self {
        Self {
            contrast: ParamKind::Contrast.spec().default,
            dx: ParamKind::Dx.spec().default,
            dy: ParamKind::Dy.spec().default,
            angle: ParamKind::Angle.spec().default,
            scale: ParamKind::Scale.spec().default,
            gamma: ParamKind::Gamma.spec().default,
        }
    }
}

impl OperationParams {
    /// Read the value of a parameter.
    pub fn get(&self, kind: ParamKind) -> f32 {
        match kind {
            ParamKind::Contrast => self.contrast,
            ParamKind::Dx => self.dx,
            ParamKind::Dy => self.dy,
            ParamKind::Angle => self.angle,
            ParamKind::Scale => self.scale,
            ParamKind::Gamma => self.gamma,
        }
    }

    /// Set the value of a parameter.
    pub fn set(&mut self, kind: ParamKind, value: f32) {
        match kind {
            ParamKind::Contrast => self.contrast = value,
            ParamKind::Dx => self.dx = value,
            ParamKind::Dy => self.dy = value,
            ParamKind::Angle => self.angle = value,
            ParamKind::Scale => self.scale = value,
            ParamKind::Gamma => self.gamma = value,
        }
    }

    /// Check the parameters read by `sub_option`.
    ///
    /// All of them must be finite; `scale` and `gamma` must also be strictly positive.
    /// Parameters the sub-option ignores are not inspected.
    pub fn validate_for(&self, sub_option: SubOption) -> Result<(), EditorError> {
        for &kind in sub_option.parameters() {
            let value = self.get(kind);
            let positive_only = matches!(kind, ParamKind::Scale | ParamKind::Gamma);
            if !value.is_finite() || (positive_only && value <= 0.0) {
                return Err(EditorError::InvalidParameter {
                    name: kind.spec().name,
                    value,
                });
            }
        }
        Ok(())
    }
}

/// A single user action: the selected operation and the slider values.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct OperationRequest {
    /// The selected category, if any.
    pub category: Option<Category>,
    /// The selected sub-option, if any.
    pub sub_option: Option<SubOption>,
    /// The slider values.
    pub params: OperationParams,
}

impl OperationRequest {
    /// Create a request selecting `sub_option` inside `category`.
    pub fn new(category: Category, sub_option: SubOption, params: OperationParams) -> Self {
        Self {
            category: Some(category),
            sub_option: Some(sub_option),
            params,
        }
    }

    /// The selected pair when both are set and the sub-option belongs to the category.
    pub fn selection(&self) -> Option<(Category, SubOption)> {
        match (self.category, self.sub_option) {
            (Some(category), Some(sub_option)) if sub_option.category() == category => {
                Some((category, sub_option))
            }
            _ => None,
        }
    }
}

/// The processed image and the text shown next to it.
#[derive(Clone, Debug, PartialEq)]
pub struct OperationResult {
    /// The processed image.
    pub image: DisplayImage,
    /// Human readable description of what was done.
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sub_options_belong_to_their_category() {
        for category in Category::ALL {
            for sub_option in category.sub_options() {
                assert_eq!(sub_option.category(), category);
            }
        }
        let total: usize = Category::ALL.iter().map(|c| c.sub_options().len()).sum();
        assert_eq!(total, SubOption::ALL.len());
    }

    #[test]
    fn parse_names() -> Result<(), EditorError> {
        assert_eq!(
            "geometric-transform".parse::<Category>()?,
            Category::GeometricTransform
        );
        assert_eq!("ColorOperation".parse::<Category>()?, Category::ColorOperation);
        assert_eq!(
            "Correção Gamma e Clareamento".parse::<Category>()?,
            Category::GammaCorrection
        );
        assert_eq!("rgb_to_hsv".parse::<SubOption>()?, SubOption::RgbToHsv);
        assert_eq!("Translação".parse::<SubOption>()?, SubOption::Translation);
        assert_eq!(
            "RGB to Grayscale".parse::<SubOption>()?,
            SubOption::RgbToGrayscale
        );
        assert_eq!(
            "blur".parse::<SubOption>(),
            Err(EditorError::UnknownSubOption("blur".to_string()))
        );
        assert!("filters".parse::<Category>().is_err());

        Ok(())
    }

    #[test]
    fn selection_requires_matching_pair() {
        let params = OperationParams::default();
        let request = OperationRequest::new(Category::ColorOperation, SubOption::RgbToHsv, params);
        assert_eq!(
            request.selection(),
            Some((Category::ColorOperation, SubOption::RgbToHsv))
        );

        let mismatched =
            OperationRequest::new(Category::ColorOperation, SubOption::Translation, params);
        assert_eq!(mismatched.selection(), None);

        assert_eq!(OperationRequest::default().selection(), None);
    }

    #[test]
    fn validate_only_used_parameters() {
        let params = OperationParams {
            gamma: 0.0,
            scale: f32::NAN,
            ..Default::default()
        };

        assert_eq!(params.validate_for(SubOption::Rotation), Ok(()));
        assert_eq!(
            params.validate_for(SubOption::GammaControl),
            Err(EditorError::InvalidParameter {
                name: "gamma",
                value: 0.0
            })
        );
        assert!(params.validate_for(SubOption::Scale).is_err());

        let params = OperationParams {
            dx: f32::INFINITY,
            ..Default::default()
        };
        assert!(params.validate_for(SubOption::Translation).is_err());
    }

    #[test]
    fn default_params_match_sliders() {
        let params = OperationParams::default();
        assert_eq!(params.contrast, 1.0);
        assert_eq!(params.dx, 0.0);
        assert_eq!(params.dy, 0.0);
        assert_eq!(params.angle, 0.0);
        assert_eq!(params.scale, 1.0);
        assert_eq!(params.gamma, 1.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn request_from_json() -> Result<(), serde_json::Error> {
        let request: OperationRequest = serde_json::from_str(
            r#"{"category": "geometric-transform", "sub_option": "rotation", "params": {"angle": 45.0}}"#,
        )?;

        assert_eq!(
            request.selection(),
            Some((Category::GeometricTransform, SubOption::Rotation))
        );
        assert_eq!(request.params.angle, 45.0);
        assert_eq!(request.params.scale, 1.0);

        Ok(())
    }
}
