//! The category → sub-option → parameter cascade of the editor form.
//!
//! Any front-end can render its widgets from [`controls`] instead of wiring
//! the visibility rules by hand.

use crate::locale::Locale;
use crate::request::{Category, SubOption};

/// A numeric parameter exposed as a slider.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum ParamKind {
    /// Contrast factor.
    Contrast,
    /// Horizontal shift.
    Dx,
    /// Vertical shift.
    Dy,
    /// Rotation angle in degrees.
    Angle,
    /// Scale factor.
    Scale,
    /// Gamma value.
    Gamma,
}

/// Range, default value and step of a slider.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParamSpec {
    /// Field name in [`crate::OperationParams`].
    pub name: &'static str,
    /// Lowest selectable value.
    pub min: f32,
    /// Highest selectable value.
    pub max: f32,
    /// Initial value.
    pub default: f32,
    /// Slider increment.
    pub step: f32,
}

impl ParamSpec {
    /// Clamp `value` to the slider range.
    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }

    /// Whether `value` lies inside the slider range.
    pub fn contains(&self, value: f32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

impl ParamKind {
    /// Every parameter, in display order.
    pub const ALL: [ParamKind; 6] = [
        ParamKind::Contrast,
        ParamKind::Dx,
        ParamKind::Dy,
        ParamKind::Angle,
        ParamKind::Scale,
        ParamKind::Gamma,
    ];

    /// The slider description of this parameter.
    pub fn spec(&self) -> ParamSpec {
        match self {
            ParamKind::Contrast => ParamSpec {
                name: "contrast",
                min: 0.5,
                max: 3.0,
                default: 1.0,
                step: 0.1,
            },
            ParamKind::Dx => ParamSpec {
                name: "dx",
                min: -300.0,
                max: 300.0,
                default: 0.0,
                step: 1.0,
            },
            ParamKind::Dy => ParamSpec {
                name: "dy",
                min: -300.0,
                max: 300.0,
                default: 0.0,
                step: 1.0,
            },
            ParamKind::Angle => ParamSpec {
                name: "angle",
                min: 0.0,
                max: 360.0,
                default: 0.0,
                step: 1.0,
            },
            ParamKind::Scale => ParamSpec {
                name: "scale",
                min: 0.1,
                max: 3.0,
                default: 1.0,
                step: 0.1,
            },
            ParamKind::Gamma => ParamSpec {
                name: "gamma",
                min: 0.1,
                max: 3.0,
                default: 1.0,
                step: 0.1,
            },
        }
    }
}

/// A labelled slider.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParamControl {
    /// The parameter driven by the slider.
    pub kind: ParamKind,
    /// Localized label.
    pub label: &'static str,
    /// Range and default.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub spec: ParamSpec,
}

/// A sub-option entry together with the sliders it reveals.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SubOptionControl {
    /// The sub-option.
    pub sub_option: SubOption,
    /// Localized label.
    pub label: &'static str,
    /// Sliders shown while this sub-option is selected.
    pub params: Vec<ParamControl>,
}

/// A category entry together with its sub-options.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CategoryControl {
    /// The category.
    pub category: Category,
    /// Localized label.
    pub label: &'static str,
    /// Sub-options shown while this category is selected.
    pub sub_options: Vec<SubOptionControl>,
}

/// Build the full control tree for `locale`.
///
/// # Example
///
/// ```
/// use imgedit_editor::controls::{controls, ParamKind};
/// use imgedit_editor::Locale;
///
/// let tree = controls(Locale::English);
/// assert_eq!(tree.len(), 3);
/// assert_eq!(tree[0].sub_options[0].params[0].kind, ParamKind::Dx);
/// ```
pub fn controls(locale: Locale) -> Vec<CategoryControl> {
    Category::ALL
        .iter()
        .map(|&category| CategoryControl {
            category,
            label: locale.category_label(category),
            sub_options: category
                .sub_options()
                .iter()
                .map(|&sub_option| SubOptionControl {
                    sub_option,
                    label: locale.sub_option_label(sub_option),
                    params: sub_option
                        .parameters()
                        .iter()
                        .map(|&kind| ParamControl {
                            kind,
                            label: locale.param_label(kind),
                            spec: kind.spec(),
                        })
                        .collect(),
                })
                .collect(),
        })
        .collect()
}
