use std::str::FromStr;

use crate::controls::ParamKind;
use crate::error::EditorError;
use crate::request::{Category, SubOption};

/// Language of the labels and descriptions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Locale {
    /// English labels, also used as the language-neutral names.
    #[default]
    English,
    /// Portuguese labels.
    Portuguese,
}

impl Locale {
    /// Every supported locale.
    pub const ALL: [Locale; 2] = [Locale::English, Locale::Portuguese];

    /// Label of a category.
    pub fn category_label(&self, category: Category) -> &'static str {
        match (self, category) {
            (Locale::English, Category::GeometricTransform) => "GeometricTransform",
            (Locale::English, Category::ColorOperation) => "ColorOperation",
            (Locale::English, Category::GammaCorrection) => "GammaCorrection",
            (Locale::Portuguese, Category::GeometricTransform) => "Transformações Geométricas",
            (Locale::Portuguese, Category::ColorOperation) => "Operações de Cores",
            (Locale::Portuguese, Category::GammaCorrection) => "Correção Gamma e Clareamento",
        }
    }

    /// Label of a sub-option.
    pub fn sub_option_label(&self, sub_option: SubOption) -> &'static str {
        match (self, sub_option) {
            (Locale::English, SubOption::RgbToGrayscale) => "RGB to Grayscale",
            (Locale::English, SubOption::RgbToHsv) => "RGB to HSV",
            (Locale::English, SubOption::ContrastAdjust) => "Contrast Adjust",
            (Locale::English, SubOption::Translation) => "Translation",
            (Locale::English, SubOption::Rotation) => "Rotation",
            (Locale::English, SubOption::Scale) => "Scale",
            (Locale::English, SubOption::GammaControl) => "Gamma Control",
            (Locale::Portuguese, SubOption::RgbToGrayscale) => "RGB para Grayscale",
            (Locale::Portuguese, SubOption::RgbToHsv) => "RGB para HSV",
            (Locale::Portuguese, SubOption::ContrastAdjust) => "Ajuste de contraste",
            (Locale::Portuguese, SubOption::Translation) => "Translação",
            (Locale::Portuguese, SubOption::Rotation) => "Rotação",
            (Locale::Portuguese, SubOption::Scale) => "Escala",
            (Locale::Portuguese, SubOption::GammaControl) => "Controle de gamma",
        }
    }

    /// Label of a slider.
    pub fn param_label(&self, kind: ParamKind) -> &'static str {
        match (self, kind) {
            (Locale::English, ParamKind::Contrast) => "Contrast",
            (Locale::English, ParamKind::Dx) => "Horizontal Shift",
            (Locale::English, ParamKind::Dy) => "Vertical Shift",
            (Locale::English, ParamKind::Angle) => "Rotation Angle (°)",
            (Locale::English, ParamKind::Scale) => "Scale Factor",
            (Locale::English, ParamKind::Gamma) => "Gamma Value",
            (Locale::Portuguese, ParamKind::Contrast) => "Contraste",
            (Locale::Portuguese, ParamKind::Dx) => "Deslocamento Horizontal",
            (Locale::Portuguese, ParamKind::Dy) => "Deslocamento Vertical",
            (Locale::Portuguese, ParamKind::Angle) => "Ângulo de Rotação (°)",
            (Locale::Portuguese, ParamKind::Scale) => "Fator de Escala",
            (Locale::Portuguese, ParamKind::Gamma) => "Valor Gamma",
        }
    }

    /// Text returned when a request matches no operation.
    pub fn no_operation(&self) -> &'static str {
        match self {
            Locale::English => "No operation performed",
            Locale::Portuguese => "Nenhuma operação realizada",
        }
    }

    /// Description of a performed operation, `"{category} - {token}"`.
    ///
    /// The contrast row uses a short token instead of the sub-option label and
    /// the gamma row embeds the value with two decimals.
    pub fn describe(&self, category: Category, sub_option: SubOption, gamma: f32) -> String {
        let token = match (self, sub_option) {
            (Locale::English, SubOption::ContrastAdjust) => "Contrast".to_string(),
            (Locale::Portuguese, SubOption::ContrastAdjust) => "Contraste".to_string(),
            (_, SubOption::GammaControl) => format!("Gamma {:.2}", decimal_f64(gamma)),
            (_, sub_option) => self.sub_option_label(sub_option).to_string(),
        };
        format!("{} - {}", self.category_label(category), token)
    }
}

/// The f64 closest to the shortest decimal that reads back as `value`.
///
/// Rounding the widened f32 directly would round its binary error instead,
/// e.g. 0.615 would print as 0.62.
fn decimal_f64(value: f32) -> f64 {
    value.to_string().parse().unwrap_or(value as f64)
}

impl FromStr for Locale {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "english" => Ok(Locale::English),
            "pt" | "pt-br" | "portuguese" => Ok(Locale::Portuguese),
            _ => Err(EditorError::UnknownLocale(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_rows() {
        let en = Locale::English;
        assert_eq!(
            en.describe(Category::GeometricTransform, SubOption::Translation, 1.0),
            "GeometricTransform - Translation"
        );
        assert_eq!(
            en.describe(Category::ColorOperation, SubOption::ContrastAdjust, 1.0),
            "ColorOperation - Contrast"
        );
        assert_eq!(
            en.describe(Category::GammaCorrection, SubOption::GammaControl, 1.5),
            "GammaCorrection - Gamma 1.50"
        );
        assert_eq!(
            en.describe(Category::GammaCorrection, SubOption::GammaControl, 0.615),
            "GammaCorrection - Gamma 0.61"
        );
        assert_eq!(
            en.describe(Category::GammaCorrection, SubOption::GammaControl, 2.675),
            "GammaCorrection - Gamma 2.67"
        );

        let pt = Locale::Portuguese;
        assert_eq!(
            pt.describe(Category::GeometricTransform, SubOption::Translation, 1.0),
            "Transformações Geométricas - Translação"
        );
        assert_eq!(
            pt.describe(Category::ColorOperation, SubOption::RgbToHsv, 1.0),
            "Operações de Cores - RGB para HSV"
        );
    }

    #[test]
    fn parse_locale() -> Result<(), EditorError> {
        assert_eq!("EN".parse::<Locale>()?, Locale::English);
        assert_eq!("portuguese".parse::<Locale>()?, Locale::Portuguese);
        assert!("fr".parse::<Locale>().is_err());
        Ok(())
    }
}
