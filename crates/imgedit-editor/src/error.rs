use imgedit_image::ImageError;

/// An error type for the editor.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum EditorError {
    /// A parameter required by the selected operation has an unusable value.
    #[error("Invalid value {value} for parameter `{name}`")]
    InvalidParameter {
        /// Name of the parameter.
        name: &'static str,
        /// The rejected value.
        value: f32,
    },

    /// The category name could not be parsed.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// The sub-option name could not be parsed.
    #[error("Unknown sub-option: {0}")]
    UnknownSubOption(String),

    /// The locale name could not be parsed.
    #[error("Unknown locale: {0}")]
    UnknownLocale(String),

    /// Error raised by an image operation.
    #[error(transparent)]
    Image(#[from] ImageError),
}
