#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// conversions between the display and processing image representations.
pub mod codec;

/// declarative description of the editor controls.
pub mod controls;

/// selection of the transformation for a request.
pub mod dispatch;

/// Error types for the editor.
pub mod error;

/// localized labels and descriptions.
pub mod locale;

/// request and result types.
pub mod request;

/// thin wrappers around the image processing primitives.
pub mod transforms;

pub use crate::codec::{DisplayImage, ProcessingImage};
pub use crate::controls::{ParamKind, ParamSpec};
pub use crate::dispatch::{dispatch, dispatch_localized};
pub use crate::error::EditorError;
pub use crate::locale::Locale;
pub use crate::request::{Category, OperationParams, OperationRequest, OperationResult, SubOption};
