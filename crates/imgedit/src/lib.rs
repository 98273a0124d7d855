#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use imgedit_image as image;

#[doc(inline)]
pub use imgedit_imgproc as imgproc;

#[doc(inline)]
pub use imgedit_io as io;

#[doc(inline)]
pub use imgedit_editor as editor;
