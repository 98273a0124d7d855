mod gray;
mod hsv;

pub use gray::{bgr_from_rgb, gray_from_bgr_u8, gray_from_rgb_u8, rgb_from_bgr, rgb_from_gray};
pub use hsv::{hsv_from_bgr_u8, rgb_from_hsv_u8};
