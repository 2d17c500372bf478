//! # zengray
//!
//! Single-channel image buffer with a legacy bitmap decoder, a packed-texture
//! unpacker, and nearest-neighbor resize/rotate.
//!
//! ## Buffer model
//!
//! [`GrayImage`] owns one byte per pixel, row-major, top row first. Its
//! backing array is only reallocated when a request covers more samples than
//! the current `width * height`; shrinking keeps the old array, so
//! [`GrayImage::storage`] may be longer than [`GrayImage::pixels`]. Growing
//! past the current logical area always allocates fresh zeroed storage.
//!
//! ## Sources
//!
//! - **BMP** (`bmp` feature, on by default): 24-bit pixels are converted with
//!   `(11*r + 16*g + 5*b) / 32`; every other depth copies the leading byte of
//!   each pixel. Output rows are always top-down whatever the file order.
//! - **Packed textures**: [`unpack_pixels`] turns 8-bit gray, 565, 4444, or
//!   4-byte pixels into a gray plane plus an optional alpha plane.
//!
//! ## Row order
//!
//! The bitmap decoder and the unpacker flip under opposite conditions. A
//! bitmap is flipped when its height field is positive (bottom-up storage).
//! The unpacker flips when `flip_y` is true, for sources uploaded bottom-up.
//!
//! ## Non-Goals
//!
//! - Color output; everything here is one byte per sample
//! - Compressed bitmaps (RLE, bitfields) and palette lookup
//! - Filtering other than nearest-neighbor
//!
//! ## Usage
//!
//! ```no_run
//! use zengray::{GrayImage, load_image};
//!
//! let mut image = GrayImage::new();
//! load_image(&mut image, "scan.bmp");
//! if image.valid() {
//!     image.resize(256, 256);
//!     image.rotate(core::f64::consts::FRAC_PI_6, 1);
//! }
//! ```

#![forbid(unsafe_code)]

extern crate alloc;

mod error;
mod image;
mod limits;
mod pixel;
mod texture;
mod transform;
mod unpack;

#[cfg(feature = "bmp")]
mod bmp;
#[cfg(feature = "bmp")]
mod decode;
#[cfg(feature = "bmp")]
mod encode;
#[cfg(feature = "bmp")]
mod info;
#[cfg(feature = "bmp")]
mod load;

// Re-exports
pub use enough::{Stop, Unstoppable};
pub use error::GrayError;
pub use image::GrayImage;
pub use limits::Limits;
pub use pixel::PackedFormat;
pub use texture::Texture;
pub use unpack::unpack_pixels;

#[cfg(feature = "bmp")]
pub use bmp::BmpDepth;
#[cfg(feature = "bmp")]
pub use decode::{DecodeRequest, decode_bmp};
#[cfg(feature = "bmp")]
pub use encode::encode_bmp;
#[cfg(feature = "bmp")]
pub use info::{ImageFormat, ImageInfo};
#[cfg(feature = "bmp")]
pub use load::{
    load_bmp, load_image, load_image_no_decode, save_bmp, try_load_bmp, try_load_image,
};
