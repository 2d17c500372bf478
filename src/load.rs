//! Path-level loaders.
//!
//! `load_*` functions never fail: when the file cannot be read or is not a
//! decodable bitmap the destination is left exactly as it was, and the cause
//! is logged at `debug` level. Check [`GrayImage::valid`] afterwards. The
//! `try_*` variants return the cause instead.

use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

use alloc::vec::Vec;
use enough::Unstoppable;

use crate::bmp::BmpDepth;
use crate::error::GrayError;
use crate::image::GrayImage;
use crate::info::ImageFormat;

/// Load an image file, choosing the decoder from the extension.
///
/// Only `.bmp` is decoded; other extensions leave `dst` untouched.
pub fn load_image(dst: &mut GrayImage, path: impl AsRef<Path>) {
    let path = path.as_ref();
    if let Err(err) = try_load_image(dst, path) {
        tracing::debug!(path = %path.display(), %err, "image not loaded");
    }
}

pub fn try_load_image(dst: &mut GrayImage, path: impl AsRef<Path>) -> Result<(), GrayError> {
    let path = path.as_ref();
    match ImageFormat::from_path(path) {
        Some(ImageFormat::Bmp) => try_load_bmp(dst, path),
        None => Err(GrayError::UnsupportedFormat(alloc::format!(
            "no decoder for {}",
            path.display()
        ))),
    }
}

/// Decode a bitmap file into `dst`, whatever its extension.
pub fn load_bmp(dst: &mut GrayImage, path: impl AsRef<Path>) {
    let path = path.as_ref();
    if let Err(err) = try_load_bmp(dst, path) {
        tracing::debug!(path = %path.display(), %err, "bitmap not loaded");
    }
}

pub fn try_load_bmp(dst: &mut GrayImage, path: impl AsRef<Path>) -> Result<(), GrayError> {
    let bytes = fs::read(path)?;
    crate::bmp::decode_into(&bytes, dst, None, &Unstoppable)
}

/// Read a whole file without decoding it.
///
/// The buffer is sized from the file's metadata; `None` when the file cannot
/// be inspected or opened.
pub fn load_image_no_decode(path: impl AsRef<Path>) -> Option<Vec<u8>> {
    let path = path.as_ref();
    match try_load_image_no_decode(path) {
        Ok(bytes) => Some(bytes),
        Err(err) => {
            tracing::debug!(path = %path.display(), %err, "raw file not loaded");
            None
        }
    }
}

fn try_load_image_no_decode(path: &Path) -> Result<Vec<u8>, GrayError> {
    let size = fs::metadata(path)?.len();
    let mut bytes = Vec::with_capacity(usize::try_from(size).unwrap_or(0));
    File::open(path)?.read_to_end(&mut bytes)?;
    Ok(bytes)
}

/// Encode `image` and write it to `path`.
pub fn save_bmp(image: &GrayImage, path: impl AsRef<Path>, depth: BmpDepth) -> Result<(), GrayError> {
    let bytes = crate::bmp::encode(image, depth, &Unstoppable)?;
    fs::write(path, bytes)?;
    Ok(())
}
