use alloc::vec::Vec;
use enough::Stop;

use crate::bmp::BmpDepth;
use crate::error::GrayError;
use crate::image::GrayImage;

/// Encode the logical pixels of `image` as an uncompressed bitmap.
///
/// Fails with [`GrayError::EmptyImage`] when `image` is not valid.
pub fn encode_bmp(image: &GrayImage, depth: BmpDepth, stop: impl Stop) -> Result<Vec<u8>, GrayError> {
    crate::bmp::encode(image, depth, &stop)
}
