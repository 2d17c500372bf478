//! Legacy bitmap codec (internal).
//!
//! Use top-level [`crate::decode_bmp`], [`crate::encode_bmp`],
//! [`crate::load_bmp`], etc.

mod decode;
mod encode;

pub(crate) use decode::BmpHeader;

use crate::error::GrayError;
use crate::image::GrayImage;
use crate::limits::Limits;
use alloc::vec::Vec;
use enough::Stop;

/// Sample layout written by [`crate::encode_bmp`].
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BmpDepth {
    /// 8 bits per pixel with a 256-entry identity gray color table.
    #[default]
    Indexed8,
    /// 24 bits per pixel, gray copied into all three channels.
    Rgb24,
}

impl BmpDepth {
    pub fn bits_per_pixel(self) -> u16 {
        match self {
            Self::Indexed8 => 8,
            Self::Rgb24 => 24,
        }
    }
}

/// Decode bitmap bytes into `dst` (called from DecodeRequest).
pub(crate) fn decode_into(
    data: &[u8],
    dst: &mut GrayImage,
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<(), GrayError> {
    decode::decode_into(data, dst, limits, stop)
}

/// Encode to bitmap bytes.
pub(crate) fn encode(
    image: &GrayImage,
    depth: BmpDepth,
    stop: &dyn Stop,
) -> Result<Vec<u8>, GrayError> {
    encode::encode_bmp(image, depth, stop)
}

#[cfg(test)]
mod tests {
    use super::decode::{BmpHeader, luma};

    #[test]
    fn luma_weights_first_byte_by_eleven() {
        assert_eq!(luma(255, 0, 0), 87);
        assert_eq!(luma(0, 255, 0), 127);
        assert_eq!(luma(0, 0, 255), 39);
        assert_eq!(luma(200, 200, 200), 200);
    }

    #[test]
    fn stride_rounds_bits_up_then_to_four_bytes() {
        let mut header = BmpHeader::parse(&[0u8; 54]).unwrap();
        header.width = 5;

        header.bits_per_pixel = 24;
        assert_eq!(header.row_stride(), Some(16));
        header.bits_per_pixel = 8;
        assert_eq!(header.row_stride(), Some(8));
        header.bits_per_pixel = 1;
        assert_eq!(header.row_stride(), Some(4));
        header.bits_per_pixel = 32;
        assert_eq!(header.row_stride(), Some(20));
    }

    #[test]
    fn short_header_is_eof() {
        assert!(BmpHeader::parse(&[0u8; 53]).is_err());
    }
}
