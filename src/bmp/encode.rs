//! Bitmap encoder for gray images: 8-bit indexed with an identity gray
//! palette, or 24-bit with the sample replicated into every channel.
//!
//! Both layouts decode back to the same samples.

use alloc::vec::Vec;
use enough::Stop;

use super::BmpDepth;
use super::decode::{FILE_HEADER_LEN, INFO_HEADER_LEN, PALETTE_LEN};
use crate::error::GrayError;
use crate::image::GrayImage;

/// Encode `image` as a bottom-up, uncompressed bitmap.
pub(crate) fn encode_bmp(
    image: &GrayImage,
    depth: BmpDepth,
    stop: &dyn Stop,
) -> Result<Vec<u8>, GrayError> {
    if !image.valid() {
        return Err(GrayError::EmptyImage);
    }
    let w = image.width() as usize;
    let h = image.height() as usize;
    let too_large = || GrayError::DimensionsTooLarge {
        width: image.width().into(),
        height: image.height().into(),
    };

    let bytes_per_pixel = depth.bits_per_pixel() as usize / 8;
    let row_stride = w
        .checked_mul(bytes_per_pixel)
        .and_then(|r| r.checked_add(3))
        .map(|r| r & !3)
        .ok_or_else(too_large)?;
    let pixel_data_size = row_stride.checked_mul(h).ok_or_else(too_large)?;
    let palette_len = match depth {
        BmpDepth::Indexed8 => PALETTE_LEN,
        BmpDepth::Rgb24 => 0,
    };
    let data_offset = FILE_HEADER_LEN + INFO_HEADER_LEN + palette_len;
    let file_size = pixel_data_size
        .checked_add(data_offset)
        .filter(|&n| n <= u32::MAX as usize)
        .ok_or_else(too_large)?;

    stop.check()?;

    let mut out = Vec::with_capacity(file_size);
    write_headers(&mut out, image, depth, file_size, data_offset, pixel_data_size);
    if depth == BmpDepth::Indexed8 {
        for level in 0..=255u8 {
            out.extend_from_slice(&[level, level, level, 0]);
        }
    }

    let pad_bytes = row_stride - w * bytes_per_pixel;
    for row in (0..h).rev() {
        if row % 16 == 0 {
            stop.check()?;
        }
        let samples = image.row(row);
        match depth {
            BmpDepth::Indexed8 => out.extend_from_slice(samples),
            BmpDepth::Rgb24 => {
                for &g in samples {
                    out.extend_from_slice(&[g, g, g]);
                }
            }
        }
        out.extend(core::iter::repeat_n(0u8, pad_bytes));
    }

    Ok(out)
}

fn write_headers(
    out: &mut Vec<u8>,
    image: &GrayImage,
    depth: BmpDepth,
    file_size: usize,
    data_offset: usize,
    pixel_data_size: usize,
) {
    // File header (14 bytes)
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&(file_size as u32).to_le_bytes());
    out.extend_from_slice(&[0u8; 4]); // reserved
    out.extend_from_slice(&(data_offset as u32).to_le_bytes());

    // Info header (40 bytes)
    out.extend_from_slice(&(INFO_HEADER_LEN as u32).to_le_bytes());
    out.extend_from_slice(&image.width().to_le_bytes());
    out.extend_from_slice(&image.height().to_le_bytes()); // positive = bottom-up
    out.extend_from_slice(&1u16.to_le_bytes()); // planes
    out.extend_from_slice(&depth.bits_per_pixel().to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes()); // compression
    out.extend_from_slice(&(pixel_data_size as u32).to_le_bytes());
    out.extend_from_slice(&2835u32.to_le_bytes()); // h resolution (72 DPI)
    out.extend_from_slice(&2835u32.to_le_bytes()); // v resolution
    let colors: u32 = match depth {
        BmpDepth::Indexed8 => 256,
        BmpDepth::Rgb24 => 0,
    };
    out.extend_from_slice(&colors.to_le_bytes()); // colors used
    out.extend_from_slice(&0u32.to_le_bytes()); // important colors
}
