//! Legacy bitmap decoder producing gray samples.
//!
//! The layout is read sequentially: 14-byte file header, 40-byte info header,
//! a 256-entry color table for 8-bit files (skipped), then the row-padded
//! pixel array. The pixel-array offset field is not used for seeking. Rows
//! are read in place from the input; bytes past its end read as zero. Output
//! rows are always stored top-down.

use alloc::vec::Vec;

use enough::Stop;

use crate::error::GrayError;
use crate::image::GrayImage;
use crate::limits::Limits;

pub(crate) const FILE_HEADER_LEN: usize = 14;
pub(crate) const INFO_HEADER_LEN: usize = 40;
pub(crate) const PALETTE_LEN: usize = 256 * 4;

// ── Cursor for reading from &[u8] ───────────────────────────────────

struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn take<const N: usize>(&mut self) -> Result<[u8; N], GrayError> {
        let end = self.pos.checked_add(N).ok_or(GrayError::UnexpectedEof)?;
        let bytes = self
            .data
            .get(self.pos..end)
            .ok_or(GrayError::UnexpectedEof)?;
        self.pos = end;
        let mut buf = [0u8; N];
        buf.copy_from_slice(bytes);
        Ok(buf)
    }

    fn u16_le(&mut self) -> Result<u16, GrayError> {
        self.take::<2>().map(u16::from_le_bytes)
    }

    fn u32_le(&mut self) -> Result<u32, GrayError> {
        self.take::<4>().map(u32::from_le_bytes)
    }

    fn i32_le(&mut self) -> Result<i32, GrayError> {
        self.take::<4>().map(i32::from_le_bytes)
    }

    fn skip<const N: usize>(&mut self) -> Result<(), GrayError> {
        self.take::<N>().map(|_| ())
    }
}

// ── Parsed headers ──────────────────────────────────────────────────

/// The header fields the decoder and `ImageInfo` act on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct BmpHeader {
    pub width: i32,
    /// Negative when rows are stored top-down.
    pub height: i32,
    pub bits_per_pixel: u16,
    pub compression: u32,
}

impl BmpHeader {
    /// Parse the 14-byte file header and 40-byte info header.
    pub(crate) fn parse(data: &[u8]) -> Result<Self, GrayError> {
        let mut c = Cursor::new(data);
        c.skip::<FILE_HEADER_LEN>()?;
        c.skip::<4>()?; // info header size
        let width = c.i32_le()?;
        let height = c.i32_le()?;
        c.skip::<2>()?; // planes
        let bits_per_pixel = c.u16_le()?;
        let compression = c.u32_le()?;
        // image size, resolution, color counts
        c.skip::<20>()?;
        Ok(Self {
            width,
            height,
            bits_per_pixel,
            compression,
        })
    }

    pub(crate) fn top_down(&self) -> bool {
        self.height < 0
    }

    /// Validated `(width, |height|)`.
    pub(crate) fn extents(&self) -> Result<(u32, u32), GrayError> {
        if self.width <= 0 {
            return Err(GrayError::InvalidHeader(alloc::format!(
                "bitmap width is {}",
                self.width
            )));
        }
        let height = self.height.unsigned_abs();
        if height == 0 {
            return Err(GrayError::InvalidHeader("bitmap height is zero".into()));
        }
        if height > i32::MAX as u32 {
            return Err(GrayError::DimensionsTooLarge {
                width: self.width.into(),
                height: self.height.into(),
            });
        }
        if self.bits_per_pixel == 0 {
            return Err(GrayError::InvalidHeader("bitmap bit depth is zero".into()));
        }
        Ok((self.width as u32, height))
    }

    /// Bytes per stored row: `ceil(width * bpp / 8)` rounded up to a multiple of 4.
    pub(crate) fn row_stride(&self) -> Option<usize> {
        (self.width.max(0) as usize)
            .checked_mul(usize::from(self.bits_per_pixel))
            .map(|bits| bits.div_ceil(8).div_ceil(4) * 4)
    }
}

/// `(11*r + 16*g + 5*b) / 32`, with the first byte of each triple as `r`.
pub(crate) fn luma(r: u8, g: u8, b: u8) -> u8 {
    ((11 * u32::from(r) + 16 * u32::from(g) + 5 * u32::from(b)) / 32) as u8
}

// ── Full decode ─────────────────────────────────────────────────────

/// Decode a bitmap into `dst`.
///
/// Headers, extents, and limits are checked before `dst` is touched; on any
/// error `dst` is unchanged. A pixel array cut short by end of input decodes
/// as zeros, and only the gray output is allocated, so a short file that
/// declares huge extents costs no more than its output.
pub(crate) fn decode_into(
    data: &[u8],
    dst: &mut GrayImage,
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<(), GrayError> {
    let header = BmpHeader::parse(data)?;
    let (width, height) = header.extents()?;
    let too_large = || GrayError::DimensionsTooLarge {
        width: width.into(),
        height: height.into(),
    };

    let stride = header.row_stride().ok_or_else(too_large)?;
    let out_len = (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(too_large)?;
    if let Some(limits) = limits {
        limits.check_extents(width, height)?;
        limits.check_memory(out_len)?;
    }

    tracing::trace!(
        width,
        height,
        bits_per_pixel = header.bits_per_pixel,
        top_down = header.top_down(),
        stride,
        "decoding bitmap"
    );

    let mut pixel_start = FILE_HEADER_LEN + INFO_HEADER_LEN;
    if header.bits_per_pixel == 8 {
        // color table; gray output uses the raw index byte
        pixel_start += PALETTE_LEN;
    }
    let pixels = data.get(pixel_start..).unwrap_or_default();

    let mut gray = Vec::new();
    gray.try_reserve_exact(out_len).map_err(|_| too_large())?;
    gray.resize(out_len, 0u8);
    stop.check()?;

    let (w, h) = (width as usize, height as usize);
    let depth = usize::from(header.bits_per_pixel / 8);
    for (row_idx, out) in gray.chunks_exact_mut(w).enumerate() {
        if row_idx % 16 == 0 {
            stop.check()?;
        }
        let file_row = if header.top_down() { row_idx } else { h - 1 - row_idx };
        let src = match file_row.checked_mul(stride).and_then(|at| pixels.get(at..)) {
            Some(rest) if !rest.is_empty() => &rest[..rest.len().min(stride)],
            // past end of input: row stays zero
            _ => continue,
        };
        let at = |k: usize| src.get(k).copied().unwrap_or(0);
        if header.bits_per_pixel == 24 {
            for (i, d) in out.iter_mut().enumerate() {
                *d = luma(at(3 * i), at(3 * i + 1), at(3 * i + 2));
            }
        } else {
            for (i, d) in out.iter_mut().enumerate() {
                *d = at(i * depth);
            }
        }
    }

    dst.assign(width as i32, height as i32, gray);
    Ok(())
}
