//! Owning single-channel sample buffer.
//!
//! The backing array and the logical extents are tracked separately: the array
//! is only replaced when a request covers more samples than the current
//! `width * height`, so after shrinking, [`GrayImage::storage`] can be longer
//! than [`GrayImage::pixels`].

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::error::GrayError;
use crate::texture::Texture;

/// Grayscale image, one byte per sample, row-major, top row first.
///
/// The empty state is `(no storage, 0, 0)`. Extents are signed so that
/// callers can pass through untrusted sizes; anything non-positive is
/// treated as "no image".
#[derive(Default)]
pub struct GrayImage {
    pub(crate) data: Vec<u8>,
    pub(crate) width: i32,
    pub(crate) height: i32,
    pub(crate) rotation_radians: f64,
}

impl GrayImage {
    /// Empty image. Same as `GrayImage::default()`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing row-major buffer of exactly `width * height` samples.
    pub fn from_vec(width: i32, height: i32, data: Vec<u8>) -> Result<Self, GrayError> {
        let expected = area(width, height).ok_or(GrayError::EmptyImage)?;
        if data.len() != expected {
            return Err(GrayError::BufferTooSmall {
                needed: expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
            rotation_radians: 0.0,
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Angle passed to the last [`GrayImage::rotate`], or 0.
    pub fn rotation_radians(&self) -> f64 {
        self.rotation_radians
    }

    /// True when the image has positive extents and owns storage.
    pub fn valid(&self) -> bool {
        self.width > 0 && self.height > 0 && !self.data.is_empty()
    }

    /// Size the image to `width x height`.
    ///
    /// Does nothing when either extent is non-positive. A new zero-filled
    /// array of exactly `width * height` bytes is allocated only when that
    /// area exceeds the current logical `width * height`; otherwise the array
    /// is kept as-is, stale bytes included. Growing past the current logical
    /// area always yields fresh zeroed storage, even when the old array was
    /// long enough. The logical extents are updated in both cases.
    pub fn allocate(&mut self, width: i32, height: i32) {
        let Some(requested) = area(width, height) else {
            return;
        };
        if requested > self.logical_len() {
            self.release();
            self.data = vec![0u8; requested];
        }
        self.width = width;
        self.height = height;
    }

    /// Drop the storage and reset every attribute. Idempotent.
    pub fn release(&mut self) {
        self.data = Vec::new();
        self.width = 0;
        self.height = 0;
        self.rotation_radians = 0.0;
    }

    /// [`allocate`](Self::allocate), then copy the first `width * height`
    /// bytes of `src`.
    ///
    /// Non-positive extents are a no-op. A short `src` is rejected before the
    /// image is touched.
    pub fn clone_from_raw(&mut self, width: i32, height: i32, src: &[u8]) -> Result<(), GrayError> {
        let Some(needed) = area(width, height) else {
            return Ok(());
        };
        if src.len() < needed {
            return Err(GrayError::BufferTooSmall {
                needed,
                actual: src.len(),
            });
        }
        self.allocate(width, height);
        self.data[..needed].copy_from_slice(&src[..needed]);
        Ok(())
    }

    /// Fill each row with one value interpolated from `start` (top row) to
    /// `end` (bottom row). No-op on an invalid image.
    ///
    /// Row `j` sits at `j / (height - 1)` rather than `j / height`, so the
    /// bottom row is exactly `end`; intermediate rows come out slightly
    /// brighter (or darker) than with the `j / height` spacing.
    pub fn gradient(&mut self, start: u8, end: u8) {
        if !self.valid() {
            return;
        }
        let last = (self.height - 1) as f32;
        let (start, end) = (f32::from(start), f32::from(end));
        for j in 0..self.height {
            let r = if last > 0.0 { j as f32 / last } else { 0.0 };
            let value = ((1.0 - r) * start + r * end) as u8;
            self.row_mut(j as usize).fill(value);
        }
    }

    /// Become a vertically mirrored copy of `src`.
    pub fn from_flip_y(&mut self, src: &GrayImage) {
        if !src.valid() {
            return;
        }
        self.allocate(src.width, src.height);
        let rows = src.height as usize;
        for i in 0..rows {
            self.row_mut(rows - 1 - i).copy_from_slice(src.row(i));
        }
    }

    /// The `width * height` logical samples.
    pub fn pixels(&self) -> &[u8] {
        &self.data[..self.logical_len()]
    }

    pub fn pixels_mut(&mut self) -> &mut [u8] {
        let len = self.logical_len();
        &mut self.data[..len]
    }

    /// The whole backing array.
    ///
    /// At least `width * height` bytes: longer after a shrinking
    /// [`allocate`](Self::allocate), and `width * height * channels` after a
    /// multi-channel [`rotate`](Self::rotate).
    pub fn storage(&self) -> &[u8] {
        &self.data
    }

    pub fn storage_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Row `y` of the logical image.
    ///
    /// # Panics
    /// If `y >= height`.
    pub fn row(&self, y: usize) -> &[u8] {
        assert!(y < self.height.max(0) as usize, "row index out of bounds");
        let w = self.width as usize;
        &self.data[y * w..(y + 1) * w]
    }

    /// # Panics
    /// If `y >= height`.
    pub fn row_mut(&mut self, y: usize) -> &mut [u8] {
        assert!(y < self.height.max(0) as usize, "row index out of bounds");
        let w = self.width as usize;
        &mut self.data[y * w..(y + 1) * w]
    }

    /// Read-only sampling view over the logical pixels.
    pub fn texture(&self) -> Texture<'_> {
        Texture::new(
            self.width.max(0) as usize,
            self.height.max(0) as usize,
            self.pixels(),
        )
    }

    /// Borrow the logical pixels as an [`imgref::ImgRef`].
    #[cfg(feature = "imgref")]
    pub fn as_imgref(&self) -> imgref::ImgRef<'_, u8> {
        imgref::ImgRef::new(
            self.pixels(),
            self.width.max(0) as usize,
            self.height.max(0) as usize,
        )
    }

    /// Take `pixels` (exactly `width * height` samples) as the new content,
    /// following the same reuse rule as [`allocate`](Self::allocate): copied
    /// into the current array when it fits the logical area, installed as the
    /// new array otherwise.
    pub(crate) fn assign(&mut self, width: i32, height: i32, pixels: Vec<u8>) {
        let Some(requested) = area(width, height) else {
            return;
        };
        debug_assert_eq!(pixels.len(), requested);
        if requested > self.logical_len() {
            self.release();
            self.data = pixels;
        } else {
            self.data[..requested].copy_from_slice(&pixels);
        }
        self.width = width;
        self.height = height;
    }

    fn logical_len(&self) -> usize {
        area(self.width, self.height).unwrap_or(0)
    }
}

/// `width * height` when both are positive and the product fits in memory.
pub(crate) fn area(width: i32, height: i32) -> Option<usize> {
    if width <= 0 || height <= 0 {
        return None;
    }
    (width as usize).checked_mul(height as usize)
}

/// Deep copy of the logical pixels; an invalid source clones to empty.
impl Clone for GrayImage {
    fn clone(&self) -> Self {
        let mut out = GrayImage::new();
        if self.valid() {
            out.allocate(self.width, self.height);
            out.data.copy_from_slice(self.pixels());
        }
        out
    }
}

/// Extents and logical pixels; spare capacity and rotation angle are ignored.
impl PartialEq for GrayImage {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height && self.pixels() == other.pixels()
    }
}

impl Eq for GrayImage {}

impl fmt::Debug for GrayImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrayImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("storage_len", &self.data.len())
            .field("rotation_radians", &self.rotation_radians)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::{GrayImage, area};

    #[test]
    fn area_rejects_non_positive() {
        assert_eq!(area(3, 4), Some(12));
        assert_eq!(area(0, 4), None);
        assert_eq!(area(3, -1), None);
    }

    #[test]
    fn from_vec_checks_length() {
        assert!(GrayImage::from_vec(2, 2, vec![0; 3]).is_err());
        assert!(GrayImage::from_vec(0, 2, vec![]).is_err());
        assert!(GrayImage::from_vec(2, 2, vec![0; 4]).unwrap().valid());
    }

    #[test]
    fn single_row_gradient_uses_start() {
        let mut image = GrayImage::new();
        image.allocate(4, 1);
        image.gradient(33, 200);
        assert_eq!(image.pixels(), &[33; 4]);
    }

    #[test]
    fn assign_reuses_only_within_logical_area() {
        let mut image = GrayImage::new();
        image.allocate(3, 3);
        image.storage_mut().fill(4);
        image.assign(2, 2, vec![1, 2, 3, 4]);
        assert_eq!(image.storage(), &[1, 2, 3, 4, 4, 4, 4, 4, 4]);

        image.assign(3, 2, vec![7; 6]);
        assert_eq!(image.storage(), &[7; 6]);
    }

    #[cfg(feature = "imgref")]
    #[test]
    fn imgref_view_covers_logical_pixels() {
        let mut image = GrayImage::new();
        image.allocate(4, 4);
        image.allocate(3, 2);
        let view = image.as_imgref();
        assert_eq!((view.width(), view.height()), (3, 2));
        assert_eq!(view.buf().len(), 6);
    }
}
