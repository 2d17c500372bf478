//! Inverse-mapped nearest-neighbor resampling: uniform resize and
//! arbitrary-angle rotation onto a canvas that holds the whole rotated image.
//!
//! Both transforms walk the destination grid and map each pixel back into the
//! source, so every destination pixel is written exactly once and there are no
//! holes. Destination pixels that map outside the source are 0.

use alloc::vec;

use crate::image::GrayImage;

/// 2x3 affine matrix, row-major: `[a b c; d e f]`.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Affine([f32; 6]);

impl Affine {
    fn scale(sx: f32, sy: f32) -> Self {
        Self([sx, 0.0, 0.0, 0.0, sy, 0.0])
    }

    /// Counter-clockwise rotation in a y-up frame.
    fn rotation(theta: f32) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self([cos, -sin, 0.0, sin, cos, 0.0])
    }

    fn apply(&self, x: f32, y: f32) -> (f32, f32) {
        let m = &self.0;
        (m[0] * x + m[1] * y + m[2], m[3] * x + m[4] * y + m[5])
    }
}

/// Axis-aligned extent of a `width x height` rectangle rotated by `theta`
/// about its center, as `(span_x, span_y)`.
fn rotated_extent(width: f32, height: f32, theta: f32) -> (f32, f32) {
    let forward = Affine::rotation(theta);
    let (hw, hh) = (width / 2.0, height / 2.0);
    let corners = [(-hw, hh), (hw, hh), (-hw, -hh), (hw, -hh)];

    let (mut min_x, mut max_x) = (f32::MAX, f32::MIN);
    let (mut min_y, mut max_y) = (f32::MAX, f32::MIN);
    for (cx, cy) in corners {
        let (x, y) = forward.apply(cx, cy);
        min_x = min_x.min(x);
        max_x = max_x.max(x);
        min_y = min_y.min(y);
        max_y = max_y.max(y);
    }
    (max_x - min_x, max_y - min_y)
}

impl GrayImage {
    /// Nearest-neighbor resample to `width x height`.
    ///
    /// No-op when the image is invalid, either target extent is non-positive,
    /// or the target equals the current size. Always installs a freshly
    /// allocated array of exactly `width * height` bytes.
    pub fn resize(&mut self, width: i32, height: i32) {
        if !self.valid() || width <= 0 || height <= 0 {
            return;
        }
        if self.width == width && self.height == height {
            return;
        }

        let (src_w, src_h) = (self.width, self.height);
        let back = Affine::scale(src_w as f32 / width as f32, src_h as f32 / height as f32);
        let dst_w = width as usize;
        let mut resampled = vec![0u8; dst_w * height as usize];

        let texture = self.texture();
        for (j, row) in resampled.chunks_exact_mut(dst_w).enumerate() {
            for (i, out) in row.iter_mut().enumerate() {
                let (x, y) = back.apply(i as f32, j as f32);
                let (x, y) = (x as i32, y as i32);
                if (0..src_w).contains(&x) && (0..src_h).contains(&y) {
                    if let Some(gray) = texture.texcoord_get_pixel(x, y) {
                        *out = gray;
                    }
                }
            }
        }

        self.data = resampled;
        self.width = width;
        self.height = height;
    }

    /// Rotate by `radians` (counter-clockwise on screen) about the image
    /// center onto a canvas sized to the rotated bounding box.
    ///
    /// The new extents are the truncated bounding-box spans, so nothing of the
    /// source is clipped. The output holds `channels` interleaved copies of
    /// each gray sample, i.e. `width * height * channels` bytes (see
    /// [`GrayImage::storage`]); `channels` below 1 is treated as 1. Corners of
    /// the canvas that fall outside the source stay 0 in every channel.
    ///
    /// No-op on an invalid image, when the rotated canvas would be empty, and
    /// when `width * height * channels` overflows `usize`.
    pub fn rotate(&mut self, radians: f64, channels: usize) {
        if !self.valid() {
            return;
        }
        let channels = channels.max(1);
        let theta = radians as f32;
        let (src_w, src_h) = (self.width as f32, self.height as f32);
        let (half_w, half_h) = (src_w / 2.0, src_h / 2.0);

        let (span_x, span_y) = rotated_extent(src_w, src_h, theta);
        let (new_w, new_h) = (span_x as i32, span_y as i32);
        if new_w <= 0 || new_h <= 0 {
            return;
        }
        let (center_x, center_y) = (span_x / 2.0, span_y / 2.0);

        let Some(total) = (new_w as usize)
            .checked_mul(channels)
            .and_then(|row| row.checked_mul(new_h as usize))
        else {
            return;
        };
        let row_len = new_w as usize * channels;

        let inverse = Affine::rotation(-theta);
        let mut rotated = vec![0u8; total];

        let texture = self.texture();
        for (j, row) in rotated.chunks_exact_mut(row_len).enumerate() {
            for (i, px) in row.chunks_exact_mut(channels).enumerate() {
                // canvas pixel relative to the canvas center, y up
                let (ox, oy) = inverse.apply(i as f32 - center_x, center_y - j as f32);
                let u = (ox + half_w) / src_w;
                let v = (half_h - oy) / src_h;
                if (0.0..1.0).contains(&u) && (0.0..1.0).contains(&v) {
                    if let Some(gray) = texture.texcoord_get(u, v) {
                        px.fill(gray);
                    }
                }
            }
        }

        self.data = rotated;
        self.width = new_w;
        self.height = new_h;
        self.rotation_radians = radians;
    }
}
