//! Nearest-texel lookups used by the resamplers.

/// Borrowed row-major view that answers "what sample is at this coordinate".
///
/// Both lookups return `None` for coordinates outside the texture instead of
/// clamping or wrapping; resamplers turn that into a zero sample.
#[derive(Clone, Copy, Debug)]
pub struct Texture<'a> {
    width: usize,
    height: usize,
    data: &'a [u8],
}

impl<'a> Texture<'a> {
    /// View `data` as `width x height`. Samples past the end of `data` read
    /// as unavailable.
    pub fn new(width: usize, height: usize, data: &'a [u8]) -> Self {
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Sample at integer pixel coordinates.
    pub fn texcoord_get_pixel(&self, x: i32, y: i32) -> Option<u8> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(y * self.width + x).copied()
    }

    /// Sample at normalized coordinates in `[0, 1)`; texel `floor(u * width)`,
    /// `floor(v * height)`.
    pub fn texcoord_get(&self, u: f32, v: f32) -> Option<u8> {
        if !(0.0..1.0).contains(&u) || !(0.0..1.0).contains(&v) {
            return None;
        }
        if self.width == 0 || self.height == 0 {
            return None;
        }
        // u < 1 can still land on `width` after rounding for very wide textures
        let x = ((u * self.width as f32) as usize).min(self.width - 1);
        let y = ((v * self.height as f32) as usize).min(self.height - 1);
        self.data.get(y * self.width + x).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::Texture;

    #[test]
    fn pixel_lookup_rejects_out_of_bounds() {
        let data = [0u8, 1, 2, 10, 11, 12];
        let tex = Texture::new(3, 2, &data);

        assert_eq!(tex.texcoord_get_pixel(2, 1), Some(12));
        assert_eq!(tex.texcoord_get_pixel(0, 0), Some(0));
        assert_eq!(tex.texcoord_get_pixel(3, 0), None);
        assert_eq!(tex.texcoord_get_pixel(0, 2), None);
        assert_eq!(tex.texcoord_get_pixel(-1, 0), None);
    }

    #[test]
    fn normalized_lookup_picks_floor_texel() {
        let data = [0u8, 1, 2, 10, 11, 12];
        let tex = Texture::new(3, 2, &data);

        assert_eq!(tex.texcoord_get(0.0, 0.0), Some(0));
        assert_eq!(tex.texcoord_get(0.5, 0.25), Some(1));
        assert_eq!(tex.texcoord_get(0.99, 0.99), Some(12));
        assert_eq!(tex.texcoord_get(1.0, 0.5), None);
        assert_eq!(tex.texcoord_get(0.5, -0.01), None);
        assert_eq!(tex.texcoord_get(f32::NAN, 0.5), None);
    }

    #[test]
    fn short_backing_slice_reads_as_missing() {
        let data = [7u8, 8, 9];
        let tex = Texture::new(2, 2, &data);
        assert_eq!(tex.texcoord_get_pixel(0, 1), Some(9));
        assert_eq!(tex.texcoord_get_pixel(1, 1), None);
    }
}
