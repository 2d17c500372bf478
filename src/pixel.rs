/// Packed source encodings understood by [`crate::unpack_pixels`].
///
/// Gray is the plain average of the raw channel fields. Fields are not
/// rescaled to a common bit depth first, so a white 565 pixel averages to 41,
/// not 255.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PackedFormat {
    /// Tag 0. One byte per pixel, already gray; alpha is 255.
    Gray8,
    /// Tag 3. Little-endian u16: R in bits 0..5, G in 5..11, B in 11..16;
    /// alpha is 255.
    Rgb565,
    /// Tag 4. Little-endian u16: A in bits 0..4, R in 4..8, G in 8..12,
    /// B in 12..16.
    Argb4444,
    /// Any other tag. Four bytes per pixel; gray from the first three, alpha
    /// from the fourth.
    Rgba8,
}

impl PackedFormat {
    /// Map an integer format tag; unknown tags fall back to [`PackedFormat::Rgba8`].
    pub fn from_tag(tag: i32) -> Self {
        match tag {
            0 => Self::Gray8,
            3 => Self::Rgb565,
            4 => Self::Argb4444,
            _ => Self::Rgba8,
        }
    }

    /// Bytes per source pixel.
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            Self::Gray8 => 1,
            Self::Rgb565 | Self::Argb4444 => 2,
            Self::Rgba8 => 4,
        }
    }

    /// Decode one pixel into `(gray, alpha)`.
    ///
    /// `px` must hold at least [`bytes_per_pixel`](Self::bytes_per_pixel) bytes.
    pub(crate) fn decode(self, px: &[u8]) -> (u8, u8) {
        match self {
            Self::Gray8 => (px[0], 255),
            Self::Rgb565 => {
                let word = u16::from_le_bytes([px[0], px[1]]);
                let r = word & 0x1f;
                let g = (word >> 5) & 0x3f;
                let b = (word >> 11) & 0x1f;
                (average3(r, g, b), 255)
            }
            Self::Argb4444 => {
                let word = u16::from_le_bytes([px[0], px[1]]);
                let a = word & 0xf;
                let r = (word >> 4) & 0xf;
                let g = (word >> 8) & 0xf;
                let b = (word >> 12) & 0xf;
                (average3(r, g, b), a as u8)
            }
            Self::Rgba8 => (
                average3(px[0].into(), px[1].into(), px[2].into()),
                px[3],
            ),
        }
    }
}

fn average3(a: u16, b: u16, c: u16) -> u8 {
    ((a + b + c) / 3) as u8
}

#[cfg(test)]
mod tests {
    use super::PackedFormat;

    #[test]
    fn tags_map_to_formats() {
        assert_eq!(PackedFormat::from_tag(0), PackedFormat::Gray8);
        assert_eq!(PackedFormat::from_tag(3), PackedFormat::Rgb565);
        assert_eq!(PackedFormat::from_tag(4), PackedFormat::Argb4444);
        assert_eq!(PackedFormat::from_tag(1), PackedFormat::Rgba8);
        assert_eq!(PackedFormat::from_tag(-7), PackedFormat::Rgba8);
    }

    #[test]
    fn white_565_averages_raw_fields() {
        assert_eq!(PackedFormat::Rgb565.decode(&[0xff, 0xff]), (41, 255));
    }

    #[test]
    fn fields_565_are_low_to_high() {
        // R=31 only
        assert_eq!(PackedFormat::Rgb565.decode(&0x001fu16.to_le_bytes()), (10, 255));
        // G=63 only
        assert_eq!(PackedFormat::Rgb565.decode(&0x07e0u16.to_le_bytes()), (21, 255));
        // B=31 only
        assert_eq!(PackedFormat::Rgb565.decode(&0xf800u16.to_le_bytes()), (10, 255));
    }

    #[test]
    fn alpha_4444_comes_from_low_nibble() {
        // B=0xC, G=0x6, R=0x3, A=0x9
        let (gray, alpha) = PackedFormat::Argb4444.decode(&0xc639u16.to_le_bytes());
        assert_eq!(gray, (3 + 6 + 12) / 3);
        assert_eq!(alpha, 9);
    }

    #[test]
    fn four_byte_default_uses_fourth_byte_as_alpha() {
        assert_eq!(PackedFormat::Rgba8.decode(&[30, 60, 90, 128]), (60, 128));
        assert_eq!(PackedFormat::Gray8.decode(&[77]), (77, 255));
    }
}
