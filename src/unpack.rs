use crate::error::GrayError;
use crate::image::{GrayImage, area};
use crate::pixel::PackedFormat;

/// Unpack already-decoded texture pixels into a gray plane and, optionally,
/// an alpha plane.
///
/// Both outputs are sized to `width x height` with [`GrayImage::allocate`].
/// With `flip_y` the source rows are stored bottom-up (graphics-API upload
/// order) and destination row `j` reads source row `height - 1 - j`;
/// otherwise rows are copied in order.
///
/// Non-positive extents are a no-op. `data` shorter than
/// `width * height * bytes_per_pixel` is rejected before either output is
/// touched.
pub fn unpack_pixels(
    gray: &mut GrayImage,
    mut alpha: Option<&mut GrayImage>,
    width: i32,
    height: i32,
    data: &[u8],
    format: PackedFormat,
    flip_y: bool,
) -> Result<(), GrayError> {
    let Some(pixels) = area(width, height) else {
        return Ok(());
    };
    let bpp = format.bytes_per_pixel();
    let needed = pixels
        .checked_mul(bpp)
        .ok_or(GrayError::DimensionsTooLarge {
            width: width.into(),
            height: height.into(),
        })?;
    if data.len() < needed {
        return Err(GrayError::BufferTooSmall {
            needed,
            actual: data.len(),
        });
    }

    gray.allocate(width, height);
    if let Some(alpha) = alpha.as_deref_mut() {
        alpha.allocate(width, height);
    }

    let (w, h) = (width as usize, height as usize);
    let src_stride = w * bpp;
    for j in 0..h {
        let src_row = if flip_y { h - 1 - j } else { j };
        let src = &data[src_row * src_stride..(src_row + 1) * src_stride];
        let gray_row = gray.row_mut(j);
        match alpha.as_deref_mut() {
            Some(alpha) => {
                let alpha_row = alpha.row_mut(j);
                for (i, px) in src.chunks_exact(bpp).enumerate() {
                    (gray_row[i], alpha_row[i]) = format.decode(px);
                }
            }
            None => {
                for (out, px) in gray_row.iter_mut().zip(src.chunks_exact(bpp)) {
                    *out = format.decode(px).0;
                }
            }
        }
    }
    Ok(())
}
