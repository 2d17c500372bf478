//! Hand-built bitmap fixtures: header variants, row order, depths, and
//! damaged input.

use enough::Unstoppable;
use zengray::*;

/// Build a bitmap from rows given in file order. Rows are padded to a 4-byte
/// stride; 8-bit files get a 256-entry table filled with `0xAB` so a decoder
/// that applied it would be caught.
fn bitmap(width: i32, height: i32, bpp: u16, file_rows: &[&[u8]]) -> Vec<u8> {
    let stride = ((width as usize * bpp as usize).div_ceil(8)).div_ceil(4) * 4;
    let palette = if bpp == 8 { 1024 } else { 0 };
    let offset = 54 + palette;

    let mut out = Vec::new();
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&((offset + stride * file_rows.len()) as u32).to_le_bytes());
    out.extend_from_slice(&[0u8; 4]);
    out.extend_from_slice(&(offset as u32).to_le_bytes());
    out.extend_from_slice(&40u32.to_le_bytes());
    out.extend_from_slice(&width.to_le_bytes());
    out.extend_from_slice(&height.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes());
    out.extend_from_slice(&bpp.to_le_bytes());
    out.extend_from_slice(&[0u8; 24]);
    out.resize(offset, 0xAB);
    for row in file_rows {
        let mut padded = row.to_vec();
        padded.resize(stride, 0xEE);
        out.extend_from_slice(&padded);
    }
    out
}

// ── Luma and depths ─────────────────────────────────────────────────

#[test]
fn luma_of_single_24bit_pixel() {
    let bytes = bitmap(1, 1, 24, &[&[255, 0, 0]]);
    let image = decode_bmp(&bytes, Unstoppable).unwrap();
    assert_eq!((image.width(), image.height()), (1, 1));
    assert_eq!(image.pixels(), &[87]);
}

#[test]
fn luma_truncates_each_pixel() {
    let bytes = bitmap(3, 1, 24, &[&[0, 255, 0, 0, 0, 255, 10, 20, 30]]);
    let image = decode_bmp(&bytes, Unstoppable).unwrap();
    // (16*255)/32, (5*255)/32, (110+320+150)/32
    assert_eq!(image.pixels(), &[127, 39, 18]);
}

#[test]
fn eight_bit_ignores_palette_and_copies_index() {
    let bytes = bitmap(3, 1, 8, &[&[0, 100, 255]]);
    let image = decode_bmp(&bytes, Unstoppable).unwrap();
    assert_eq!(image.pixels(), &[0, 100, 255]);
}

#[test]
fn thirty_two_bit_copies_leading_byte() {
    let bytes = bitmap(2, 1, 32, &[&[9, 1, 2, 3, 7, 4, 5, 6]]);
    let image = decode_bmp(&bytes, Unstoppable).unwrap();
    assert_eq!(image.pixels(), &[9, 7]);
}

#[test]
fn sixteen_bit_copies_low_byte() {
    let bytes = bitmap(3, 1, 16, &[&[1, 2, 3, 4, 5, 6]]);
    let image = decode_bmp(&bytes, Unstoppable).unwrap();
    assert_eq!(image.pixels(), &[1, 3, 5]);
}

#[test]
fn padding_bytes_are_skipped() {
    // width 2 at 24 bits: 6 data bytes + 2 padding per row
    let bytes = bitmap(
        2,
        -2,
        24,
        &[&[32, 32, 32, 64, 64, 64], &[96, 96, 96, 128, 128, 128]],
    );
    let image = decode_bmp(&bytes, Unstoppable).unwrap();
    assert_eq!(image.pixels(), &[32, 64, 96, 128]);
}

// ── Row order ───────────────────────────────────────────────────────

#[test]
fn negative_height_keeps_file_row_order() {
    let bytes = bitmap(2, -2, 8, &[&[10, 11], &[20, 21]]);
    let image = decode_bmp(&bytes, Unstoppable).unwrap();
    assert_eq!((image.width(), image.height()), (2, 2));
    assert_eq!(image.row(0), &[10, 11]);
    assert_eq!(image.row(1), &[20, 21]);
}

#[test]
fn positive_height_puts_last_file_row_on_top() {
    let bytes = bitmap(2, 2, 8, &[&[10, 11], &[20, 21]]);
    let image = decode_bmp(&bytes, Unstoppable).unwrap();
    assert_eq!(image.row(0), &[20, 21]);
    assert_eq!(image.row(1), &[10, 11]);
}

#[test]
fn probe_reports_row_order() {
    let bytes = bitmap(4, -3, 24, &[&[0; 12], &[0; 12], &[0; 12]]);
    let info = ImageInfo::from_bytes(&bytes).unwrap();
    assert_eq!(info.width, 4);
    assert_eq!(info.height, 3);
    assert_eq!(info.bits_per_pixel, 24);
    assert!(info.top_down);
    assert_eq!(info.format, ImageFormat::Bmp);
}

// ── Damaged input ───────────────────────────────────────────────────

#[test]
fn truncated_header_leaves_destination_untouched() {
    let bytes = bitmap(2, 2, 8, &[&[1, 2], &[3, 4]]);
    let mut image = GrayImage::from_vec(1, 2, vec![5, 6]).unwrap();
    let err = DecodeRequest::new(&bytes[..30])
        .decode_into(&mut image, Unstoppable)
        .unwrap_err();
    assert!(matches!(err, GrayError::UnexpectedEof), "{err:?}");
    assert_eq!((image.width(), image.height()), (1, 2));
    assert_eq!(image.pixels(), &[5, 6]);
}

#[test]
fn truncated_pixel_array_reads_as_zero() {
    let mut bytes = bitmap(2, -2, 8, &[&[1, 2], &[3, 4]]);
    // keep first row (4 bytes with padding) and one byte of the second
    bytes.truncate(54 + 1024 + 5);
    let image = decode_bmp(&bytes, Unstoppable).unwrap();
    assert_eq!(image.pixels(), &[1, 2, 3, 0]);
}

#[test]
fn zero_width_is_rejected() {
    let bytes = bitmap(0, 2, 8, &[]);
    let err = decode_bmp(&bytes, Unstoppable).unwrap_err();
    assert!(matches!(err, GrayError::InvalidHeader(_)), "{err:?}");
}

#[test]
fn zero_bit_depth_is_rejected() {
    let bytes = bitmap(2, 1, 0, &[]);
    assert!(decode_bmp(&bytes, Unstoppable).is_err());
}

#[test]
fn limits_reject_large() {
    let bytes = bitmap(4, 4, 8, &[&[0; 4], &[0; 4], &[0; 4], &[0; 4]]);
    let limits = Limits::with_max_pixels(15);
    let result = DecodeRequest::new(&bytes)
        .with_limits(&limits)
        .decode(Unstoppable);
    match result.unwrap_err() {
        GrayError::LimitExceeded(_) => {}
        other => panic!("expected LimitExceeded, got {other:?}"),
    }

    let roomy = Limits::with_max_pixels(16);
    assert!(
        DecodeRequest::new(&bytes)
            .with_limits(&roomy)
            .decode(Unstoppable)
            .is_ok()
    );
}

#[test]
fn memory_limit_counts_output_bytes() {
    // 3x2 at 24 bits: 6 output bytes; padded rows are read in place
    let bytes = bitmap(3, 2, 24, &[&[0; 9], &[0; 9]]);
    let tight = Limits {
        max_memory_bytes: Some(5),
        ..Default::default()
    };
    assert!(
        DecodeRequest::new(&bytes)
            .with_limits(&tight)
            .decode(Unstoppable)
            .is_err()
    );
    let exact = Limits {
        max_memory_bytes: Some(6),
        ..Default::default()
    };
    assert!(
        DecodeRequest::new(&bytes)
            .with_limits(&exact)
            .decode(Unstoppable)
            .is_ok()
    );
}

#[test]
fn header_only_file_with_huge_extents_is_limited() {
    let bytes = bitmap(40_000, 40_000, 24, &[]);
    assert_eq!(bytes.len(), 54);
    let limits = Limits {
        max_memory_bytes: Some(1 << 20),
        ..Default::default()
    };
    let mut image = GrayImage::from_vec(1, 1, vec![3]).unwrap();
    let err = DecodeRequest::new(&bytes)
        .with_limits(&limits)
        .decode_into(&mut image, Unstoppable)
        .unwrap_err();
    assert!(matches!(err, GrayError::LimitExceeded(_)), "{err:?}");
    assert_eq!(image.pixels(), &[3]);
}

#[test]
fn unallocatable_extents_error_instead_of_aborting() {
    let bytes = bitmap(i32::MAX, i32::MAX, 8, &[]);
    let err = decode_bmp(&bytes, Unstoppable).unwrap_err();
    assert!(matches!(err, GrayError::DimensionsTooLarge { .. }), "{err:?}");
}

#[test]
fn short_file_with_large_extents_decodes_present_rows() {
    // top-down 3000x2000 at 24 bits, only the first row present
    let row: Vec<u8> = (0..3000).flat_map(|_| [64u8, 64, 64]).collect();
    let bytes = bitmap(3000, -2000, 24, &[&row]);
    let image = decode_bmp(&bytes, Unstoppable).unwrap();
    assert_eq!((image.width(), image.height()), (3000, 2000));
    assert_eq!(image.storage().len(), 3000 * 2000);
    assert!(image.row(0).iter().all(|&v| v == 64));
    assert!(image.row(1).iter().all(|&v| v == 0));
    assert!(image.row(1999).iter().all(|&v| v == 0));
}

#[test]
fn decode_reuses_larger_destination() {
    let bytes = bitmap(2, 1, 8, &[&[7, 8]]);
    let mut image = GrayImage::new();
    image.allocate(4, 4);
    image.storage_mut()[15] = 0x5A;

    DecodeRequest::new(&bytes)
        .decode_into(&mut image, Unstoppable)
        .unwrap();
    assert_eq!((image.width(), image.height()), (2, 1));
    assert_eq!(image.pixels(), &[7, 8]);
    assert_eq!(image.storage().len(), 16);
    assert_eq!(image.storage()[15], 0x5A);
}
