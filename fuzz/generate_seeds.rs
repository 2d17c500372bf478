#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn bitmap(width: i32, height: i32, bpp: u16, pixels: &[u8]) -> Vec<u8> {
    let palette = if bpp == 8 { 1024 } else { 0 };
    let offset = 54 + palette;
    let mut out = vec![0u8; offset];
    out[0] = b'B';
    out[1] = b'M';
    out[2..6].copy_from_slice(&((offset + pixels.len()) as u32).to_le_bytes());
    out[10..14].copy_from_slice(&(offset as u32).to_le_bytes());
    out[14..18].copy_from_slice(&40u32.to_le_bytes());
    out[18..22].copy_from_slice(&width.to_le_bytes());
    out[22..26].copy_from_slice(&height.to_le_bytes());
    out[26..28].copy_from_slice(&1u16.to_le_bytes());
    out[28..30].copy_from_slice(&bpp.to_le_bytes());
    out.extend_from_slice(pixels);
    out
}

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // 1x1 24-bit, bottom-up
    fs::write(format!("{dir}/bmp_1x1_24.bmp"), bitmap(1, 1, 24, &[0xff, 0, 0, 0])).unwrap();

    // 3x2 8-bit, top-down
    let rows = [0x00, 0x40, 0x80, 0x00, 0xc0, 0xff, 0x64, 0x00];
    fs::write(format!("{dir}/bmp_3x2_8_topdown.bmp"), bitmap(3, -2, 8, &rows)).unwrap();

    // 2x1 32-bit
    let px = [1, 2, 3, 4, 5, 6, 7, 8];
    fs::write(format!("{dir}/bmp_2x1_32.bmp"), bitmap(2, 1, 32, &px)).unwrap();

    // 2x2 16-bit with truncated pixel array
    fs::write(format!("{dir}/bmp_2x2_16_short.bmp"), bitmap(2, 2, 16, &[9, 9])).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/bm_short.bin"), b"BM\x00\x00").unwrap();
    fs::write(format!("{dir}/bmp_zero_bpp.bin"), bitmap(4, 4, 0, &[])).unwrap();

    println!("Generated seed corpus in {dir}/");
}
