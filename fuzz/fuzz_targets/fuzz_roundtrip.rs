#![no_main]
use libfuzzer_sys::fuzz_target;
use zengray::*;

fuzz_target!(|data: &[u8]| {
    // Anything that decodes must survive an 8-bit re-encode unchanged
    let limits = Limits::with_max_pixels(1 << 24);
    let Ok(decoded) = DecodeRequest::new(data)
        .with_limits(&limits)
        .decode(enough::Unstoppable)
    else {
        return;
    };
    let Ok(reencoded) = encode_bmp(&decoded, BmpDepth::Indexed8, enough::Unstoppable) else {
        panic!("decoded image failed to encode");
    };
    let Ok(decoded2) = decode_bmp(&reencoded, enough::Unstoppable) else {
        panic!("re-encoded data failed to decode");
    };

    assert_eq!(decoded.pixels(), decoded2.pixels(), "roundtrip pixel mismatch");
    assert_eq!(decoded.width(), decoded2.width());
    assert_eq!(decoded.height(), decoded2.height());
});
