#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Header read and full decode must never panic
    let _ = zengray::ImageInfo::from_bytes(data);
    let limits = zengray::Limits {
        max_memory_bytes: Some(64 << 20),
        ..Default::default()
    };
    let _ = zengray::DecodeRequest::new(data)
        .with_limits(&limits)
        .decode(enough::Unstoppable);

    // Packed input of whatever size the fuzzer hands us
    if let [tag, w, h, rest @ ..] = data {
        let mut gray = zengray::GrayImage::new();
        let mut alpha = zengray::GrayImage::new();
        let _ = zengray::unpack_pixels(
            &mut gray,
            Some(&mut alpha),
            i32::from(*w),
            i32::from(*h),
            rest,
            zengray::PackedFormat::from_tag(i32::from(*tag)),
            tag & 0x80 != 0,
        );
    }
});
