use enough::Stop;

use crate::error::GrayError;
use crate::image::GrayImage;
use crate::limits::Limits;

/// Bitmap bytes to [`GrayImage`], with optional limits and cancellation.
///
/// ```no_run
/// use zengray::{DecodeRequest, Limits, Unstoppable};
///
/// let bytes = std::fs::read("scan.bmp")?;
/// let limits = Limits::with_max_pixels(4096 * 4096);
/// let image = DecodeRequest::new(&bytes)
///     .with_limits(&limits)
///     .decode(Unstoppable)?;
/// println!("{}x{}", image.width(), image.height());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, limits: None }
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Decode into a new image.
    pub fn decode(self, stop: impl Stop) -> Result<GrayImage, GrayError> {
        let mut image = GrayImage::new();
        self.decode_into(&mut image, stop)?;
        Ok(image)
    }

    /// Decode into an existing image, reusing its storage when it is large
    /// enough. `dst` is left unchanged on error.
    pub fn decode_into(self, dst: &mut GrayImage, stop: impl Stop) -> Result<(), GrayError> {
        crate::bmp::decode_into(self.data, dst, self.limits, &stop)
    }
}

/// Decode bitmap bytes with no limits.
pub fn decode_bmp(data: &[u8], stop: impl Stop) -> Result<GrayImage, GrayError> {
    DecodeRequest::new(data).decode(stop)
}
