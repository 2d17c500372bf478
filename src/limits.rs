use crate::error::GrayError;

/// Resource limits applied by the bitmap decoder before it allocates.
///
/// All fields default to `None` (no limit).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Limits {
    pub max_width: Option<u32>,
    pub max_height: Option<u32>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum bytes the decoder allocates for its gray output.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Limits that reject anything with more than `pixels` samples.
    pub fn with_max_pixels(pixels: u64) -> Self {
        Self {
            max_pixels: Some(pixels),
            ..Self::default()
        }
    }

    pub(crate) fn check_extents(&self, width: u32, height: u32) -> Result<(), GrayError> {
        let exceeded = |what: &str, value: u64, max: u64| {
            GrayError::LimitExceeded(alloc::format!("{what} {value} exceeds limit {max}"))
        };
        if let Some(max) = self.max_width.filter(|&m| width > m) {
            return Err(exceeded("width", width.into(), max.into()));
        }
        if let Some(max) = self.max_height.filter(|&m| height > m) {
            return Err(exceeded("height", height.into(), max.into()));
        }
        let pixels = u64::from(width) * u64::from(height);
        if let Some(max) = self.max_pixels.filter(|&m| pixels > m) {
            return Err(exceeded("pixel count", pixels, max));
        }
        Ok(())
    }

    pub(crate) fn check_memory(&self, bytes: usize) -> Result<(), GrayError> {
        match self.max_memory_bytes {
            Some(max) if bytes as u64 > max => Err(GrayError::LimitExceeded(alloc::format!(
                "decoder needs {bytes} bytes, memory limit is {max}"
            ))),
            _ => Ok(()),
        }
    }
}
