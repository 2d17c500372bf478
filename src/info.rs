use crate::bmp::BmpHeader;
use crate::error::GrayError;

/// Image file formats the loaders dispatch on.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    /// Legacy Windows bitmap, extension `bmp`.
    Bmp,
}

impl ImageFormat {
    /// Match the text after the last `.` in `path`, case-sensitively.
    ///
    /// `Photo.BMP` and extension-less paths give `None`.
    pub fn from_path(path: impl AsRef<std::path::Path>) -> Option<Self> {
        let path = path.as_ref().to_str()?;
        let (_, ext) = path.rsplit_once('.')?;
        Self::from_extension(ext)
    }

    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "bmp" => Some(Self::Bmp),
            _ => None,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Bmp => "bmp",
        }
    }
}

/// Header facts read without decoding pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    /// Row count, regardless of storage order.
    pub height: u32,
    pub bits_per_pixel: u16,
    /// Raw compression field; the decoder does not act on it.
    pub compression: u32,
    /// Rows are stored top row first (negative height field).
    pub top_down: bool,
    pub format: ImageFormat,
}

impl ImageInfo {
    /// Probe bitmap bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self, GrayError> {
        let header = BmpHeader::parse(data)?;
        let (width, height) = header.extents()?;
        Ok(Self {
            width,
            height,
            bits_per_pixel: header.bits_per_pixel,
            compression: header.compression,
            top_down: header.top_down(),
            format: ImageFormat::Bmp,
        })
    }
}
