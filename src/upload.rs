use image::ImageFormat;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

const PREVIEW_MAX_SIDE: u32 = 512;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UploadError {
    #[error("The uploaded file is empty")]
    Empty,
    #[error("Unsupported image format ({0}), please upload a JPEG or PNG")]
    UnsupportedFormat(String),
    #[error("Could not decode image: {0}")]
    Decode(String),
    #[error("Could not read {path}: {reason}")]
    Read { path: String, reason: String },
}

#[derive(Clone, PartialEq)]
pub struct ImagePreview {
    pub width: u32,
    pub height: u32,
    pub rgba: Arc<[u8]>,
}

/// An image the user picked, validated as a non-empty JPEG or PNG.
///
/// Bytes are shared so the value can be cloned into states and effects freely.
#[derive(Clone)]
pub struct UploadedImage {
    name: String,
    format: ImageFormat,
    bytes: Arc<[u8]>,
    preview: ImagePreview,
}

impl UploadedImage {
    pub fn from_bytes(name: impl Into<String>, bytes: Vec<u8>) -> Result<Self, UploadError> {
        if bytes.is_empty() {
            return Err(UploadError::Empty);
        }

        let format = image::guess_format(&bytes)
            .map_err(|_| UploadError::UnsupportedFormat("unknown".to_string()))?;

        if !matches!(format, ImageFormat::Jpeg | ImageFormat::Png) {
            return Err(UploadError::UnsupportedFormat(format!("{:?}", format)));
        }

        let decoded = image::load_from_memory_with_format(&bytes, format)
            .map_err(|e| UploadError::Decode(e.to_string()))?;

        let thumbnail = if decoded.width().max(decoded.height()) > PREVIEW_MAX_SIDE {
            decoded.thumbnail(PREVIEW_MAX_SIDE, PREVIEW_MAX_SIDE).to_rgba8()
        } else {
            decoded.to_rgba8()
        };
        let (width, height) = thumbnail.dimensions();

        Ok(Self {
            name: name.into(),
            format,
            bytes: Arc::from(bytes),
            preview: ImagePreview {
                width,
                height,
                rgba: Arc::from(thumbnail.into_raw()),
            },
        })
    }

    pub fn from_path(path: &Path) -> Result<Self, UploadError> {
        let bytes = std::fs::read(path).map_err(|e| UploadError::Read {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());

        Self::from_bytes(name, bytes)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn mime_type(&self) -> &'static str {
        match self.format {
            ImageFormat::Png => "image/png",
            _ => "image/jpeg",
        }
    }

    pub fn preview(&self) -> &ImagePreview {
        &self.preview
    }
}

impl PartialEq for UploadedImage {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && (Arc::ptr_eq(&self.bytes, &other.bytes) || self.bytes == other.bytes)
    }
}

impl fmt::Debug for UploadedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadedImage")
            .field("name", &self.name)
            .field("format", &self.format)
            .field("bytes", &self.bytes.len())
            .finish()
    }
}

impl fmt::Debug for ImagePreview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ImagePreview({}x{})", self.width, self.height)
    }
}

#[cfg(test)]
pub mod test_images {
    use image::{DynamicImage, ImageFormat, RgbImage};
    use std::io::Cursor;

    pub fn encoded(width: u32, height: u32, format: ImageFormat) -> Vec<u8> {
        let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(
            width,
            height,
            image::Rgb([120, 200, 40]),
        ));
        let mut buffer = Cursor::new(Vec::new());
        image.write_to(&mut buffer, format).unwrap();
        buffer.into_inner()
    }

    pub fn png() -> Vec<u8> {
        encoded(4, 3, ImageFormat::Png)
    }

    pub fn jpeg() -> Vec<u8> {
        encoded(4, 3, ImageFormat::Jpeg)
    }
}
