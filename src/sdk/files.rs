//! File encoding helpers

use base64::{Engine as _, engine::general_purpose::STANDARD};
use std::path::Path;

use super::errors::Result;

const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

/// Read a file and return its contents as bare base64
///
/// Read failures are returned as-is; nothing is retried.
pub async fn file_to_base64<P: AsRef<Path>>(path: P) -> Result<String> {
    let bytes = tokio::fs::read(path).await?;
    Ok(STANDARD.encode(bytes))
}

/// Drop a leading `data:<mime>;base64,` prefix, if any
pub fn strip_data_url_prefix(value: &str) -> &str {
    if !value.starts_with("data:") {
        return value;
    }
    match value.split_once(',') {
        Some((_, data)) => data,
        None => value,
    }
}

/// A file ready to be sent inline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineFile {
    /// Bare base64, no data-URL prefix
    pub data: String,
    pub mime_type: String,
}

impl InlineFile {
    pub fn from_bytes(bytes: &[u8], mime_type: impl Into<String>) -> Self {
        Self {
            data: STANDARD.encode(bytes),
            mime_type: mime_type.into(),
        }
    }

    /// Load a file, guessing its MIME type from the extension
    pub async fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        Ok(Self {
            data: file_to_base64(path).await?,
            mime_type: mime_type_for(path).to_string(),
        })
    }

    /// Parse a `data:<mime>;base64,<data>` URL such as an image result
    pub fn from_data_url(data_url: &str) -> Option<Self> {
        let header = data_url.strip_prefix("data:")?.split_once(',')?.0;
        let mime_type = header.strip_suffix(";base64")?;
        Some(Self {
            data: strip_data_url_prefix(data_url).to_string(),
            mime_type: mime_type.to_string(),
        })
    }

    pub fn is_video(&self) -> bool {
        self.mime_type.starts_with("video/")
    }

    pub fn decode(&self) -> Result<Vec<u8>> {
        STANDARD.decode(&self.data).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e).into()
        })
    }
}

/// MIME type for a path, by extension
pub fn mime_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("heic") => "image/heic",
        Some("heif") => "image/heif",
        Some("mp4") => "video/mp4",
        Some("mov") => "video/quicktime",
        Some("webm") => "video/webm",
        Some("mpeg" | "mpg") => "video/mpeg",
        Some("avi") => "video/x-msvideo",
        Some("3gp") => "video/3gpp",
        _ => DEFAULT_MIME_TYPE,
    }
}
