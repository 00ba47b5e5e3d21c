//! Client-side image upload checks.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::CoreError;

/// Image formats the CMS media fields accept from the dashboard.
pub const ALLOWED_IMAGE_FORMATS: [&str; 4] = ["jpg", "jpeg", "png", "svg"];

pub const UNSUPPORTED_FORMAT_MESSAGE: &str =
    "Unsupported file format, only .jpg, .jpeg, .png or svg are supported";

/// A file picked for upload.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for ImageUpload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageUpload")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl ImageUpload {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes: bytes.into(),
        }
    }

    /// Lowercased extension of the file name, if any.
    pub fn extension(&self) -> Option<String> {
        let (stem, ext) = self.file_name.rsplit_once('.')?;
        if stem.is_empty() || ext.is_empty() {
            return None;
        }
        Some(ext.to_ascii_lowercase())
    }

    /// Check the file against [`ALLOWED_IMAGE_FORMATS`].
    ///
    /// The extension decides when present; otherwise the MIME subtype must
    /// name one of the formats (`image/svg+xml` counts as svg).
    pub fn validate(&self) -> Result<(), CoreError> {
        let allowed = match self.extension() {
            Some(ext) => ALLOWED_IMAGE_FORMATS.contains(&ext.as_str()),
            None => {
                let subtype = self
                    .content_type
                    .split_once('/')
                    .map(|(_, sub)| sub.to_ascii_lowercase())
                    .unwrap_or_default();
                ALLOWED_IMAGE_FORMATS
                    .iter()
                    .any(|format| subtype.contains(format))
            }
        };

        if allowed {
            Ok(())
        } else {
            Err(CoreError::Validation(UNSUPPORTED_FORMAT_MESSAGE.into()))
        }
    }

    /// `data:` URL used to preview the picked file before it is uploaded.
    pub fn to_data_url(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.content_type,
            STANDARD.encode(&self.bytes)
        )
    }
}
