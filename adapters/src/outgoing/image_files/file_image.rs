use std::path::PathBuf;

use tracing::{debug, instrument};

use chat_auth_application::{
    error::{AppError, AppResult},
    ports::outgoing::image_picker::{ContentRef, ImagePickerPort, ImageSourcePort},
};

/// Picker whose choice was made up front, e.g. from a command-line flag.
/// No path means the user cancelled.
pub struct PresetImagePicker {
    selected: Option<PathBuf>,
}

impl PresetImagePicker {
    pub fn new(selected: Option<PathBuf>) -> Self {
        Self { selected }
    }
}

#[async_trait::async_trait]
impl ImagePickerPort for PresetImagePicker {
    async fn pick(&self) -> Option<ContentRef> {
        self.selected
            .as_ref()
            .map(|path| ContentRef(path.display().to_string()))
    }
}

/// Resolves content references as local file paths.
#[derive(Default)]
pub struct FileImageSource;

impl FileImageSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl ImageSourcePort for FileImageSource {
    #[instrument(skip(self))]
    async fn open(&self, content: &ContentRef) -> AppResult<Vec<u8>> {
        let bytes = tokio::fs::read(&content.0)
            .await
            .map_err(|e| AppError::ResourceError {
                message: format!("{}: {}", content, e),
            })?;
        debug!("Read {} bytes", bytes.len());
        Ok(bytes)
    }
}
