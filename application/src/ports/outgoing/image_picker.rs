use std::fmt;
use std::sync::Arc;

use crate::error::AppResult;

/// Reference to a picked resource, resolved later by an `ImageSourcePort`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentRef(pub String);

impl fmt::Display for ContentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[async_trait::async_trait]
pub trait ImagePickerPort: Send + Sync {
    /// `None` when the user cancelled.
    async fn pick(&self) -> Option<ContentRef>;
}

#[async_trait::async_trait]
pub trait ImageSourcePort: Send + Sync {
    async fn open(&self, content: &ContentRef) -> AppResult<Vec<u8>>;
}

pub type DynImagePickerPort = Arc<dyn ImagePickerPort>;
pub type DynImageSourcePort = Arc<dyn ImageSourcePort>;
