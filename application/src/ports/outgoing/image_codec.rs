use crate::error::AppResult;
use std::sync::Arc;

pub trait ImageCodecPort: Send + Sync {
    /// Decodes any supported image format and re-encodes it as JPEG.
    fn reencode_jpeg(&self, image_data: &[u8]) -> AppResult<Vec<u8>>;
}

pub type DynImageCodecPort = Arc<dyn ImageCodecPort>;
