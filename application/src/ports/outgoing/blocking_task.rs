use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::error::AppResult;

pub trait JpegEncodingPort: Send + Sync {
    fn reencode_jpeg(
        &self,
        image_data: Vec<u8>,
    ) -> Pin<Box<dyn Future<Output = AppResult<Vec<u8>>> + Send + 'static>>;
}

pub type DynJpegEncodingPort = Arc<dyn JpegEncodingPort>;
