use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use tokio::task::spawn_blocking;

use chat_auth_application::{
    error::{AppError, AppResult},
    ports::outgoing::{blocking_task::JpegEncodingPort, image_codec::DynImageCodecPort},
};

/// Runs the JPEG re-encode on tokio's blocking pool.
pub struct TokioJpegEncodingAdapter {
    codec_port: DynImageCodecPort,
}

impl TokioJpegEncodingAdapter {
    pub fn new(codec_port: DynImageCodecPort) -> Self {
        Self { codec_port }
    }
}

impl JpegEncodingPort for TokioJpegEncodingAdapter {
    fn reencode_jpeg(
        &self,
        image_data: Vec<u8>,
    ) -> Pin<Box<dyn Future<Output = AppResult<Vec<u8>>> + Send + 'static>> {
        let codec = Arc::clone(&self.codec_port);

        Box::pin(async move {
            spawn_blocking(move || codec.reencode_jpeg(&image_data))
                .await
                .map_err(|e| AppError::TaskError {
                    message: format!("JPEG encoding task failed: {e}"),
                })?
        })
    }
}
