use chat_auth_application::{
    error::{AppError, AppResult},
    ports::outgoing::image_codec::ImageCodecPort,
};
use image::{DynamicImage, codecs::jpeg::JpegEncoder};
use std::io::Cursor;
use tracing::{debug, instrument};

#[derive(Copy, Clone)]
pub struct ImageJpegConfig {
    pub quality: u8,
}

#[derive(Clone)]
pub struct ImageJpegAdapter {
    quality: u8,
}

impl ImageJpegAdapter {
    pub fn new(config: ImageJpegConfig) -> Self {
        Self {
            quality: config.quality.clamp(1, 100),
        }
    }

    #[instrument(skip(self, image_data), fields(input_bytes = image_data.len()))]
    fn reencode_jpeg_impl(&self, image_data: &[u8]) -> AppResult<Vec<u8>> {
        let img = image::load_from_memory(image_data).map_err(|e| AppError::CodecError {
            message: format!("Failed to decode image: {}", e),
        })?;

        // JPEG has no alpha channel.
        let rgb = DynamicImage::ImageRgb8(img.to_rgb8());

        let mut jpeg_bytes = Vec::new();
        let encoder = JpegEncoder::new_with_quality(Cursor::new(&mut jpeg_bytes), self.quality);
        rgb.write_with_encoder(encoder)
            .map_err(|e| AppError::CodecError {
                message: format!("Failed to encode JPEG: {}", e),
            })?;

        if jpeg_bytes.is_empty() {
            return Err(AppError::CodecError {
                message: "JPEG encoding produced empty output".to_string(),
            });
        }

        debug!(
            "Re-encoded {}x{} image as JPEG: {} bytes",
            rgb.width(),
            rgb.height(),
            jpeg_bytes.len()
        );
        Ok(jpeg_bytes)
    }
}

impl ImageCodecPort for ImageJpegAdapter {
    fn reencode_jpeg(&self, image_data: &[u8]) -> AppResult<Vec<u8>> {
        self.reencode_jpeg_impl(image_data)
    }
}
