use base64::{Engine, engine::general_purpose::STANDARD};
use tracing::{debug, instrument, warn};

use crate::ports::incoming::image::ImageCaptureUseCase;
use crate::ports::outgoing::blocking_task::DynJpegEncodingPort;
use crate::ports::outgoing::image_picker::{DynImagePickerPort, DynImageSourcePort};
use domain::forms::EncodedImage;

/// Turns a picked image into the base64 JPEG text stored on the profile.
///
/// Read and decode failures are logged and dropped; the caller only sees
/// `None`, the same as a cancelled pick.
pub struct ImageCaptureService {
    picker: DynImagePickerPort,
    source: DynImageSourcePort,
    encoder: DynJpegEncodingPort,
}

impl ImageCaptureService {
    pub fn new(
        picker: DynImagePickerPort,
        source: DynImageSourcePort,
        encoder: DynJpegEncodingPort,
    ) -> Self {
        Self {
            picker,
            source,
            encoder,
        }
    }
}

#[async_trait::async_trait]
impl ImageCaptureUseCase for ImageCaptureService {
    #[instrument(skip(self))]
    async fn capture_profile_image(&self) -> Option<EncodedImage> {
        let content = self.picker.pick().await?;

        let raw = match self.source.open(&content).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!(content = %content, error = %e, "Could not open picked image");
                return None;
            }
        };

        let jpeg = match self.encoder.reencode_jpeg(raw).await {
            Ok(jpeg) => jpeg,
            Err(e) => {
                warn!(content = %content, error = %e, "Could not re-encode picked image");
                return None;
            }
        };

        debug!("Encoded profile image: {} JPEG bytes", jpeg.len());
        EncodedImage::new(STANDARD.encode(jpeg)).ok()
    }
}
