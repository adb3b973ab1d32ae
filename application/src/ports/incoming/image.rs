use domain::forms::EncodedImage;

#[async_trait::async_trait]
pub trait ImageCaptureUseCase: Send + Sync {
    /// `None` when the picker was cancelled or the picked image could not be read.
    async fn capture_profile_image(&self) -> Option<EncodedImage>;
}
