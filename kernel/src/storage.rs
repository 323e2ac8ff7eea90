use crate::entity::DriverLicenseImageId;
use crate::KernelError;

/// Blob storage holding courier license pictures.
#[async_trait::async_trait]
pub trait ImageStorage: 'static + Sync + Send {
    /// Stores a base64 encoded image and returns the identifier to fetch it by.
    async fn upload_base64(
        &self,
        content: &str,
    ) -> error_stack::Result<DriverLicenseImageId, KernelError>;
    async fn remove(&self, id: &DriverLicenseImageId) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnImageStorage: 'static + Sync + Send {
    type ImageStorage: ImageStorage;
    fn image_storage(&self) -> &Self::ImageStorage;
}
