use std::collections::HashMap;
use std::sync::Arc;

use base64::Engine;
use error_stack::{Report, ResultExt};
use tokio::sync::RwLock;
use uuid::Uuid;

use kernel::interface::storage::ImageStorage;
use kernel::prelude::entity::DriverLicenseImageId;
use kernel::KernelError;

#[derive(Clone, Default)]
pub struct InMemoryImageStorage {
    images: Arc<RwLock<HashMap<DriverLicenseImageId, Vec<u8>>>>,
}

impl InMemoryImageStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decoded bytes of a stored image.
    pub async fn get(&self, id: &DriverLicenseImageId) -> Option<Vec<u8>> {
        self.images.read().await.get(id).cloned()
    }
}

#[async_trait::async_trait]
impl ImageStorage for InMemoryImageStorage {
    async fn upload_base64(
        &self,
        content: &str,
    ) -> error_stack::Result<DriverLicenseImageId, KernelError> {
        if content.trim().is_empty() {
            return Err(Report::new(KernelError::Validation)
                .attach_printable("Driver license image is empty"));
        }
        let bytes = base64::engine::general_purpose::STANDARD
            .decode(content.trim())
            .change_context(KernelError::Validation)
            .attach_printable("Driver license image is not valid base64")?;
        let id = DriverLicenseImageId::new(Uuid::new_v4().to_string());
        self.images.write().await.insert(id.clone(), bytes);
        Ok(id)
    }

    async fn remove(&self, id: &DriverLicenseImageId) -> error_stack::Result<(), KernelError> {
        if self.images.write().await.remove(id).is_none() {
            tracing::debug!(image = ?id, "image to remove was already absent");
        }
        Ok(())
    }
}
