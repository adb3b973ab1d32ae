use std::sync::Arc;

use crate::error::AppResult;
use domain::profile::{Document, DocumentFields};

#[async_trait::async_trait]
pub trait DocumentStorePort: Send + Sync {
    /// `Ok(None)` when the document does not exist.
    async fn get(&self, collection: &str, id: &str) -> AppResult<Option<Document>>;

    /// Replaces the whole document with `fields`.
    async fn set(&self, collection: &str, id: &str, fields: &DocumentFields) -> AppResult<()>;
}

pub type DynDocumentStorePort = Arc<dyn DocumentStorePort>;
