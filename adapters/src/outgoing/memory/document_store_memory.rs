use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use dashmap::DashMap;
use tokio::task::spawn_blocking;
use tracing::{debug, instrument};

use chat_auth_application::{
    error::{AppError, AppResult},
    ports::outgoing::document_store::DocumentStorePort,
};
use domain::profile::{Document, DocumentFields};

use crate::outgoing::json_file::snapshot::JsonSnapshot;

/// On disk: collection name, then document id, then fields.
type StoredCollections = BTreeMap<String, BTreeMap<String, DocumentFields>>;

#[derive(Default)]
struct Documents {
    by_key: DashMap<(String, String), DocumentFields>,
    snapshot: Option<JsonSnapshot>,
}

impl Documents {
    fn persist(&self) -> AppResult<()> {
        let Some(snapshot) = &self.snapshot else {
            return Ok(());
        };
        snapshot.write_with(|| {
            let mut collections = StoredCollections::new();
            for entry in &self.by_key {
                let (collection, id) = entry.key();
                collections
                    .entry(collection.clone())
                    .or_default()
                    .insert(id.clone(), entry.value().clone());
            }
            collections
        })
    }
}

/// Document store kept in a concurrent map, optionally mirrored to a JSON
/// file so documents outlive the process.
#[derive(Default)]
pub struct MemoryDocumentStoreAdapter {
    documents: Arc<Documents>,
}

impl MemoryDocumentStoreAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn persistent(path: &Path) -> AppResult<Self> {
        let snapshot = JsonSnapshot::new(path);
        let stored: StoredCollections = snapshot.load()?;

        let by_key = DashMap::new();
        for (collection, documents) in stored {
            for (id, fields) in documents {
                by_key.insert((collection.clone(), id), fields);
            }
        }
        debug!(documents = by_key.len(), "Emulator documents loaded");

        Ok(Self {
            documents: Arc::new(Documents {
                by_key,
                snapshot: Some(snapshot),
            }),
        })
    }
}

#[async_trait::async_trait]
impl DocumentStorePort for MemoryDocumentStoreAdapter {
    #[instrument(skip(self))]
    async fn get(&self, collection: &str, id: &str) -> AppResult<Option<Document>> {
        let key = (collection.to_string(), id.to_string());
        Ok(self
            .documents
            .by_key
            .get(&key)
            .map(|fields| Document::new(id, fields.clone())))
    }

    #[instrument(skip(self, fields))]
    async fn set(&self, collection: &str, id: &str, fields: &DocumentFields) -> AppResult<()> {
        self.documents
            .by_key
            .insert((collection.to_string(), id.to_string()), fields.clone());

        let documents = Arc::clone(&self.documents);
        spawn_blocking(move || documents.persist())
            .await
            .map_err(|e| AppError::TaskError {
                message: format!("document store task failed: {e}"),
            })??;

        debug!("Document stored");
        Ok(())
    }
}
