use std::collections::HashMap;
use std::sync::Arc;

use reqwest::{Client, RequestBuilder, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use url::Url;

use chat_auth_application::{
    error::{AppError, AppResult},
    infrastructure_config::FirebaseConfig,
    ports::outgoing::document_store::DocumentStorePort,
};
use domain::profile::{Document, DocumentFields};

use super::error_message;
use super::session::FirebaseSession;

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FirestoreValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    string_value: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FirestoreDocument {
    name: String,
    #[serde(default)]
    fields: HashMap<String, FirestoreValue>,
}

#[derive(Debug, Serialize)]
struct FirestoreWrite {
    fields: HashMap<String, FirestoreValue>,
}

/// Documents through the Firestore REST API. Only string values are read or
/// written; fields of any other type are ignored on read.
pub struct FirestoreDocumentAdapter {
    client: Client,
    base_url: String,
    project_id: String,
    database_id: String,
    api_key: SecretString,
    session: Arc<FirebaseSession>,
}

impl FirestoreDocumentAdapter {
    pub fn new(client: Client, config: &FirebaseConfig, session: Arc<FirebaseSession>) -> Self {
        Self {
            client,
            base_url: config.firestore_base_url.clone(),
            project_id: config.project_id.clone(),
            database_id: config.database_id.clone(),
            api_key: config.api_key.clone(),
            session,
        }
    }

    fn document_url(&self, collection: &str, id: &str) -> AppResult<Url> {
        let mut url = Url::parse(&self.base_url).map_err(|e| AppError::ConfigError {
            message: format!("Invalid Firestore base URL: {e}"),
        })?;

        url.path_segments_mut()
            .map_err(|()| AppError::ConfigError {
                message: "Firestore base URL cannot be a base".to_string(),
            })?
            .pop_if_empty()
            .extend([
                "v1",
                "projects",
                self.project_id.as_str(),
                "databases",
                self.database_id.as_str(),
                "documents",
                collection,
                id,
            ]);
        url.query_pairs_mut()
            .append_pair("key", self.api_key.expose_secret());

        Ok(url)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.bearer_token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

#[async_trait::async_trait]
impl DocumentStorePort for FirestoreDocumentAdapter {
    #[instrument(skip(self))]
    async fn get(&self, collection: &str, id: &str) -> AppResult<Option<Document>> {
        let url = self.document_url(collection, id)?;

        let response = self
            .authorize(self.client.get(url))
            .send()
            .await
            .map_err(|e| AppError::StoreError {
                message: e.to_string(),
            })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            debug!("Document does not exist");
            return Ok(None);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::StoreError {
                message: error_message(status, &body),
            });
        }

        let document: FirestoreDocument =
            response.json().await.map_err(|e| AppError::StoreError {
                message: format!("Malformed Firestore document: {e}"),
            })?;

        let document_id = document
            .name
            .rsplit('/')
            .next()
            .unwrap_or(id)
            .to_string();
        let fields: DocumentFields = document
            .fields
            .into_iter()
            .filter_map(|(key, value)| value.string_value.map(|v| (key, v)))
            .collect();

        debug!(fields = fields.len(), "Fetched document");
        Ok(Some(Document::new(document_id, fields)))
    }

    #[instrument(skip(self, fields))]
    async fn set(&self, collection: &str, id: &str, fields: &DocumentFields) -> AppResult<()> {
        let url = self.document_url(collection, id)?;
        let body = FirestoreWrite {
            fields: fields
                .iter()
                .map(|(key, value)| {
                    (
                        key.clone(),
                        FirestoreValue {
                            string_value: Some(value.clone()),
                        },
                    )
                })
                .collect(),
        };

        let response = self
            .authorize(self.client.patch(url))
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::StoreError {
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::StoreError {
                message: error_message(status, &body),
            });
        }

        debug!("Document written");
        Ok(())
    }
}
