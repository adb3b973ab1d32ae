use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use crate::auth::service::AuthFlowService;
use crate::error::{AppError, AppResult};
use crate::ports::outgoing::auth_screen::AuthScreenPort;
use crate::ports::outgoing::blocking_task::JpegEncodingPort;
use crate::ports::outgoing::document_store::DocumentStorePort;
use crate::ports::outgoing::identity_provider::IdentityProviderPort;
use crate::ports::outgoing::image_picker::{ContentRef, ImagePickerPort, ImageSourcePort};
use crate::ports::outgoing::preferences::PreferencesPort;
use crate::session::service::SessionCache;
use domain::auth::{AuthPrincipal, UserId};
use domain::profile::{Document, DocumentFields};
use domain::session::LocalSession;

/// Ordered record of every collaborator call made during a flow.
#[derive(Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<String>>>);

impl CallLog {
    pub fn push(&self, entry: impl Into<String>) {
        self.0.lock().unwrap().push(entry.into());
    }

    pub fn entries(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }

    pub fn count(&self, prefix: &str) -> usize {
        self.entries()
            .iter()
            .filter(|e| e.starts_with(prefix))
            .count()
    }

    pub fn position(&self, prefix: &str) -> Option<usize> {
        self.entries().iter().position(|e| e.starts_with(prefix))
    }
}

pub struct FakeIdentity {
    log: CallLog,
    outcome: Result<String, String>,
}

impl FakeIdentity {
    pub fn succeeding(log: &CallLog, uid: &str) -> Self {
        Self {
            log: log.clone(),
            outcome: Ok(uid.to_string()),
        }
    }

    pub fn failing(log: &CallLog, message: &str) -> Self {
        Self {
            log: log.clone(),
            outcome: Err(message.to_string()),
        }
    }

    fn respond(&self) -> AppResult<AuthPrincipal> {
        match &self.outcome {
            Ok(uid) => Ok(AuthPrincipal::new(UserId::parse(uid.clone())?)),
            Err(message) => Err(AppError::ProviderError {
                message: message.clone(),
            }),
        }
    }
}

#[async_trait::async_trait]
impl IdentityProviderPort for FakeIdentity {
    async fn authenticate(&self, email: &str, _password: &str) -> AppResult<AuthPrincipal> {
        self.log.push(format!("authenticate:{email}"));
        self.respond()
    }

    async fn create_account(&self, email: &str, _password: &str) -> AppResult<AuthPrincipal> {
        self.log.push(format!("create_account:{email}"));
        self.respond()
    }
}

pub enum GetBehavior {
    Found(Document),
    Missing,
    Fail(String),
}

pub struct FakeDocuments {
    log: CallLog,
    get: GetBehavior,
    set_error: Option<String>,
    writes: Mutex<Vec<(String, String, DocumentFields)>>,
}

impl FakeDocuments {
    pub fn new(log: &CallLog, get: GetBehavior) -> Self {
        Self {
            log: log.clone(),
            get,
            set_error: None,
            writes: Mutex::new(Vec::new()),
        }
    }

    pub fn writable(log: &CallLog) -> Self {
        Self::new(log, GetBehavior::Missing)
    }

    pub fn failing_writes(log: &CallLog, message: &str) -> Self {
        Self {
            set_error: Some(message.to_string()),
            ..Self::writable(log)
        }
    }

    pub fn writes(&self) -> Vec<(String, String, DocumentFields)> {
        self.writes.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl DocumentStorePort for FakeDocuments {
    async fn get(&self, collection: &str, id: &str) -> AppResult<Option<Document>> {
        self.log.push(format!("get:{collection}/{id}"));
        match &self.get {
            GetBehavior::Found(document) => Ok(Some(document.clone())),
            GetBehavior::Missing => Ok(None),
            GetBehavior::Fail(message) => Err(AppError::StoreError {
                message: message.clone(),
            }),
        }
    }

    async fn set(&self, collection: &str, id: &str, fields: &DocumentFields) -> AppResult<()> {
        self.log.push(format!("set:{collection}/{id}"));
        if let Some(message) = &self.set_error {
            return Err(AppError::StoreError {
                message: message.clone(),
            });
        }
        self.writes
            .lock()
            .unwrap()
            .push((collection.to_string(), id.to_string(), fields.clone()));
        Ok(())
    }
}

#[derive(Default)]
pub struct FakePreferences {
    log: CallLog,
    values: Mutex<HashMap<String, String>>,
    failing_key: Option<String>,
}

impl FakePreferences {
    pub fn new(log: &CallLog) -> Self {
        Self {
            log: log.clone(),
            values: Mutex::new(HashMap::new()),
            failing_key: None,
        }
    }

    /// Every `put_string` for `key` fails as if the disk were full.
    pub fn failing_on(log: &CallLog, key: &str) -> Self {
        Self {
            failing_key: Some(key.to_string()),
            ..Self::new(log)
        }
    }

    pub fn seed(&self, key: &str, value: &str) {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }
}

impl PreferencesPort for FakePreferences {
    fn put_bool(&self, key: &str, value: bool) -> AppResult<()> {
        self.log.push(format!("put_bool:{key}={value}"));
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn put_string(&self, key: &str, value: &str) -> AppResult<()> {
        self.log.push(format!("put_string:{key}"));
        if self.failing_key.as_deref() == Some(key) {
            return Err(AppError::PreferencesError {
                message: format!("disk full writing {key}"),
            });
        }
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn get_bool(&self, key: &str) -> AppResult<bool> {
        Ok(self
            .values
            .lock()
            .unwrap()
            .get(key)
            .is_some_and(|v| v == "true"))
    }

    fn get_string(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.values.lock().unwrap().get(key).cloned())
    }

    fn clear(&self) -> AppResult<()> {
        self.log.push("clear");
        self.values.lock().unwrap().clear();
        Ok(())
    }
}

pub struct FakeScreen {
    log: CallLog,
}

impl FakeScreen {
    pub fn new(log: &CallLog) -> Self {
        Self { log: log.clone() }
    }
}

impl AuthScreenPort for FakeScreen {
    fn set_loading(&self, loading: bool) {
        self.log.push(format!("loading:{loading}"));
    }

    fn show_message(&self, message: &str) {
        self.log.push(format!("message:{message}"));
    }

    fn navigate_to_main(&self) {
        self.log.push("navigate");
    }
}

pub struct Harness {
    pub log: CallLog,
    pub documents: Arc<FakeDocuments>,
    pub preferences: Arc<FakePreferences>,
    pub service: AuthFlowService,
}

impl Harness {
    pub fn new(identity: FakeIdentity, documents: FakeDocuments, log: CallLog) -> Self {
        let documents = Arc::new(documents);
        let preferences = Arc::new(FakePreferences::new(&log));
        let service = AuthFlowService::new(
            Arc::new(identity),
            Arc::clone(&documents) as _,
            SessionCache::new(Arc::clone(&preferences) as _),
            Arc::new(FakeScreen::new(&log)),
        );
        Self {
            log,
            documents,
            preferences,
            service,
        }
    }

    pub fn cached_session(&self) -> LocalSession {
        SessionCache::new(Arc::clone(&self.preferences) as _)
            .load()
            .unwrap()
    }
}

pub struct FakePicker(pub Option<ContentRef>);

#[async_trait::async_trait]
impl ImagePickerPort for FakePicker {
    async fn pick(&self) -> Option<ContentRef> {
        self.0.clone()
    }
}

pub struct FakeSource(pub Result<Vec<u8>, String>);

#[async_trait::async_trait]
impl ImageSourcePort for FakeSource {
    async fn open(&self, _content: &ContentRef) -> AppResult<Vec<u8>> {
        self.0.clone().map_err(|message| AppError::ResourceError { message })
    }
}

/// Stands in for the JPEG re-encoder: prefixes the input, or fails.
pub struct FakeEncoder {
    pub fail: bool,
}

impl JpegEncodingPort for FakeEncoder {
    fn reencode_jpeg(
        &self,
        image_data: Vec<u8>,
    ) -> Pin<Box<dyn Future<Output = AppResult<Vec<u8>>> + Send + 'static>> {
        let fail = self.fail;
        Box::pin(async move {
            if fail {
                return Err(AppError::CodecError {
                    message: "not an image".to_string(),
                });
            }
            let mut out = b"JPEG:".to_vec();
            out.extend_from_slice(&image_data);
            Ok(out)
        })
    }
}
