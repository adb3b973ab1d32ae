use std::path::PathBuf;
use std::sync::Arc;

use reqwest::Client;

use chat_auth_adapters::outgoing::{
    console_screen::console_auth_screen::ConsoleAuthScreen,
    firebase_reqwest::{
        firestore_documents::FirestoreDocumentAdapter, identity_toolkit::FirebaseIdentityAdapter,
        session::FirebaseSession,
    },
    image_files::file_image::{FileImageSource, PresetImagePicker},
    image_rs::jpeg_codec_image::{ImageJpegAdapter, ImageJpegConfig},
    passwords::argon2::Argon2PasswordHasher,
    memory::{
        document_store_memory::MemoryDocumentStoreAdapter, identity_memory::MemoryIdentityAdapter,
        preferences_memory::MemoryPreferencesAdapter,
    },
    preferences_json::file_preferences::JsonFilePreferences,
    tokio_spawn::jpeg_blocking_tokio::TokioJpegEncodingAdapter,
};
use chat_auth_application::error::AppError;
use chat_auth_application::infrastructure_config::{BackendKind, Config, PreferencesBackend};
use chat_auth_application::ports::incoming::{
    auth::AuthFlowUseCase, image::ImageCaptureUseCase, session::SessionUseCase,
};
use chat_auth_application::ports::outgoing::{
    document_store::DynDocumentStorePort, identity_provider::DynIdentityProviderPort,
    preferences::DynPreferencesPort,
};
use chat_auth_application::{
    auth::service::AuthFlowService, image::service::ImageCaptureService,
    session::service::SessionCache,
};

pub struct AppState {
    pub auth_flow: Arc<dyn AuthFlowUseCase>,
    pub image_capture: Arc<dyn ImageCaptureUseCase>,
    pub session: Arc<dyn SessionUseCase>,
    pub screen: Arc<ConsoleAuthScreen>,
}

impl AppState {
    /// `image_path` is what the image picker hands back; `None` behaves like
    /// a cancelled pick.
    pub fn new(config: &Config, image_path: Option<PathBuf>) -> Result<Self, AppError> {
        let (identity, documents) = Self::create_remote_ports(config)?;
        let session_cache = SessionCache::new(Self::create_preferences(config)?);
        let screen = Arc::new(ConsoleAuthScreen::new());

        let auth_flow = Arc::new(AuthFlowService::new(
            identity,
            documents,
            session_cache.clone(),
            Arc::clone(&screen) as _,
        ));
        let image_capture = Self::create_image_capture(config, image_path);

        Ok(Self {
            auth_flow,
            image_capture,
            session: Arc::new(session_cache),
            screen,
        })
    }

    fn create_remote_ports(
        config: &Config,
    ) -> Result<(DynIdentityProviderPort, DynDocumentStorePort), AppError> {
        match config.backend {
            BackendKind::Firebase => {
                let client = Client::builder()
                    .user_agent(concat!("chat-auth/", env!("CARGO_PKG_VERSION")))
                    .build()
                    .map_err(|e| AppError::ConfigError {
                        message: format!("Failed to build HTTP client: {}", e),
                    })?;
                let session = Arc::new(FirebaseSession::new());

                let identity: DynIdentityProviderPort = Arc::new(FirebaseIdentityAdapter::new(
                    client.clone(),
                    &config.firebase,
                    Arc::clone(&session),
                ));
                let documents: DynDocumentStorePort = Arc::new(FirestoreDocumentAdapter::new(
                    client,
                    &config.firebase,
                    session,
                ));
                Ok((identity, documents))
            }
            BackendKind::Memory => {
                let identity: DynIdentityProviderPort =
                    Arc::new(MemoryIdentityAdapter::persistent(
                        Argon2PasswordHasher::new(),
                        &config.memory.accounts_path(),
                    )?);
                let documents: DynDocumentStorePort = Arc::new(
                    MemoryDocumentStoreAdapter::persistent(&config.memory.documents_path())?,
                );
                Ok((identity, documents))
            }
        }
    }

    fn create_preferences(config: &Config) -> Result<DynPreferencesPort, AppError> {
        let preferences: DynPreferencesPort = match config.preferences.backend {
            PreferencesBackend::File => {
                Arc::new(JsonFilePreferences::open(&config.preferences.path)?)
            }
            PreferencesBackend::Memory => Arc::new(MemoryPreferencesAdapter::new()),
        };
        Ok(preferences)
    }

    fn create_image_capture(
        config: &Config,
        image_path: Option<PathBuf>,
    ) -> Arc<dyn ImageCaptureUseCase> {
        let codec = Arc::new(ImageJpegAdapter::new(ImageJpegConfig {
            quality: config.image.jpeg_quality,
        }));

        Arc::new(ImageCaptureService::new(
            Arc::new(PresetImagePicker::new(image_path)),
            Arc::new(FileImageSource::new()),
            Arc::new(TokioJpegEncodingAdapter::new(codec)),
        ))
    }
}
