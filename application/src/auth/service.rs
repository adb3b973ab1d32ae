use tracing::{info, instrument, warn};

use crate::error::{AppError, AppResult};
use crate::ports::incoming::auth::AuthFlowUseCase;
use crate::ports::outgoing::auth_screen::DynAuthScreenPort;
use crate::ports::outgoing::document_store::DynDocumentStorePort;
use crate::ports::outgoing::identity_provider::DynIdentityProviderPort;
use crate::session::service::SessionCache;
use domain::forms::{SignInForm, SignUpForm};
use domain::profile::{USERS_COLLECTION, UserProfile};
use domain::session::LocalSession;
use domain::validation::{ValidationError, validate_sign_in, validate_sign_up};

/// Drives both auth screens: validate locally, then one identity call and one
/// document call, the second only after the first succeeded.
pub struct AuthFlowService {
    identity: DynIdentityProviderPort,
    documents: DynDocumentStorePort,
    session: SessionCache,
    screen: DynAuthScreenPort,
}

impl AuthFlowService {
    pub fn new(
        identity: DynIdentityProviderPort,
        documents: DynDocumentStorePort,
        session: SessionCache,
        screen: DynAuthScreenPort,
    ) -> Self {
        Self {
            identity,
            documents,
            session,
            screen,
        }
    }

    fn report(&self, result: AppResult<LocalSession>) -> AppResult<LocalSession> {
        if let Err(e) = &result {
            self.screen.show_message(&e.to_string());
        }
        result
    }

    fn stop_loading(&self, err: AppError) -> AppError {
        self.screen.set_loading(false);
        err
    }

    async fn run_sign_in(&self, form: &SignInForm) -> AppResult<LocalSession> {
        validate_sign_in(form)?;

        self.screen.set_loading(true);

        let principal = self
            .identity
            .authenticate(&form.email, form.password())
            .await
            .map_err(|e| {
                warn!(error = %e, "Authentication failed");
                self.stop_loading(AppError::SignInFailed { message: e.detail() })
            })?;

        let document = match self
            .documents
            .get(USERS_COLLECTION, principal.uid.as_str())
            .await
        {
            Ok(Some(document)) => document,
            Ok(None) => {
                warn!(user_id = %principal.uid, "No profile document for authenticated user");
                return Err(self.stop_loading(AppError::ProfileFetchFailed {
                    message: format!("{USERS_COLLECTION}/{} does not exist", principal.uid),
                }));
            }
            Err(e) => {
                warn!(user_id = %principal.uid, error = %e, "Profile fetch failed");
                return Err(self.stop_loading(AppError::ProfileFetchFailed {
                    message: e.detail(),
                }));
            }
        };

        let session = LocalSession::from_document(&document);
        self.session
            .store(&session)
            .map_err(|e| self.stop_loading(e))?;

        info!(user_id = %session.user_id, "Signed in");
        self.screen.navigate_to_main();
        Ok(session)
    }

    async fn run_sign_up(&self, form: &SignUpForm) -> AppResult<LocalSession> {
        validate_sign_up(form)?;
        let image = form.avatar.clone().ok_or(ValidationError::ImageMissing)?;

        let principal = self
            .identity
            .create_account(&form.email, form.password())
            .await
            .map_err(|e| {
                warn!(error = %e, "Account creation failed");
                AppError::SignUpFailed { message: e.detail() }
            })?;

        let profile = UserProfile {
            user_id: principal.uid,
            name: form.name.clone(),
            email: form.email.clone(),
            image,
        };

        self.documents
            .set(
                USERS_COLLECTION,
                profile.user_id.as_str(),
                &profile.to_document_fields(),
            )
            .await
            .map_err(|e| {
                // The identity account stays behind without a profile document.
                warn!(
                    user_id = %profile.user_id,
                    error = %e,
                    "Profile write failed after account creation"
                );
                AppError::ProfileSaveFailed { message: e.detail() }
            })?;

        let session = LocalSession::from_profile(&profile);
        self.session.store(&session)?;

        info!(user_id = %session.user_id, "Signed up");
        self.screen.navigate_to_main();
        Ok(session)
    }
}

#[async_trait::async_trait]
impl AuthFlowUseCase for AuthFlowService {
    #[instrument(skip(self, form), fields(email = %form.email))]
    async fn sign_in(&self, form: SignInForm) -> AppResult<LocalSession> {
        let result = self.run_sign_in(&form).await;
        self.report(result)
    }

    #[instrument(skip(self, form), fields(email = %form.email))]
    async fn sign_up(&self, form: SignUpForm) -> AppResult<LocalSession> {
        let result = self.run_sign_up(&form).await;
        self.report(result)
    }
}
