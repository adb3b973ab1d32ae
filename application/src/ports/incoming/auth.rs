use crate::error::AppResult;
use domain::forms::{SignInForm, SignUpForm};
use domain::session::LocalSession;

#[async_trait::async_trait]
pub trait AuthFlowUseCase: Send + Sync {
    async fn sign_in(&self, form: SignInForm) -> AppResult<LocalSession>;
    async fn sign_up(&self, form: SignUpForm) -> AppResult<LocalSession>;
}
