use crate::error::AppResult;
use domain::session::LocalSession;

pub trait SessionUseCase: Send + Sync {
    fn current(&self) -> AppResult<LocalSession>;
    fn sign_out(&self) -> AppResult<()>;
}
