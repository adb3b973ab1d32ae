use tracing::{debug, instrument};

use crate::error::AppResult;
use crate::ports::incoming::session::SessionUseCase;
use crate::ports::outgoing::preferences::DynPreferencesPort;
use domain::session::{KEY_IMAGE, KEY_IS_SIGNED_IN, KEY_NAME, KEY_USER_ID, LocalSession};

/// Reads and writes the cached `LocalSession` through the preferences port.
#[derive(Clone)]
pub struct SessionCache {
    preferences: DynPreferencesPort,
}

impl SessionCache {
    pub fn new(preferences: DynPreferencesPort) -> Self {
        Self { preferences }
    }

    /// Overwrites every cached field. The flag is dropped before the strings
    /// change and raised only once all of them are written, so a failed write
    /// never leaves a signed-in flag next to another user's fields.
    #[instrument(skip(self, session), fields(user_id = %session.user_id))]
    pub fn store(&self, session: &LocalSession) -> AppResult<()> {
        self.preferences.put_bool(KEY_IS_SIGNED_IN, false)?;
        self.preferences.put_string(KEY_USER_ID, &session.user_id)?;
        self.preferences.put_string(KEY_NAME, &session.name)?;
        self.preferences.put_string(KEY_IMAGE, &session.image)?;
        if session.signed_in {
            self.preferences.put_bool(KEY_IS_SIGNED_IN, true)?;
        }
        debug!("Local session cached");
        Ok(())
    }

    pub fn load(&self) -> AppResult<LocalSession> {
        Ok(LocalSession {
            signed_in: self.preferences.get_bool(KEY_IS_SIGNED_IN)?,
            user_id: self
                .preferences
                .get_string(KEY_USER_ID)?
                .unwrap_or_default(),
            name: self.preferences.get_string(KEY_NAME)?.unwrap_or_default(),
            image: self.preferences.get_string(KEY_IMAGE)?.unwrap_or_default(),
        })
    }

    pub fn clear(&self) -> AppResult<()> {
        self.preferences.clear()
    }
}

impl SessionUseCase for SessionCache {
    fn current(&self) -> AppResult<LocalSession> {
        self.load()
    }

    fn sign_out(&self) -> AppResult<()> {
        self.clear()
    }
}
