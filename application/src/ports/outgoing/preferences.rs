use std::sync::Arc;

use crate::error::AppResult;

pub trait PreferencesPort: Send + Sync {
    fn put_bool(&self, key: &str, value: bool) -> AppResult<()>;
    fn put_string(&self, key: &str, value: &str) -> AppResult<()>;
    fn get_bool(&self, key: &str) -> AppResult<bool>;
    fn get_string(&self, key: &str) -> AppResult<Option<String>>;
    fn clear(&self) -> AppResult<()>;
}

pub type DynPreferencesPort = Arc<dyn PreferencesPort>;
