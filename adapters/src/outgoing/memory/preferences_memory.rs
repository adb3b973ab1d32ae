use dashmap::DashMap;
use serde_json::Value;

use chat_auth_application::{
    error::{AppError, AppResult},
    ports::outgoing::preferences::PreferencesPort,
};

/// Preferences that live as long as the process.
#[derive(Default)]
pub struct MemoryPreferencesAdapter {
    values: DashMap<String, Value>,
}

impl MemoryPreferencesAdapter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferencesPort for MemoryPreferencesAdapter {
    fn put_bool(&self, key: &str, value: bool) -> AppResult<()> {
        self.values.insert(key.to_string(), Value::Bool(value));
        Ok(())
    }

    fn put_string(&self, key: &str, value: &str) -> AppResult<()> {
        self.values
            .insert(key.to_string(), Value::String(value.to_string()));
        Ok(())
    }

    fn get_bool(&self, key: &str) -> AppResult<bool> {
        match self.values.get(key).as_deref() {
            None => Ok(false),
            Some(Value::Bool(value)) => Ok(*value),
            Some(_) => Err(AppError::PreferencesError {
                message: format!("'{key}' is not a boolean"),
            }),
        }
    }

    fn get_string(&self, key: &str) -> AppResult<Option<String>> {
        match self.values.get(key).as_deref() {
            None => Ok(None),
            Some(Value::String(value)) => Ok(Some(value.clone())),
            Some(_) => Err(AppError::PreferencesError {
                message: format!("'{key}' is not a string"),
            }),
        }
    }

    fn clear(&self) -> AppResult<()> {
        self.values.clear();
        Ok(())
    }
}
