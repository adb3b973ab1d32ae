use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use serde_json::{Map, Value};
use tracing::{debug, instrument};

use chat_auth_application::{
    error::{AppError, AppResult},
    ports::outgoing::preferences::PreferencesPort,
};

use crate::outgoing::json_file::snapshot::JsonSnapshot;

/// Key-value preferences persisted as one JSON object, rewritten on every
/// change.
pub struct JsonFilePreferences {
    snapshot: JsonSnapshot,
    values: Mutex<Map<String, Value>>,
}

impl JsonFilePreferences {
    #[instrument]
    pub fn open(path: &Path) -> AppResult<Self> {
        let snapshot = JsonSnapshot::new(path);
        let values = match snapshot.load::<Value>()? {
            Value::Null => Map::new(),
            Value::Object(map) => map,
            _ => {
                return Err(AppError::PreferencesError {
                    message: format!("{} does not hold a JSON object", path.display()),
                });
            }
        };

        debug!(entries = values.len(), "Preferences loaded");

        Ok(Self {
            snapshot,
            values: Mutex::new(values),
        })
    }

    fn lock(&self) -> AppResult<MutexGuard<'_, Map<String, Value>>> {
        self.values.lock().map_err(|_| AppError::PreferencesError {
            message: "preferences lock poisoned".to_string(),
        })
    }

    fn persist(&self, values: &Map<String, Value>) -> AppResult<()> {
        self.snapshot.write_with(|| values)
    }

    fn put(&self, key: &str, value: Value) -> AppResult<()> {
        let mut values = self.lock()?;
        values.insert(key.to_string(), value);
        self.persist(&values)
    }
}

impl PreferencesPort for JsonFilePreferences {
    fn put_bool(&self, key: &str, value: bool) -> AppResult<()> {
        self.put(key, Value::Bool(value))
    }

    fn put_string(&self, key: &str, value: &str) -> AppResult<()> {
        self.put(key, Value::String(value.to_string()))
    }

    fn get_bool(&self, key: &str) -> AppResult<bool> {
        match self.lock()?.get(key) {
            None => Ok(false),
            Some(Value::Bool(value)) => Ok(*value),
            Some(_) => Err(AppError::PreferencesError {
                message: format!("'{key}' is not a boolean"),
            }),
        }
    }

    fn get_string(&self, key: &str) -> AppResult<Option<String>> {
        match self.lock()?.get(key) {
            None => Ok(None),
            Some(Value::String(value)) => Ok(Some(value.clone())),
            Some(_) => Err(AppError::PreferencesError {
                message: format!("'{key}' is not a string"),
            }),
        }
    }

    fn clear(&self) -> AppResult<()> {
        let mut values = self.lock()?;
        values.clear();
        self.persist(&values)
    }
}
