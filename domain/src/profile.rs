use std::collections::BTreeMap;

use crate::auth::UserId;
use crate::forms::EncodedImage;

pub const USERS_COLLECTION: &str = "users";

pub const FIELD_USER_ID: &str = "userId";
pub const FIELD_NAME: &str = "name";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_IMAGE: &str = "image";

pub type DocumentFields = BTreeMap<String, String>;

/// A document as returned by the document store: its id plus string fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub id: String,
    pub fields: DocumentFields,
}

impl Document {
    pub fn new(id: impl Into<String>, fields: DocumentFields) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }
}

/// Profile document stored under `users/{user_id}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub user_id: UserId,
    pub name: String,
    pub email: String,
    pub image: EncodedImage,
}

impl UserProfile {
    pub fn to_document_fields(&self) -> DocumentFields {
        BTreeMap::from([
            (FIELD_USER_ID.to_string(), self.user_id.as_str().to_string()),
            (FIELD_NAME.to_string(), self.name.clone()),
            (FIELD_EMAIL.to_string(), self.email.clone()),
            (FIELD_IMAGE.to_string(), self.image.as_str().to_string()),
        ])
    }
}
