use crate::profile::{Document, FIELD_IMAGE, FIELD_NAME, UserProfile};

pub const KEY_IS_SIGNED_IN: &str = "isSignedIn";
pub const KEY_USER_ID: &str = "userId";
pub const KEY_NAME: &str = "name";
pub const KEY_IMAGE: &str = "image";

/// Device-local copy of the signed-in user, read by the rest of the app to
/// gate access without asking the remote services again.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalSession {
    pub signed_in: bool,
    pub user_id: String,
    pub name: String,
    pub image: String,
}

impl LocalSession {
    pub fn signed_out() -> Self {
        Self::default()
    }

    /// Session taken from a fetched profile document. The id comes from the
    /// document key; absent string fields are cached as empty strings.
    pub fn from_document(document: &Document) -> Self {
        Self {
            signed_in: true,
            user_id: document.id.clone(),
            name: document.get_str(FIELD_NAME).unwrap_or_default().to_string(),
            image: document.get_str(FIELD_IMAGE).unwrap_or_default().to_string(),
        }
    }

    pub fn from_profile(profile: &UserProfile) -> Self {
        Self {
            signed_in: true,
            user_id: profile.user_id.as_str().to_string(),
            name: profile.name.clone(),
            image: profile.image.as_str().to_string(),
        }
    }
}
