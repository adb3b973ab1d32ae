pub mod auth_screen;
pub mod blocking_task;
pub mod document_store;
pub mod identity_provider;
pub mod image_codec;
pub mod image_picker;
pub mod preferences;
