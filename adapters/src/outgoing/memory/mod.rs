pub mod document_store_memory;
pub mod identity_memory;
pub mod preferences_memory;
