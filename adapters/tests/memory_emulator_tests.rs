use std::collections::BTreeMap;
use std::path::Path;

use chat_auth_adapters::outgoing::memory::{
    document_store_memory::MemoryDocumentStoreAdapter, identity_memory::MemoryIdentityAdapter,
};
use chat_auth_adapters::outgoing::passwords::argon2::Argon2PasswordHasher;
use chat_auth_application::ports::outgoing::document_store::DocumentStorePort;
use chat_auth_application::ports::outgoing::identity_provider::IdentityProviderPort;
use tempfile::TempDir;

fn fast_hasher() -> Argon2PasswordHasher {
    Argon2PasswordHasher::with_custom_params(1024, 1, 1).unwrap()
}

fn identity() -> MemoryIdentityAdapter {
    MemoryIdentityAdapter::new(fast_hasher())
}

fn persistent_identity(path: &Path) -> MemoryIdentityAdapter {
    MemoryIdentityAdapter::persistent(fast_hasher(), path).unwrap()
}

#[tokio::test]
async fn created_account_can_authenticate() {
    let identity = identity();

    let created = identity
        .create_account("Ann@Example.com", "secret1")
        .await
        .unwrap();
    let signed_in = identity
        .authenticate("ann@example.com", "secret1")
        .await
        .unwrap();

    assert_eq!(created.uid, signed_in.uid);
}

#[tokio::test]
async fn duplicate_email_is_rejected_with_provider_code() {
    let identity = identity();
    identity.create_account("a@b.com", "secret1").await.unwrap();

    let err = identity
        .create_account("a@b.com", "secret2")
        .await
        .unwrap_err();

    assert_eq!(err.detail(), "EMAIL_EXISTS");
}

#[tokio::test]
async fn wrong_password_and_unknown_email_use_provider_codes() {
    let identity = identity();
    identity.create_account("a@b.com", "secret1").await.unwrap();

    let wrong = identity.authenticate("a@b.com", "nope").await.unwrap_err();
    let unknown = identity.authenticate("c@d.com", "secret1").await.unwrap_err();

    assert_eq!(wrong.detail(), "INVALID_PASSWORD");
    assert_eq!(unknown.detail(), "EMAIL_NOT_FOUND");
}

#[tokio::test]
async fn short_password_is_weak() {
    let err = identity().create_account("a@b.com", "abc").await.unwrap_err();

    assert!(err.detail().starts_with("WEAK_PASSWORD"));
}

#[tokio::test]
async fn document_store_replaces_whole_document() {
    let store = MemoryDocumentStoreAdapter::new();
    let first = BTreeMap::from([
        ("name".to_string(), "Ann".to_string()),
        ("image".to_string(), "x".to_string()),
    ]);
    let second = BTreeMap::from([("name".to_string(), "Anne".to_string())]);

    assert!(store.get("users", "u1").await.unwrap().is_none());

    store.set("users", "u1", &first).await.unwrap();
    store.set("users", "u1", &second).await.unwrap();

    let document = store.get("users", "u1").await.unwrap().unwrap();
    assert_eq!(document.id, "u1");
    assert_eq!(document.fields, second);
}

#[tokio::test]
async fn given_persistent_identity_when_reopened_then_account_still_signs_in() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("accounts.json");

    let created = persistent_identity(&path)
        .create_account("ann@example.com", "secret1")
        .await
        .unwrap();

    let reopened = persistent_identity(&path);
    let signed_in = reopened
        .authenticate("ann@example.com", "secret1")
        .await
        .unwrap();
    let duplicate = reopened
        .create_account("ann@example.com", "secret1")
        .await
        .unwrap_err();

    assert_eq!(created.uid, signed_in.uid);
    assert_eq!(duplicate.detail(), "EMAIL_EXISTS");
}

#[tokio::test]
async fn given_persistent_identity_then_file_never_holds_the_password() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("accounts.json");

    persistent_identity(&path)
        .create_account("ann@example.com", "plain-secret")
        .await
        .unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.contains("ann@example.com"));
    assert!(!raw.contains("plain-secret"));
}

#[tokio::test]
async fn given_persistent_documents_when_reopened_then_document_is_found() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("documents.json");
    let fields = BTreeMap::from([
        ("userId".to_string(), "u1".to_string()),
        ("name".to_string(), "Ann".to_string()),
    ]);

    MemoryDocumentStoreAdapter::persistent(&path)
        .unwrap()
        .set("users", "u1", &fields)
        .await
        .unwrap();

    let reopened = MemoryDocumentStoreAdapter::persistent(&path).unwrap();
    let document = reopened.get("users", "u1").await.unwrap().unwrap();

    assert_eq!(document.fields, fields);
    assert!(reopened.get("users", "u2").await.unwrap().is_none());
}
