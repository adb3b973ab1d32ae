//! Both flows end to end over the in-memory backend

use std::io::Cursor;
use std::path::PathBuf;

use chat_auth_application::infrastructure_config::{
    BackendKind, Config, MemoryConfig, PreferencesBackend, PreferencesConfig,
};
use cli::bootstrap::state::AppState;
use cli::commands::{self, Command};
use domain::forms::{SignInForm, SignUpForm};
use image::{ImageFormat, Rgb, RgbImage};
use tempfile::TempDir;

fn memory_config(dir: &TempDir) -> Config {
    Config {
        backend: BackendKind::Memory,
        memory: MemoryConfig {
            data_dir: dir.path().join("emulator"),
        },
        preferences: PreferencesConfig {
            backend: PreferencesBackend::File,
            path: dir.path().join("prefs.json"),
        },
        ..Config::default()
    }
}

fn write_avatar(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("avatar.png");
    let img = RgbImage::from_pixel(4, 4, Rgb([10, 200, 30]));
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    std::fs::write(&path, bytes).unwrap();
    path
}

#[tokio::test]
async fn sign_up_then_sign_in_caches_the_same_profile() {
    let dir = TempDir::new().unwrap();
    let avatar = write_avatar(&dir);
    let state = AppState::new(&memory_config(&dir), Some(avatar)).unwrap();

    let image = state.image_capture.capture_profile_image().await;
    assert!(image.is_some());

    let form = SignUpForm::new("Ann", "ann@example.com", "secret1", "secret1").with_avatar(image);
    let created = state.auth_flow.sign_up(form).await.unwrap();

    let signed_in = state
        .auth_flow
        .sign_in(SignInForm::new("ann@example.com", "secret1"))
        .await
        .unwrap();

    assert_eq!(created, signed_in);
    assert_eq!(state.session.current().unwrap(), signed_in);
    assert_eq!(state.screen.navigation_count(), 2);
}

#[tokio::test]
async fn sign_in_to_unknown_account_reports_provider_code() {
    let dir = TempDir::new().unwrap();
    let state = AppState::new(&memory_config(&dir), None).unwrap();

    let err = state
        .auth_flow
        .sign_in(SignInForm::new("nobody@example.com", "secret1"))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Unable to sign in: EMAIL_NOT_FOUND");
    assert_eq!(
        state.screen.last_message().as_deref(),
        Some("Unable to sign in: EMAIL_NOT_FOUND")
    );
    assert!(!state.screen.is_loading());
    assert!(!state.session.current().unwrap().signed_in);
}

#[tokio::test]
async fn sign_up_without_image_fails_validation() {
    let dir = TempDir::new().unwrap();
    let state = AppState::new(&memory_config(&dir), None).unwrap();

    let result = commands::run(
        Command::SignUp {
            name: "Ann".to_string(),
            email: "ann@example.com".to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret1".to_string(),
            image: None,
        },
        &state,
    )
    .await;

    assert_eq!(
        result.unwrap_err().to_string(),
        "Please Select a Profile Image"
    );
}

#[tokio::test]
async fn sign_out_clears_the_cached_session() {
    let dir = TempDir::new().unwrap();
    let avatar = write_avatar(&dir);
    let state = AppState::new(&memory_config(&dir), Some(avatar.clone())).unwrap();

    commands::run(
        Command::SignUp {
            name: "Ann".to_string(),
            email: "ann@example.com".to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret1".to_string(),
            image: Some(avatar),
        },
        &state,
    )
    .await
    .unwrap();
    assert!(state.session.current().unwrap().signed_in);

    commands::run(Command::SignOut, &state).await.unwrap();

    assert!(!state.session.current().unwrap().signed_in);
}

#[tokio::test]
async fn account_created_in_one_run_signs_in_from_the_next() {
    let dir = TempDir::new().unwrap();
    let avatar = write_avatar(&dir);
    let config = memory_config(&dir);

    {
        let first_run = AppState::new(&config, Some(avatar.clone())).unwrap();
        commands::run(
            Command::SignUp {
                name: "Ann".to_string(),
                email: "ann@example.com".to_string(),
                password: "secret1".to_string(),
                confirm_password: "secret1".to_string(),
                image: Some(avatar),
            },
            &first_run,
        )
        .await
        .unwrap();
        commands::run(Command::SignOut, &first_run).await.unwrap();
    }

    let second_run = AppState::new(&config, None).unwrap();
    let session = second_run
        .auth_flow
        .sign_in(SignInForm::new("ann@example.com", "secret1"))
        .await
        .unwrap();

    assert!(session.signed_in);
    assert_eq!(session.name, "Ann");
    assert_eq!(second_run.session.current().unwrap(), session);
}
