use chat_auth_application::infrastructure_config::{
    BackendKind, Config, PreferencesBackend, PreferencesConfig,
};
use tracing::info;

pub fn print_startup_info(config: &Config) {
    info!("⚙️  Configuration ({}):", config.environment.env);
    print_backend_info(config);
    print_preferences_info(&config.preferences);
    info!("  🖼️  Profile images: JPEG quality {}", config.image.jpeg_quality);
}

fn print_backend_info(config: &Config) {
    match config.backend {
        BackendKind::Firebase => {
            info!("  🔐 Identity: {}", config.firebase.identity_base_url);
            info!(
                "  🗄️  Documents: {} (project {}, database {})",
                config.firebase.firestore_base_url,
                config.firebase.project_id,
                config.firebase.database_id
            );
        }
        BackendKind::Memory => {
            info!(
                "  🧪 Backend: local emulator, data in {}",
                config.memory.data_dir.display()
            );
        }
    }
}

fn print_preferences_info(preferences: &PreferencesConfig) {
    match preferences.backend {
        PreferencesBackend::File => {
            info!("  📦 Preferences: {}", preferences.path.display());
        }
        PreferencesBackend::Memory => {
            info!("  📦 Preferences: in-memory");
        }
    }
}
