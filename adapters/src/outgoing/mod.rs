pub mod console_screen;
pub mod firebase_reqwest;
pub mod image_files;
pub mod image_rs;
pub mod json_file;
pub mod memory;
pub mod passwords;
pub mod preferences_json;
pub mod tokio_spawn;
