pub mod file_preferences;
