pub mod auth;
pub mod error;
pub mod forms;
pub mod profile;
pub mod session;
pub mod validation;
