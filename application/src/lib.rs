#[cfg(any(feature = "adapters", feature = "reqwest", feature = "image"))]
compile_error!("application must not depend on adapters/framework crates");

pub mod auth;
pub mod error;
pub mod image;
pub mod infrastructure_config;
pub mod ports;
pub mod session;

#[cfg(test)]
mod tests;
