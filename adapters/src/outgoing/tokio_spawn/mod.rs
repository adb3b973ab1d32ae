pub mod jpeg_blocking_tokio;
