pub mod file_image;
