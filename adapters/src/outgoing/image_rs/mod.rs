pub mod jpeg_codec_image;
