pub mod console_auth_screen;
