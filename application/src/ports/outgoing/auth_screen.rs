use std::sync::Arc;

/// Presentation side effects of the auth screens.
pub trait AuthScreenPort: Send + Sync {
    fn set_loading(&self, loading: bool);
    fn show_message(&self, message: &str);
    fn navigate_to_main(&self);
}

pub type DynAuthScreenPort = Arc<dyn AuthScreenPort>;
