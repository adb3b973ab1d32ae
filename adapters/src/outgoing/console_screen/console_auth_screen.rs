use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use tracing::{debug, info};

use chat_auth_application::ports::outgoing::auth_screen::AuthScreenPort;

/// Screen for terminal use: notifications and navigation go to the log, and
/// the latest state is kept for the caller to inspect.
#[derive(Default)]
pub struct ConsoleAuthScreen {
    loading: AtomicBool,
    navigations: AtomicUsize,
    last_message: Mutex<Option<String>>,
}

impl ConsoleAuthScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::Relaxed)
    }

    pub fn navigation_count(&self) -> usize {
        self.navigations.load(Ordering::Relaxed)
    }

    pub fn last_message(&self) -> Option<String> {
        self.last_message.lock().ok().and_then(|m| m.clone())
    }
}

impl AuthScreenPort for ConsoleAuthScreen {
    fn set_loading(&self, loading: bool) {
        self.loading.store(loading, Ordering::Relaxed);
        debug!(loading, "Loading state changed");
    }

    fn show_message(&self, message: &str) {
        if let Ok(mut last) = self.last_message.lock() {
            *last = Some(message.to_string());
        }
        info!(notification = message, "💬 Notification");
    }

    fn navigate_to_main(&self) {
        self.navigations.fetch_add(1, Ordering::Relaxed);
        info!("➡️  Navigating to main screen");
    }
}
