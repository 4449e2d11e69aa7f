//! Session collaborators: token persistence, navigation, notification and timers

use super::ClientError;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

/// Route the user is sent to once their session expires
pub const LANDING_ROUTE: &str = "/";

/// Delay before navigating away after a session expiry
pub const REDIRECT_DELAY: Duration = Duration::from_secs(2);

/// Warning shown to the user when their session expires
pub const SESSION_EXPIRED_MESSAGE: &str = "Your session has expired. Please log in again.";

/// Persistent storage for the bearer token
pub trait TokenStore: Send + Sync {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str) -> Result<(), ClientError>;
    fn remove(&self);
}

/// Access to the current page location
pub trait Navigator: Send + Sync {
    fn current_path(&self) -> String;
    fn navigate(&self, route: &str);
}

/// User-facing warning channel (snackbar, toast, console)
pub trait Notifier: Send + Sync {
    fn warn(&self, message: &str);
}

/// Deferred execution
pub trait Scheduler: Send + Sync {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce() + Send>);
}

/// Token store that lives as long as the process
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.token
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set(&self, token: &str) -> Result<(), ClientError> {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_string());
        Ok(())
    }

    fn remove(&self) {
        self.token
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
    }
}

/// Navigator for environments without a page: it only records where it was sent
#[derive(Debug, Default)]
pub struct DetachedNavigator {
    path: Mutex<String>,
}

impl Navigator for DetachedNavigator {
    fn current_path(&self) -> String {
        self.path
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn navigate(&self, route: &str) {
        info!(route, "Navigation requested");
        *self.path.lock().unwrap_or_else(PoisonError::into_inner) = route.to_string();
    }
}

/// Notifier that writes warnings to the log
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn warn(&self, message: &str) {
        warn!("{message}");
    }
}

/// Scheduler that runs tasks right away, ignoring the delay
#[derive(Debug, Default, Clone, Copy)]
pub struct ImmediateScheduler;

impl Scheduler for ImmediateScheduler {
    fn schedule(&self, _delay: Duration, task: Box<dyn FnOnce() + Send>) {
        task();
    }
}

/// Whether a path already shows the login or landing screen
pub fn is_landing_path(path: &str) -> bool {
    path == LANDING_ROUTE || path.is_empty() || path.contains("login")
}

/// Token store plus the capabilities needed to end a session
#[derive(Clone)]
pub(crate) struct Session {
    pub(crate) tokens: Arc<dyn TokenStore>,
    pub(crate) navigator: Arc<dyn Navigator>,
    pub(crate) notifier: Arc<dyn Notifier>,
    pub(crate) scheduler: Arc<dyn Scheduler>,
}

impl Session {
    /// Drop the token and, unless already there, send the user back to the landing route
    pub(crate) fn expire(&self) {
        self.tokens.remove();

        let path = self.navigator.current_path();
        if is_landing_path(&path) {
            debug!(path, "Session expired on landing page");
            return;
        }

        warn!(path, "Session expired, redirecting to {LANDING_ROUTE}");
        self.notifier.warn(SESSION_EXPIRED_MESSAGE);

        let navigator = Arc::clone(&self.navigator);
        self.scheduler.schedule(
            REDIRECT_DELAY,
            Box::new(move || navigator.navigate(LANDING_ROUTE)),
        );
    }
}
