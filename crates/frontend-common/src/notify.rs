//! Global warning hook
//!
//! The application registers a callback (typically its snackbar) and the
//! API client reports session expiry through it, without components having
//! to check for it themselves.

use autodash_http::client::Notifier;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::warn;

thread_local! {
    /// Global warning callback
    static WARNING_CALLBACK: RefCell<Option<Rc<dyn Fn(&str)>>> = RefCell::new(None);
}

/// Set the global warning callback
pub fn set_warning_callback(callback: Rc<dyn Fn(&str)>) {
    WARNING_CALLBACK.with(|cb| {
        *cb.borrow_mut() = Some(callback);
    });
}

/// Clear the warning callback
pub fn clear_warning_callback() {
    WARNING_CALLBACK.with(|cb| {
        *cb.borrow_mut() = None;
    });
}

/// Show a warning through the callback, or log it when none is set
pub fn show_warning(message: &str) {
    // Cloned out so the callback may replace itself
    let callback = WARNING_CALLBACK.with(|cb| cb.borrow().clone());
    match callback {
        Some(callback) => callback(message),
        None => warn!("{message}"),
    }
}

/// Notifier that forwards to [`show_warning`]
#[derive(Debug, Default, Clone, Copy)]
pub struct CallbackNotifier;

impl Notifier for CallbackNotifier {
    fn warn(&self, message: &str) {
        show_warning(message);
    }
}
