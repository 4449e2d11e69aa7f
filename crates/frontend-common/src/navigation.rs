//! Page navigation and deferred tasks

use autodash_http::client::{Navigator, Scheduler};
use gloo::timers::callback::Timeout;
use gloo::utils::window;
use std::time::Duration;
use tracing::warn;

/// Navigator over `window.location`; navigating triggers a full page load
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn current_path(&self) -> String {
        window().location().pathname().unwrap_or_default()
    }

    fn navigate(&self, route: &str) {
        if let Err(err) = window().location().set_href(route) {
            warn!(?err, route, "Navigation failed");
        }
    }
}

/// Scheduler on browser timers
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce() + Send>) {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        // Dropping the handle would cancel the timer
        Timeout::new(millis, task).forget();
    }
}
