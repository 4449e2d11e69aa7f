//! Browser integration for the Autodash API client

pub mod client;
pub mod config;
pub mod logging;
pub mod navigation;
pub mod notify;
pub mod storage;

pub use client::{config_url, create_client};
pub use config::FrontendConfig;
pub use logging::init_logging;
pub use navigation::{BrowserNavigator, BrowserScheduler};
pub use notify::{CallbackNotifier, clear_warning_callback, set_warning_callback, show_warning};
pub use storage::LocalStorageTokenStore;
