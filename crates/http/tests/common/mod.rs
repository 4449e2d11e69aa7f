//! Test doubles for the session collaborators

#![allow(dead_code)]

use async_trait::async_trait;
use autodash_http::client::{
    ApiConfig, AppConfig, ClientError, ConfigSource, DashboardClient, MemoryTokenStore, Navigator,
    Notifier, Scheduler,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use wiremock::MockServer;

/// Send client logs to the test output; later calls are no-ops
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// Navigator sitting on a fixed path that records navigation requests
pub struct RecordingNavigator {
    path: String,
    visits: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn at(path: &str) -> Arc<Self> {
        Arc::new(Self {
            path: path.to_string(),
            visits: Mutex::new(Vec::new()),
        })
    }

    pub fn visits(&self) -> Vec<String> {
        self.visits.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn current_path(&self) -> String {
        self.path.clone()
    }

    fn navigate(&self, route: &str) {
        self.visits.lock().unwrap().push(route.to_string());
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn warn(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

type Task = Box<dyn FnOnce() + Send>;

/// Scheduler that holds tasks until the test runs them
#[derive(Default)]
pub struct ManualScheduler {
    tasks: Mutex<Vec<(Duration, Task)>>,
}

impl ManualScheduler {
    pub fn delays(&self) -> Vec<Duration> {
        self.tasks.lock().unwrap().iter().map(|(d, _)| *d).collect()
    }

    pub fn run_all(&self) {
        let tasks = std::mem::take(&mut *self.tasks.lock().unwrap());
        for (_, task) in tasks {
            task();
        }
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Task) {
        self.tasks.lock().unwrap().push((delay, task));
    }
}

/// Static configuration that counts how often it was loaded
#[derive(Clone)]
pub struct CountingConfig {
    api: ApiConfig,
    loads: Arc<AtomicUsize>,
}

impl CountingConfig {
    pub fn new(api: ApiConfig) -> Self {
        Self {
            api,
            loads: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn loads(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ConfigSource for CountingConfig {
    async fn load(&self) -> Result<AppConfig, ClientError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(10)).await;
        Ok(self.api.clone().into())
    }
}

/// Client wired to recording collaborators
pub struct Harness {
    pub client: DashboardClient,
    pub tokens: Arc<MemoryTokenStore>,
    pub navigator: Arc<RecordingNavigator>,
    pub notifier: Arc<RecordingNotifier>,
    pub scheduler: Arc<ManualScheduler>,
}

impl Harness {
    pub fn new(server: &MockServer, current_path: &str) -> Self {
        Self::with_config(ApiConfig::new(server.uri()), current_path)
    }

    pub fn with_config(config: ApiConfig, current_path: &str) -> Self {
        init_tracing();

        let tokens = Arc::new(MemoryTokenStore::new());
        let navigator = RecordingNavigator::at(current_path);
        let notifier = Arc::new(RecordingNotifier::default());
        let scheduler = Arc::new(ManualScheduler::default());

        let client = DashboardClient::builder()
            .config(config)
            .token_store(tokens.clone())
            .navigator(navigator.clone())
            .notifier(notifier.clone())
            .scheduler(scheduler.clone())
            .build()
            .unwrap();

        Self {
            client,
            tokens,
            navigator,
            notifier,
            scheduler,
        }
    }
}
