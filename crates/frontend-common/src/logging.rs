//! Browser console logging

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};
use tracing_web::MakeWebConsoleWriter;

/// Route `tracing` output to the browser console.
///
/// Safe to call more than once; only the first call installs a subscriber.
pub fn init_logging(max_level: LevelFilter) {
    let fmt_layer = fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new());

    let _ = tracing_subscriber::registry()
        .with(max_level)
        .with(fmt_layer)
        .try_init();
}
