use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log file name under the system temp directory, truncated on every start.
const LOG_FILE: &str = "hfs.last.log";

/// Install the dual-sink subscriber: human-readable output on stdout plus
/// JSON records in the log file. `RUST_LOG` overrides the configured level.
///
/// The returned guard must be held for the process lifetime or buffered
/// records are lost on shutdown.
pub fn init(level: &str) -> WorkerGuard {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let log_path = std::env::temp_dir().join(LOG_FILE);
    let log_file = std::fs::File::create(&log_path).expect("Failed to open log file");
    let (non_blocking, guard) = tracing_appender::non_blocking(log_file);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stdout))
        .with(fmt::layer().json().with_ansi(false).with_writer(non_blocking))
        .init();

    guard
}
