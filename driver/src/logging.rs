use std::path::Path;

use error_stack::ResultExt;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

use kernel::KernelError;

static DEFAULT_FILTER: &str = "application=debug,driver=debug,kernel=debug";

/// Installs the global subscriber: stdout filtered by `RUST_LOG` and a daily rolling
/// `debug.log` under `directory`. Keep the returned guard alive to flush the file.
pub fn init(directory: impl AsRef<Path>) -> error_stack::Result<WorkerGuard, KernelError> {
    let appender = tracing_appender::rolling::daily(directory.as_ref(), "debug.log");
    let (non_blocking_appender, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_filter(tracing_subscriber::EnvFilter::new(
                    std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_FILTER.into()),
                ))
                .with_filter(tracing_subscriber::filter::LevelFilter::DEBUG),
        )
        .with(
            tracing_subscriber::fmt::Layer::default()
                .with_writer(non_blocking_appender)
                .with_ansi(false)
                .with_filter(tracing_subscriber::filter::LevelFilter::DEBUG),
        )
        .try_init()
        .change_context_lazy(|| KernelError::Internal)
        .attach_printable_lazy(|| "Failed to install the tracing subscriber")?;
    Ok(guard)
}
