//! Tracing setup for the server binary: a console layer and a
//! daily-rolling log file layer, each with its own level filter.

use std::path::Path;

use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};


#[derive(Debug, Error)]
pub enum TracingInitializationError {
    #[error("unable to set the global tracing subscriber")]
    UnableToSetGlobalSubscriber {
        #[from]
        #[source]
        error: tracing_subscriber::util::TryInitError,
    },
}


/// Initializes tracing with a console and a file output, each filtered
/// by the corresponding [`EnvFilter`].
///
/// The returned [`WorkerGuard`] must be kept alive for the duration of
/// the program; dropping it flushes and shuts down the background
/// log-file writer.
pub fn initialize_tracing(
    console_output_filter: EnvFilter,
    log_file_output_filter: EnvFilter,
    log_file_output_directory: &Path,
    log_file_name_prefix: &str,
) -> Result<WorkerGuard, TracingInitializationError> {
    let rolling_file_appender =
        tracing_appender::rolling::daily(log_file_output_directory, log_file_name_prefix);

    let (non_blocking_file_writer, worker_guard) =
        tracing_appender::non_blocking(rolling_file_appender);


    let console_layer = tracing_subscriber::fmt::layer()
        .with_filter(console_output_filter);

    let log_file_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(non_blocking_file_writer)
        .with_filter(log_file_output_filter);


    tracing_subscriber::registry()
        .with(console_layer)
        .with(log_file_layer)
        .try_init()?;

    Ok(worker_guard)
}
