use crate::model::error::system::SystemError;
use crate::model::error::Error;
use std::io;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

pub struct Logging;

impl Logging {
    /// Installs the stdout subscriber. Log lines are flushed when the returned guard drops.
    pub fn initialize() -> Result<WorkerGuard, Error> {
        let (writer, guard) = tracing_appender::non_blocking(io::stdout());
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(writer)
            .with_target(false)
            .without_time()
            .try_init()
            .map_err(|err| SystemError::LoggingInitFailed {
                cause: err.to_string(),
            })?;

        log_panics::init();
        Ok(guard)
    }
}
