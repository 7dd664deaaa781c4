const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

/// Install the stderr `tracing` subscriber. `--verbose` wins over the
/// `LOG_LEVEL` environment variable.
pub(crate) fn init(verbose: bool) {
    let env_val = std::env::var("LOG_LEVEL").ok();
    let (log_level, warning) = log_level_for(verbose, env_val.as_deref());

    // stdout carries rendered documents only.
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Initial logging level set to `{log_level}`.");

    if let Some(warning) = warning {
        log::warn!("{warning}");
    }
}

/// Pick the log level, plus a warning when `LOG_LEVEL` is not understood.
pub(crate) fn log_level_for(
    verbose: bool,
    env_val: Option<&str>,
) -> (tracing::Level, Option<String>) {
    if verbose {
        return (tracing::Level::DEBUG, None);
    }
    match env_val.map(str::trim) {
        None => (DEFAULT_LOG_LEVEL, None),
        Some(level) => match level.to_ascii_uppercase().as_str() {
            "DEBUG" | "VERBOSE" => (tracing::Level::DEBUG, None),
            "INFO" => (tracing::Level::INFO, None),
            "TRACE" => (tracing::Level::TRACE, None),
            _ => (
                DEFAULT_LOG_LEVEL,
                Some(format!(
                    "Invalid `LOG_LEVEL` environment variable value: \
                    `{level}`"
                )),
            ),
        },
    }
}
