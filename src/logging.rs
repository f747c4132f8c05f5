use tracing_subscriber::EnvFilter;

/// Initialize diagnostic logging on stderr.
///
/// Logging stays off unless `debug` is set, so stdout carries nothing but
/// the checksum.
pub fn init_logging(debug: bool) {
    let directive = if debug { "apk_checksum=debug" } else { "off" };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(directive))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
