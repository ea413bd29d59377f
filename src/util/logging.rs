use anyhow::Result;

/// Initialize the logging system.
///
/// The `verbose` flag controls whether debug logs are shown. A `RUST_LOG`
/// environment variable overrides the default filter.
pub fn init_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        "verve=debug,warn"
    } else {
        "verve=info,warn"
    };
    let env = env_logger::Env::default().default_filter_or(filter);
    env_logger::Builder::from_env(env)
        .format_timestamp_millis()
        .try_init()?;
    Ok(())
}
