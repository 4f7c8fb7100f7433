use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// `RUST_LOG` wins, then an explicit level from the config, then the verbosity default.
fn default_filter(verbose: bool, level: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| match level {
        Some(level) => EnvFilter::new(format!("dinosaur_facts={}", level)),
        None if verbose => EnvFilter::new("dinosaur_facts=debug,info"),
        None => EnvFilter::new("dinosaur_facts=info"),
    })
}

pub fn init_cli_logger(verbose: bool, level: Option<&str>) {
    tracing_subscriber::registry()
        .with(default_filter(verbose, level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

/// JSON lines on stderr, for runs whose logs are collected by another tool.
pub fn init_json_logger(verbose: bool, level: Option<&str>) {
    tracing_subscriber::registry()
        .with(default_filter(verbose, level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .with_writer(std::io::stderr)
                .json(),
        )
        .init();
}
