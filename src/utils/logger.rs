use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn build_filter(verbose: bool, configured: Option<&str>) -> EnvFilter {
    // RUST_LOG wins over the config file, which wins over the defaults
    EnvFilter::try_from_default_env().unwrap_or_else(|_| match (configured, verbose) {
        (Some(filter), _) => EnvFilter::new(filter),
        (None, true) => EnvFilter::new("autoshop_records=debug,info"),
        (None, false) => EnvFilter::new("autoshop_records=info"),
    })
}

pub fn init_cli_logger(verbose: bool, configured: Option<&str>) {
    // stdout is reserved for record output
    tracing_subscriber::registry()
        .with(build_filter(verbose, configured))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

pub fn init_json_logger(verbose: bool, configured: Option<&str>) {
    tracing_subscriber::registry()
        .with(build_filter(verbose, configured))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(),
        )
        .init();
}
