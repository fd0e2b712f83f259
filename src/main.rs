use sourcelens::cli::CliCommand;

fn main() {
    // Logs go to stderr so stdout stays parseable; RUST_LOG overrides the
    // default level.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("sourcelens error: {err:#}");
        std::process::exit(1);
    }
}
