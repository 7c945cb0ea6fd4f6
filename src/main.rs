use clap::Parser;

mod cli;
mod commands;
mod domain;
mod services;

fn main() {
    let cli = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = commands::handle_send(&cli) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
