use clap::Parser;
use ptable::cli::{self, Cli};
use ptable_core::config::Config;
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG").unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(if cli.debug { "debug" } else { "warn" })
            }),
        )
        .init();

    let config = Config::load().unwrap_or_else(|err| {
        tracing::warn!(%err, "config unreadable, using built-in defaults");
        Config::defaults()
    });

    let response = cli::run(&cli, config)?;
    println!("{}", response.text);
    Ok(ExitCode::from(response.code))
}
