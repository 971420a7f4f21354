//! Command-line front end.
//!
//! Each subcommand maps onto exactly one engine query. Exit codes:
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | record(s) shown, or an informational "not found" / "no results" |
//! | 1 | dataset could not be loaded (returned as an error from [`run`]) |
//! | 2 | rejected input or an invalid argument reported by the engine |

use crate::input;
use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use ptable_core::config::{Config, OutputFormat};
use ptable_core::{ElementTable, Notice, NoticeKind, QueryEngine, QueryOutcome};
use ptable_render::RenderOptions;
use std::path::PathBuf;

pub const EXIT_OK: u8 = 0;
pub const EXIT_INVALID: u8 = 2;

#[derive(Debug, Parser)]
#[command(name = "ptable", about = "Periodic Table Explorer — look up chemical elements")]
pub struct Cli {
    /// Read elements from this JSON file instead of the bundled table.
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// Output format (defaults to the config file's `output.format`).
    #[arg(long, value_enum, global = true)]
    pub format: Option<FormatArg>,

    /// Match element names only; do not accept symbols such as "Fe".
    #[arg(long, global = true)]
    pub exact_name: bool,

    /// Log query and loader activity to stderr.
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: SearchCommand,
}

#[derive(Debug, Clone, Subcommand)]
pub enum SearchCommand {
    /// Find an element by name or symbol.
    Name { query: String },
    /// Find an element by atomic number.
    Number {
        #[arg(value_parser = clap::value_parser!(i64).range(1..=118))]
        number: i64,
    },
    /// List every element in a given state (see `states`).
    State { state: String },
    /// List elements by proton or electron count.
    Particles {
        /// `protons` or `electrons`.
        kind: String,
        #[arg(value_parser = clap::value_parser!(i64).range(1..=118))]
        count: i64,
    },
    /// List the states present in the dataset.
    States,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Markdown,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Markdown => OutputFormat::Markdown,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

/// Rendered output plus the process exit code it implies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub text: String,
    pub code: u8,
}

impl Response {
    fn ok(text: String) -> Self {
        Self { text, code: EXIT_OK }
    }

    fn invalid(text: String) -> Self {
        Self {
            text,
            code: EXIT_INVALID,
        }
    }
}

/// Apply command-line overrides on top of the loaded configuration.
pub fn effective_config(cli: &Cli, mut config: Config) -> Config {
    if let Some(path) = &cli.data {
        config.data.path = Some(path.clone());
    }
    if let Some(format) = cli.format {
        config.output.format = format.into();
    }
    if cli.exact_name {
        config.query.match_symbols = false;
    }
    config
}

/// Load the dataset named by `config`, with operator-facing context on failure.
pub fn open_table(config: &Config) -> anyhow::Result<ElementTable> {
    match &config.data.path {
        Some(path) => config
            .data
            .open()
            .with_context(|| format!("failed to load element dataset from {}", path.display())),
        None => config
            .data
            .open()
            .context("failed to load the bundled element dataset"),
    }
}

/// Execute one subcommand against an already-loaded table.
pub fn execute(
    command: &SearchCommand,
    table: &ElementTable,
    config: &Config,
) -> anyhow::Result<Response> {
    let engine = QueryEngine::with_options(table, config.query_options());
    let opts = RenderOptions::from(config);

    let outcome = match command {
        SearchCommand::Name { query } => match input::check_name(query) {
            Ok(name) => engine.find_by_name_or_symbol(name),
            Err(err) => {
                tracing::debug!(%err, "cli: name input rejected");
                let rejected = QueryOutcome::Missing(Notice {
                    kind: NoticeKind::InvalidArgument,
                    message: err.to_string(),
                });
                return Ok(Response::invalid(ptable_render::render(&rejected, &opts)?));
            }
        },
        SearchCommand::Number { number } => engine.find_by_atomic_number(*number),
        SearchCommand::State { state } => engine.find_by_state(state.trim()),
        SearchCommand::Particles { kind, count } => {
            engine.find_by_particle_count(&input::normalize_particle_kind(kind), *count)
        }
        SearchCommand::States => {
            return Ok(Response::ok(ptable_render::render_phases(
                &table.phases(),
                config.output.format,
            )?));
        }
    };

    tracing::debug!(
        single = outcome.is_single(),
        records = outcome.records().len(),
        "cli: rendering outcome"
    );
    let text = ptable_render::render(&outcome, &opts).context("failed to render query result")?;
    Ok(match outcome {
        QueryOutcome::Missing(notice) if notice.kind == NoticeKind::InvalidArgument => {
            Response::invalid(text)
        }
        _ => Response::ok(text),
    })
}

/// Resolve configuration, load the dataset once, and answer the subcommand.
pub fn run(cli: &Cli, config: Config) -> anyhow::Result<Response> {
    let config = effective_config(cli, config);
    let table = open_table(&config)?;
    tracing::debug!(records = table.len(), command = ?cli.command, "cli: dispatching");
    execute(&cli.command, &table, &config)
}
