//! ptable-render — turns query outcomes into text.
//!
//! The renderer is the only consumer of the three-way [`QueryOutcome`]
//! contract in this workspace:
//!
//! - `Single` → one element card
//! - `List` → one card per record, or "No elements found." when empty
//! - `Missing` → an informational line (not found) or a warning (invalid
//!   argument)

pub mod json;
pub mod markdown;

use ptable_core::config::{Config, OutputFormat};
use ptable_core::QueryOutcome;

/// Shown for an empty result list.
pub const NO_RESULTS: &str = "No elements found.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub format: OutputFormat,
    /// Include the `Appearance` line on Markdown cards.
    pub show_appearance: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Markdown,
            show_appearance: true,
        }
    }
}

impl From<&Config> for RenderOptions {
    fn from(cfg: &Config) -> Self {
        Self {
            format: cfg.output.format,
            show_appearance: cfg.output.show_appearance,
        }
    }
}

/// Render `outcome` in the configured format. Only JSON output can fail.
pub fn render(outcome: &QueryOutcome<'_>, opts: &RenderOptions) -> serde_json::Result<String> {
    match opts.format {
        OutputFormat::Markdown => Ok(markdown::render(outcome, opts.show_appearance)),
        OutputFormat::Json => json::render(outcome),
    }
}

/// Render the selection list of phases offered for state queries.
pub fn render_phases(phases: &[&str], format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Markdown => Ok(phases
            .iter()
            .map(|p| format!("- {p}"))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => json::render_phases(phases),
    }
}
