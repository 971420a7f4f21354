//! Markdown element cards.

use crate::NO_RESULTS;
use ptable_core::{ElementRecord, Notice, NoticeKind, QueryOutcome};

const CARD_SEPARATOR: &str = "\n\n---\n\n";

pub fn render(outcome: &QueryOutcome<'_>, show_appearance: bool) -> String {
    match outcome {
        QueryOutcome::Single(record) => card(record, show_appearance),
        QueryOutcome::List(records) if records.is_empty() => NO_RESULTS.to_string(),
        QueryOutcome::List(records) => records
            .iter()
            .map(|r| card(r, show_appearance))
            .collect::<Vec<_>>()
            .join(CARD_SEPARATOR),
        QueryOutcome::Missing(notice) => notice_line(notice),
    }
}

/// One element as a block of bold-labelled paragraphs.
pub fn card(record: &ElementRecord, show_appearance: bool) -> String {
    let mut lines = vec![
        format!("**Element Name:** {}", record.name),
        format!("**Symbol:** {}", record.symbol),
        format!("**Atomic Number:** {}", record.atomic_number),
        format!("**State:** {}", record.phase),
        format!("**Protons:** {}", record.proton_count()),
        format!("**Electrons:** {}", record.electron_count()),
    ];
    if show_appearance {
        lines.push(format!(
            "**Appearance:** {}",
            record.appearance.as_deref().unwrap_or("Unknown")
        ));
    }
    lines.push(format!("**Description:**\n{}", record.summary));
    lines.join("\n\n")
}

fn notice_line(notice: &Notice) -> String {
    match notice.kind {
        NoticeKind::NotFound => format!("> {}", notice.message),
        NoticeKind::InvalidArgument => format!("> **Warning:** {}", notice.message),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
