//! JSON output.
//!
//! Records are emitted with the derived particle counts alongside the
//! canonical fields so consumers never have to know the neutral-atom rule.

use ptable_core::{ElementRecord, QueryOutcome};
use serde::Serialize;

/// Wire shape of one record: the canonical fields plus particle counts.
#[derive(Debug, Serialize)]
pub struct RecordView<'a> {
    #[serde(flatten)]
    pub record: &'a ElementRecord,
    pub protons: u32,
    pub electrons: u32,
}

impl<'a> From<&'a ElementRecord> for RecordView<'a> {
    fn from(record: &'a ElementRecord) -> Self {
        Self {
            record,
            protons: record.proton_count(),
            electrons: record.electron_count(),
        }
    }
}

pub fn render(outcome: &QueryOutcome<'_>) -> serde_json::Result<String> {
    match outcome {
        QueryOutcome::Single(record) => serde_json::to_string_pretty(&RecordView::from(*record)),
        QueryOutcome::List(records) => {
            let views: Vec<RecordView<'_>> = records.iter().map(|r| RecordView::from(*r)).collect();
            serde_json::to_string_pretty(&views)
        }
        QueryOutcome::Missing(notice) => serde_json::to_string_pretty(notice),
    }
}

pub fn render_phases(phases: &[&str]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(phases)
}
