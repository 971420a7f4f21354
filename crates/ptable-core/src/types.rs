//! Core types for ptable-core.
//!
//! [`ElementRecord`] is the one canonical record shape every dataset variant
//! is mapped onto at load time; [`ElementTable`] is the immutable, ordered
//! collection of them. Constructors for the table live in
//! [`loader`](crate::loader).

use serde::Serialize;
use std::collections::BTreeSet;

/// Phase recorded for elements whose source row carries no phase at all.
pub const UNKNOWN_PHASE: &str = "Unknown";

/// One chemical element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementRecord {
    /// Human-readable name, unique within a table.
    pub name: String,
    /// One or two letter symbol, unique within a table.
    pub symbol: String,
    /// Unique key of the table. Also the proton and electron count; the
    /// dataset models neutral ground-state atoms only.
    pub atomic_number: u32,
    /// Physical state at reference conditions ("Solid", "Liquid", "Gas", …).
    /// Compared case-insensitively by queries.
    pub phase: String,
    pub appearance: Option<String>,
    pub summary: String,
}

impl ElementRecord {
    pub fn proton_count(&self) -> u32 {
        self.atomic_number
    }

    pub fn electron_count(&self) -> u32 {
        self.atomic_number
    }
}

/// Ordered, immutable sequence of [`ElementRecord`]s.
///
/// Order is dataset file order. No two records share an `atomic_number`;
/// every constructor enforces this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementTable {
    records: Vec<ElementRecord>,
}

impl ElementTable {
    /// Callers must have checked atomic-number uniqueness already.
    pub(crate) fn new_unchecked(records: Vec<ElementRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ElementRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[ElementRecord] {
        &self.records
    }

    /// Distinct phase values present in the table, sorted.
    ///
    /// This is the selection list a caller should offer for state queries;
    /// it is derived from the data rather than hardcoded.
    pub fn phases(&self) -> Vec<&str> {
        self.records
            .iter()
            .map(|r| r.phase.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

impl<'a> IntoIterator for &'a ElementTable {
    type Item = &'a ElementRecord;
    type IntoIter = std::slice::Iter<'a, ElementRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
