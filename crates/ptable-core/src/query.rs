//! Query engine — the four element searches.
//!
//! A [`QueryEngine`] borrows an [`ElementTable`] and never mutates it, so any
//! query asked twice returns the same outcome. Matching rules per search:
//!
//! | Search | Input handling | Match | Shape |
//! |--------|----------------|-------|-------|
//! | name / symbol | trimmed, case-insensitive | exact `name` (and `symbol` unless disabled) | single / not found |
//! | atomic number | any integer | exact `atomic_number` | single / not found |
//! | state | case-insensitive | exact `phase` | list |
//! | particle count | kind must be `protons` or `electrons` | `atomic_number == count` | list / invalid |
//!
//! There is no substring or fuzzy matching anywhere.

use crate::outcome::QueryOutcome;
use crate::types::{ElementRecord, ElementTable};

pub const NAME_NOT_FOUND: &str = "Element not found.";
pub const NUMBER_NOT_FOUND: &str = "Element not found. Please try again.";
pub const INVALID_PARTICLE: &str = "Invalid particle type.";

/// Tunable matching policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryOptions {
    /// Accept element symbols ("O") as well as names ("Oxygen") in
    /// [`QueryEngine::find_by_name_or_symbol`].
    pub match_symbols: bool,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            match_symbols: true,
        }
    }
}

/// Subatomic particle a count query is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParticleKind {
    Protons,
    Electrons,
}

impl ParticleKind {
    /// Parse the lowercase canonical spelling. Anything else, including
    /// `"Protons"`, is `None`; callers normalise case first.
    pub fn parse(kind: &str) -> Option<Self> {
        match kind {
            "protons" => Some(ParticleKind::Protons),
            "electrons" => Some(ParticleKind::Electrons),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ParticleKind::Protons => "protons",
            ParticleKind::Electrons => "electrons",
        }
    }

    /// How many of this particle a neutral atom of `record` has.
    pub fn count_in(&self, record: &ElementRecord) -> u32 {
        match self {
            ParticleKind::Protons => record.proton_count(),
            ParticleKind::Electrons => record.electron_count(),
        }
    }
}

impl std::fmt::Display for ParticleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-only search interface over one [`ElementTable`].
#[derive(Debug, Clone, Copy)]
pub struct QueryEngine<'t> {
    table: &'t ElementTable,
    options: QueryOptions,
}

impl<'t> QueryEngine<'t> {
    pub fn new(table: &'t ElementTable) -> Self {
        Self::with_options(table, QueryOptions::default())
    }

    pub fn with_options(table: &'t ElementTable, options: QueryOptions) -> Self {
        Self { table, options }
    }

    /// Look an element up by name, or by symbol when symbol matching is on.
    ///
    /// Blank input is treated as not found.
    pub fn find_by_name_or_symbol(&self, query: &str) -> QueryOutcome<'t> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            tracing::debug!("query: blank name rejected");
            return QueryOutcome::not_found(NAME_NOT_FOUND);
        }

        let found = self.table.iter().find(|r| {
            r.name.to_lowercase() == needle
                || (self.options.match_symbols && r.symbol.to_lowercase() == needle)
        });
        tracing::debug!(query = %needle, found = found.is_some(), "query: by name or symbol");

        match found {
            Some(record) => QueryOutcome::Single(record),
            None => QueryOutcome::not_found(NAME_NOT_FOUND),
        }
    }

    /// Look an element up by atomic number. Any integer is accepted; values
    /// with no matching record are simply not found.
    pub fn find_by_atomic_number(&self, number: i64) -> QueryOutcome<'t> {
        let found = self
            .table
            .iter()
            .find(|r| i64::from(r.atomic_number) == number);
        tracing::debug!(number, found = found.is_some(), "query: by atomic number");

        match found {
            Some(record) => QueryOutcome::Single(record),
            None => QueryOutcome::not_found(NUMBER_NOT_FOUND),
        }
    }

    /// Every element whose phase equals `state`, ignoring case.
    pub fn find_by_state(&self, state: &str) -> QueryOutcome<'t> {
        let wanted = state.to_lowercase();
        let matches: Vec<&'t ElementRecord> = self
            .table
            .iter()
            .filter(|r| r.phase.to_lowercase() == wanted)
            .collect();
        tracing::debug!(state, matches = matches.len(), "query: by state");
        QueryOutcome::List(matches)
    }

    /// Every element whose neutral atom has `count` particles of `kind`.
    ///
    /// `kind` must be exactly `"protons"` or `"electrons"`; anything else is
    /// reported as an invalid argument rather than an empty list.
    pub fn find_by_particle_count(&self, kind: &str, count: i64) -> QueryOutcome<'t> {
        let Some(kind) = ParticleKind::parse(kind) else {
            tracing::debug!(kind, "query: unrecognised particle kind");
            return QueryOutcome::invalid(INVALID_PARTICLE);
        };
        self.find_by_particle(kind, count)
    }

    /// Typed form of [`find_by_particle_count`](Self::find_by_particle_count).
    pub fn find_by_particle(&self, kind: ParticleKind, count: i64) -> QueryOutcome<'t> {
        let matches: Vec<&'t ElementRecord> = self
            .table
            .iter()
            .filter(|r| i64::from(kind.count_in(r)) == count)
            .collect();
        tracing::debug!(%kind, count, matches = matches.len(), "query: by particle count");
        QueryOutcome::List(matches)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
