//! Field-name mapping from dataset variants onto [`ElementRecord`].
//!
//! Published element tables disagree on column names (`number` vs
//! `atomic_number`, `phase` vs `state` vs `type`, …). The alias table below is
//! the single place that knows about those spellings; everything downstream of
//! [`map_record`] sees only the canonical schema.
//!
//! Keys are matched exactly. Keys not in the table are ignored, and a JSON
//! `null` counts as an absent field.

use crate::error::DataError;
use crate::types::{ElementRecord, UNKNOWN_PHASE};
use serde_json::{Map, Value};

/// A field of the canonical [`ElementRecord`] schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CanonicalField {
    Name,
    Symbol,
    AtomicNumber,
    Phase,
    Appearance,
    Summary,
}

impl std::fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CanonicalField::Name => write!(f, "name"),
            CanonicalField::Symbol => write!(f, "symbol"),
            CanonicalField::AtomicNumber => write!(f, "atomic_number"),
            CanonicalField::Phase => write!(f, "phase"),
            CanonicalField::Appearance => write!(f, "appearance"),
            CanonicalField::Summary => write!(f, "summary"),
        }
    }
}

static FIELD_ALIASES: phf::Map<&'static str, CanonicalField> = phf::phf_map! {
    "name" => CanonicalField::Name,
    "symbol" => CanonicalField::Symbol,
    "number" => CanonicalField::AtomicNumber,
    "atomic_number" => CanonicalField::AtomicNumber,
    "atomicNumber" => CanonicalField::AtomicNumber,
    "phase" => CanonicalField::Phase,
    "state" => CanonicalField::Phase,
    "type" => CanonicalField::Phase,
    "appearance" => CanonicalField::Appearance,
    "summary" => CanonicalField::Summary,
    "description" => CanonicalField::Summary,
};

/// Resolve an incoming field name to its canonical field.
pub fn canonical_field(key: &str) -> Option<CanonicalField> {
    FIELD_ALIASES.get(key).copied()
}

// ---------------------------------------------------------------------------
// Record mapping
// ---------------------------------------------------------------------------

/// Canonical slots collected from one source object, before type checks.
#[derive(Default)]
struct Slots<'a> {
    name: Option<(&'a str, &'a Value)>,
    symbol: Option<(&'a str, &'a Value)>,
    atomic_number: Option<(&'a str, &'a Value)>,
    phase: Option<(&'a str, &'a Value)>,
    appearance: Option<(&'a str, &'a Value)>,
    summary: Option<(&'a str, &'a Value)>,
}

impl<'a> Slots<'a> {
    fn slot(&mut self, field: CanonicalField) -> &mut Option<(&'a str, &'a Value)> {
        match field {
            CanonicalField::Name => &mut self.name,
            CanonicalField::Symbol => &mut self.symbol,
            CanonicalField::AtomicNumber => &mut self.atomic_number,
            CanonicalField::Phase => &mut self.phase,
            CanonicalField::Appearance => &mut self.appearance,
            CanonicalField::Summary => &mut self.summary,
        }
    }
}

/// Map one source object (row `index` of the dataset) onto an [`ElementRecord`].
///
/// `name`, `symbol` and the atomic number are required. A missing phase
/// becomes [`UNKNOWN_PHASE`]; a missing summary becomes the empty string. Two
/// aliases of the same canonical field in one object are rejected.
pub fn map_record(index: usize, object: &Map<String, Value>) -> Result<ElementRecord, DataError> {
    let mut slots = Slots::default();

    for (key, value) in object {
        let Some(field) = canonical_field(key) else {
            continue;
        };
        if value.is_null() {
            continue;
        }
        let slot = slots.slot(field);
        if let Some((previous, _)) = *slot {
            return Err(DataError::record(
                index,
                format!("fields `{previous}` and `{key}` both map to `{field}`"),
            ));
        }
        *slot = Some((key.as_str(), value));
    }

    let name = required_string(index, CanonicalField::Name, slots.name)?;
    let symbol = required_string(index, CanonicalField::Symbol, slots.symbol)?;
    let atomic_number = atomic_number(index, slots.atomic_number)?;
    let phase = optional_string(index, slots.phase)?.unwrap_or_else(|| UNKNOWN_PHASE.to_string());
    let appearance = optional_string(index, slots.appearance)?;
    let summary = optional_string(index, slots.summary)?.unwrap_or_default();

    Ok(ElementRecord {
        name,
        symbol,
        atomic_number,
        phase,
        appearance,
        summary,
    })
}

fn required_string(
    index: usize,
    field: CanonicalField,
    slot: Option<(&str, &Value)>,
) -> Result<String, DataError> {
    match optional_string(index, slot)? {
        Some(s) if !s.trim().is_empty() => Ok(s),
        Some(_) => Err(DataError::record(index, format!("`{field}` is empty"))),
        None => Err(DataError::record(index, format!("missing `{field}`"))),
    }
}

fn optional_string(index: usize, slot: Option<(&str, &Value)>) -> Result<Option<String>, DataError> {
    match slot {
        None => Ok(None),
        Some((_, Value::String(s))) => Ok(Some(s.clone())),
        Some((key, other)) => Err(DataError::record(
            index,
            format!("`{key}` must be a string, found {other}"),
        )),
    }
}

fn atomic_number(index: usize, slot: Option<(&str, &Value)>) -> Result<u32, DataError> {
    let Some((key, value)) = slot else {
        return Err(DataError::record(
            index,
            format!("missing `{}`", CanonicalField::AtomicNumber),
        ));
    };
    value
        .as_u64()
        .and_then(|n| u32::try_from(n).ok())
        .filter(|n| *n >= 1)
        .ok_or_else(|| {
            DataError::record(index, format!("`{key}` must be a positive integer, found {value}"))
        })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
