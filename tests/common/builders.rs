//! Test builders — ergonomic constructors for `ElementRecord` and `ElementTable`.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use ptable_core::{ElementRecord, ElementTable};

/// Fluent builder for [`ElementRecord`] test fixtures.
///
/// ```rust
/// let neon = ElementBuilder::new(10, "Neon", "Ne").phase("Gas").build();
/// ```
pub struct ElementBuilder {
    record: ElementRecord,
}

impl ElementBuilder {
    pub fn new(atomic_number: u32, name: &str, symbol: &str) -> Self {
        Self {
            record: ElementRecord {
                name: name.to_string(),
                symbol: symbol.to_string(),
                atomic_number,
                phase: "Solid".to_string(),
                appearance: None,
                summary: format!("{name} test record."),
            },
        }
    }

    pub fn phase(mut self, phase: &str) -> Self {
        self.record.phase = phase.to_string();
        self
    }

    pub fn appearance(mut self, appearance: &str) -> Self {
        self.record.appearance = Some(appearance.to_string());
        self
    }

    pub fn summary(mut self, summary: &str) -> Self {
        self.record.summary = summary.to_string();
        self
    }

    pub fn build(self) -> ElementRecord {
        self.record
    }
}

/// Build a table from records, panicking on duplicate atomic numbers.
pub fn table_of(records: Vec<ElementRecord>) -> ElementTable {
    ElementTable::from_records(records).expect("fixture records must be unique")
}

/// A small table covering every phase, including an unusual casing.
pub fn mixed_phase_table() -> ElementTable {
    table_of(vec![
        ElementBuilder::new(1, "Hydrogen", "H").phase("Gas").build(),
        ElementBuilder::new(6, "Carbon", "C").build(),
        ElementBuilder::new(8, "Oxygen", "O").phase("Gas").build(),
        ElementBuilder::new(35, "Bromine", "Br").phase("Liquid").build(),
        ElementBuilder::new(54, "Xenon", "Xe").phase("GAS").build(),
        ElementBuilder::new(80, "Mercury", "Hg").phase("Liquid").build(),
        ElementBuilder::new(118, "Oganesson", "Og").phase("Unknown").build(),
    ])
}
