//! Domain-specific assertion macros for ptable harnesses.
//!
//! These add context-rich failure messages that make it clear *which* shape
//! of the query contract was expected and what actually came back.

// ---------------------------------------------------------------------------
// Outcome shape assertions
// ---------------------------------------------------------------------------

/// Assert that an outcome is `Single` and return the record.
///
/// ```rust
/// let carbon = assert_single!(engine.find_by_atomic_number(6));
/// ```
#[macro_export]
macro_rules! assert_single {
    ($outcome:expr) => {{
        match $outcome {
            ptable_core::QueryOutcome::Single(record) => record,
            other => panic!("assert_single! failed: expected a single record, got {:?}", other),
        }
    }};
}

/// Assert that an outcome is `List` and return the records.
#[macro_export]
macro_rules! assert_list {
    ($outcome:expr) => {{
        match $outcome {
            ptable_core::QueryOutcome::List(records) => records,
            other => panic!("assert_list! failed: expected a record list, got {:?}", other),
        }
    }};
}

/// Assert that an outcome is a notice of the given kind.
///
/// ```rust
/// assert_notice!(engine.find_by_particle_count("neutrons", 6), NoticeKind::InvalidArgument);
/// ```
#[macro_export]
macro_rules! assert_notice {
    ($outcome:expr, $kind:expr) => {{
        let expected: ptable_core::NoticeKind = $kind;
        match $outcome {
            ptable_core::QueryOutcome::Missing(notice) if notice.kind == expected => notice,
            ptable_core::QueryOutcome::Missing(notice) => panic!(
                "assert_notice! failed:\n  expected kind: {:?}\n  actual:        {:?}",
                expected, notice
            ),
            other => panic!(
                "assert_notice! failed: expected a {:?} notice, got {:?}",
                expected, other
            ),
        }
    }};
}

// ---------------------------------------------------------------------------
// Record list helpers
// ---------------------------------------------------------------------------

/// Atomic numbers of `records`, in order.
pub fn numbers(records: &[&ptable_core::ElementRecord]) -> Vec<u32> {
    records.iter().map(|r| r.atomic_number).collect()
}

/// Names of `records`, in order.
pub fn names<'a>(records: &[&'a ptable_core::ElementRecord]) -> Vec<&'a str> {
    records.iter().map(|r| r.name.as_str()).collect()
}
