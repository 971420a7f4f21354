//! ptable-core — Periodic Table Explorer core library.
//!
//! This crate owns the element dataset and every query that can be asked of
//! it. Presentation (the CLI, Markdown cards, JSON output) lives elsewhere and
//! talks to this crate only through [`QueryEngine`] and [`QueryOutcome`].
//!
//! # Architecture
//!
//! ```text
//! JSON document ──► schema mapping ──► ElementTable ──► QueryEngine ──► QueryOutcome
//!                        (loader)        (immutable)     (4 searches)    (3 shapes)
//! ```
//!
//! The table is loaded once, never mutated, and borrowed by the engine, so a
//! single table can back any number of engines (and threads) at once.

pub mod config;
pub mod error;
pub mod loader;
pub mod outcome;
pub mod query;
pub mod schema;
pub mod types;

pub use error::DataError;
pub use outcome::{Notice, NoticeKind, QueryOutcome};
pub use query::{ParticleKind, QueryEngine, QueryOptions};
pub use types::{ElementRecord, ElementTable};
