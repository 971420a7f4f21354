//! ptable — Periodic Table Explorer
//!
//! Command-line explorer over a bundled table of the 118 chemical elements.
//! The query layer lives in `ptable-core` and rendering in `ptable-render`;
//! this crate wires them to a `clap` front end and exposes that wiring so the
//! integration harnesses can drive it in-process.
//!
//! # Architecture
//!
//! ```text
//! argv ──► Cli ──► Config ──► ElementTable ──► QueryEngine ──► render ──► stdout
//!                     ▲            ▲
//!        config.toml ─┘  --data ───┘
//! ```

pub mod cli;
pub mod input;

pub use cli::{Cli, Response, SearchCommand};
