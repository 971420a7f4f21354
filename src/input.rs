//! Caller-side input policy.
//!
//! The query engine tolerates any input, but the CLI screens user input
//! before querying so that obvious typos get a targeted message instead of a
//! generic "not found".

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    /// Blank input counts as "not only letters".
    #[error("Please enter only letters for the element name or symbol.")]
    NotAlphabetic,
}

/// Trim a name/symbol query and reject blank or non-alphabetic input.
pub fn check_name(raw: &str) -> Result<&str, InputError> {
    let name = raw.trim();
    if name.is_empty() || !name.chars().all(char::is_alphabetic) {
        return Err(InputError::NotAlphabetic);
    }
    Ok(name)
}

/// Particle kinds are matched against lowercase canonical spellings.
pub fn normalize_particle_kind(raw: &str) -> String {
    raw.trim().to_lowercase()
}
