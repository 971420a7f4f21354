//! The result-shape contract between the query engine and its callers.
//!
//! Every query returns a [`QueryOutcome`] with exactly one of three shapes.
//! Callers match on it to choose between a single card, a list (which may be
//! empty, meaning "no results"), or a notice.

use crate::types::ElementRecord;
use serde::Serialize;

/// What a query produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome<'t> {
    /// Exactly one record matched a lookup.
    Single(&'t ElementRecord),
    /// Every record that matched a filter, in table order. Empty is a valid
    /// outcome, not an error.
    List(Vec<&'t ElementRecord>),
    /// Nothing to show; carries a message for the user.
    Missing(Notice),
}

impl<'t> QueryOutcome<'t> {
    pub(crate) fn not_found(message: &str) -> Self {
        QueryOutcome::Missing(Notice {
            kind: NoticeKind::NotFound,
            message: message.to_string(),
        })
    }

    pub(crate) fn invalid(message: &str) -> Self {
        QueryOutcome::Missing(Notice {
            kind: NoticeKind::InvalidArgument,
            message: message.to_string(),
        })
    }

    pub fn is_single(&self) -> bool {
        matches!(self, QueryOutcome::Single(_))
    }

    /// `true` for `List(vec![])`, the "no results" outcome.
    pub fn is_empty_list(&self) -> bool {
        matches!(self, QueryOutcome::List(list) if list.is_empty())
    }

    pub fn notice(&self) -> Option<&Notice> {
        match self {
            QueryOutcome::Missing(notice) => Some(notice),
            _ => None,
        }
    }

    /// The records this outcome carries, flattened (empty for a notice).
    pub fn records(&self) -> Vec<&'t ElementRecord> {
        match self {
            QueryOutcome::Single(record) => vec![*record],
            QueryOutcome::List(list) => list.clone(),
            QueryOutcome::Missing(_) => Vec::new(),
        }
    }
}

/// Why a query has nothing to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    /// A lookup matched no record. Informational.
    NotFound,
    /// The caller passed an argument the engine does not recognise. Rendered
    /// as a warning.
    InvalidArgument,
}

/// Message-carrying third outcome shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argon() -> ElementRecord {
        ElementRecord {
            name: "Argon".to_string(),
            symbol: "Ar".to_string(),
            atomic_number: 18,
            phase: "Gas".to_string(),
            appearance: None,
            summary: String::new(),
        }
    }

    #[test]
    fn shape_helpers() {
        let argon = argon();
        let single = QueryOutcome::Single(&argon);
        assert!(single.is_single());
        assert_eq!(single.records(), vec![&argon]);

        let empty = QueryOutcome::List(Vec::new());
        assert!(!empty.is_single());
        assert!(empty.is_empty_list());

        let missing = QueryOutcome::not_found("Element not found.");
        assert!(missing.records().is_empty());
        assert_eq!(missing.notice().map(|n| n.kind), Some(NoticeKind::NotFound));
    }

    #[test]
    fn notice_serializes_with_snake_case_kind() {
        let notice = Notice {
            kind: NoticeKind::InvalidArgument,
            message: "Invalid particle type.".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&notice).unwrap(),
            r#"{"kind":"invalid_argument","message":"Invalid particle type."}"#
        );
    }
}
