//! Error types for smallsig-core.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid literal: {0}")]
    InvalidLiteral(String),

    #[error("unknown component kind: {0}")]
    UnknownComponentKind(char),

    #[error("malformed entry {name}: expected {expected} fields, found {found}")]
    MalformedEntry {
        name: String,
        expected: usize,
        found: usize,
    },

    #[error("inconsistent graph state: {0}")]
    InconsistentGraph(String),
}

pub type Result<T> = std::result::Result<T, Error>;
