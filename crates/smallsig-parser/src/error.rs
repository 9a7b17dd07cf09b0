//! Error types for smallsig-parser.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] smallsig_core::Error),

    #[error("no small-signal parameters for transistor {0}")]
    MissingSmallSignalParameters(String),
}

pub type Result<T> = std::result::Result<T, Error>;
