use std::{io, path::PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LoadError>;

/// Failure to obtain the results feed. Terminal for a session.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path:   PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("HTTP error: {status}")]
    Http { status: u16 },
    #[error(transparent)]
    Request(#[from] reqwest::Error),
}
