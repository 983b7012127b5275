use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong between opening a kernel file and handing a
/// scene to the viewer.
#[derive(Debug, Error)]
pub enum KernelError {
    /// The input (or settings) file could not be opened or read.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A token could not be parsed as the number the format expects.
    /// `line` is 1-based.
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    /// A declared count disagrees with what is actually present.
    #[error("{what}: expected {expected}, found {found}")]
    Shape {
        what: String,
        expected: usize,
        found: usize,
    },

    /// The embedding could not be computed.
    #[error("embedding failed: {0}")]
    Embedding(String),

    #[error("invalid settings: {0}")]
    Config(String),
}

impl KernelError {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        KernelError::Parse {
            line,
            message: message.into(),
        }
    }

    pub(crate) fn shape(what: impl Into<String>, expected: usize, found: usize) -> Self {
        KernelError::Shape {
            what: what.into(),
            expected,
            found,
        }
    }
}

pub type Result<T> = std::result::Result<T, KernelError>;
