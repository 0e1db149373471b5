use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BleuError>;

#[derive(Debug, Error)]
pub enum BleuError {
    /// The scorer printed something that is not a `BLEU = ...` line.
    #[error("malformed scorer output ({reason}): {output:?}")]
    MalformedOutput { reason: String, output: String },

    #[error("external scorer failed: {reason}")]
    ExternalTool {
        reason: String,
        #[source]
        source: Option<io::Error>,
    },

    #[error("io error on {path:?}: {source}")]
    Io {
        path: Option<PathBuf>,
        #[source]
        source: io::Error,
    },
}

impl BleuError {
    pub(crate) fn malformed(reason: impl Into<String>, output: &str) -> Self {
        BleuError::MalformedOutput {
            reason: reason.into(),
            output: output.to_string(),
        }
    }

    pub(crate) fn tool(reason: impl Into<String>) -> Self {
        BleuError::ExternalTool {
            reason: reason.into(),
            source: None,
        }
    }

    pub(crate) fn tool_io(reason: impl Into<String>, source: io::Error) -> Self {
        BleuError::ExternalTool {
            reason: reason.into(),
            source: Some(source),
        }
    }

    pub(crate) fn io(path: Option<PathBuf>, source: io::Error) -> Self {
        BleuError::Io { path, source }
    }
}
