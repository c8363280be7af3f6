// response-writer/src/error.rs

use thiserror::Error;

/// Which body write put the response into the committed state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitSource {
    /// A non-empty `output` was supplied at construction.
    ConstructorOutput,
    /// `json()` wrote the body.
    JsonBody,
}

/// Errors surfaced by `ResponseWriter` operations.
///
/// The committed variants are programmer errors: the caller violated the
/// headers-before-body ordering. They are raised synchronously, never
/// retried, and never caught internally.
#[derive(Debug, Error)]
pub enum ResponseError {
    #[error("cannot set headers after output was provided at construction")]
    CommittedByOutput,

    #[error("cannot set headers after json() was called")]
    CommittedByJson,

    #[error("failed to encode json body: {0}")]
    Json(#[from] serde_json::Error),
}

impl ResponseError {
    /// Severity marker: every variant is an internal misuse bug, not a
    /// client-facing condition.
    pub fn status_code(&self) -> u16 {
        500
    }

    /// The commit path responsible, when the error is a commit violation.
    pub fn commit_source(&self) -> Option<CommitSource> {
        match self {
            ResponseError::CommittedByOutput => Some(CommitSource::ConstructorOutput),
            ResponseError::CommittedByJson => Some(CommitSource::JsonBody),
            ResponseError::Json(_) => None,
        }
    }
}
