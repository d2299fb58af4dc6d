use thiserror::Error;

/// Failures reported by a backend collaborator.
///
/// The store treats every variant uniformly: log, abort the commit, leave
/// local state untouched. The split exists so callers with a retry
/// affordance can tell transport trouble from a rejected request.
#[derive(Debug, Clone, Error)]
pub enum BackendError {
    /// Network unreachable, request aborted, or a non-success response.
    #[error("transport failure: {0}")]
    Transport(String),
    /// The backend understood the request and refused it.
    #[error("backend rejected request: {0}")]
    Rejected(String),
    /// The backend answered with a payload we could not decode.
    #[error("malformed backend response: {0}")]
    Malformed(String),
}

/// Failures surfaced by store operations.
///
/// A missing identifier is never an error anywhere in the store; absent
/// entries are a benign no-op on read and delete.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error(transparent)]
    Backend(#[from] BackendError),
    /// A fetched record carried a date that failed to parse even after
    /// suffix normalization.
    #[error("activity {id} has unparseable date {raw:?}")]
    InvalidDate { id: String, raw: String },
}
