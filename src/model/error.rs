use thiserror::Error;

/// Errors surfaced by store mutations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("event must end after it starts")]
    InvalidRange,

    #[error("no event or project with id '{0}'")]
    NotFound(String),

    #[error("{0}")]
    InvalidOperation(String),
}

pub type StoreResult<T> = Result<T, StoreError>;
