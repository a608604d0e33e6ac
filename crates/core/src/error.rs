use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VanityError {
    #[error("cannot parse commit: missing blank line between headers and message")]
    MalformedRecord,

    #[error("invalid prefix {0:?}: expected at most 40 hex characters")]
    InvalidPrefix(String),

    #[error("search space exhausted: no match at or after iteration {start}")]
    Exhausted { start: u64 },
}

pub type Result<T> = std::result::Result<T, VanityError>;
