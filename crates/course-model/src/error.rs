use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("course id must not be empty")]
    EmptyCourseId,
    #[error("unknown facet key: {0}")]
    UnknownFacet(String),
    #[error("unknown sort mode: {0}")]
    UnknownSortMode(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
