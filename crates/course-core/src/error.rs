use course_ingest::IngestError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExplorerError {
    #[error(transparent)]
    Ingest(#[from] IngestError),
    #[error("course {0} is not in the visible list")]
    CourseNotVisible(String),
}

impl ExplorerError {
    /// Text to surface to the user.
    pub fn user_message(&self) -> String {
        match self {
            ExplorerError::Ingest(err) => err.user_message(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ExplorerError>;
