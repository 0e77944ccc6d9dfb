use crate::modules::events::core::event::EventId;
use crate::modules::events::core::ports::EventStoreError;
use crate::modules::events::core::search::QueryError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error("Event not found with id: {0}")]
    NotFound(EventId),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    StoreFailure(#[from] EventStoreError),
}

impl From<QueryError> for ApplicationError {
    fn from(error: QueryError) -> Self {
        ApplicationError::InvalidArgument(error.to_string())
    }
}
