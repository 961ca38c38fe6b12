use async_trait::async_trait;
use model::{Error, Movie};
use std::fmt::{Display, Formatter};

/// Write movie records to the backing table.
///
/// The table reference travels with every call because it is read from the
/// environment per invocation rather than fixed at construction. An absent
/// reference is passed through untouched; the backend decides how to fail.
#[async_trait]
pub trait MovieStore: Send + Sync {
    async fn put_movie(&self, table_name: Option<&str>, movie: &Movie) -> Result<(), StoreError>;
}

/// Errors arising from the movie table.
#[derive(Debug)]
pub struct StoreError {
    pub movie_id: String,

    pub operation: StoreOperation,
    pub reason: StoreErrorReason,
}

#[derive(Debug)]
pub enum StoreErrorReason {
    // No table reference was supplied with the call
    MissingTable,
    // An error from the underlying table service
    BackendFailure(Error),
}

#[derive(Debug, Clone)]
pub enum StoreOperation {
    PutMovie,
}

impl StoreError {
    pub fn new(movie_id: String, operation: StoreOperation, reason: StoreErrorReason) -> Self {
        StoreError {
            movie_id,
            operation,
            reason,
        }
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(format!("{:?}", self).as_str())
    }
}

impl std::error::Error for StoreError {}
