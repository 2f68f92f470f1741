pub mod file_store;

use crate::lighting::model::ParsedEvent;
use chrono::NaiveDate;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub trait EventStore {
    /// Persists a month's events. Never overwrites a month that was already stored.
    fn create(&self, month: NaiveDate, events: &[ParsedEvent]) -> Result<(), StoreError>;

    fn list(&self, month: NaiveDate) -> Result<Vec<ParsedEvent>, StoreError>;

    /// Finds the event happening on `date`, looking only at that date's month.
    fn read(&self, date: NaiveDate) -> Result<Option<ParsedEvent>, StoreError>;

    /// Fails when the file's presence can't be determined, e.g. on a permission error.
    fn exists(&self, month: NaiveDate) -> Result<bool, StoreError>;
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("events for this month were already stored at {0}")]
    AlreadyExists(PathBuf),

    #[error("failed to access events file: {0}")]
    Io(#[from] io::Error),

    #[error("invalid events file: {0}")]
    Json(#[from] serde_json::Error),
}
