use super::{EventStore, StoreError};
use crate::lighting::model::ParsedEvent;
use chrono::{Datelike, NaiveDate};
use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Keeps one JSON array per month, named after the month's first day (`2024-11-01.json`).
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn month_path(&self, date: NaiveDate) -> PathBuf {
        self.dir
            .join(format!("{}.json", first_of_month(date).format("%Y-%m-%d")))
    }
}

impl EventStore for FileStore {
    #[instrument(skip(self, events), fields(events = events.len()))]
    fn create(&self, month: NaiveDate, events: &[ParsedEvent]) -> Result<(), StoreError> {
        let path = self.month_path(month);

        fs::create_dir_all(&self.dir)?;

        let file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|err| match err.kind() {
                ErrorKind::AlreadyExists => StoreError::AlreadyExists(path.clone()),
                _ => StoreError::Io(err),
            })?;

        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, events)?;
        writer.flush()?;

        info!("Stored {} events in {}", events.len(), path.display());

        Ok(())
    }

    fn list(&self, month: NaiveDate) -> Result<Vec<ParsedEvent>, StoreError> {
        let path = self.month_path(month);
        let file = File::open(&path)?;

        let events: Vec<ParsedEvent> = serde_json::from_reader(BufReader::new(file))?;

        debug!("Read {} events from {}", events.len(), path.display());

        Ok(events)
    }

    #[instrument(skip(self))]
    fn read(&self, date: NaiveDate) -> Result<Option<ParsedEvent>, StoreError> {
        let event = self
            .list(date)?
            .into_iter()
            .find(|event| event.is_on(date));

        match &event {
            Some(event) => debug!("Found event: {}", event.description),
            None => debug!("No event found"),
        }

        Ok(event)
    }

    fn exists(&self, month: NaiveDate) -> Result<bool, StoreError> {
        Ok(self.month_path(month).try_exists()?)
    }
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}
