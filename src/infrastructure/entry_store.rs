//! Entry store: the date-keyed record set mirrored to durable storage

use crate::domain::csv_export::{self, CsvExport, CsvQuoting, DEFAULT_FILENAME_PREFIX, MIME_TYPE};
use crate::domain::Entry;
use crate::error::{DiaryError, Result};
use crate::infrastructure::storage::KeyValueStorage;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Storage key holding the JSON object of all entries
pub const ENTRIES_KEY: &str = "sleep_diary_entries";

/// Settings applied when rendering an export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    pub filename_prefix: String,
    pub quoting: CsvQuoting,
}

impl Default for ExportOptions {
    fn default() -> Self {
        ExportOptions {
            filename_prefix: DEFAULT_FILENAME_PREFIX.to_string(),
            quoting: CsvQuoting::default(),
        }
    }
}

/// Owns the date → entry mapping and writes it through to storage on every change.
///
/// Dates are kept in a `BTreeMap`, so iteration is always ascending.
#[derive(Debug)]
pub struct EntryStore<S> {
    storage: S,
    entries: BTreeMap<NaiveDate, Entry>,
}

impl<S: KeyValueStorage> EntryStore<S> {
    /// Open a store over `storage`, reading whatever it currently holds
    pub fn load(storage: S) -> Self {
        let entries = Self::load_entries(&storage);
        EntryStore { storage, entries }
    }

    /// Read the stored mapping.
    ///
    /// A missing key, an unreadable backend, or a payload that fails to
    /// parse all yield an empty mapping. Nothing from a bad payload is kept.
    pub fn load_entries(storage: &S) -> BTreeMap<NaiveDate, Entry> {
        let raw = match storage.get(ENTRIES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return BTreeMap::new(),
            Err(e) => {
                tracing::warn!(error = %e, "Could not read stored entries, starting empty");
                return BTreeMap::new();
            }
        };

        match serde_json::from_str::<BTreeMap<NaiveDate, Entry>>(&raw) {
            Ok(entries) => {
                tracing::debug!(entries = entries.len(), "Loaded diary entries");
                entries
            }
            Err(e) => {
                tracing::warn!(error = %e, "Discarding unparsable diary payload");
                BTreeMap::new()
            }
        }
    }

    /// The stored entry for `date`, or a fresh default one. Never mutates the store.
    pub fn entry_for_date(&self, date: NaiveDate) -> Entry {
        self.entries
            .get(&date)
            .cloned()
            .unwrap_or_else(|| Entry::default_for(date))
    }

    /// The stored entry for `date`, if one was saved
    pub fn get(&self, date: NaiveDate) -> Option<&Entry> {
        self.entries.get(&date)
    }

    /// Insert or fully replace the entry at `date`, then persist the whole mapping.
    ///
    /// When persisting fails the in-memory mapping is left as it was.
    pub fn save_entry(&mut self, date: NaiveDate, entry: Entry) -> Result<()> {
        let mut next = self.entries.clone();
        next.insert(date, entry);
        self.persist(&next)?;
        self.entries = next;

        tracing::debug!(%date, entries = self.entries.len(), "Saved diary entry");
        Ok(())
    }

    /// Remove the entry at `date` and persist. Returns whether anything was removed.
    ///
    /// Deleting an absent date is a no-op and writes nothing.
    pub fn delete_entry(&mut self, date: NaiveDate) -> Result<bool> {
        if !self.entries.contains_key(&date) {
            return Ok(false);
        }

        let mut next = self.entries.clone();
        next.remove(&date);
        self.persist(&next)?;
        self.entries = next;

        tracing::debug!(%date, entries = self.entries.len(), "Deleted diary entry");
        Ok(true)
    }

    /// All entries in ascending date order
    pub fn list_entries(&self) -> impl DoubleEndedIterator<Item = (&NaiveDate, &Entry)> + '_ {
        self.entries.iter()
    }

    /// The full mapping
    pub fn entries(&self) -> &BTreeMap<NaiveDate, Entry> {
        &self.entries
    }

    /// Render every entry as CSV, ascending by date.
    ///
    /// `today` only names the file. An empty store yields `NothingToExport`.
    pub fn export_csv(&self, today: NaiveDate, options: &ExportOptions) -> Result<CsvExport> {
        if self.entries.is_empty() {
            return Err(DiaryError::NothingToExport);
        }

        let text = csv_export::render(self.entries.values(), options.quoting);
        tracing::debug!(rows = self.entries.len(), "Rendered CSV export");

        Ok(CsvExport {
            filename: csv_export::export_filename(&options.filename_prefix, today),
            mime_type: MIME_TYPE,
            bytes: text.into_bytes(),
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.entries.contains_key(&date)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    fn persist(&mut self, entries: &BTreeMap<NaiveDate, Entry>) -> Result<()> {
        let payload = serde_json::to_string(entries)?;
        self.storage.set(ENTRIES_KEY, &payload)
    }
}
