//! Delete entry use case

use crate::error::Result;
use crate::infrastructure::{EntryStore, KeyValueStorage};
use chrono::NaiveDate;

pub const CONFIRM_PROMPT: &str = "確定要刪除這天的紀錄嗎？";

/// Asks the user before anything is removed
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> Result<bool>;
}

/// Always answers yes (used for `--yes`)
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&mut self, _prompt: &str) -> Result<bool> {
        Ok(true)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// Nothing saved for that date; the user was not asked
    NotFound,
    Cancelled,
}

/// Delete the entry at `date` once the user agrees.
pub fn delete_with_confirmation<S, C>(
    store: &mut EntryStore<S>,
    date: NaiveDate,
    confirm: &mut C,
) -> Result<DeleteOutcome>
where
    S: KeyValueStorage,
    C: Confirm,
{
    if !store.contains(date) {
        return Ok(DeleteOutcome::NotFound);
    }

    if !confirm.confirm(CONFIRM_PROMPT)? {
        tracing::debug!(%date, "Deletion cancelled");
        return Ok(DeleteOutcome::Cancelled);
    }

    store.delete_entry(date)?;
    Ok(DeleteOutcome::Deleted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Entry;
    use crate::infrastructure::MemoryStorage;

    struct Scripted {
        answer: bool,
        asked: usize,
    }

    impl Confirm for Scripted {
        fn confirm(&mut self, prompt: &str) -> Result<bool> {
            assert_eq!(prompt, CONFIRM_PROMPT);
            self.asked += 1;
            Ok(self.answer)
        }
    }

    fn store_with(date: NaiveDate) -> EntryStore<MemoryStorage> {
        let mut store = EntryStore::load(MemoryStorage::new());
        store.save_entry(date, Entry::default_for(date)).unwrap();
        store
    }

    #[test]
    fn test_confirmed_delete() {
        let d = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let mut store = store_with(d);
        let mut confirm = Scripted { answer: true, asked: 0 };

        let outcome = delete_with_confirmation(&mut store, d, &mut confirm).unwrap();
        assert_eq!(outcome, DeleteOutcome::Deleted);
        assert_eq!(confirm.asked, 1);
        assert!(store.is_empty());
    }

    #[test]
    fn test_declined_delete_keeps_entry() {
        let d = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let mut store = store_with(d);
        let mut confirm = Scripted { answer: false, asked: 0 };

        let outcome = delete_with_confirmation(&mut store, d, &mut confirm).unwrap();
        assert_eq!(outcome, DeleteOutcome::Cancelled);
        assert!(store.contains(d));
    }

    #[test]
    fn test_missing_date_does_not_prompt() {
        let d = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let mut store = store_with(d);
        let mut confirm = Scripted { answer: true, asked: 0 };

        let other = NaiveDate::from_ymd_opt(2024, 1, 9).unwrap();
        let outcome = delete_with_confirmation(&mut store, other, &mut confirm).unwrap();
        assert_eq!(outcome, DeleteOutcome::NotFound);
        assert_eq!(confirm.asked, 0);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_assume_yes() {
        let d = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let mut store = store_with(d);
        let outcome = delete_with_confirmation(&mut store, d, &mut AssumeYes).unwrap();
        assert_eq!(outcome, DeleteOutcome::Deleted);
    }
}
