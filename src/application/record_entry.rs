//! Record morning/evening observations use case

use crate::domain::{ClockTime, DayType, Entry, FormNumber};
use crate::error::Result;
use crate::infrastructure::{EntryStore, KeyValueStorage};
use chrono::NaiveDate;

/// A partial set of fields filled in on one form; unset fields keep their current value.
pub trait EntryForm {
    fn apply_to(&self, entry: &mut Entry);
}

/// Fields filled in after waking up (about the night before)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MorningForm {
    pub day_type: Option<DayType>,
    pub bed_time: Option<ClockTime>,
    pub try_sleep_time: Option<ClockTime>,
    pub sleep_latency: Option<u32>,
    pub wake_count: Option<u32>,
    pub total_wake_time: Option<u32>,
    pub last_wake_time: Option<ClockTime>,
    pub get_up_time: Option<ClockTime>,
    pub sleep_quality: Option<u8>,
    pub use_alarm: Option<bool>,
    pub notes: Option<String>,
}

/// Fields filled in before going to bed (about the day)
///
/// Optional times use `Some(None)` to clear a previously recorded time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EveningForm {
    pub nap_count: Option<u32>,
    pub nap_duration: Option<u32>,
    pub alcohol_amount: Option<String>,
    pub alcohol_time: Option<Option<ClockTime>>,
    pub caffeine_amount: Option<String>,
    pub caffeine_time: Option<Option<ClockTime>>,
    pub meds_name: Option<String>,
    pub meds_time: Option<Option<ClockTime>>,
    pub light_time: Option<String>,
    pub exercise_time: Option<String>,
}

fn set<T: Clone>(target: &mut T, value: &Option<T>) {
    if let Some(v) = value {
        *target = v.clone();
    }
}

fn set_time(target: &mut Option<ClockTime>, value: Option<ClockTime>) {
    if value.is_some() {
        *target = value;
    }
}

fn set_number(target: &mut Option<FormNumber>, value: Option<u32>) {
    if let Some(n) = value {
        *target = Some(FormNumber::from(n));
    }
}

impl EntryForm for MorningForm {
    fn apply_to(&self, entry: &mut Entry) {
        set(&mut entry.day_type, &self.day_type);
        set_time(&mut entry.bed_time, self.bed_time);
        set_time(&mut entry.try_sleep_time, self.try_sleep_time);
        set_number(&mut entry.sleep_latency, self.sleep_latency);
        set_number(&mut entry.wake_count, self.wake_count);
        set_number(&mut entry.total_wake_time, self.total_wake_time);
        set_time(&mut entry.last_wake_time, self.last_wake_time);
        set_time(&mut entry.get_up_time, self.get_up_time);
        set_number(&mut entry.sleep_quality, self.sleep_quality.map(u32::from));
        set(&mut entry.use_alarm, &self.use_alarm);
        set(&mut entry.notes, &self.notes);
    }
}

impl EntryForm for EveningForm {
    fn apply_to(&self, entry: &mut Entry) {
        set_number(&mut entry.nap_count, self.nap_count);
        set_number(&mut entry.nap_duration, self.nap_duration);
        set(&mut entry.alcohol_amount, &self.alcohol_amount);
        set(&mut entry.alcohol_time, &self.alcohol_time);
        set(&mut entry.caffeine_amount, &self.caffeine_amount);
        set(&mut entry.caffeine_time, &self.caffeine_time);
        set(&mut entry.meds_name, &self.meds_name);
        set(&mut entry.meds_time, &self.meds_time);
        set(&mut entry.light_time, &self.light_time);
        set(&mut entry.exercise_time, &self.exercise_time);
    }
}

/// Load the entry shown for `date`, overlay the form, and save the whole record.
pub fn record<S, F>(store: &mut EntryStore<S>, date: NaiveDate, form: &F) -> Result<Entry>
where
    S: KeyValueStorage,
    F: EntryForm,
{
    let mut entry = store.entry_for_date(date);
    form.apply_to(&mut entry);
    store.save_entry(date, entry.clone())?;
    Ok(entry)
}
