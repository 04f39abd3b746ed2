//! Diary entry model

use crate::domain::coerce;
use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Classification of a calendar day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DayType {
    #[default]
    Work,
    Rest,
}

impl DayType {
    /// Label used in the history view and the CSV export
    pub fn label(&self) -> &'static str {
        match self {
            DayType::Work => "工作日",
            DayType::Rest => "休息日",
        }
    }
}

impl FromStr for DayType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "work" => Ok(DayType::Work),
            "rest" => Ok(DayType::Rest),
            _ => Err(format!("Invalid day type: '{}'. Valid types: work, rest", s)),
        }
    }
}

/// Time of day with minute precision, written as `HH:MM`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ClockTime(NaiveTime);

impl ClockTime {
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(ClockTime)
    }

    // Fixed defaults only; out-of-range input falls back to midnight.
    fn hm(hour: u32, minute: u32) -> Self {
        Self::new(hour, minute).unwrap_or_default()
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}

impl FromStr for ClockTime {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        NaiveTime::parse_from_str(s, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
            .ok()
            .and_then(|t| ClockTime::new(t.hour(), t.minute()))
            .ok_or_else(|| format!("Invalid time: '{}'. Expected HH:MM", s))
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

/// A value typed into a numeric form input.
///
/// Inputs carry no bounds, so fractions and negatives are kept as entered.
/// Integral values are written without a fraction.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct FormNumber(f64);

impl FormNumber {
    /// `None` for NaN or infinite values
    pub fn new(value: f64) -> Option<Self> {
        value.is_finite().then_some(FormNumber(value))
    }

    fn as_integer(&self) -> Option<i64> {
        (self.0.fract() == 0.0 && self.0.abs() < 1e15).then(|| self.0 as i64)
    }
}

impl From<u32> for FormNumber {
    fn from(n: u32) -> Self {
        FormNumber(f64::from(n))
    }
}

impl fmt::Display for FormNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_integer() {
            Some(n) => write!(f, "{}", n),
            None => write!(f, "{}", self.0),
        }
    }
}

impl Serialize for FormNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_integer() {
            Some(n) => serializer.serialize_i64(n),
            None => serializer.serialize_f64(self.0),
        }
    }
}

/// Unset numbers are stored as `""`, like a cleared form input.
mod optional_number {
    use super::FormNumber;
    use crate::domain::coerce;
    use serde::{Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<FormNumber>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(n) => n.serialize(serializer),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<FormNumber>, D::Error> {
        Ok(coerce::optional_number(deserializer)?.and_then(FormNumber::new))
    }
}

/// Unset times are stored as `""`.
mod optional_clock {
    use super::ClockTime;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<ClockTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(t) => serializer.collect_str(t),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<ClockTime>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(s) if s.trim().is_empty() => Ok(None),
            Some(s) => s.parse().map(Some).map_err(D::Error::custom),
        }
    }
}

/// One calendar day's sleep-diary record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub date: NaiveDate,
    pub day_type: DayType,
    #[serde(default, with = "optional_clock")]
    pub bed_time: Option<ClockTime>,
    #[serde(default, with = "optional_clock")]
    pub try_sleep_time: Option<ClockTime>,
    #[serde(default, with = "optional_number")]
    pub sleep_latency: Option<FormNumber>,
    #[serde(default, with = "optional_number")]
    pub wake_count: Option<FormNumber>,
    #[serde(default, with = "optional_number")]
    pub total_wake_time: Option<FormNumber>,
    #[serde(default, with = "optional_clock")]
    pub last_wake_time: Option<ClockTime>,
    #[serde(default, with = "optional_clock")]
    pub get_up_time: Option<ClockTime>,
    #[serde(default, with = "optional_number")]
    pub sleep_quality: Option<FormNumber>,
    #[serde(deserialize_with = "coerce::boolean")]
    pub use_alarm: bool,
    #[serde(default, deserialize_with = "coerce::text")]
    pub notes: String,
    #[serde(default, with = "optional_number")]
    pub nap_count: Option<FormNumber>,
    #[serde(default, with = "optional_number")]
    pub nap_duration: Option<FormNumber>,
    #[serde(default, deserialize_with = "coerce::text")]
    pub alcohol_amount: String,
    #[serde(default, with = "optional_clock")]
    pub alcohol_time: Option<ClockTime>,
    #[serde(default, deserialize_with = "coerce::text")]
    pub caffeine_amount: String,
    #[serde(default, with = "optional_clock")]
    pub caffeine_time: Option<ClockTime>,
    #[serde(default, deserialize_with = "coerce::text")]
    pub meds_name: String,
    #[serde(default, with = "optional_clock")]
    pub meds_time: Option<ClockTime>,
    #[serde(default, deserialize_with = "coerce::text")]
    pub light_time: String,
    #[serde(default, deserialize_with = "coerce::text")]
    pub exercise_time: String,
}

impl Entry {
    pub const DEFAULT_SLEEP_LATENCY: u32 = 20;
    pub const DEFAULT_SLEEP_QUALITY: u32 = 3;

    /// Build the blank record shown for a date that has nothing saved yet
    pub fn default_for(date: NaiveDate) -> Self {
        Entry {
            date,
            day_type: DayType::Work,
            bed_time: Some(ClockTime::hm(22, 0)),
            try_sleep_time: Some(ClockTime::hm(22, 30)),
            sleep_latency: Some(FormNumber::from(Self::DEFAULT_SLEEP_LATENCY)),
            wake_count: Some(FormNumber::from(0u32)),
            total_wake_time: Some(FormNumber::from(0u32)),
            last_wake_time: Some(ClockTime::hm(6, 30)),
            get_up_time: Some(ClockTime::hm(7, 0)),
            sleep_quality: Some(FormNumber::from(Self::DEFAULT_SLEEP_QUALITY)),
            use_alarm: false,
            notes: String::new(),
            nap_count: Some(FormNumber::from(0u32)),
            nap_duration: Some(FormNumber::from(0u32)),
            alcohol_amount: String::new(),
            alcohol_time: None,
            caffeine_amount: String::new(),
            caffeine_time: None,
            meds_name: String::new(),
            meds_time: None,
            light_time: String::new(),
            exercise_time: String::new(),
        }
    }

    /// Label for the alarm flag
    pub fn alarm_label(&self) -> &'static str {
        if self.use_alarm {
            "是"
        } else {
            "否"
        }
    }
}
