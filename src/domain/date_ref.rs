//! Date reference parsing and resolution

use crate::error::{DiaryError, Result};
use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// A user-supplied way of naming a diary day
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateReference {
    Today,
    Yesterday,
    Tomorrow,
    /// Current/most recent occurrence of a weekday
    Weekday(Weekday),
    /// Previous occurrence of a weekday (strictly before today)
    LastWeekday(Weekday),
    /// Next occurrence of a weekday (strictly after today)
    NextWeekday(Weekday),
    /// Specific ISO date (YYYY-MM-DD)
    Specific(NaiveDate),
}

impl DateReference {
    /// Parse a date reference string
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_lowercase();

        if let Some(day) = normalized.strip_prefix("last ") {
            return Self::weekday(day)
                .map(DateReference::LastWeekday)
                .ok_or_else(|| DiaryError::InvalidDate(input.to_string()));
        }
        if let Some(day) = normalized.strip_prefix("next ") {
            return Self::weekday(day)
                .map(DateReference::NextWeekday)
                .ok_or_else(|| DiaryError::InvalidDate(input.to_string()));
        }

        match normalized.as_str() {
            "today" | "now" => Ok(DateReference::Today),
            "yesterday" => Ok(DateReference::Yesterday),
            "tomorrow" => Ok(DateReference::Tomorrow),
            other => match Self::weekday(other) {
                Some(day) => Ok(DateReference::Weekday(day)),
                None => NaiveDate::parse_from_str(other, "%Y-%m-%d")
                    .map(DateReference::Specific)
                    .map_err(|_| DiaryError::InvalidDate(input.to_string())),
            },
        }
    }

    fn weekday(name: &str) -> Option<Weekday> {
        match name.trim() {
            "monday" => Some(Weekday::Mon),
            "tuesday" => Some(Weekday::Tue),
            "wednesday" => Some(Weekday::Wed),
            "thursday" => Some(Weekday::Thu),
            "friday" => Some(Weekday::Fri),
            "saturday" => Some(Weekday::Sat),
            "sunday" => Some(Weekday::Sun),
            _ => None,
        }
    }

    /// Resolve this reference against `today`
    pub fn resolve(&self, today: NaiveDate) -> NaiveDate {
        match self {
            DateReference::Today => today,
            DateReference::Yesterday => today - Duration::days(1),
            DateReference::Tomorrow => today + Duration::days(1),
            DateReference::Weekday(target) => today - Duration::days(days_back(today, *target)),
            DateReference::LastWeekday(target) => {
                let back = match days_back(today, *target) {
                    0 => 7,
                    n => n,
                };
                today - Duration::days(back)
            }
            DateReference::NextWeekday(target) => {
                let forward = match (target.num_days_from_monday() + 7
                    - today.weekday().num_days_from_monday())
                    % 7
                {
                    0 => 7,
                    n => n,
                };
                today + Duration::days(forward as i64)
            }
            DateReference::Specific(date) => *date,
        }
    }
}

/// Days from the most recent `target` (today included) back to `today`
fn days_back(today: NaiveDate, target: Weekday) -> i64 {
    ((today.weekday().num_days_from_monday() + 7 - target.num_days_from_monday()) % 7) as i64
}
