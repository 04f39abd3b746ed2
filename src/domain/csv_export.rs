//! CSV rendering of diary entries

use crate::domain::{ClockTime, Entry, FormNumber};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Byte-order marker written ahead of the header so spreadsheet tools pick UTF-8
pub const BOM: char = '\u{FEFF}';

pub const HEADER: &str = "日期,類型,就寢時間,嘗試入睡,入睡耗時(分),醒來次數,醒來總時(分),最後醒來,起床時間,睡眠品質(1-5),使用鬧鐘,備註,小睡次數,小睡總時(分),酒精,最後喝酒,咖啡因,最後咖啡,藥物,服藥時間,照光,運動";

pub const MIME_TYPE: &str = "text/csv;charset=utf-8;";

pub const DEFAULT_FILENAME_PREFIX: &str = "睡眠日誌匯出_";

/// How free-text columns are quoted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CsvQuoting {
    /// Wrap in double quotes without escaping embedded quotes
    #[default]
    Legacy,
    /// Wrap in double quotes and double any embedded quote
    Rfc4180,
}

impl FromStr for CsvQuoting {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "legacy" => Ok(CsvQuoting::Legacy),
            "rfc4180" => Ok(CsvQuoting::Rfc4180),
            _ => Err(format!(
                "Invalid csv_quoting: '{}'. Valid modes: legacy, rfc4180",
                s
            )),
        }
    }
}

impl CsvQuoting {
    fn quote(&self, text: &str) -> String {
        match self {
            CsvQuoting::Legacy => format!("\"{}\"", text),
            CsvQuoting::Rfc4180 => format!("\"{}\"", text.replace('"', "\"\"")),
        }
    }
}

/// A rendered export, ready to be written or handed to a download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    pub filename: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

impl CsvExport {
    pub fn as_str(&self) -> &str {
        // Built from a String in `render`, so always valid UTF-8.
        std::str::from_utf8(&self.bytes).unwrap_or_default()
    }
}

/// File name for an export produced on `day`
pub fn export_filename(prefix: &str, day: NaiveDate) -> String {
    format!("{}{}.csv", prefix, day.format("%Y-%m-%d"))
}

/// One data row, without the trailing newline
pub fn render_row(entry: &Entry, quoting: CsvQuoting) -> String {
    let time = |t: &Option<ClockTime>| t.map(|t| t.to_string()).unwrap_or_default();
    let number = |n: &Option<FormNumber>| n.map(|n| n.to_string()).unwrap_or_default();

    [
        entry.date.format("%Y-%m-%d").to_string(),
        entry.day_type.label().to_string(),
        time(&entry.bed_time),
        time(&entry.try_sleep_time),
        number(&entry.sleep_latency),
        number(&entry.wake_count),
        number(&entry.total_wake_time),
        time(&entry.last_wake_time),
        time(&entry.get_up_time),
        number(&entry.sleep_quality),
        entry.alarm_label().to_string(),
        quoting.quote(&entry.notes),
        number(&entry.nap_count),
        number(&entry.nap_duration),
        quoting.quote(&entry.alcohol_amount),
        time(&entry.alcohol_time),
        quoting.quote(&entry.caffeine_amount),
        time(&entry.caffeine_time),
        quoting.quote(&entry.meds_name),
        time(&entry.meds_time),
        quoting.quote(&entry.light_time),
        quoting.quote(&entry.exercise_time),
    ]
    .join(",")
}

/// Render the full document: BOM, header, then one line per entry in the given order
pub fn render<'a, I>(entries: I, quoting: CsvQuoting) -> String
where
    I: IntoIterator<Item = &'a Entry>,
{
    let mut out = String::new();
    out.push(BOM);
    out.push_str(HEADER);
    out.push('\n');
    for entry in entries {
        out.push_str(&render_row(entry, quoting));
        out.push('\n');
    }
    out
}
