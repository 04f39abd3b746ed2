//! Output formatting utilities

use crate::domain::{ClockTime, Entry, FormNumber};

pub const SAVED_MESSAGE: &str = "資料已儲存！";
pub const EMPTY_HISTORY: &str = "目前還沒有紀錄";

/// Format the history list. Entries are printed in the order given;
/// callers pass them newest first.
pub fn format_history<'a, I>(entries: I) -> String
where
    I: IntoIterator<Item = &'a Entry>,
{
    let mut output = String::new();
    for entry in entries {
        output.push_str(&format!(
            "{}  {}  😴 {} 就寢  ⚡ 品質: {}/5\n",
            entry.date.format("%Y-%m-%d"),
            entry.day_type.label(),
            optional_time(entry.bed_time),
            optional_number(entry.sleep_quality)
        ));
    }

    if output.is_empty() {
        return EMPTY_HISTORY.to_string();
    }
    output
}

fn optional_time(time: Option<ClockTime>) -> String {
    time.map(|t| t.to_string()).unwrap_or_else(|| "-".to_string())
}

fn optional_number(number: Option<FormNumber>) -> String {
    number
        .map(|n| n.to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn text_or_dash(text: &str) -> &str {
    if text.is_empty() {
        "-"
    } else {
        text
    }
}

/// Format a single entry as a labelled block
pub fn format_entry(entry: &Entry, saved: bool) -> String {
    let mut output = format!(
        "{} ({}){}\n",
        entry.date.format("%Y-%m-%d"),
        entry.day_type.label(),
        if saved { "" } else { "  [未儲存]" }
    );

    let rows: [(&str, String); 20] = [
        ("就寢時間", optional_time(entry.bed_time)),
        ("嘗試入睡", optional_time(entry.try_sleep_time)),
        ("入睡耗時(分)", optional_number(entry.sleep_latency)),
        ("醒來次數", optional_number(entry.wake_count)),
        ("醒來總時(分)", optional_number(entry.total_wake_time)),
        ("最後醒來", optional_time(entry.last_wake_time)),
        ("起床時間", optional_time(entry.get_up_time)),
        ("睡眠品質(1-5)", optional_number(entry.sleep_quality)),
        ("使用鬧鐘", entry.alarm_label().to_string()),
        ("備註", text_or_dash(&entry.notes).to_string()),
        ("小睡次數", optional_number(entry.nap_count)),
        ("小睡總時(分)", optional_number(entry.nap_duration)),
        ("酒精", text_or_dash(&entry.alcohol_amount).to_string()),
        ("最後喝酒", optional_time(entry.alcohol_time)),
        ("咖啡因", text_or_dash(&entry.caffeine_amount).to_string()),
        ("最後咖啡", optional_time(entry.caffeine_time)),
        ("藥物", text_or_dash(&entry.meds_name).to_string()),
        ("服藥時間", optional_time(entry.meds_time)),
        ("照光", text_or_dash(&entry.light_time).to_string()),
        ("運動", text_or_dash(&entry.exercise_time).to_string()),
    ];

    for (label, value) in rows.iter() {
        output.push_str(&format!("  {}: {}\n", label, value));
    }
    output
}
