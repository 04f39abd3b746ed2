//! CLI command definitions

use crate::application::{EveningForm, MorningForm};
use crate::domain::{ClockTime, DayType};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Parser, Debug)]
#[command(name = "sleepdiary")]
#[command(about = "Personal sleep diary", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new diary
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Record the morning form (last night's sleep)
    Morning {
        /// Day to record (today, yesterday, last monday, 2024-01-01, ...)
        #[arg(value_name = "DATE", default_value = "today")]
        date: String,

        #[command(flatten)]
        fields: MorningArgs,
    },

    /// Record the evening form (naps, alcohol, caffeine, medication, light, exercise)
    Evening {
        /// Day to record
        #[arg(value_name = "DATE", default_value = "today")]
        date: String,

        #[command(flatten)]
        fields: EveningArgs,
    },

    /// Show the entry for a day
    Show {
        #[arg(value_name = "DATE", default_value = "today")]
        date: String,
    },

    /// List saved entries, newest first
    History,

    /// Delete the entry for a day
    Delete {
        #[arg(value_name = "DATE")]
        date: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Export all entries as CSV
    Export {
        /// Directory to write the file into (default: current directory)
        #[arg(short, long, default_value = ".")]
        output: PathBuf,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}

#[derive(Args, Debug, Default)]
pub struct MorningArgs {
    /// Day type (work, rest)
    #[arg(long)]
    pub day_type: Option<DayType>,

    /// Time you went to bed (HH:MM)
    #[arg(long)]
    pub bed_time: Option<ClockTime>,

    /// Time you tried to fall asleep (HH:MM)
    #[arg(long)]
    pub try_sleep_time: Option<ClockTime>,

    /// Minutes it took to fall asleep
    #[arg(long)]
    pub sleep_latency: Option<u32>,

    /// Times you woke up during the night
    #[arg(long)]
    pub wake_count: Option<u32>,

    /// Total minutes awake during the night
    #[arg(long)]
    pub total_wake_time: Option<u32>,

    /// Time of the final awakening (HH:MM)
    #[arg(long)]
    pub last_wake_time: Option<ClockTime>,

    /// Time you got out of bed (HH:MM)
    #[arg(long)]
    pub get_up_time: Option<ClockTime>,

    /// Sleep quality from 1 (poor) to 5 (great)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
    pub quality: Option<u8>,

    /// Woke up with an alarm
    #[arg(long, conflicts_with = "no_alarm")]
    pub alarm: bool,

    /// Woke up without an alarm
    #[arg(long)]
    pub no_alarm: bool,

    /// Free-text notes
    #[arg(long)]
    pub notes: Option<String>,
}

impl MorningArgs {
    pub fn into_form(self) -> MorningForm {
        let use_alarm = match (self.alarm, self.no_alarm) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        };

        MorningForm {
            day_type: self.day_type,
            bed_time: self.bed_time,
            try_sleep_time: self.try_sleep_time,
            sleep_latency: self.sleep_latency,
            wake_count: self.wake_count,
            total_wake_time: self.total_wake_time,
            last_wake_time: self.last_wake_time,
            get_up_time: self.get_up_time,
            sleep_quality: self.quality,
            use_alarm,
            notes: self.notes,
        }
    }
}

/// A time argument where an empty string clears the field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeOrBlank(pub Option<ClockTime>);

impl FromStr for TimeOrBlank {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            Ok(TimeOrBlank(None))
        } else {
            s.parse().map(|t| TimeOrBlank(Some(t)))
        }
    }
}

#[derive(Args, Debug, Default)]
pub struct EveningArgs {
    /// Number of naps
    #[arg(long)]
    pub nap_count: Option<u32>,

    /// Total nap minutes
    #[arg(long)]
    pub nap_duration: Option<u32>,

    /// Alcohol consumed
    #[arg(long)]
    pub alcohol: Option<String>,

    /// Time of the last drink (HH:MM, empty to clear)
    #[arg(long)]
    pub alcohol_time: Option<TimeOrBlank>,

    /// Caffeine consumed
    #[arg(long)]
    pub caffeine: Option<String>,

    /// Time of the last caffeine (HH:MM, empty to clear)
    #[arg(long)]
    pub caffeine_time: Option<TimeOrBlank>,

    /// Medication taken
    #[arg(long)]
    pub meds: Option<String>,

    /// Time the medication was taken (HH:MM, empty to clear)
    #[arg(long)]
    pub meds_time: Option<TimeOrBlank>,

    /// Light exposure
    #[arg(long)]
    pub light: Option<String>,

    /// Exercise
    #[arg(long)]
    pub exercise: Option<String>,
}

impl EveningArgs {
    pub fn into_form(self) -> EveningForm {
        EveningForm {
            nap_count: self.nap_count,
            nap_duration: self.nap_duration,
            alcohol_amount: self.alcohol,
            alcohol_time: self.alcohol_time.map(|t| t.0),
            caffeine_amount: self.caffeine,
            caffeine_time: self.caffeine_time.map(|t| t.0),
            meds_name: self.meds,
            meds_time: self.meds_time.map(|t| t.0),
            light_time: self.light,
            exercise_time: self.exercise,
        }
    }
}
