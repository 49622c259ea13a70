use crate::utils::time::{parse_date, parse_time};
use chrono::{NaiveDate, NaiveTime};
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for rWorkday
/// CLI application to follow the current work day against a fixed schedule
#[derive(Parser)]
#[command(
    name = "rworkday",
    version = env!("CARGO_PKG_VERSION"),
    about = "Follow your work day: worked time, remaining time and lunch compensation",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Enable debug logging on stderr
    #[arg(global = true, short = 'v', long = "verbose")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

fn time_arg(s: &str) -> Result<NaiveTime, String> {
    parse_time(s).map_err(|e| e.to_string())
}

fn date_arg(s: &str) -> Result<NaiveDate, String> {
    parse_date(s).map_err(|e| e.to_string())
}

/// The three times of day that make up a schedule.
#[derive(Args, Debug, Clone)]
pub struct ScheduleArgs {
    /// Work start time (HH:MM, 24-hour)
    #[arg(long = "start", value_name = "HH:MM", value_parser = time_arg)]
    pub start: NaiveTime,

    /// Lunch start time (HH:MM, 24-hour)
    #[arg(
        long = "lunch-start",
        alias = "lunch_start",
        value_name = "HH:MM",
        value_parser = time_arg
    )]
    pub lunch_start: NaiveTime,

    /// Lunch end time (HH:MM, 24-hour)
    #[arg(
        long = "lunch-end",
        alias = "lunch_end",
        value_name = "HH:MM",
        value_parser = time_arg
    )]
    pub lunch_end: NaiveTime,

    /// Date the work day starts on (YYYY-MM-DD, default: today)
    #[arg(long = "date", value_name = "YYYY-MM-DD", value_parser = date_arg)]
    pub date: Option<NaiveDate>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default configuration file
    Init {
        #[arg(long = "force", help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Validate a schedule and show when the day ends
    Check {
        #[command(flatten)]
        schedule: ScheduleArgs,
    },

    /// Follow the work day live
    Track {
        #[command(flatten)]
        schedule: ScheduleArgs,

        #[arg(long = "refresh", value_name = "SECS", help = "Refresh interval in seconds")]
        refresh: Option<u64>,

        #[arg(long = "once", help = "Render a single frame and exit")]
        once: bool,

        #[arg(
            long = "at",
            value_name = "TIME",
            help = "Evaluate at a fixed time (HH:MM or \"YYYY-MM-DD HH:MM\") instead of now"
        )]
        at: Option<String>,

        #[arg(short = 'y', long = "yes", help = "Do not ask for confirmation on warnings")]
        yes: bool,

        #[arg(long = "json", help = "Print a single JSON snapshot and exit")]
        json: bool,
    },
}
