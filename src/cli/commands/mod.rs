pub mod check;
pub mod config;
pub mod init;
pub mod track;

use crate::cli::parser::ScheduleArgs;
use crate::config::Config;
use crate::core::normalizer::normalize;
use crate::models::schedule::{NormalizedSchedule, ScheduleSpec};
use chrono::NaiveDate;
use std::path::PathBuf;

/// What every command handler gets: the resolved config path and its content.
pub struct Context {
    pub config_path: PathBuf,
    pub cfg: Config,
}

/// Normalize the schedule given on the command line.
pub(crate) fn normalized(args: &ScheduleArgs, fallback_date: NaiveDate) -> NormalizedSchedule {
    let spec = ScheduleSpec::new(args.start, args.lunch_start, args.lunch_end);
    normalize(&spec, args.date.unwrap_or(fallback_date))
}
