use crate::cli::commands::{Context, normalized};
use crate::cli::parser::Commands;
use crate::core::calculator::expected::end_time;
use crate::core::calculator::lunch::lunch_savings;
use crate::core::clock::{Clock, SystemClock};
use crate::core::validator::validate;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning_list};
use crate::utils::time::format_hms;

/// Handle the `check` command: show the normalized schedule and its warnings.
pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Check { schedule } = cmd {
        let rules = ctx.cfg.work_rules()?;
        let limits = ctx.cfg.validation_limits()?;
        let s = normalized(schedule, SystemClock.today());

        let fmt = "%Y-%m-%d %H:%M";
        println!("Start       : {}", s.start().format(fmt));
        println!("Lunch start : {}", s.lunch_start().format(fmt));
        println!("Lunch end   : {}", s.lunch_end().format(fmt));
        println!("End         : {}", end_time(&s, &rules).format(fmt));
        println!("Lunch saved : {}", format_hms(lunch_savings(&s, &rules)));
        println!();

        let warnings = validate(&s, &rules, &limits);
        if warnings.is_empty() {
            success("Schedule looks fine");
        } else {
            warning_list("Input validation warnings:", &warnings);
        }
    }

    Ok(())
}
