use crate::cli::commands::{Context, normalized};
use crate::cli::parser::Commands;
use crate::core::clock::{Clock, FixedClock, SystemClock};
use crate::core::calculator::expected::end_time;
use crate::core::logic::Core;
use crate::core::normalizer::anchor_in_shift;
use crate::core::validator::validate;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning_list};
use crate::ui::prompt::confirm;
use crate::ui::report::{NoticeWindows, Reporter, Snapshot};
use crate::utils::time::parse_instant;
use chrono::Duration;
use std::io;

/// Handle the `track` command: validate, confirm, then run the live view.
pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Track {
        schedule,
        refresh,
        once,
        at,
        yes,
        json,
    } = cmd
    {
        let rules = ctx.cfg.work_rules()?;
        let limits = ctx.cfg.validation_limits()?;

        let system = SystemClock;
        let reference_date = schedule.date.unwrap_or_else(|| system.today());
        let s = normalized(schedule, reference_date);

        let end = end_time(&s, &rules);
        let fixed = at
            .as_deref()
            .map(|raw| parse_instant(raw, |t| anchor_in_shift(&s, end, t)).map(FixedClock::new))
            .transpose()?;
        let clock: &dyn Clock = match &fixed {
            Some(c) => c,
            None => &system,
        };

        let warnings = validate(&s, &rules, &limits);

        tracing::info!(
            start = %s.start(),
            lunch_start = %s.lunch_start(),
            lunch_end = %s.lunch_end(),
            warnings = warnings.len(),
            "session started"
        );

        if *json {
            let state = Core::evaluate_with(&s, &rules, clock);
            let snap = Snapshot::new(&s, &state, &rules, &warnings);
            println!("{}", serde_json::to_string_pretty(&snap)?);
            return Ok(());
        }

        if !warnings.is_empty() {
            warning_list("Input validation warnings:", &warnings);
            if !*yes {
                let stdin = io::stdin();
                let proceed = confirm("Continue anyway?", &mut stdin.lock(), &mut io::stdout())?;
                if !proceed {
                    tracing::info!("schedule refused at confirmation prompt");
                    return Err(AppError::Cancelled("schedule not confirmed".into()));
                }
            }
        }

        let reporter = Reporter {
            schedule: s,
            rules,
            windows: NoticeWindows {
                lunch: seconds("lunch_notice_seconds", ctx.cfg.lunch_notice_seconds)?,
                end: seconds("end_notice_seconds", ctx.cfg.end_notice_seconds)?,
            },
            clock,
        };

        if *once || fixed.is_some() {
            return reporter.print_once(&mut io::stdout());
        }

        let interval = refresh
            .map(|secs| std::time::Duration::from_secs(secs.max(1)))
            .unwrap_or_else(|| ctx.cfg.refresh());

        success("Office hours tracking started!");
        info("Press Ctrl+C to exit");
        return reporter.run(interval);
    }

    Ok(())
}

fn seconds(key: &str, value: i64) -> AppResult<Duration> {
    Duration::try_seconds(value)
        .filter(|d| *d >= Duration::zero())
        .ok_or_else(|| AppError::Config(format!("{key} out of range ({value})")))
}
