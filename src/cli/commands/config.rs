use crate::cli::commands::Context;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning_list};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        edit_config,
        editor,
    } = cmd
    {
        let path = &ctx.config_path;

        // ---- PRINT CONFIG (also the default action) ----
        if *print_config || !(*check || *edit_config) {
            println!("📄 Current configuration ({}):\n", path.display());
            println!("{}", ConfigLogic::render(&ctx.cfg)?);
        }

        // ---- CHECK CONFIG ----
        if *check {
            // Reject values that would fail later, at track time
            ctx.cfg.work_rules()?;
            ctx.cfg.validation_limits()?;

            if !path.exists() {
                info(format!(
                    "No configuration file at {}, defaults apply",
                    path.display()
                ));
            } else {
                let missing = Config::missing_keys(path)?;
                if missing.is_empty() {
                    success("Configuration file is complete");
                } else {
                    warning_list("Missing fields (defaults apply):", &missing);
                }
            }
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            ConfigLogic::edit(path, editor)?;
        }
    }

    Ok(())
}
