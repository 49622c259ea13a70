use crate::cli::commands::Context;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;

/// Handle the `init` command
pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Init { force } = cmd {
        let path = &ctx.config_path;

        if path.exists() && !force {
            return Err(AppError::Config(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            )));
        }

        Config::default().save(path)?;
        tracing::info!(path = %path.display(), "configuration initialized");
        success(format!("Config file: {}", path.display()));
    }

    Ok(())
}
