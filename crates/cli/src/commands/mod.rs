mod blocklist;
mod evaluate;
mod settings;

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use clap::Subcommand;
use focus_guard_domain::NormalizeMode;
use std::sync::Arc;

use crate::di::UseCases;
use crate::navigator::ConsoleNavigator;

#[derive(Subcommand)]
pub enum Command {
    /// Print whether a URL would be blocked right now (or at --at)
    Check {
        url: String,

        /// Local time to evaluate at (YYYY-MM-DDTHH:MM)
        #[arg(long, value_parser = parse_local_time)]
        at: Option<NaiveDateTime>,
    },

    /// Simulate a committed navigation and redirect if blocked
    Navigate {
        url: String,

        #[arg(long, default_value_t = 1)]
        tab: i64,

        /// Frame id; anything other than 0 is a sub-frame
        #[arg(long, default_value_t = 0)]
        frame: i64,

        #[arg(long, value_parser = parse_local_time)]
        at: Option<NaiveDateTime>,
    },

    /// Add a URL to the blocklist
    Add {
        url: String,

        /// url, domain or starts-with
        #[arg(short, long, default_value_t = NormalizeMode::Url)]
        mode: NormalizeMode,
    },

    /// Remove a blocklist entry by id
    Remove { id: i64 },

    /// List blocklist entries
    List,

    /// Show or change the blocking schedule
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Subcommand)]
pub enum SettingsAction {
    Show,
    Set {
        #[arg(long)]
        enabled: Option<bool>,

        /// Window start (H:MM)
        #[arg(long)]
        start: Option<String>,

        /// Window end (H:MM)
        #[arg(long)]
        end: Option<String>,

        /// Also block on Saturday and Sunday
        #[arg(long)]
        weekends: Option<bool>,
    },
}

pub async fn run(
    command: Command,
    use_cases: &UseCases,
    navigator: Arc<ConsoleNavigator>,
) -> anyhow::Result<()> {
    match command {
        Command::Check { url, at } => evaluate::check(use_cases, &url, resolve_time(at)?).await,
        Command::Navigate {
            url,
            tab,
            frame,
            at,
        } => {
            navigator.open_tab(tab, &url);
            evaluate::navigate(use_cases, url, tab, frame, resolve_time(at)?).await
        }
        Command::Add { url, mode } => blocklist::add(use_cases, &url, mode).await,
        Command::Remove { id } => blocklist::remove(use_cases, id).await,
        Command::List => blocklist::list(use_cases).await,
        Command::Settings { action } => match action {
            SettingsAction::Show => settings::show(use_cases).await,
            SettingsAction::Set {
                enabled,
                start,
                end,
                weekends,
            } => settings::set(use_cases, enabled, start, end, weekends).await,
        },
    }
}

fn parse_local_time(value: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
        .map_err(|e| format!("Invalid time '{}' (expected YYYY-MM-DDTHH:MM): {}", value, e))
}

fn resolve_time(at: Option<NaiveDateTime>) -> anyhow::Result<DateTime<Local>> {
    match at {
        None => Ok(Local::now()),
        Some(naive) => Local
            .from_local_datetime(&naive)
            .earliest()
            .ok_or_else(|| anyhow::anyhow!("{} does not exist in the local timezone", naive)),
    }
}
