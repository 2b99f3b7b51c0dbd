use chrono::{DateTime, Local};
use focus_guard_domain::NavigationCommitted;

use crate::di::UseCases;

pub async fn check(use_cases: &UseCases, url: &str, now: DateTime<Local>) -> anyhow::Result<()> {
    let verdict = use_cases.evaluate_url.execute(url, now.naive_local()).await;
    println!("{}", if verdict { "block" } else { "allow" });
    Ok(())
}

pub async fn navigate(
    use_cases: &UseCases,
    url: String,
    tab_id: i64,
    frame_id: i64,
    now: DateTime<Local>,
) -> anyhow::Result<()> {
    let event = NavigationCommitted {
        tab_id,
        frame_id,
        url,
        timestamp: now,
    };

    let outcome = use_cases.handle_navigation.on_committed(&event).await;
    println!("{}", outcome);
    Ok(())
}
