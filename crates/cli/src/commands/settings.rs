use focus_guard_domain::{parse_minutes, DomainError, Settings};

use crate::di::UseCases;

async fn current(use_cases: &UseCases) -> anyhow::Result<Settings> {
    match use_cases.get_settings.execute().await {
        Ok(settings) => Ok(settings),
        Err(DomainError::StoreUnavailable(_)) => Ok(Settings::default()),
        Err(e) => Err(e.into()),
    }
}

pub async fn show(use_cases: &UseCases) -> anyhow::Result<()> {
    let settings = current(use_cases).await?;
    println!("enabled:  {}", settings.enabled);
    println!("window:   {}", settings.work_hour);
    println!("weekends: {}", settings.block_on_weekends);
    Ok(())
}

pub async fn set(
    use_cases: &UseCases,
    enabled: Option<bool>,
    start: Option<String>,
    end: Option<String>,
    weekends: Option<bool>,
) -> anyhow::Result<()> {
    let mut settings = current(use_cases).await?;

    if let Some(enabled) = enabled {
        settings.enabled = enabled;
    }
    if let Some(start) = start {
        settings.work_hour.start = parse_minutes(&start).map_err(anyhow::Error::msg)?;
    }
    if let Some(end) = end {
        settings.work_hour.end = parse_minutes(&end).map_err(anyhow::Error::msg)?;
    }
    if let Some(weekends) = weekends {
        settings.block_on_weekends = weekends;
    }

    let saved = use_cases.update_settings.execute(settings).await?;
    println!(
        "window {} (enabled: {}, weekends: {})",
        saved.work_hour, saved.enabled, saved.block_on_weekends
    );
    Ok(())
}
