use focus_guard_domain::{DomainError, NormalizeMode, UrlMatcher};

use crate::di::UseCases;

pub async fn add(use_cases: &UseCases, url: &str, mode: NormalizeMode) -> anyhow::Result<()> {
    let entry = use_cases.add_blocked_url.execute(url, mode).await?;
    println!("{}\t{}", entry.id.unwrap_or_default(), entry.url);
    Ok(())
}

pub async fn remove(use_cases: &UseCases, id: i64) -> anyhow::Result<()> {
    use_cases.remove_blocked_url.execute(id).await?;
    println!("removed {}", id);
    Ok(())
}

pub async fn list(use_cases: &UseCases) -> anyhow::Result<()> {
    let entries = match use_cases.get_blocked_urls.execute().await {
        Ok(entries) => entries,
        Err(DomainError::StoreUnavailable(_)) => Vec::new(),
        Err(e) => return Err(e.into()),
    };

    if entries.is_empty() {
        println!("blocklist is empty");
        return Ok(());
    }

    let matcher = UrlMatcher::new(&entries);
    println!(
        "{} entries ({} exact, {} wildcard)",
        entries.len(),
        matcher.exact_count(),
        matcher.wildcard_count()
    );

    for entry in entries {
        println!(
            "{}\t{}\t{}",
            entry.id.unwrap_or_default(),
            entry.url,
            entry.added_at.as_deref().unwrap_or("-")
        );
    }
    Ok(())
}
