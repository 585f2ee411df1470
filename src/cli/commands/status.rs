use anyhow::Result;

use crate::cache::{CacheStore, SqliteCacheStore};
use crate::engine::COMMON_MESSAGES;
use crate::paths;
use crate::translation::display_name;
use crate::ui::Style;

pub fn run_status(to: &str) -> Result<()> {
    let store = SqliteCacheStore::open(paths::cache_dir().join("translations.db"))?;
    let report = store.status_report(to, COMMON_MESSAGES)?;

    println!(
        "{}",
        Style::header(format!(
            "Cache status for {} ({})",
            display_name(to),
            report.language
        ))
    );

    if report.is_fully_populated() {
        println!("  {}", Style::success("fully populated"));
        return Ok(());
    }

    for flow in &report.populated {
        println!("  {:14} {}", flow.as_str(), Style::success("populated"));
    }
    for flow in &report.missing {
        println!("  {:14} {}", flow.as_str(), Style::warning("missing"));
    }

    println!(
        "\n{}",
        Style::hint(format!("Run 'lingo populate --to {to}' to fill the cache."))
    );

    Ok(())
}
