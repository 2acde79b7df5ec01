use anyhow::Result;
use fixture_sync::SyncStats;

pub fn render_summary(stats: &SyncStats, check: bool) -> String {
    let mut out = String::new();
    if check {
        for update in &stats.updates {
            out.push_str(&format!(
                "stale: {} {} (have {}, want {})\n",
                update.fixture.display(),
                update.href,
                update.old.as_deref().unwrap_or("absent"),
                update.new
            ));
        }
    }

    let verb = if check { "stale" } else { "updated" };
    out.push_str(&format!(
        "{} pages, {} wheel links, {} {verb}, {} without sidecar ({} ms)",
        stats.files,
        stats.anchors,
        stats.updates.len(),
        stats.missing_sidecars,
        stats.time_ms
    ));
    out
}

pub fn render_json(stats: &SyncStats) -> Result<String> {
    Ok(serde_json::to_string_pretty(stats)?)
}
