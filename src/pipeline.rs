use crate::classify;
use crate::config::Config;
use crate::fetch::IssueFetcher;
use crate::reconcile::TagReconciler;
use crate::report::{self, ReportBuilder};
use crate::teamcity;
use crate::youtrack::YouTrackRest;
use anyhow::{Context, Result};
use chrono::Utc;
use std::time::Instant;

/// Build parameter carrying the short report to the CI publishing step.
const SHORT_REPORT_PARAM: &str = "env.short_report";

/// One full triage run: fetch, reconcile removals, classify, reconcile
/// additions, report. Removals happen before classification so the tracker
/// never keeps the tag on an issue that already dropped out of the scan.
pub async fn run(config: &Config) -> Result<()> {
    let started = Instant::now();
    let rest = YouTrackRest::new(&config.host_url, &config.token);
    let fetcher = IssueFetcher::new(&rest);

    let tagged = if config.tagging_enabled() {
        fetcher.fetch_tagged(&config.hot_tag).await?
    } else {
        Vec::new()
    };

    let issues = fetcher
        .fetch_project_issues(&config.project, &config.search_condition)
        .await?;
    tracing::info!(scanned = issues.len(), tagged = tagged.len(), "fetch complete");

    let reconciler = TagReconciler::new(&rest, &config.hot_tag);
    if config.tagging_enabled() {
        reconciler.remove_stale(&tagged, &issues).await?;
    }

    let hot = classify::hot_issues(&issues, config.comment_threshold, Utc::now());
    tracing::info!(hot = hot.len(), "classification complete");

    if config.tagging_enabled() {
        reconciler.tag_hot(&hot).await?;
    }

    let elapsed = started.elapsed();

    let mut full = ReportBuilder::new();
    full.push_header(&format!("{} HOT ({})", config.project, hot.len()));
    report::append_hot_list(&mut full, &hot, &config.host_url);
    full.push_header("Statistics");
    full.push_key_value("Time", &format!("{:.2} sec", elapsed.as_secs_f64()));
    full.push_key_value("Issues scanned", &issues.len().to_string());
    full.push_key_value("Hot issues", &hot.len().to_string());

    let shown = hot.len().min(config.top_issues);
    let mut top = ReportBuilder::new();
    top.push_header(&format!("Top {} of {} hot issues", shown, hot.len()));
    let chat_block = report::chat_lines(&hot[..shown], &config.host_url);
    top.push_line(chat_block.clone(), chat_block);

    std::fs::write(&config.report_html, full.to_html())
        .with_context(|| format!("failed to write {}", config.report_html.display()))?;
    std::fs::write(&config.report_text, full.to_plain_text())
        .with_context(|| format!("failed to write {}", config.report_text.display()))?;

    let short_report = top.to_plain_text();
    println!("{short_report}");
    teamcity::set_build_parameter(SHORT_REPORT_PARAM, &short_report);

    Ok(())
}
