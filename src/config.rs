use clap::Parser;
use std::path::PathBuf;

/// Scans a tracker project for unassigned unresolved issues, tags the hot
/// ones, and writes triage reports.
#[derive(Debug, Parser)]
#[command(name = "hotlist", version, about)]
pub struct Config {
    /// Tracker base URL, e.g. https://youtrack.example.com/
    #[arg(long, env = "YOUTRACK_HOST")]
    pub host_url: String,

    /// Permanent bearer token for the tracker API.
    #[arg(long, env = "YOUTRACK_TOKEN", hide_env_values = true)]
    pub token: String,

    /// Project short name to scan.
    #[arg(long)]
    pub project: String,

    /// Extra free-text query appended to the base filter.
    #[arg(long, default_value = "")]
    pub search_condition: String,

    /// Marker tag for hot issues. Empty disables tagging.
    #[arg(long, default_value = "")]
    pub hot_tag: String,

    /// Comment count above which an issue is hot outright.
    #[arg(long, default_value_t = 10)]
    pub comment_threshold: u32,

    /// Number of issues in the short report.
    #[arg(long, default_value_t = 5)]
    pub top_issues: usize,

    /// Plain-text report destination.
    #[arg(long, default_value = "report.txt")]
    pub report_text: PathBuf,

    /// HTML report destination.
    #[arg(long, default_value = "report.html")]
    pub report_html: PathBuf,
}

impl Config {
    pub fn tagging_enabled(&self) -> bool {
        !self.hot_tag.is_empty()
    }
}
