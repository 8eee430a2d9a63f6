use crate::sanitize;
use crate::youtrack::Issue;

/// Parallel plain-text / HTML line buffers. Every append writes exactly one
/// entry to each buffer, so the two renderings always describe the same
/// issues in the same order.
#[derive(Debug, Default)]
pub struct ReportBuilder {
    plain: Vec<String>,
    html: Vec<String>,
}

impl ReportBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_header(&mut self, title: &str) {
        self.plain.push(format!("=== {title} ==="));
        self.html.push(format!("<h2>{title}</h2>"));
    }

    pub fn push_key_value(&mut self, key: &str, value: &str) {
        self.plain.push(format!("{key}: {value}"));
        self.html.push(format!("<b>{key}:</b> {value}<br/>"));
    }

    pub fn push_line(&mut self, plain: impl Into<String>, html: impl Into<String>) {
        self.plain.push(plain.into());
        self.html.push(html.into());
    }

    pub fn len(&self) -> usize {
        self.plain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plain.is_empty()
    }

    pub fn to_plain_text(&self) -> String {
        render(&self.plain)
    }

    pub fn to_html(&self) -> String {
        render(&self.html)
    }
}

fn render(lines: &[String]) -> String {
    if lines.is_empty() {
        return String::new();
    }
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// One hot issue prepared for the full report.
#[derive(Debug, Clone)]
pub struct ReportEntry {
    pub id: String,
    pub url: String,
    pub title: String,
    pub comments: String,
}

impl ReportEntry {
    pub fn new(issue: &Issue, host_url: &str) -> Self {
        Self {
            id: issue.id_readable.clone(),
            url: issue_url(host_url, &issue.id_readable),
            title: sanitize::markup_title(&issue.summary),
            comments: sanitize::comment_phrase(issue.comments_count),
        }
    }

    pub fn plain_line(&self) -> String {
        format!("{} {} / {}", self.id, self.title, self.comments)
    }

    pub fn html_line(&self) -> String {
        format!(
            "<a target=\"_blank\" href=\"{}\">{}</a> {} / <b>{}</b><br/>",
            self.url, self.id, self.title, self.comments
        )
    }
}

/// Append the full hot list to `out`, one paired line per issue.
pub fn append_hot_list(out: &mut ReportBuilder, issues: &[Issue], host_url: &str) {
    for issue in issues {
        let entry = ReportEntry::new(issue, host_url);
        out.push_line(entry.plain_line(), entry.html_line());
    }
}

/// Chat message block for the top issues, one Slack-style line per issue.
/// Titles go through the lossy chat-safe pipeline.
pub fn chat_lines(issues: &[Issue], host_url: &str) -> String {
    let mut out = String::new();
    for issue in issues {
        let url = issue_url(host_url, &issue.id_readable);
        let title = sanitize::chat_title(&issue.summary);
        let comments = sanitize::comment_phrase(issue.comments_count);
        out.push_str(&format!("<{url}|{}> {title} / {comments}\n", issue.id_readable));
    }
    out
}

pub fn issue_url(host_url: &str, id: &str) -> String {
    format!("{}/issue/{}", host_url.trim_end_matches('/'), id)
}
