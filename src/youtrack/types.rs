use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Issue snapshot as returned by the tracker. Identity is `id_readable`;
/// everything else is read-only state captured at fetch time.
#[derive(Debug, Clone, Deserialize)]
pub struct Issue {
    #[serde(rename = "idReadable")]
    pub id_readable: String,
    #[serde(default)]
    pub summary: String,
    #[serde(rename = "commentsCount", default)]
    pub comments_count: u32,
    /// Creation time, epoch milliseconds on the wire.
    #[serde(default)]
    pub created: i64,
    #[serde(default)]
    pub tags: Vec<IssueTag>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IssueTag {
    pub name: String,
}

impl Issue {
    pub fn created_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(self.created).unwrap_or(DateTime::UNIX_EPOCH)
    }
}
