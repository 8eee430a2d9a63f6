use crate::youtrack::{Issue, YouTrackRest};
use anyhow::Result;
use chrono::{Duration, Utc};

/// Base predicate applied to every project scan.
pub const BASE_FILTER: &str = "#Unresolved Assignee: Unassigned order by: updated";

/// Only issues updated within this window are candidates for classification.
pub const RECENCY_WINDOW_DAYS: i64 = 7;

const PAGE_SIZE: usize = 100;
/// Fixed page count per run (2000 issues total). A ceiling, not a cursor:
/// the scan always walks every page.
const PROJECT_PAGES: usize = 20;
const TAGGED_LIMIT: usize = 100;

/// Read-only retrieval of the two working sets: issues carrying the marker
/// tag, and recently updated project issues. Pages are fetched sequentially;
/// any page failure aborts the run.
pub struct IssueFetcher<'a> {
    rest: &'a YouTrackRest,
}

impl<'a> IssueFetcher<'a> {
    pub fn new(rest: &'a YouTrackRest) -> Self {
        Self { rest }
    }

    /// Issues currently carrying the marker tag.
    pub async fn fetch_tagged(&self, tag: &str) -> Result<Vec<Issue>> {
        self.rest.fetch_by_tag(tag, TAGGED_LIMIT).await
    }

    /// Recently updated unresolved, unassigned project issues.
    pub async fn fetch_project_issues(&self, project: &str, condition: &str) -> Result<Vec<Issue>> {
        let filter = format!("{BASE_FILTER} {condition}");
        let updated_after = Utc::now() - Duration::days(RECENCY_WINDOW_DAYS);
        let mut issues = Vec::new();
        for page in 0..PROJECT_PAGES {
            let batch = self
                .rest
                .fetch_by_project(project, &filter, page * PAGE_SIZE, PAGE_SIZE, updated_after)
                .await?;
            issues.extend(batch);
        }
        Ok(issues)
    }
}
