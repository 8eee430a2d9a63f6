use super::types::Issue;
use super::{Error, IssueCommander};
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};

const ISSUE_FIELDS: &str = "idReadable,summary,commentsCount,created,tags(name)";

pub struct YouTrackRest {
    client: Client,
    base_url: String,
    token: String,
}

impl YouTrackRest {
    pub fn new(base_url: &str, token: &str) -> Self {
        let client = Client::builder()
            .pool_max_idle_per_host(4)
            .build()
            .expect("failed to build HTTP client");
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        }
    }

    /// Issues currently carrying a tag. Single page.
    pub async fn fetch_by_tag(&self, tag: &str, limit: usize) -> Result<Vec<Issue>> {
        let query = format!("tag: {tag}");
        self.get_issues(&query, 0, limit).await
    }

    /// One page of project issues updated after `updated_after`.
    pub async fn fetch_by_project(
        &self,
        project: &str,
        filter: &str,
        skip: usize,
        top: usize,
        updated_after: DateTime<Utc>,
    ) -> Result<Vec<Issue>> {
        let query = format!(
            "project: {project} {filter} updated: {} .. *",
            updated_after.format("%Y-%m-%dT%H:%M:%S")
        );
        self.get_issues(&query, skip, top).await
    }

    async fn get_issues(&self, query: &str, skip: usize, top: usize) -> Result<Vec<Issue>> {
        let url = format!("{}/api/issues", self.base_url);
        let resp = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .query(&[
                ("query", query.to_string()),
                ("$skip", skip.to_string()),
                ("$top", top.to_string()),
                ("fields", ISSUE_FIELDS.to_string()),
            ])
            .send()
            .await
            .map_err(Error::Transport)?;
        check_status(resp)
            .await?
            .json()
            .await
            .context("failed to parse issues response")
    }
}

#[async_trait]
impl IssueCommander for YouTrackRest {
    /// Run a textual command ("tag Hot", "remove tag Hot") against an issue.
    async fn apply_command(&self, issue_id: &str, command: &str, silent: bool) -> Result<()> {
        let url = format!("{}/api/commands", self.base_url);
        let body = serde_json::json!({
            "query": command,
            "issues": [{ "idReadable": issue_id }],
            "silent": silent,
        });
        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await
            .map_err(Error::Transport)?;
        check_status(resp).await?;
        Ok(())
    }
}

async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response> {
    let status = resp.status();
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        let body = resp.text().await.unwrap_or_default();
        return Err(Error::Unauthorized(body).into());
    }
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(Error::Api { status, body }.into());
    }
    Ok(resp)
}
