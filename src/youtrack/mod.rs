pub mod error;
pub mod rest;
pub mod types;

pub use error::Error;
pub use rest::YouTrackRest;
pub use types::Issue;

use anyhow::Result;
use async_trait::async_trait;

/// Command seam against the tracker. Tagging commands go through here so the
/// reconciler can run against a fake in tests. `silent` suppresses
/// tracker-side notifications for the affected issue.
#[async_trait]
pub trait IssueCommander: Send + Sync {
    async fn apply_command(&self, issue_id: &str, command: &str, silent: bool) -> Result<()>;
}
