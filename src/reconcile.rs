use crate::youtrack::{Issue, IssueCommander};
use anyhow::{Context, Result};
use std::collections::HashSet;
use std::io::Write;

/// Keeps the marker tag attached to exactly the currently hot issues.
/// Mutations run strictly one at a time, each awaited before the next: the
/// tracker rejects bursts of concurrent command requests.
pub struct TagReconciler<'a, C: IssueCommander> {
    commander: &'a C,
    tag: &'a str,
}

impl<'a, C: IssueCommander> TagReconciler<'a, C> {
    pub fn new(commander: &'a C, tag: &'a str) -> Self {
        Self { commander, tag }
    }

    /// Strip the tag from previously tagged issues that dropped out of the
    /// fresh project scan (identity by id). A failed removal is retried once
    /// with notifications enabled; a second failure aborts the run.
    pub async fn remove_stale(&self, tagged: &[Issue], fetched: &[Issue]) -> Result<()> {
        let fetched_ids: HashSet<&str> =
            fetched.iter().map(|it| it.id_readable.as_str()).collect();
        let stale: Vec<&Issue> = tagged
            .iter()
            .filter(|it| !fetched_ids.contains(it.id_readable.as_str()))
            .collect();

        println!("Removing tag {} from {} issues", self.tag, stale.len());
        let command = format!("remove tag {}", self.tag);
        for issue in stale {
            progress_dot();
            if let Err(e) = self
                .commander
                .apply_command(&issue.id_readable, &command, true)
                .await
            {
                tracing::warn!(
                    issue = %issue.id_readable,
                    error = %e,
                    "silent tag removal failed, retrying with notifications"
                );
                self.commander
                    .apply_command(&issue.id_readable, &command, false)
                    .await
                    .with_context(|| {
                        format!("failed to remove tag {} from {}", self.tag, issue.id_readable)
                    })?;
            }
        }
        println!("Finished.");
        Ok(())
    }

    /// Tag every hot issue. Re-tagging an already tagged issue is a no-op on
    /// the tracker side, which is what makes repeated runs idempotent.
    pub async fn tag_hot(&self, hot: &[Issue]) -> Result<()> {
        println!("Setting tag {} on {} issues", self.tag, hot.len());
        let command = format!("tag {}", self.tag);
        for issue in hot {
            progress_dot();
            self.commander
                .apply_command(&issue.id_readable, &command, true)
                .await
                .with_context(|| {
                    format!("failed to tag {} with {}", issue.id_readable, self.tag)
                })?;
        }
        println!("Finished.");
        Ok(())
    }
}

fn progress_dot() {
    print!(".");
    let _ = std::io::stdout().flush();
}
