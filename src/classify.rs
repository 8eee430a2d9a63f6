use crate::youtrack::Issue;
use chrono::{DateTime, Duration, Utc};

/// Issues created within this window qualify for the reduced threshold.
/// Independent of the 7-day fetch window.
pub const FRESH_WINDOW_DAYS: i64 = 15;

/// Select the hot subset: over the comment threshold outright, or recently
/// created and over half of it (integer division). Sorted by comment count
/// descending; the sort is stable, so equal counts keep fetch order.
pub fn hot_issues(issues: &[Issue], threshold: u32, now: DateTime<Utc>) -> Vec<Issue> {
    let fresh_cutoff = now - Duration::days(FRESH_WINDOW_DAYS);
    let mut hot: Vec<Issue> = issues
        .iter()
        .filter(|it| {
            it.comments_count > threshold
                || (it.created_at() > fresh_cutoff && it.comments_count > threshold / 2)
        })
        .cloned()
        .collect();
    hot.sort_by(|a, b| b.comments_count.cmp(&a.comments_count));
    hot
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(id: &str, comments: u32, created: DateTime<Utc>) -> Issue {
        Issue {
            id_readable: id.to_string(),
            summary: format!("{id} summary"),
            comments_count: comments,
            created: created.timestamp_millis(),
            tags: Vec::new(),
        }
    }

    fn days_ago(now: DateTime<Utc>, days: i64) -> DateTime<Utc> {
        now - Duration::days(days)
    }

    #[test]
    fn over_threshold_is_hot_regardless_of_age() {
        let now = Utc::now();
        let issues = vec![issue("D-1", 11, days_ago(now, 400))];
        assert_eq!(hot_issues(&issues, 10, now).len(), 1);
    }

    #[test]
    fn at_threshold_needs_recent_creation() {
        let now = Utc::now();
        let old = issue("D-1", 10, days_ago(now, 30));
        let fresh = issue("D-2", 10, days_ago(now, 3));
        let hot = hot_issues(&[old, fresh], 10, now);
        assert_eq!(hot.len(), 1);
        assert_eq!(hot[0].id_readable, "D-2");
    }

    #[test]
    fn half_threshold_uses_integer_division() {
        let now = Utc::now();
        // threshold 5 -> half is 2, so 3 comments on a fresh issue qualify
        let borderline = issue("D-1", 3, days_ago(now, 1));
        let below = issue("D-2", 2, days_ago(now, 1));
        let hot = hot_issues(&[borderline, below], 5, now);
        assert_eq!(hot.len(), 1);
        assert_eq!(hot[0].id_readable, "D-1");
    }

    #[test]
    fn at_or_below_half_threshold_is_never_hot() {
        let now = Utc::now();
        let issues = vec![issue("D-1", 5, days_ago(now, 0))];
        assert!(hot_issues(&issues, 10, now).is_empty());
    }

    #[test]
    fn fresh_window_is_fifteen_days() {
        let now = Utc::now();
        let inside = issue("D-1", 6, days_ago(now, 14));
        let outside = issue("D-2", 6, days_ago(now, 16));
        let hot = hot_issues(&[inside, outside], 10, now);
        assert_eq!(hot.len(), 1);
        assert_eq!(hot[0].id_readable, "D-1");
    }

    #[test]
    fn ranked_by_comment_count_descending() {
        let now = Utc::now();
        let issues = vec![
            issue("D-1", 10, days_ago(now, 100)),
            issue("D-2", 5, days_ago(now, 100)),
            issue("D-3", 2, days_ago(now, 100)),
        ];
        let hot = hot_issues(&issues, 4, now);
        let ids: Vec<&str> = hot.iter().map(|it| it.id_readable.as_str()).collect();
        assert_eq!(ids, vec!["D-1", "D-2"]);
    }

    #[test]
    fn equal_counts_keep_fetch_order() {
        let now = Utc::now();
        let issues = vec![
            issue("D-1", 7, days_ago(now, 100)),
            issue("D-2", 9, days_ago(now, 100)),
            issue("D-3", 7, days_ago(now, 100)),
        ];
        let hot = hot_issues(&issues, 4, now);
        let ids: Vec<&str> = hot.iter().map(|it| it.id_readable.as_str()).collect();
        assert_eq!(ids, vec!["D-2", "D-1", "D-3"]);
    }
}
