use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::segment::{Category, Service};

/// Ordering used by `/api/getTopUsers`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortType {
    MinutesSaved,
    ViewCount,
    TotalSubmissions,
}

impl SortType {
    /// Numeric `sortType` value expected by the service
    pub fn code(&self) -> u8 {
        match self {
            SortType::MinutesSaved => 0,
            SortType::ViewCount => 1,
            SortType::TotalSubmissions => 2,
        }
    }
}

/// Leaderboard row for a single user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserStats {
    #[serde(rename = "userName")]
    pub user_name: String,
    #[serde(rename = "viewCount")]
    pub view_count: u64,
    #[serde(rename = "totalSubmissions")]
    pub total_submissions: u64,
    #[serde(rename = "minutesSaved")]
    pub minutes_saved: f64,
}

/// Columnar leaderboard as returned by `/api/getTopUsers`.
///
/// Row `i` is made of element `i` of every column.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TopUsersColumns {
    #[serde(rename = "userNames")]
    pub user_names: Vec<String>,
    #[serde(rename = "viewCounts")]
    pub view_counts: Vec<u64>,
    #[serde(rename = "totalSubmissions")]
    pub total_submissions: Vec<u64>,
    #[serde(rename = "minutesSaved")]
    pub minutes_saved: Vec<f64>,
}

impl TopUsersColumns {
    /// Transpose into one row per user. Stops at the shortest column.
    pub fn into_rows(self) -> Vec<UserStats> {
        self.user_names
            .into_iter()
            .zip(self.view_counts)
            .zip(self.total_submissions)
            .zip(self.minutes_saved)
            .map(
                |(((user_name, view_count), total_submissions), minutes_saved)| UserStats {
                    user_name,
                    view_count,
                    total_submissions,
                    minutes_saved,
                },
            )
            .collect()
    }

    pub fn from_rows(rows: &[UserStats]) -> Self {
        let mut columns = Self::default();
        for row in rows {
            columns.user_names.push(row.user_name.clone());
            columns.view_counts.push(row.view_count);
            columns.total_submissions.push(row.total_submissions);
            columns.minutes_saved.push(row.minutes_saved);
        }
        columns
    }
}

/// Totals from `/api/getTotalStats`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallStats {
    #[serde(rename = "userCount")]
    pub user_count: u64,
    #[serde(rename = "viewCount")]
    pub view_count: u64,
    #[serde(rename = "totalSubmissions")]
    pub total_submissions: u64,
    #[serde(rename = "minutesSaved")]
    pub minutes_saved: f64,
}

/// Full database record of a segment from `/api/segmentInfo`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentInfo {
    #[serde(rename = "videoID")]
    pub video_id: String,
    #[serde(rename = "startTime")]
    pub start_time: f64,
    #[serde(rename = "endTime")]
    pub end_time: f64,
    pub votes: i64,
    pub locked: i64,
    #[serde(rename = "UUID")]
    pub uuid: String,
    /// Public (hashed) ID of the submitter
    #[serde(rename = "userID")]
    pub user_id: String,
    /// Submission time in milliseconds since the Unix epoch
    #[serde(rename = "timeSubmitted")]
    pub time_submitted: i64,
    pub views: i64,
    pub category: Category,
    pub service: Service,
    #[serde(rename = "videoDuration")]
    pub video_duration: f64,
    pub hidden: i64,
    pub reputation: f64,
    #[serde(rename = "shadowHidden")]
    pub shadow_hidden: i64,
}

impl SegmentInfo {
    pub fn submitted_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.time_submitted)
    }

    pub fn is_locked(&self) -> bool {
        self.locked != 0
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden != 0 || self.shadow_hidden != 0
    }
}

/// Match from `/api/userID`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdPair {
    #[serde(rename = "userName")]
    pub user_name: String,
    #[serde(rename = "userID")]
    pub user_id: String,
}

/// Response of `/api/isUserVIP`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VipStatus {
    #[serde(rename = "hashedUserID")]
    pub hashed_user_id: String,
    pub vip: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_columns() -> TopUsersColumns {
        TopUsersColumns {
            user_names: vec!["alice".to_string(), "bob".to_string(), "carol".to_string()],
            view_counts: vec![1200, 800, 30],
            total_submissions: vec![40, 22, 1],
            minutes_saved: vec![5321.5, 1200.0, 0.0],
        }
    }

    #[test]
    fn test_columns_transpose_to_rows() {
        let rows = sample_columns().into_rows();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1].user_name, "bob");
        assert_eq!(rows[1].view_count, 800);
        assert_eq!(rows[1].total_submissions, 22);
        assert_eq!(rows[1].minutes_saved, 1200.0);
    }

    #[test]
    fn test_columns_and_rows_round_trip() {
        let columns = sample_columns();
        let rows = columns.clone().into_rows();
        assert_eq!(TopUsersColumns::from_rows(&rows), columns);
    }

    #[test]
    fn test_empty_leaderboard() {
        assert!(TopUsersColumns::default().into_rows().is_empty());
    }

    #[test]
    fn test_segment_info_decodes() {
        let json = r#"{
            "videoID": "jiK2jmTVF3A",
            "startTime": 10.0,
            "endTime": 20.0,
            "votes": 5,
            "locked": 1,
            "UUID": "abc",
            "userID": "hashed",
            "timeSubmitted": 1600000000000,
            "views": 100,
            "category": "sponsor",
            "service": "YouTube",
            "videoDuration": 300.5,
            "hidden": 0,
            "reputation": 0.5,
            "shadowHidden": 0,
            "hashedVideoID": "d036",
            "userAgent": "test"
        }"#;
        let info: SegmentInfo = serde_json::from_str(json).unwrap();
        assert!(info.is_locked());
        assert!(!info.is_hidden());
        assert_eq!(info.submitted_at().unwrap().timestamp(), 1_600_000_000);
    }

    #[test]
    fn test_sort_codes() {
        assert_eq!(SortType::MinutesSaved.code(), 0);
        assert_eq!(SortType::ViewCount.code(), 1);
        assert_eq!(SortType::TotalSubmissions.code(), 2);
    }
}
