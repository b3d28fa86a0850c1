use chrono::{DateTime, Utc};
use serde::Deserialize;

// GitHub API response structures

/// Public profile for a username, from `/users/{username}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Account {
    pub login: String,
    pub name: Option<String>,
    pub avatar_url: String,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub blog: Option<String>,
    pub created_at: DateTime<Utc>,
    pub followers: u32,
    pub following: u32,
    pub public_repos: u32,
}

/// One repository owned by an account, from `/users/{username}/repos`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub language: Option<String>,
    pub stargazers_count: u32,
    pub forks_count: u32,
    #[serde(default)]
    pub topics: Vec<String>,
    pub updated_at: DateTime<Utc>,
    pub html_url: String,
}

/// One calendar week of per-weekday commit counts (Sunday-first),
/// from `/repos/{owner}/{repo}/stats/commit_activity`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CommitWeek {
    /// Week start as unix seconds.
    pub week: i64,
    pub total: u32,
    pub days: [u32; 7],
}

impl CommitWeek {
    pub fn week_start(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.week, 0).unwrap_or_else(Utc::now)
    }
}
