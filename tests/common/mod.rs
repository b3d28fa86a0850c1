#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use github_dashboard::types::{Account, CommitWeek, Repository};

pub fn account(login: &str) -> Account {
    Account {
        login: login.to_string(),
        name: Some("The Octocat".to_string()),
        avatar_url: format!("https://avatars.githubusercontent.com/{}", login),
        bio: None,
        location: Some("San Francisco".to_string()),
        blog: Some("https://github.blog".to_string()),
        created_at: Utc.with_ymd_and_hms(2011, 1, 25, 18, 44, 36).unwrap(),
        followers: 9999,
        following: 9,
        public_repos: 8,
    }
}

pub fn repository(name: &str) -> Repository {
    Repository {
        id: 1296269,
        name: name.to_string(),
        description: Some("My first repository on GitHub!".to_string()),
        language: Some("Rust".to_string()),
        stargazers_count: 80,
        forks_count: 9,
        topics: vec!["octocat".to_string()],
        updated_at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
        html_url: format!("https://github.com/octocat/{}", name),
    }
}

pub fn commit_week(week: i64, days: [u32; 7]) -> CommitWeek {
    CommitWeek {
        week,
        total: days.iter().sum(),
        days,
    }
}

/// Five consecutive weeks of activity, oldest first.
pub fn five_weeks() -> Vec<CommitWeek> {
    const WEEK_SECONDS: i64 = 7 * 24 * 60 * 60;
    let start = 1_704_585_600; // 2024-01-07, a Sunday
    (0..5)
        .map(|i| commit_week(start + i as i64 * WEEK_SECONDS, [i, 1, 2, 0, 3, 1, 0]))
        .collect()
}

pub const OCTOCAT_JSON: &str = r#"{
  "login": "octocat",
  "id": 583231,
  "avatar_url": "https://avatars.githubusercontent.com/u/583231?v=4",
  "html_url": "https://github.com/octocat",
  "name": "The Octocat",
  "company": "@github",
  "blog": "https://github.blog",
  "location": "San Francisco",
  "bio": null,
  "public_repos": 8,
  "followers": 9999,
  "following": 9,
  "created_at": "2011-01-25T18:44:36Z"
}"#;

pub const OCTOCAT_REPOS_JSON: &str = r#"[
  {
    "id": 1296269,
    "name": "Hello-World",
    "full_name": "octocat/Hello-World",
    "html_url": "https://github.com/octocat/Hello-World",
    "description": "My first repository on GitHub!",
    "language": null,
    "stargazers_count": 2268,
    "forks_count": 2078,
    "topics": [],
    "updated_at": "2024-03-01T12:00:00Z"
  },
  {
    "id": 1300192,
    "name": "Spoon-Knife",
    "full_name": "octocat/Spoon-Knife",
    "html_url": "https://github.com/octocat/Spoon-Knife",
    "description": "This repo is for demonstration purposes only.",
    "language": "HTML",
    "stargazers_count": 12000,
    "forks_count": 140000,
    "topics": ["demo", "forking"],
    "updated_at": "2024-02-20T08:30:00Z"
  }
]"#;

pub const COMMIT_ACTIVITY_JSON: &str = r#"[
  { "days": [0, 3, 4, 1, 2, 0, 0], "total": 10, "week": 1704585600 },
  { "days": [1, 0, 2, 2, 1, 1, 0], "total": 7, "week": 1705190400 },
  { "days": [0, 0, 0, 0, 0, 0, 0], "total": 0, "week": 1705795200 },
  { "days": [2, 5, 1, 0, 0, 3, 1], "total": 12, "week": 1706400000 },
  { "days": [0, 1, 1, 4, 2, 0, 2], "total": 10, "week": 1707004800 }
]"#;
