mod common;

use github_dashboard::types::{Account, CommitWeek, Repository};

#[test]
fn account_deserializes_with_optional_fields_missing() {
    let json = r#"{
        "login": "minimal",
        "avatar_url": "https://avatars.githubusercontent.com/u/1",
        "name": null,
        "bio": null,
        "location": null,
        "blog": null,
        "created_at": "2020-06-01T00:00:00Z",
        "followers": 0,
        "following": 0,
        "public_repos": 0
    }"#;

    let account: Account = serde_json::from_str(json).expect("should deserialize");

    assert_eq!(account.login, "minimal");
    assert_eq!(account.name, None);
    assert_eq!(account.bio, None);
    assert_eq!(account.location, None);
    assert_eq!(account.followers, 0);
}

#[test]
fn account_ignores_unknown_fields() {
    let account: Account =
        serde_json::from_str(common::OCTOCAT_JSON).expect("should deserialize");

    assert_eq!(account.login, "octocat");
    assert_eq!(account.name.as_deref(), Some("The Octocat"));
}

#[test]
fn repository_topics_default_to_empty_when_absent() {
    let json = r#"{
        "id": 42,
        "name": "no-topics",
        "description": null,
        "language": "Rust",
        "stargazers_count": 1,
        "forks_count": 0,
        "updated_at": "2024-01-01T00:00:00Z",
        "html_url": "https://github.com/someone/no-topics"
    }"#;

    let repo: Repository = serde_json::from_str(json).expect("should deserialize");

    assert!(repo.topics.is_empty());
    assert_eq!(repo.language.as_deref(), Some("Rust"));
}

#[test]
fn repository_list_preserves_remote_order() {
    let repos: Vec<Repository> =
        serde_json::from_str(common::OCTOCAT_REPOS_JSON).expect("should deserialize");

    assert_eq!(repos.len(), 2);
    assert_eq!(repos[0].name, "Hello-World");
    assert_eq!(repos[1].name, "Spoon-Knife");
    assert!(repos[0].updated_at > repos[1].updated_at);
}

#[test]
fn commit_week_requires_exactly_seven_days() {
    let short = r#"{ "days": [1, 2, 3, 4, 5, 6], "total": 21, "week": 1704585600 }"#;
    assert!(serde_json::from_str::<CommitWeek>(short).is_err());

    let long = r#"{ "days": [1, 2, 3, 4, 5, 6, 7, 8], "total": 36, "week": 1704585600 }"#;
    assert!(serde_json::from_str::<CommitWeek>(long).is_err());

    let exact = r#"{ "days": [0, 1, 2, 3, 4, 5, 6], "total": 21, "week": 1704585600 }"#;
    let week: CommitWeek = serde_json::from_str(exact).expect("should deserialize");
    assert_eq!(week.days, [0, 1, 2, 3, 4, 5, 6]);
}

#[test]
fn commit_week_start_converts_unix_seconds() {
    let week = common::commit_week(0, [0; 7]);
    assert_eq!(week.week_start().to_rfc3339(), "1970-01-01T00:00:00+00:00");

    let week = common::commit_week(1_704_585_600, [0; 7]);
    assert_eq!(week.week_start().format("%Y-%m-%d").to_string(), "2024-01-07");
}
