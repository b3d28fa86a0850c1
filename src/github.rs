use crate::error::{DashboardError, Result};
use crate::types::{Account, CommitWeek, Repository};
use reqwest::{Client, Response, StatusCode};
use std::time::Duration;
use tracing::debug;
use url::Url;

pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";
const PER_PAGE: u32 = 100;

/// Client for the three public GitHub endpoints the dashboard reads.
///
/// Each operation is a single round trip: no retries, no caching, no
/// rate-limit backoff. Failures surface immediately as [`DashboardError`].
pub struct GithubClient {
    client: Client,
    base_url: String,
}

impl GithubClient {
    pub fn new(base_url: &Url) -> Result<Self> {
        let client = Client::builder()
            .user_agent("github-dashboard/0.1.0")
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(GithubClient {
            client,
            base_url: base_url.as_str().trim_end_matches('/').to_string(),
        })
    }

    async fn get(&self, url: &str) -> Result<Response> {
        debug!(%url, "sending GitHub API request");

        let response = self
            .client
            .get(url)
            .header("Accept", "application/vnd.github.v3+json")
            .send()
            .await?;

        Ok(response)
    }

    /// Fetch the public profile for `username`.
    ///
    /// 404 is the only status with its own meaning here: the account does
    /// not exist.
    pub async fn get_account(&self, username: &str) -> Result<Account> {
        let url = format!("{}/users/{}", self.base_url, username);
        let response = self.get(&url).await?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(DashboardError::NotFound(username.to_string())),
            status if status.is_success() => Ok(response.json().await?),
            status => Err(DashboardError::ServiceError {
                status: status.as_u16(),
            }),
        }
    }

    /// Fetch up to one page of repositories for `username`, most recently
    /// updated first. An unknown account is the remote service's business;
    /// there is no dedicated not-found case for this endpoint.
    pub async fn list_repositories(&self, username: &str) -> Result<Vec<Repository>> {
        let url = format!(
            "{}/users/{}/repos?per_page={}&sort=updated",
            self.base_url, username, PER_PAGE
        );
        let response = self.get(&url).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DashboardError::ServiceError {
                status: status.as_u16(),
            });
        }

        Ok(response.json().await?)
    }

    /// Fetch weekly commit activity for one repository, oldest week first.
    ///
    /// GitHub answers 202 while it is still computing statistics; callers
    /// must treat the empty sequence as "no data", never as an error.
    pub async fn get_commit_activity(
        &self,
        username: &str,
        repo: &str,
    ) -> Result<Vec<CommitWeek>> {
        let url = format!(
            "{}/repos/{}/{}/stats/commit_activity",
            self.base_url, username, repo
        );
        let response = self.get(&url).await?;

        match response.status() {
            // Statistics not computed yet
            StatusCode::ACCEPTED | StatusCode::NO_CONTENT => Ok(Vec::new()),
            status if status.is_success() => Ok(response.json().await?),
            status => Err(DashboardError::ServiceError {
                status: status.as_u16(),
            }),
        }
    }
}
