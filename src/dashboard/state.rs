use crate::error::DashboardError;
use crate::types::{Account, CommitWeek, Repository};
use std::collections::VecDeque;
use tracing::debug;

/// One asynchronous query slot.
#[derive(Debug, Clone, PartialEq)]
pub enum QuerySlot<T> {
    Idle,
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Default for QuerySlot<T> {
    fn default() -> Self {
        QuerySlot::Idle
    }
}

impl<T> QuerySlot<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, QuerySlot::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, QuerySlot::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            QuerySlot::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            QuerySlot::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Fetch work the state machine wants started. Every effect carries the
/// token its completion must present to be applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchAccount { username: String, epoch: u64 },
    FetchRepositories { username: String, epoch: u64 },
    FetchCommitActivity {
        username: String,
        repo: String,
        generation: u64,
    },
}

/// A user-visible toast message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
}

/// Pure orchestrator state: the current username, the three query slots
/// and the tokens that guard them.
///
/// `epoch` is bumped on every search and stamps the account and repository
/// fetches. `commit_generation` is bumped on every search *and* every
/// repository selection, so a username switch invalidates in-flight commit
/// fetches without a second check. Completions whose token no longer
/// matches are dropped without touching any slot.
#[derive(Debug, Default)]
pub struct DashboardState {
    username: String,
    selected_repo: Option<String>,
    epoch: u64,
    commit_generation: u64,
    pub account: QuerySlot<Account>,
    pub repositories: QuerySlot<Vec<Repository>>,
    pub commit_activity: QuerySlot<Vec<CommitWeek>>,
    notifications: VecDeque<Notification>,
}

/// Cloneable view of the state for rendering.
#[derive(Debug, Clone)]
pub struct DashboardSnapshot {
    pub username: String,
    pub selected_repository: Option<String>,
    pub account: QuerySlot<Account>,
    pub repositories: QuerySlot<Vec<Repository>>,
    pub commit_activity: QuerySlot<Vec<CommitWeek>>,
    pub notifications: Vec<Notification>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn selected_repository(&self) -> Option<&str> {
        self.selected_repo.as_deref()
    }

    /// Start a new search. Resets all three slots, discards anything tied
    /// to the previous username and begins the account fetch. An empty
    /// username is a no-op.
    pub fn search(&mut self, username: &str) -> Vec<Effect> {
        let username = username.trim();
        if username.is_empty() {
            return Vec::new();
        }

        self.epoch += 1;
        self.commit_generation += 1;
        self.username = username.to_string();
        self.selected_repo = None;
        self.account = QuerySlot::Loading;
        self.repositories = QuerySlot::Idle;
        self.commit_activity = QuerySlot::Idle;

        vec![Effect::FetchAccount {
            username: self.username.clone(),
            epoch: self.epoch,
        }]
    }

    /// Apply an account-fetch completion. A success for the current epoch
    /// is what triggers the repository fetch; a failure pushes one toast
    /// notification and leaves the repository slot idle.
    pub fn account_resolved(
        &mut self,
        epoch: u64,
        result: Result<Account, DashboardError>,
    ) -> Vec<Effect> {
        if epoch != self.epoch {
            debug!(epoch, current = self.epoch, "dropping superseded account response");
            return Vec::new();
        }

        match result {
            Ok(account) => {
                self.account = QuerySlot::Ready(account);
                self.repositories = QuerySlot::Loading;
                vec![Effect::FetchRepositories {
                    username: self.username.clone(),
                    epoch: self.epoch,
                }]
            }
            Err(err) => {
                let message = err.to_string();
                self.account = QuerySlot::Failed(message.clone());
                self.notifications.push_back(Notification { message });
                Vec::new()
            }
        }
    }

    /// Apply a repository-list completion for the given epoch.
    pub fn repositories_resolved(
        &mut self,
        epoch: u64,
        result: Result<Vec<Repository>, DashboardError>,
    ) -> Vec<Effect> {
        if epoch != self.epoch {
            debug!(epoch, current = self.epoch, "dropping superseded repository response");
            return Vec::new();
        }

        self.repositories = match result {
            Ok(repos) => QuerySlot::Ready(repos),
            Err(err) => QuerySlot::Failed(err.to_string()),
        };
        Vec::new()
    }

    /// Select a repository and begin its commit-activity fetch. An empty
    /// name quietly resets the slot; a name not present in the current
    /// repository list is ignored.
    pub fn select_repository(&mut self, name: &str) -> Vec<Effect> {
        if name.is_empty() {
            self.selected_repo = None;
            self.commit_activity = QuerySlot::Idle;
            return Vec::new();
        }

        let known = self
            .repositories
            .data()
            .map(|repos| repos.iter().any(|r| r.name == name))
            .unwrap_or(false);
        if !known {
            debug!(repo = name, "ignoring selection of unknown repository");
            return Vec::new();
        }

        self.selected_repo = Some(name.to_string());
        self.commit_generation += 1;
        self.commit_activity = QuerySlot::Loading;

        vec![Effect::FetchCommitActivity {
            username: self.username.clone(),
            repo: name.to_string(),
            generation: self.commit_generation,
        }]
    }

    /// Apply a commit-activity completion. An empty sequence is valid data
    /// ("no data yet"), not a failure.
    pub fn commit_activity_resolved(
        &mut self,
        generation: u64,
        result: Result<Vec<CommitWeek>, DashboardError>,
    ) -> Vec<Effect> {
        if generation != self.commit_generation {
            debug!(
                generation,
                current = self.commit_generation,
                "dropping superseded commit activity response"
            );
            return Vec::new();
        }

        self.commit_activity = match result {
            Ok(weeks) => QuerySlot::Ready(weeks),
            Err(err) => QuerySlot::Failed(err.to_string()),
        };
        Vec::new()
    }

    pub fn notifications(&self) -> impl Iterator<Item = &Notification> {
        self.notifications.iter()
    }

    pub fn dismiss_notifications(&mut self) {
        self.notifications.clear();
    }

    pub fn snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot {
            username: self.username.clone(),
            selected_repository: self.selected_repo.clone(),
            account: self.account.clone(),
            repositories: self.repositories.clone(),
            commit_activity: self.commit_activity.clone(),
            notifications: self.notifications.iter().cloned().collect(),
        }
    }
}
