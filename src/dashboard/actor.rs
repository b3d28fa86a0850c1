use crate::dashboard::state::{DashboardSnapshot, DashboardState, Effect};
use crate::error::DashboardError;
use crate::github::GithubClient;
use crate::types::{Account, CommitWeek, Repository};
use ractor::{Actor, ActorProcessingErr, ActorRef, RpcReplyPort};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Messages handled by the dashboard actor.
pub enum DashboardMessage {
    /// User typed a username.
    Search(String),
    /// User picked a repository from the current list.
    SelectRepository(String),
    /// Toast messages have been shown to the user.
    DismissNotifications,
    /// Completion of an account fetch stamped with its epoch.
    AccountFetched {
        epoch: u64,
        result: Result<Account, DashboardError>,
    },
    /// Completion of a repository-list fetch stamped with its epoch.
    RepositoriesFetched {
        epoch: u64,
        result: Result<Vec<Repository>, DashboardError>,
    },
    /// Completion of a commit-activity fetch stamped with its generation.
    CommitActivityFetched {
        generation: u64,
        result: Result<Vec<CommitWeek>, DashboardError>,
    },
    /// Reply with a cloned view of the current state.
    GetSnapshot(RpcReplyPort<DashboardSnapshot>),
}

/// Owns the [`DashboardState`] and runs its fetch effects.
///
/// All slot mutation happens in this actor's handler, so there is no shared
/// mutable state. Fetches run as spawned tasks that cast their completion
/// back here together with the token their effect carried; the state machine
/// drops completions whose token was superseded in the meantime.
pub struct DashboardActor;

pub struct DashboardActorState {
    client: Arc<GithubClient>,
    dashboard: DashboardState,
}

#[ractor::async_trait]
impl Actor for DashboardActor {
    type Msg = DashboardMessage;
    type State = DashboardActorState;
    type Arguments = Arc<GithubClient>;

    async fn pre_start(
        &self,
        _myself: ActorRef<Self::Msg>,
        client: Self::Arguments,
    ) -> std::result::Result<Self::State, ActorProcessingErr> {
        info!("dashboard actor starting");

        Ok(DashboardActorState {
            client,
            dashboard: DashboardState::new(),
        })
    }

    async fn handle(
        &self,
        myself: ActorRef<Self::Msg>,
        message: Self::Msg,
        state: &mut Self::State,
    ) -> std::result::Result<(), ActorProcessingErr> {
        let effects = match message {
            DashboardMessage::Search(username) => {
                info!(username = %username, "search requested");
                state.dashboard.search(&username)
            }
            DashboardMessage::SelectRepository(name) => {
                info!(repo = %name, "repository selected");
                state.dashboard.select_repository(&name)
            }
            DashboardMessage::DismissNotifications => {
                state.dashboard.dismiss_notifications();
                Vec::new()
            }
            DashboardMessage::AccountFetched { epoch, result } => {
                if let Err(err) = &result {
                    warn!(%err, "account lookup failed");
                }
                state.dashboard.account_resolved(epoch, result)
            }
            DashboardMessage::RepositoriesFetched { epoch, result } => {
                if let Err(err) = &result {
                    warn!(%err, "repository listing failed");
                }
                state.dashboard.repositories_resolved(epoch, result)
            }
            DashboardMessage::CommitActivityFetched { generation, result } => {
                if let Err(err) = &result {
                    warn!(%err, "commit activity fetch failed");
                }
                state.dashboard.commit_activity_resolved(generation, result)
            }
            DashboardMessage::GetSnapshot(reply) => {
                if !reply.is_closed() {
                    let _ = reply.send(state.dashboard.snapshot());
                }
                Vec::new()
            }
        };

        for effect in effects {
            run_effect(&myself, state.client.clone(), effect);
        }

        Ok(())
    }
}

/// Spawn one fetch task per effect. Casting back may fail during shutdown;
/// the result is dropped in that case, which is also what supersession
/// wants.
fn run_effect(myself: &ActorRef<DashboardMessage>, client: Arc<GithubClient>, effect: Effect) {
    debug!(?effect, "starting fetch");
    let myself = myself.clone();

    match effect {
        Effect::FetchAccount { username, epoch } => {
            tokio::spawn(async move {
                let result = client.get_account(&username).await;
                let _ = myself.cast(DashboardMessage::AccountFetched { epoch, result });
            });
        }
        Effect::FetchRepositories { username, epoch } => {
            tokio::spawn(async move {
                let result = client.list_repositories(&username).await;
                let _ = myself.cast(DashboardMessage::RepositoriesFetched { epoch, result });
            });
        }
        Effect::FetchCommitActivity {
            username,
            repo,
            generation,
        } => {
            tokio::spawn(async move {
                let result = client.get_commit_activity(&username, &repo).await;
                let _ = myself.cast(DashboardMessage::CommitActivityFetched { generation, result });
            });
        }
    }
}
