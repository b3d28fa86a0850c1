use clap::Parser;
use colored::*;
use github_dashboard::cli::Cli;
use github_dashboard::dashboard::{DashboardActor, DashboardMessage, DashboardSnapshot};
use github_dashboard::github::GithubClient;
use github_dashboard::view;
use ractor::{Actor, ActorRef};
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    println!("{}", "GitHub Profile Dashboard".bold().green());
    println!("{}\n", "=".repeat(50).dimmed());

    let client = Arc::new(GithubClient::new(&cli.api_base_url)?);

    let (actor, actor_handle) = Actor::spawn(None, DashboardActor, client)
        .await
        .map_err(|e| anyhow::anyhow!("failed to start dashboard actor: {e}"))?;

    println!("Type a username to search, a number to pick a repository, or 'quit' to exit.\n");

    if let Some(username) = cli.username.clone() {
        submit_search(&actor, &username).await?;
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("{} ", ">".cyan().bold());
        std::io::stdout().flush()?;

        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                println!("\n{}", "Shutting down...".yellow());
                break;
            }
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                let input = line.trim().to_string();
                if input.is_empty() {
                    continue;
                }
                if matches!(input.as_str(), "q" | "quit" | "exit") {
                    break;
                }

                if let Ok(choice) = input.parse::<usize>() {
                    submit_selection(&actor, choice).await?;
                } else {
                    submit_search(&actor, &input).await?;
                }
            }
        }
    }

    actor.stop(None);
    let _ = actor_handle.await;

    Ok(())
}

async fn submit_search(actor: &ActorRef<DashboardMessage>, username: &str) -> anyhow::Result<()> {
    actor
        .cast(DashboardMessage::Search(username.to_string()))
        .map_err(|e| anyhow::anyhow!("dashboard actor unavailable: {e}"))?;

    let snapshot = wait_until_settled(actor).await?;
    show(actor, &snapshot).await
}

async fn submit_selection(actor: &ActorRef<DashboardMessage>, choice: usize) -> anyhow::Result<()> {
    let snapshot = get_snapshot(actor).await?;

    let Some(repos) = snapshot.repositories.data() else {
        println!("{}", "No repository list yet. Search for a user first.".yellow());
        return Ok(());
    };

    let selectable = repos.len().min(view::SELECTABLE_REPOS);
    if choice == 0 || choice > selectable {
        println!(
            "{}",
            format!("Pick a number between 1 and {}.", selectable).yellow()
        );
        return Ok(());
    }

    let name = repos[choice - 1].name.clone();
    actor
        .cast(DashboardMessage::SelectRepository(name))
        .map_err(|e| anyhow::anyhow!("dashboard actor unavailable: {e}"))?;

    let snapshot = wait_until_settled(actor).await?;
    show(actor, &snapshot).await
}

/// Poll snapshots until no slot is loading. Bounded so a hung transport
/// cannot wedge the prompt.
async fn wait_until_settled(
    actor: &ActorRef<DashboardMessage>,
) -> anyhow::Result<DashboardSnapshot> {
    let deadline = tokio::time::Instant::now() + Duration::from_secs(60);

    loop {
        let snapshot = get_snapshot(actor).await?;
        let busy = snapshot.account.is_loading()
            || snapshot.repositories.is_loading()
            || snapshot.commit_activity.is_loading();

        if !busy || tokio::time::Instant::now() >= deadline {
            return Ok(snapshot);
        }

        tokio::time::sleep(Duration::from_millis(100)).await;
    }
}

async fn get_snapshot(actor: &ActorRef<DashboardMessage>) -> anyhow::Result<DashboardSnapshot> {
    let reply = actor
        .call(
            |reply| DashboardMessage::GetSnapshot(reply),
            Some(Duration::from_secs(5)),
        )
        .await
        .map_err(|e| anyhow::anyhow!("dashboard actor unavailable: {e}"))?;

    match reply {
        ractor::rpc::CallResult::Success(snapshot) => Ok(snapshot),
        ractor::rpc::CallResult::Timeout => Err(anyhow::anyhow!("snapshot request timed out")),
        ractor::rpc::CallResult::SenderError => {
            Err(anyhow::anyhow!("dashboard actor dropped the snapshot request"))
        }
    }
}

async fn show(actor: &ActorRef<DashboardMessage>, snapshot: &DashboardSnapshot) -> anyhow::Result<()> {
    for note in &snapshot.notifications {
        println!("{} {}", "error:".red().bold(), note.message.red());
    }
    if !snapshot.notifications.is_empty() {
        actor
            .cast(DashboardMessage::DismissNotifications)
            .map_err(|e| anyhow::anyhow!("dashboard actor unavailable: {e}"))?;
    }

    println!("{}", view::render(snapshot));
    Ok(())
}
