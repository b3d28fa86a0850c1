use crate::dashboard::{DashboardSnapshot, QuerySlot};
use crate::types::{Account, CommitWeek, Repository};

pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Most recent weeks shown in the chart.
pub const DISPLAY_WEEKS: usize = 4;

/// Repositories offered for selection.
pub const SELECTABLE_REPOS: usize = 10;

const BAR_WIDTH: usize = 30;

pub fn profile_card(account: &Account) -> String {
    let mut out = String::new();

    let display_name = account.name.as_deref().unwrap_or(&account.login);
    out.push_str(&format!("{} (@{})\n", display_name, account.login));

    if let Some(bio) = account.bio.as_deref().filter(|b| !b.is_empty()) {
        out.push_str(&format!("{}\n", bio));
    }
    if let Some(location) = account.location.as_deref().filter(|l| !l.is_empty()) {
        out.push_str(&format!("Location: {}\n", location));
    }
    if let Some(blog) = account.blog.as_deref().filter(|b| !b.is_empty()) {
        out.push_str(&format!("Link: {}\n", blog));
    }

    out.push_str(&format!(
        "Joined {}\n",
        account.created_at.format("%b %e, %Y")
    ));
    out.push_str(&format!(
        "{} followers | {} following | {} public repos\n",
        account.followers, account.following, account.public_repos
    ));

    out
}

pub fn repository_list(repos: &[Repository], limit: usize) -> String {
    let mut out = String::from("Repositories (most recently updated):\n");

    for (idx, repo) in repos.iter().take(limit).enumerate() {
        let language = repo.language.as_deref().unwrap_or("-");
        out.push_str(&format!(
            "{:>3}. {}  [{}]  {} stars, {} forks\n",
            idx + 1,
            repo.name,
            language,
            repo.stargazers_count,
            repo.forks_count
        ));
        if let Some(description) = repo.description.as_deref().filter(|d| !d.is_empty()) {
            out.push_str(&format!("     {}\n", description));
        }
        if !repo.topics.is_empty() {
            out.push_str(&format!("     topics: {}\n", repo.topics.join(", ")));
        }
    }

    if repos.len() > limit {
        out.push_str(&format!("     ({} more not shown)\n", repos.len() - limit));
    }

    out
}

/// Bar chart of the most recent [`DISPLAY_WEEKS`] weeks, one row per
/// weekday (Sunday-first). An empty sequence means the remote service has
/// no data for the repository, which is not an error.
pub fn commit_chart(repo_name: &str, weeks: &[CommitWeek]) -> String {
    if weeks.is_empty() {
        return format!("No commit activity data available for {} yet.\n", repo_name);
    }

    let recent = &weeks[weeks.len().saturating_sub(DISPLAY_WEEKS)..];
    let max = recent
        .iter()
        .flat_map(|week| week.days.iter())
        .copied()
        .max()
        .unwrap_or(0)
        .max(1) as usize;

    let mut out = format!(
        "Commit activity for {} (last {} weeks):\n",
        repo_name,
        recent.len()
    );

    for (idx, week) in recent.iter().enumerate() {
        out.push_str(&format!(
            "Week {} ({}):\n",
            idx + 1,
            week.week_start().format("%Y-%m-%d")
        ));
        for (label, count) in WEEKDAY_LABELS.iter().zip(week.days.iter()) {
            let mut len = (*count as usize * BAR_WIDTH) / max;
            if *count > 0 && len == 0 {
                len = 1;
            }
            out.push_str(&format!("  {} |{} {}\n", label, "#".repeat(len), count));
        }
    }

    out
}

/// Render the whole dashboard from a snapshot. Plain text; the caller
/// decides how to style it.
pub fn render(snapshot: &DashboardSnapshot) -> String {
    let mut out = String::new();

    match &snapshot.account {
        QuerySlot::Idle => {
            out.push_str("Enter a GitHub username to begin.\n");
            return out;
        }
        QuerySlot::Loading => {
            out.push_str("Loading profile...\n");
            return out;
        }
        QuerySlot::Failed(message) => {
            out.push_str(&format!("Profile lookup failed: {}\n", message));
            return out;
        }
        QuerySlot::Ready(account) => out.push_str(&profile_card(account)),
    }

    out.push('\n');
    match &snapshot.repositories {
        QuerySlot::Idle => {}
        QuerySlot::Loading => out.push_str("Loading repositories...\n"),
        QuerySlot::Failed(message) => {
            out.push_str(&format!("Could not load repositories: {}\n", message));
        }
        QuerySlot::Ready(repos) if repos.is_empty() => {
            // No chart without repositories
            out.push_str("No public repositories found.\n");
            return out;
        }
        QuerySlot::Ready(repos) => out.push_str(&repository_list(repos, SELECTABLE_REPOS)),
    }

    out.push('\n');
    match &snapshot.commit_activity {
        QuerySlot::Idle => {
            if snapshot.repositories.data().is_some() {
                out.push_str("Select a repository by number to view commit activity.\n");
            }
        }
        QuerySlot::Loading => out.push_str("Loading commit activity...\n"),
        QuerySlot::Failed(message) => {
            out.push_str(&format!("Could not load commit activity: {}\n", message));
        }
        QuerySlot::Ready(weeks) => {
            let repo = snapshot.selected_repository.as_deref().unwrap_or("repository");
            out.push_str(&commit_chart(repo, weeks));
        }
    }

    out
}
