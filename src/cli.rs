use clap::Parser;
use url::Url;

#[derive(Parser)]
#[command(name = "github-dashboard")]
#[command(about = "GitHub Profile Dashboard - profiles, repositories and commit activity in your terminal")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// GitHub API base URL
    #[arg(long, env = "GITHUB_API_URL", default_value = "https://api.github.com")]
    pub api_base_url: Url,

    /// Username to look up immediately on startup
    #[arg(value_name = "USERNAME")]
    pub username: Option<String>,
}
