use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("user '{0}' not found")]
    NotFound(String),

    #[error("GitHub API error: status {status}")]
    ServiceError { status: u16 },

    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, DashboardError>;
