pub mod cli;
pub mod dashboard;
pub mod error;
pub mod github;
pub mod types;
pub mod view;
