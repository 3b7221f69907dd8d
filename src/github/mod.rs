// file: src/github/mod.rs
// description: GitHub REST API client and wire types
// reference: https://docs.github.com/en/rest

pub mod client;
pub mod types;

pub use client::GitHubClient;
pub use types::{
    AuthenticatedUser, CreateFilePayload, CreateRepositoryPayload, FileCommit, Repository,
};
