//! GitLab group membership client.
//!
//! This crate talks to the GitLab v4 REST API with a personal access token
//! and answers one question: who is in a group, and what do they reach? It
//! provides:
//!
//! - [`GitlabClient`]: authenticated API operations for groups, members,
//!   projects, and user profiles.
//! - [`aggregate::fetch_group_rosters`]: the concurrent fan-out that
//!   collects every visible group's members and projects.
//! - [`aggregate::index_rosters`]: the pure fold turning those rosters into
//!   a per-user membership view keyed by user id.
//!
//! Nothing is persisted; the connection settings live in memory for the
//! lifetime of the client.

pub mod aggregate;
mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use client::GitlabClient;
pub use config::Connection;
pub use error::{Error, Result};
