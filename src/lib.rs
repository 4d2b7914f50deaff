//! # Social Graph - users, posts and likes over GraphQL
//!
//! A small GraphQL service over an in-memory social graph: three users who are
//! friends with each other, a handful of posts, and likes on those posts.
//!
//! ## Quick Start
//!
//! ```bash
//! # Serve on http://127.0.0.1:4000/graphql
//! social-graph serve
//!
//! # Ask a question without starting a server
//! social-graph query '{ me { name height(unit: METRE) posts { title } } }'
//!
//! # Like (or unlike) a post
//! social-graph mutate 'likePost(postId: 2) { likeGivers { name } }'
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: Configuration loading
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers and HTTP endpoint
//! - [`model`]: Data models (User, Post, units)
//! - [`storage`]: The in-memory repository and its seed data

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles the optional `social-graph.toml` file and command-line overrides.
pub mod config;

/// Error types and result aliases.
///
/// Defines `SocialError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema and resolvers.
///
/// Provides the async-graphql schema and the axum router serving it.
pub mod graphql;

pub mod logging;

/// Data models for the social graph.
pub mod model;

/// In-memory storage layer.
pub mod storage;
