//! GraphQL schema, resolvers and HTTP endpoint for the social graph.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server
//! social-graph serve --port 4000
//!
//! # Execute a query from CLI
//! social-graph query '{ user(name: "Kevin") { id friends { name } } }'
//!
//! # Execute a mutation from CLI
//! social-graph mutate 'likePost(postId: 1) { likeGivers { name } }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `hello`, `me`, `users`, `user`
//! - **Mutations**: `addPost`, `likePost`
//! - **Types**: `User`, `Post`, `HeightUnit`, `WeightUnit`

mod schema;
mod server;
mod types;

pub use schema::{MutationRoot, QueryRoot, SocialSchema, build_schema};
pub use server::{router, run_server};
pub use types::*;
