//! In-memory storage for the social graph.
//!
//! Users are fixed at startup. Posts can be appended and have their like-giver
//! list toggled, so they live behind a lock and every mutation runs under a
//! single write guard.
//!
//! ## Components
//!
//! - [`SocialRepository`]: lookups and mutations over users and posts
//! - [`seed_users`] / [`seed_posts`]: the data set loaded at process start
//! - [`VIEWER_ID`]: the id mutations act on behalf of

mod repository;
mod seed;

pub use repository::{SocialRepository, VIEWER_ID};
pub use seed::{seed_posts, seed_users};
