//! Data models for the social graph.
//!
//! - [`User`]: a person with friends, a height and a weight
//! - [`Post`]: a post authored by a user, with the ids of users who liked it
//! - [`HeightUnit`] / [`WeightUnit`]: units the canonical measurements convert to

mod post;
mod units;
mod user;

pub use post::Post;
pub use units::{HeightUnit, WeightUnit};
pub use user::User;
