use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, ID, Object, Schema};

use crate::error::SocialError;
use crate::storage::SocialRepository;

use super::types::*;

pub type SocialSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(repo: Arc<SocialRepository>) -> SocialSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(repo)
        .finish()
}

/// Post ids are rendered as plain decimals, so only that exact form names a
/// post. `"007"` or `"+1"` match nothing.
fn canonical_post_id(raw: &str) -> Option<u64> {
    raw.parse::<u64>()
        .ok()
        .filter(|id| id.to_string() == raw)
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// A simple type for getting started!
    async fn hello(&self) -> &'static str {
        "world"
    }

    /// The first seeded user
    async fn me(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<User>> {
        let repo = get_repo(ctx)?;
        Ok(repo.me().map(User::from))
    }

    /// Every user, in seed order
    async fn users(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<User>> {
        let repo = get_repo(ctx)?;
        Ok(repo.users().iter().map(User::from).collect())
    }

    /// Look a user up by exact name
    async fn user(&self, ctx: &Context<'_>, name: String) -> async_graphql::Result<Option<User>> {
        let repo = get_repo(ctx)?;
        Ok(repo.find_user_by_name(&name).map(User::from))
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Publish a post as the current user
    async fn add_post(
        &self,
        ctx: &Context<'_>,
        title: String,
        content: Option<String>,
    ) -> async_graphql::Result<Post> {
        let repo = get_repo(ctx)?;
        Ok(repo.add_post(title, content).into())
    }

    /// Like a post as the current user, or take the like back if already given
    async fn like_post(&self, ctx: &Context<'_>, post_id: ID) -> async_graphql::Result<Post> {
        let repo = get_repo(ctx)?;
        let result = canonical_post_id(&post_id)
            .ok_or_else(|| SocialError::PostNotFound(post_id.to_string()))
            .and_then(|id| repo.toggle_like(id));

        match result {
            Ok(post) => Ok(post.into()),
            Err(e) => {
                tracing::warn!(post_id = %post_id.as_str(), "{}", e);
                Err(e.into())
            }
        }
    }
}
