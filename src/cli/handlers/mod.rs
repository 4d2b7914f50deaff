mod mutate;
mod query;
mod schema;
mod serve;

pub use mutate::handle_mutate;
pub use query::handle_query;
pub use schema::handle_schema;
pub use serve::handle_serve;

use crate::config::SocialConfig;
use crate::storage::SocialRepository;
use std::sync::Arc;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: SocialConfig,
    pub repo: Arc<SocialRepository>,
}

impl CommandContext {
    pub fn new(config: SocialConfig) -> Self {
        Self {
            config,
            repo: Arc::new(SocialRepository::seeded()),
        }
    }
}
