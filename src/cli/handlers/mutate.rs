use anyhow::Result;

use super::CommandContext;
use super::query::execute;

pub fn handle_mutate(
    ctx: CommandContext,
    mutation: String,
    variables: Option<String>,
) -> Result<()> {
    // Auto-wrap in mutation { }
    let query = format!("mutation {{ {} }}", mutation);
    execute(ctx, &query, variables)
}
