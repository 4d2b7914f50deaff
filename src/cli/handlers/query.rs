use anyhow::{Context, Result};

use crate::graphql::build_schema;

use super::CommandContext;

pub fn handle_query(ctx: CommandContext, query: String, variables: Option<String>) -> Result<()> {
    execute(ctx, &query, variables)
}

/// Runs one document in-process and prints the response envelope.
pub(super) fn execute(ctx: CommandContext, query: &str, variables: Option<String>) -> Result<()> {
    let schema = build_schema(ctx.repo);

    let vars: async_graphql::Variables = if let Some(v) = variables {
        serde_json::from_str(&v).context("Failed to parse --variables as JSON")?
    } else {
        async_graphql::Variables::default()
    };

    let request = async_graphql::Request::new(query).variables(vars);
    let response = tokio::runtime::Runtime::new()?.block_on(schema.execute(request));

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
