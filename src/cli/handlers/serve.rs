use anyhow::{Context, Result};

use crate::graphql::{build_schema, run_server};

use super::CommandContext;

pub fn handle_serve(ctx: CommandContext, host: Option<String>, port: Option<u16>) -> Result<()> {
    let config = ctx.config.with_overrides(host, port);
    let settings = &config.server;
    let schema = build_schema(ctx.repo);

    tokio::runtime::Runtime::new()?
        .block_on(run_server(schema, settings))
        .with_context(|| format!("Failed to serve on {}", settings.bind_address()))?;
    Ok(())
}
