use anyhow::Result;

use crate::graphql::build_schema;

use super::CommandContext;

pub fn handle_schema(ctx: CommandContext) -> Result<()> {
    print!("{}", build_schema(ctx.repo).sdl());
    Ok(())
}
