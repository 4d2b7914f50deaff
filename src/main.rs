use anyhow::{Context, Result};
use clap::Parser;

use social_graph::cli::handlers::{
    CommandContext, handle_mutate, handle_query, handle_schema, handle_serve,
};
use social_graph::cli::{Cli, Commands};
use social_graph::config::SocialConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    social_graph::logging::init(cli.verbose, cli.log_file.as_deref())
        .context("Failed to initialize logging")?;

    let cwd = std::env::current_dir()?;
    let config = SocialConfig::load(cli.config.as_deref(), &cwd)
        .context("Failed to load social-graph configuration")?;
    let ctx = CommandContext::new(config);

    match cli.command {
        Commands::Serve { host, port } => handle_serve(ctx, host, port),
        Commands::Query { query, variables } => handle_query(ctx, query, variables),
        Commands::Mutate {
            mutation,
            variables,
        } => handle_mutate(ctx, mutation, variables),
        Commands::Schema => handle_schema(ctx),
    }
}
