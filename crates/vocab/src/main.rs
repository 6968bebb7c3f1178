mod cli;
mod commands;
mod server;

use clap::Parser;
use cli::{Cli, Commands};
use commands::Context;
use vocab_core::{EntryPatch, NewEntry};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();
    if let Commands::Version = cli.command {
        return commands::version::run();
    }

    let ctx = Context::resolve(cli.db, cli.config)?;

    match cli.command {
        Commands::Serve { bind } => commands::serve::run(&ctx, bind.as_deref()),
        Commands::Add {
            english,
            german,
            vietnamese,
        } => {
            let new = NewEntry::new(english, german, vietnamese);
            commands::words::run_add(&ctx.open_db()?, new)
        }
        Commands::Get { id } => commands::words::run_get(&ctx.open_db()?, &id),
        Commands::List { sort } => commands::words::run_list(&ctx.open_db()?, &sort),
        Commands::Update {
            id,
            english,
            german,
            vietnamese,
        } => {
            let patch = EntryPatch {
                english,
                german,
                vietnamese,
            };
            commands::words::run_update(&ctx.open_db()?, &id, patch)
        }
        Commands::Delete { id } => commands::words::run_delete(&ctx.open_db()?, &id),
        Commands::Search { query } => {
            commands::search::run(&ctx.open_db()?, &ctx.config.search, &query.join(" "))
        }
        Commands::Version => commands::version::run(),
    }
}
