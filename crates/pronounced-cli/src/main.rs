//! CLI entry point - the composition root.
//!
//! This is the ONLY place where infrastructure is wired together via bootstrap.
//! Command dispatch routes to handlers which delegate to `AppCore`.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use pronounced_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers, load_env_files};

/// Log to stderr. `RUST_LOG` wins; otherwise `--verbose` selects debug.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    // Paths needs no database.
    if matches!(command, Commands::Paths) {
        return handlers::paths::execute();
    }

    let ctx = bootstrap(CliConfig::with_defaults()?).await?;

    match command {
        Commands::Login { email, name } => {
            handlers::auth::login(&ctx, &email, name.as_deref()).await?;
        }
        Commands::Logout => handlers::auth::logout(&ctx).await?,
        Commands::Whoami => handlers::auth::whoami(&ctx).await?,
        Commands::Add {
            word,
            sentence,
            generate,
        } => {
            handlers::add::execute(&ctx, &word, sentence.as_deref(), generate).await?;
        }
        Commands::Edit {
            id,
            word,
            sentence,
            clear_sentence,
        } => {
            handlers::edit::execute(&ctx, &id, word, sentence, clear_sentence).await?;
        }
        Commands::Remove { id, force } => handlers::remove::execute(&ctx, &id, force).await?,
        Commands::Favorite { id } => handlers::favorite::execute(&ctx, &id).await?,
        Commands::List { search, json } => {
            handlers::list::execute(&ctx, search.as_deref(), json).await?;
        }
        Commands::Generate { word } => handlers::generate::execute(&ctx, &word).await?,
        Commands::Say {
            id,
            sentence,
            speech,
        } => {
            handlers::playback::say(&ctx, &id, sentence, &speech).await?;
        }
        Commands::PlayAll { search, speech } => {
            handlers::playback::play_all(&ctx, search.as_deref(), &speech).await?;
        }
        Commands::Config { command } => handlers::config::execute(&ctx, command).await?,
        Commands::Paths => handlers::paths::execute()?,
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    load_env_files();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let err = CliError::from_anyhow(err);
            eprintln!("Error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}
