mod add;
mod moderate;
mod output;
mod search;
mod seed;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;
use yebitir_core::{AppConfig, BrowseView, JsonFileStore, Role, Session};

#[derive(Parser)]
#[command(name = "yebitir")]
#[command(about = "YeBitir recipe sharing CLI", long_about = None)]
struct Cli {
    /// Directory holding myRecipes.json (default: $YEBITIR_DATA_DIR or ~/.yebitir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Act as this signed-in user
    #[arg(long, global = true)]
    user: Option<String>,

    /// Treat the signed-in user as an admin
    #[arg(long, global = true, requires = "user")]
    admin: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search, filter and sort recipes
    Search(search::SearchArgs),
    /// Show one recipe in full
    Show {
        /// Recipe ID
        id: Uuid,
    },
    /// Submit a new recipe through the submission wizard
    Add(add::AddArgs),
    /// Pick a random recipe
    Spin(search::SpinArgs),
    /// Fill the store with generated sample recipes
    Seed {
        /// Number of recipes to generate
        #[arg(long, default_value_t = 24)]
        count: usize,
        /// RNG seed (default: $YEBITIR_MOCK_SEED or 42)
        #[arg(long)]
        seed: Option<u64>,
        /// Overwrite a non-empty store
        #[arg(long)]
        force: bool,
    },
    /// Admin moderation tools
    Moderate(ModerateArgs),
}

#[derive(Args)]
struct ModerateArgs {
    #[command(subcommand)]
    action: moderate::Action,
}

fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let mut config = AppConfig::from_env().context("Invalid configuration")?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }

    let session = match cli.user {
        Some(user) => Session::signed_in(user, if cli.admin { Role::Admin } else { Role::User }),
        None => Session::anonymous(),
    };

    let mut store = JsonFileStore::new(&config.data_dir);
    tracing::debug!("Using recipe store at {}", store.path().display());

    match cli.command {
        Commands::Search(args) => search::search(&store, &config, &args)?,
        Commands::Show { id } => show(&store, &config, id)?,
        Commands::Add(args) => add::add(&mut store, &session, args)?,
        Commands::Spin(args) => search::spin(&store, &config, &args)?,
        Commands::Seed { count, seed, force } => {
            let seed = seed.unwrap_or(config.mock_seed);
            seed::seed(&mut store, count, seed, force)?;
        }
        Commands::Moderate(args) => moderate::run(&mut store, &session, args.action)?,
    }

    Ok(())
}

fn show(store: &JsonFileStore, config: &AppConfig, id: Uuid) -> Result<()> {
    let view = BrowseView::load(store, config.mock_seed());
    let recipe = view
        .all()
        .iter()
        .find(|r| r.id == id)
        .with_context(|| format!("Recipe {} not found", id))?;
    output::print_recipe_detail(recipe);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_admin_requires_user() {
        assert!(Cli::try_parse_from(["yebitir", "--admin", "moderate", "stats"]).is_err());
        assert!(Cli::try_parse_from([
            "yebitir", "--user", "admin@gmail.com", "--admin", "moderate", "stats"
        ])
        .is_ok());
    }
}
