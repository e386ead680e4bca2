mod chat;
mod render;
mod search;

use clap::{Args, Parser, Subcommand};

use gottago_core::{Category, Urgency};

#[derive(Debug, Parser)]
#[command(name = "gottago-cli")]
#[command(about = "Find nearby restrooms, water, free food, free air, and accessible venues")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// One-shot search for a category around a location.
    Search(SearchArgs),
    /// Interactive chat: search once, then refine with follow-up questions.
    Chat(SearchArgs),
}

#[derive(Debug, Args)]
pub(crate) struct SearchArgs {
    /// restrooms | water | food | air | accessibility
    #[arg(long, default_value = "restrooms")]
    pub(crate) category: Category,

    /// relaxed | near-term | emergency
    #[arg(long, default_value = "relaxed")]
    pub(crate) urgency: Urgency,

    /// Free-form address or city, resolved through the geocoder.
    #[arg(long, conflicts_with_all = ["lat", "lng"])]
    pub(crate) location: Option<String>,

    /// Latitude of the search center (pair with --lng).
    #[arg(long, requires = "lng")]
    pub(crate) lat: Option<f64>,

    /// Longitude of the search center (pair with --lat).
    #[arg(long, requires = "lat")]
    pub(crate) lng: Option<f64>,

    /// Search radius in kilometers.
    #[arg(long, default_value_t = 3)]
    pub(crate) radius_km: u32,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = gottago_core::load_app_config_from_env()?;

    let cli = Cli::parse();
    match cli.command {
        Commands::Search(args) => search::run(&config, &args).await,
        Commands::Chat(args) => chat::run(&config, &args).await,
    }
}
