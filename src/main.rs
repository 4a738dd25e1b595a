// Bring in required crates
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::Instant;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use recipe_panel::{
    read_config, ChannelReloader, PanelConfig, RecipeId, RecipePanel, Rendered, RequestOutcome,
    TerminalSurface,
};

#[derive(Parser)]
#[command(version, about = "View and delete recipes on a recipe server")]
struct Args {
    /// JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Origin of the recipe server
    #[arg(long, env = "RECIPE_PANEL_BASE_URL")]
    base_url: Option<String>,

    /// Session token, sent as the access_token cookie
    #[arg(long, env = "RECIPE_PANEL_ACCESS_TOKEN", hide_env_values = true)]
    access_token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show a recipe partial in the viewer
    View { id: String },
    /// Delete a recipe and reload the page
    Delete { id: String },
}

fn load_config(args: &Args) -> Result<PanelConfig, recipe_panel::PanelError> {
    let mut config = match &args.config {
        Some(path) => read_config(path)?,
        None => PanelConfig::default(),
    };
    if let Some(base_url) = &args.base_url {
        config.base_url = base_url.clone();
    }
    if args.access_token.is_some() {
        config.access_token = args.access_token.clone();
    }
    Ok(config)
}

/// Delete the recipe and, once the deferred reload fires, fetch the page
/// fresh. Returns the page outcome only when a reload happened.
async fn delete_then_reload(
    panel: &RecipePanel,
    id: &RecipeId,
    reloads: &mut UnboundedReceiver<Instant>,
) -> (Rendered, Option<RequestOutcome>) {
    let rendered = panel.delete_recipe_and_reload(id).await;
    if rendered == Rendered::Failure || reloads.recv().await.is_none() {
        return (rendered, None);
    }
    (rendered, Some(panel.fetch_page().await))
}

fn exit_code(rendered: Rendered) -> i32 {
    match rendered {
        Rendered::Success => 0,
        Rendered::Failure => 1,
    }
}

async fn run(args: Args) -> Result<Rendered, Box<dyn std::error::Error>> {
    let config = load_config(&args)?;
    tracing::debug!(base_url = %config.base_url, "config loaded");

    let surface = Arc::new(TerminalSurface::new(config.viewer_id.clone()));
    let (reloader, mut reloads) = ChannelReloader::new();
    let panel = RecipePanel::new(&config, surface, Arc::new(reloader))?;

    let rendered = match args.command {
        Command::View { id } => panel.fetch_and_render_recipe(&RecipeId::from(id)).await,
        Command::Delete { id } => {
            let (rendered, page) =
                delete_then_reload(&panel, &RecipeId::from(id), &mut reloads).await;
            match page {
                Some(RequestOutcome::Success(page)) => {
                    tracing::info!(bytes = page.len(), "page reloaded")
                }
                Some(RequestOutcome::Failure) => tracing::warn!("page reload failed"),
                None => {}
            }
            rendered
        }
    };
    Ok(rendered)
}

// Entry point of the app
#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "recipe_panel=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // If run() returns an error, log and exit
    match run(Args::parse()).await {
        Ok(rendered) => std::process::exit(exit_code(rendered)),
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    }
}
