use clap::Parser;
use model::Snowflake;
use searcher::{Client, Config, Result};
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[cfg(feature = "signature")]
use searcher::{signature::SignatureRenderer, UserProfile};
#[cfg(feature = "signature")]
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// ID of the user to look up
    id: Snowflake,

    /// Also print when the account was created
    #[arg(short, long)]
    date: bool,

    /// Render a signature card and write it to this file as PNG
    #[cfg(feature = "signature")]
    #[arg(short, long)]
    signature: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::from_envvar().expect("Failed to load config from environment variables");

    configure_observability(&config);

    let client = Client::new(config)?;
    let profile = client.fetch_user_profile(args.id).await?;
    info!(id = %profile.id, username = %profile.username, "Fetched user");

    println!(
        "{}",
        serde_json::to_string_pretty(&profile).expect("Failed to serialize profile")
    );

    if args.date {
        println!(
            "{}",
            serde_json::to_string_pretty(&profile.created_at()).expect("Failed to serialize date")
        );
    }

    #[cfg(feature = "signature")]
    {
        if let Some(path) = &args.signature {
            write_signature(&client, &profile, path).await?;
        }
    }

    Ok(())
}

#[cfg(feature = "signature")]
async fn write_signature(client: &Client, profile: &UserProfile, path: &Path) -> Result<()> {
    let renderer = SignatureRenderer::from_config(client.config(), client.http_client().clone())?;
    let canvas = renderer
        .render_canvas(&profile.avatar_url, &profile.id.to_string(), &profile.tag())
        .await?;

    tokio::fs::write(path, canvas.to_png()?).await?;
    info!(path = %path.display(), "Wrote signature");

    Ok(())
}

fn configure_observability(config: &Config) {
    let registry = tracing_subscriber::registry().with(EnvFilter::from_default_env());

    if config.json_log {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
