// ABOUTME: Entry point for minichat — a terminal client for a simple chat server.
// ABOUTME: Parses CLI args, resolves the server URL, and launches the app.

use clap::Parser;

use minichat::app::App;
use minichat::config::Config;

#[derive(Parser)]
#[command(name = "minichat")]
#[command(about = "Terminal chat client that talks to a chat server over HTTP")]
struct Cli {
    /// Server base URL (overrides config file and MINICHAT_SERVER)
    #[arg(long)]
    server: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load local .env before reading environment overrides.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Precedence: CLI flag > MINICHAT_SERVER > config file > default.
    let mut config = Config::load()?;
    if let Ok(url) = std::env::var("MINICHAT_SERVER") {
        if !url.is_empty() {
            config.server.base_url = url;
        }
    }
    if let Some(server) = cli.server {
        config.server.base_url = server;
    }

    App::new(config).run().await
}
