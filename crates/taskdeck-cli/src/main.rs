mod cli;

use std::sync::Arc;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use taskdeck_client::ApiClient;
use taskdeck_core::AppConfig;
use taskdeck_tui::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("TASKDECK_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .init();
    }

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut command = Cli::command();
            let name = command.get_name().to_string();
            clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
        }
        None => {
            let mut config = AppConfig::load();
            if cli.server.is_some() {
                config.server_url = cli.server;
            }
            tracing::info!(server = config.effective_server_url(), "starting client");

            let client = ApiClient::from_config(&config)
                .map_err(|err| anyhow::anyhow!("invalid server URL: {err}"))?;
            let endpoints = client.endpoints().clone();
            let (mut app, net_rx) = App::new(Arc::new(client), endpoints);
            app.run(net_rx).await?;
        }
    }

    Ok(())
}
