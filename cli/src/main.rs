//! CLI entrypoint for docroom
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{bail, Result};
use clap::Parser;
use docroom_application::{HealthAggregator, IdentityCache, SessionAuthenticator, SessionBootstrap};
use docroom_domain::{RoomId, SessionPhase};
use docroom_infrastructure::{
    default_probes, Config, ConfigLoader, HttpAuthEndpoint, HttpParticipantDirectory,
};
use docroom_presentation::{Cli, Command, ConsoleFormatter};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).map_err(|e| anyhow::anyhow!(e))?
    };
    let client = reqwest::Client::new();

    match cli.command {
        Command::Join { room } => join(&config, client, &room).await,
        Command::Health => health(&config, client).await,
        Command::Mentions { query } => mentions(&config, client, query.as_deref()).await,
    }
}

/// Authenticate into a room; on exhaustion print the recoverable error and
/// exit nonzero without panicking.
async fn join(config: &Config, client: reqwest::Client, room: &str) -> Result<()> {
    let Some(auth_url) = config.auth.url.clone() else {
        bail!("auth endpoint not configured (set auth.url or DOCROOM_AUTH__URL)");
    };

    // Ctrl-C aborts a backoff wait instead of leaving the process hanging
    let cancellation = CancellationToken::new();
    {
        let cancellation = cancellation.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                cancellation.cancel();
            }
        });
    }

    // === Dependency Injection ===
    let endpoint = Arc::new(HttpAuthEndpoint::new(client.clone(), auth_url));
    let authenticator = SessionAuthenticator::new(endpoint)
        .with_policy(
            config.auth.max_attempts,
            Duration::from_millis(config.auth.base_delay_ms),
        )
        .with_cancellation(cancellation);

    let room = RoomId::new(room);
    let mut bootstrap = SessionBootstrap::new(authenticator);
    let phase = bootstrap.connect(&room).await?;

    println!(
        "{}",
        ConsoleFormatter::format_session(room.as_str(), bootstrap.state())
    );

    if phase == SessionPhase::Failed {
        std::process::exit(1);
    }

    // Show who else is known to the room, when the directory is configured
    if let Some(directory_url) = config.directory.url.clone() {
        let cache = IdentityCache::new(Arc::new(HttpParticipantDirectory::new(
            client, directory_url,
        )));
        match cache.refresh().await {
            Ok(count) => {
                info!("fetched {} participants", count);
                println!("{}", ConsoleFormatter::format_participants(&cache.current().await));
            }
            Err(e) => {
                // Participants are decoration here; the session itself is up
                tracing::warn!("failed to fetch participants: {}", e);
            }
        }
    }

    Ok(())
}

/// Probe every dependency and print the report. Always exits 0: an
/// all-unhealthy report is still a successful health check.
async fn health(config: &Config, client: reqwest::Client) -> Result<()> {
    let mut aggregator = HealthAggregator::new(config.environment.clone());
    for probe in default_probes(&client, config) {
        aggregator = aggregator.register(probe);
    }

    let report = aggregator.check().await;
    println!("{}", ConsoleFormatter::format_health(&report));
    Ok(())
}

/// Mention lookup touches only the participant directory, so that is the
/// one endpoint it requires.
async fn mentions(config: &Config, client: reqwest::Client, query: Option<&str>) -> Result<()> {
    let Some(directory_url) = config.directory.url.clone() else {
        bail!("directory endpoint not configured (set directory.url or DOCROOM_DIRECTORY__URL)");
    };

    let cache = IdentityCache::new(Arc::new(HttpParticipantDirectory::new(
        client,
        directory_url,
    )));
    cache.refresh().await?;

    let candidates = cache.mention_candidates(query.unwrap_or_default()).await;
    println!("{}", ConsoleFormatter::format_mention_candidates(&candidates));
    Ok(())
}
