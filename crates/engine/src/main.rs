//! Menagerie Engine - Main entry point.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use menagerie_engine::infrastructure::{config::DemoConfig, random::SystemRandom};
use menagerie_engine::App;

fn main() -> anyhow::Result<()> {
    // Load environment from repo root before the subscriber reads RUST_LOG.
    let repo_root = Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..");
    let dotenv_failures = load_env_files(&repo_root);

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "menagerie_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    for (path, error) in &dotenv_failures {
        tracing::warn!(path = %path.display(), %error, "Failed to load env file");
    }

    tracing::info!("Starting Menagerie Engine");

    let config = DemoConfig::from_env().context("Failed to load demo configuration")?;
    tracing::debug!(?config, "Loaded configuration");

    let app = App::new(Arc::new(SystemRandom::new()));
    for transcript in app.run(&config) {
        print!("{}", transcript);
    }

    Ok(())
}

/// Loads `.env.local` then `.env` from `dir`, returning the files that failed.
fn load_env_files(dir: &Path) -> Vec<(PathBuf, dotenvy::Error)> {
    // Prefer local overrides.
    [".env.local", ".env"]
        .into_iter()
        .map(|filename| dir.join(filename))
        .filter(|path| path.exists())
        .filter_map(|path| match dotenvy::from_path(&path) {
            Ok(()) => None,
            Err(error) => Some((path, error)),
        })
        .collect()
}
