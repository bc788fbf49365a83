//! Check command - runs one detection from the command line

use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgGroup, Args};

use crate::config::AppConfig;
use crate::infrastructure::logging;

/// Arguments for the check command
#[derive(Args, Clone, Debug)]
#[command(group(ArgGroup::new("input").required(true).args(["query", "pdf"])))]
pub struct CheckArgs {
    /// Text to check
    #[arg(long)]
    pub query: Option<String>,

    /// PDF document to check
    #[arg(long)]
    pub pdf: Option<PathBuf>,
}

/// Run a single detection and print the decision as JSON
pub async fn run(args: CheckArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;
    logging::init_logging(&logging::LoggingConfig::from(&config.logging));

    let service = crate::create_detection_service(&config)?;

    let decision = match (args.query, args.pdf) {
        (Some(query), _) => service.check_text(&query).await?,
        (None, Some(path)) => {
            let bytes = tokio::fs::read(&path)
                .await
                .with_context(|| format!("Failed to read '{}'", path.display()))?;
            service.check_document(bytes).await?
        }
        (None, None) => anyhow::bail!("Either --query or --pdf is required"),
    };

    println!("{}", serde_json::to_string_pretty(&decision)?);

    Ok(())
}
