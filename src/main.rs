use std::error::Error;

use ai_llm_service::telemetry;
use api::ApiConfig;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load environment variables from .env file; a missing file is fine.
    let dotenv = match dotenvy::dotenv() {
        Ok(path) => Some(path),
        Err(e) if e.not_found() => None,
        Err(e) => return Err(e.into()),
    };

    tracing_subscriber::registry()
        .with(telemetry::env_filter("info"))
        .with(telemetry::layer())
        .try_init()?;

    if let Some(path) = dotenv {
        info!(path = %path.display(), "loaded .env");
    }

    let config = ApiConfig::from_env()?;
    if config.llm.provider.requires_api_key() && config.llm.api_key.is_none() {
        warn!(
            provider = %config.llm.provider,
            "no API key configured; /analyze will fail until one is set"
        );
    }

    api::start(config).await?;

    Ok(())
}
