use anyhow::{Context, Result};
use completion_client::CompletionClient;
use listing_analysis::{HttpPageSource, ListingAnalyzer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod form;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();

    tracing::info!("starting pricescout");

    // Load environment variables
    dotenvy::dotenv().ok();

    let completion =
        CompletionClient::from_env().context("set OPENAI_API_KEY to enable price analysis")?;
    let analyzer = ListingAnalyzer::new(HttpPageSource::new(), completion);

    form::run(&analyzer).await
}
