use std::env;
use std::io::Read;

use anyhow::{anyhow, Result};
use dotenvy::dotenv;

use avquote::{AiConfig, Catalog, QuoteAssistant, RequirementAnswers};

/// Read requirement answers as JSON on stdin and print the generated quote.
#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (for local development)
    dotenv().ok();

    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cfg = AiConfig::from_env()
        .ok_or_else(|| anyhow!("GEMINI_API_KEY must be set to generate quotes"))?;

    let catalog_path = env::var("CATALOG_PATH").unwrap_or_else(|_| "catalog.json".to_string());
    let catalog = Catalog::from_path(&catalog_path)?;

    let mut raw = String::new();
    std::io::stdin().read_to_string(&mut raw)?;
    let answers: RequirementAnswers = serde_json::from_str(&raw)?;

    let assistant = QuoteAssistant::new(cfg, catalog);
    let quote = assistant.generate_quote(&answers).await?;

    println!("{}", serde_json::to_string_pretty(&quote)?);
    Ok(())
}
