use anyhow::Result;
use tracing::{debug, instrument, warn};

use crate::answers::RequirementAnswers;
use crate::catalog::Catalog;
use crate::config::AiConfig;
use crate::gateway::GeminiClient;
use crate::normalize;
use crate::prompts;
use crate::quote::{ProductDetails, QuoteList, ValidationReport};
use crate::schema;

/// The public operations of the quoting client.
///
/// Built once at startup from config and catalog, then shared by reference.
/// Every operation is a single stateless request/response cycle; nothing is
/// cached across calls.
pub struct QuoteAssistant {
    cfg: AiConfig,
    gateway: GeminiClient,
    catalog: Catalog,
}

impl QuoteAssistant {
    pub fn new(cfg: AiConfig, catalog: Catalog) -> Self {
        let gateway = GeminiClient::from_config(&cfg);
        Self {
            cfg,
            gateway,
            catalog,
        }
    }

    /// Generate a fresh bill of quantities from the customer's answers.
    #[instrument(level = "trace", skip(self, answers))]
    pub async fn generate_quote(&self, answers: &RequirementAnswers) -> Result<QuoteList> {
        let instructions = prompts::quote_instructions(answers, &self.catalog);
        let text = self
            .gateway
            .generate_json(&self.cfg.text_model, &instructions, schema::quote_list_schema())
            .await?;
        let quote = normalize::parse_quote_list(&text)?;
        debug!(items = quote.len(), "quote generated");
        Ok(quote)
    }

    /// Apply a free-text change request to an existing quote.
    #[instrument(level = "trace", skip(self, current, instruction_text))]
    pub async fn refine_quote(
        &self,
        current: &QuoteList,
        instruction_text: &str,
    ) -> Result<QuoteList> {
        let instructions = prompts::refine_instructions(current, instruction_text, &self.catalog);
        let text = self
            .gateway
            .generate_json(&self.cfg.text_model, &instructions, schema::quote_list_schema())
            .await?;
        let quote = normalize::parse_quote_list(&text)?;
        debug!(items = quote.len(), "quote refined");
        Ok(quote)
    }

    /// Ask the model to review a quote against the requirements.
    ///
    /// Never fails: any gateway or parse error is swallowed and replaced by
    /// the fixed fallback report, so the caller always has something to show.
    #[instrument(level = "trace", skip(self, quote, requirements_text))]
    pub async fn validate_quote(
        &self,
        quote: &QuoteList,
        requirements_text: &str,
    ) -> ValidationReport {
        match self.try_validate(quote, requirements_text).await {
            Ok(report) => report,
            Err(err) => {
                warn!(error = %err, "quote validation failed, substituting fallback report");
                normalize::fallback_validation_report()
            }
        }
    }

    async fn try_validate(
        &self,
        quote: &QuoteList,
        requirements_text: &str,
    ) -> Result<ValidationReport> {
        let instructions = prompts::validation_instructions(quote, requirements_text);
        let text = self
            .gateway
            .generate_json(
                &self.cfg.text_model,
                &instructions,
                schema::validation_report_schema(),
            )
            .await?;
        normalize::parse_validation_report(&text)
    }

    /// Render a photorealistic view of the quoted room as a data URI.
    #[instrument(level = "trace", skip(self, answers, quote))]
    pub async fn render_visualization(
        &self,
        answers: &RequirementAnswers,
        quote: &QuoteList,
    ) -> Result<String> {
        let prompt = prompts::visualization_prompt(answers, quote);
        let bytes = self
            .gateway
            .generate_image(&self.cfg.image_model, &prompt)
            .await?;
        Ok(normalize::image_data_uri(&bytes))
    }

    /// Render a signal-flow schematic of the quoted system as a data URI.
    #[instrument(level = "trace", skip(self, answers, quote))]
    pub async fn render_schematic(
        &self,
        answers: &RequirementAnswers,
        quote: &QuoteList,
    ) -> Result<String> {
        let prompt = prompts::schematic_prompt(answers, quote);
        let bytes = self
            .gateway
            .generate_image(&self.cfg.image_model, &prompt)
            .await?;
        Ok(normalize::image_data_uri(&bytes))
    }

    /// Look up a product with web-search grounding.
    #[instrument(level = "trace", skip(self))]
    pub async fn fetch_product_details(&self, product_name: &str) -> Result<ProductDetails> {
        let prompt = prompts::product_lookup_prompt(product_name);
        let (text, sources) = self
            .gateway
            .generate_grounded(&self.cfg.lookup_model, &prompt)
            .await?;
        let (description, image_url) = normalize::split_product_text(&text);
        Ok(ProductDetails {
            description,
            image_url,
            sources,
        })
    }
}
