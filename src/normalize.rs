//! Post-processing of model responses into domain objects.
//!
//! The model's arithmetic and ordering are never trusted: totals are
//! recomputed and line items re-sorted locally after every response.

use anyhow::{Context, Result};
use base64::Engine as _;

use crate::categories::category_rank;
use crate::prompts::IMAGE_URL_MARKER;
use crate::quote::{QuoteList, ValidationReport};

/// Warning text substituted when validation cannot run.
pub const VALIDATION_FAILED_WARNING: &str =
    "AI validation failed to run. Please review the quote manually.";

/// MIME type every generated image is wrapped with.
const IMAGE_MIME: &str = "image/png";

/// Re-sort by the fixed category precedence and recompute every total.
///
/// The sort is stable, so unknown categories keep their relative input order
/// behind all known ones.
pub fn normalize_quote(mut items: QuoteList) -> QuoteList {
    items.sort_by_key(|item| category_rank(&item.category));
    for item in &mut items {
        item.total_price = f64::from(item.quantity) * item.unit_price;
    }
    items
}

/// Parse a quote response into a normalized line item list.
pub fn parse_quote_list(text: &str) -> Result<QuoteList> {
    let items: QuoteList =
        serde_json::from_str(text).context("quote response is not a valid line item array")?;
    Ok(normalize_quote(items))
}

/// Parse a validation response. Fields are passed through verbatim.
pub fn parse_validation_report(text: &str) -> Result<ValidationReport> {
    serde_json::from_str(text).context("validation response is not a valid report object")
}

/// The fixed report returned when the validation call itself fails.
pub fn fallback_validation_report() -> ValidationReport {
    ValidationReport {
        is_valid: false,
        warnings: vec![VALIDATION_FAILED_WARNING.to_string()],
        suggestions: Vec::new(),
        missing_components: Vec::new(),
    }
}

/// Wrap generated image bytes as a data URI.
pub fn image_data_uri(bytes: &[u8]) -> String {
    format!(
        "data:{IMAGE_MIME};base64,{}",
        base64::engine::general_purpose::STANDARD.encode(bytes)
    )
}

/// Split a product-lookup response on the `IMAGE_URL:` marker.
///
/// Returns `(description, image_url)`; when the marker is absent the whole
/// text is the description and the URL is empty.
pub fn split_product_text(text: &str) -> (String, String) {
    match text.split_once(IMAGE_URL_MARKER) {
        Some((before, after)) => (before.trim().to_string(), after.trim().to_string()),
        None => (text.trim().to_string(), String::new()),
    }
}
