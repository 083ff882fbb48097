use serde::{Deserialize, Serialize};

/// Where a quoted product came from.
///
/// The model service returns this as a bare string; deserializing through a
/// closed enum rejects unrecognized values at ingress instead of passing them
/// through unchecked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemSource {
    Database,
    Web,
}

/// Whether the unit price is a catalog price or a model estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceSource {
    Database,
    Estimated,
}

/// One priced line of a bill of quantities.
///
/// `total_price` is recomputed locally after every model response; the
/// model's own arithmetic is not trusted. `category` stays an open string
/// because items with categories outside the known list are still accepted
/// and sorted after all known ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub category: String,
    pub item_description: String,
    pub brand: String,
    pub model: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub total_price: f64,
    pub source: ItemSource,
    pub price_source: PriceSource,
}

/// Ordered bill of quantities, sorted by the fixed category precedence.
pub type QuoteList = Vec<LineItem>;

/// Outcome of asking the model to review a quote against the requirements.
///
/// The prompt instructs the model to set `is_valid` to false whenever
/// `warnings` or `missing_components` is non-empty, but that contract lives
/// in the instructions, so treat the flag as advisory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub is_valid: bool,
    pub warnings: Vec<String>,
    pub suggestions: Vec<String>,
    pub missing_components: Vec<String>,
}

/// A citation the model service claims to have used for a grounded answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroundingSource {
    pub uri: String,
    pub title: String,
}

/// Free-text product description plus an optional image URL and citations.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetails {
    pub description: String,
    /// Empty when the lookup response carried no `IMAGE_URL:` line.
    pub image_url: String,
    pub sources: Vec<GroundingSource>,
}
