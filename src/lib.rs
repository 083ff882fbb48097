//! Client-side orchestration for AI-assisted audiovisual quoting.
//!
//! Builds prompts from typed requirement answers and a static product
//! catalog, sends them to a hosted generative model, and normalizes the
//! structured responses into bills of quantities, validation reports,
//! rendered images and product descriptions. All reasoning happens inside
//! the model service; this crate is prompts, one thin HTTP gateway, and
//! response post-processing.

pub mod answers;
pub mod catalog;
pub mod categories;
pub mod config;
pub mod gateway;
pub mod normalize;
pub mod prompts;
pub mod quote;
pub mod schema;
pub mod service;

pub use answers::{BudgetTier, RequiredSystem, RequirementAnswers};
pub use catalog::{Catalog, CatalogItem};
pub use categories::CATEGORY_ORDER;
pub use config::AiConfig;
pub use gateway::GeminiClient;
pub use quote::{
    GroundingSource, ItemSource, LineItem, PriceSource, ProductDetails, QuoteList,
    ValidationReport,
};
pub use service::QuoteAssistant;
