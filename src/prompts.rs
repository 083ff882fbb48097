//! Instruction text sent to the model service.
//!
//! Centralizing the prompt fragments makes it easy to tweak how quotes are
//! generated, refined and validated without digging through multiple
//! modules. Builders here are pure string formatting and cannot fail.

use crate::answers::RequirementAnswers;
use crate::catalog::Catalog;
use crate::quote::QuoteList;

/// Marker line separating description from image URL in lookup responses.
pub const IMAGE_URL_MARKER: &str = "IMAGE_URL:";

/// Fixed design rules applied to every quote request.
///
/// Tier 1 uses the catalog item and its catalog price, tier 2 uses a catalog
/// item with an estimated street price, tier 3 substitutes a web-sourced
/// product when the catalog has no fit.
pub const QUOTE_RULES: &str = "\
Pricing policy:
- Tier 1: prefer catalog items at their catalog price (source \"database\", priceSource \"database\").
- Tier 2: if a catalog item fits but its price is clearly stale or missing, keep the item and estimate a realistic street price (source \"database\", priceSource \"estimated\").
- Tier 3: only when no catalog item fits, pick a real product from the wider market (source \"web\", priceSource \"estimated\").
Signal path:
- Every source device must reach a display or amplifier through the switching equipment you quote; do not leave a path incomplete.
- Cable runs over 10 m must use active optical or HDBaseT extension rather than passive copper.
Mounting:
- Every display or projector gets a matching mount line item rated for its weight and the stated wall construction.
Consumables:
- Always include one Accessories line item covering connectors, cable ties and other consumables.";

/// Rules the model is told to apply when reviewing a quote. The
/// is-valid-implies-clean contract lives here, so it is advisory only.
pub const VALIDATION_RULES: &str = "\
Review the quote against the requirements. Report problems as warnings, \
improvements as suggestions, and anything essential that is absent as \
missingComponents. If warnings or missingComponents is non-empty, isValid \
must be false.";

/// Build the instruction text for generating a fresh quote. The embedded
/// catalog excerpt is filtered to the allowed categories so the text never
/// mentions equipment outside the requested systems.
pub fn quote_instructions(answers: &RequirementAnswers, catalog: &Catalog) -> String {
    let allowed = answers.allowed_categories();
    format!(
        "You are an audiovisual system integrator preparing a bill of quantities.\n\
         Customer requirements:\n{requirements}\n\n\
         Only use these categories: {categories}.\n\n\
         {rules}\n\n\
         Product catalog (JSON): {catalog}\n\n\
         Return a JSON array of line items.",
        requirements = answers.requirements_text(),
        categories = allowed.join(", "),
        rules = QUOTE_RULES,
        catalog = catalog.prompt_excerpt_for(&allowed),
    )
}

/// Build the instruction text for refining an existing quote.
pub fn refine_instructions(
    current: &QuoteList,
    instruction_text: &str,
    catalog: &Catalog,
) -> String {
    let current_json = serde_json::to_string(current).unwrap_or_default();
    format!(
        "You are revising an existing audiovisual bill of quantities.\n\
         Current quote (JSON): {current_json}\n\n\
         Change request: {instruction_text}\n\n\
         {rules}\n\n\
         Product catalog (JSON): {catalog}\n\n\
         Apply the change request, keep unaffected line items as they are, \
         and return the complete updated JSON array of line items.",
        rules = QUOTE_RULES,
        catalog = catalog.prompt_excerpt(),
    )
}

/// Build the instruction text for validating a quote against requirements.
pub fn validation_instructions(quote: &QuoteList, requirements_text: &str) -> String {
    let quote_json = serde_json::to_string(quote).unwrap_or_default();
    format!(
        "{rules}\n\nRequirements:\n{requirements_text}\n\nQuote (JSON): {quote_json}",
        rules = VALIDATION_RULES,
    )
}

/// Prompt for a photorealistic room rendering of the quoted installation.
pub fn visualization_prompt(answers: &RequirementAnswers, quote: &QuoteList) -> String {
    format!(
        "Photorealistic interior rendering of a finished audiovisual installation.\n\
         Room:\n{requirements}\n\
         Installed equipment: {equipment}.\n\
         Show the equipment in place, no people, no text overlays.",
        requirements = answers.requirements_text(),
        equipment = equipment_summary(quote),
    )
}

/// Prompt for a one-line signal-flow schematic of the quoted installation.
pub fn schematic_prompt(answers: &RequirementAnswers, quote: &QuoteList) -> String {
    format!(
        "Clean technical line diagram of the audiovisual signal flow for this installation.\n\
         Room:\n{requirements}\n\
         Equipment: {equipment}.\n\
         White background, labeled boxes for each device, arrows for signal direction.",
        requirements = answers.requirements_text(),
        equipment = equipment_summary(quote),
    )
}

/// Prompt for the search-grounded product lookup. The model is asked to put
/// the image URL on its own trailing marker line so the response splits
/// cleanly.
pub fn product_lookup_prompt(product_name: &str) -> String {
    format!(
        "Describe the professional AV product \"{product_name}\" in two short \
         paragraphs: what it is and what it is typically used for. Then, on a \
         final line, write {IMAGE_URL_MARKER} followed by a direct URL to a \
         product photo if you found one."
    )
}

fn equipment_summary(quote: &QuoteList) -> String {
    let entries: Vec<String> = quote
        .iter()
        .map(|item| format!("{}x {} {}", item.quantity, item.brand, item.model))
        .collect();
    entries.join(", ")
}
