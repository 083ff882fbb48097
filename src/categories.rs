//! The fixed category vocabulary for audiovisual quotes.
//!
//! Keeping the precedence list in one place means the prompt builder, the
//! normalizer and the tests all agree on what a known category is.

/// Category always appended to a quote request, whatever systems were asked
/// for. Consumables and small parts land here.
pub const ACCESSORIES: &str = "Accessories";

/// Fixed precedence used to order line items in a finished quote. Items with
/// a category outside this list sort after all known ones.
pub const CATEGORY_ORDER: [&str; 11] = [
    "Displays",
    "Projection",
    "Video Conferencing",
    "Audio",
    "Switching",
    "Control",
    "Streaming & Recording",
    "Mounts & Racks",
    "Cabling",
    "Networking",
    ACCESSORIES,
];

/// Sort key for a category: its index in [`CATEGORY_ORDER`], or one past the
/// end for categories the list does not know.
pub fn category_rank(category: &str) -> usize {
    CATEGORY_ORDER
        .iter()
        .position(|known| *known == category)
        .unwrap_or(CATEGORY_ORDER.len())
}
