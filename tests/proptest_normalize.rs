use avquote::categories::{category_rank, ACCESSORIES, CATEGORY_ORDER};
use avquote::normalize::normalize_quote;
use avquote::{ItemSource, LineItem, PriceSource, RequiredSystem, RequirementAnswers};
use proptest::prelude::*;

fn category_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        proptest::sample::select(CATEGORY_ORDER.to_vec()).prop_map(str::to_string),
        // Categories the precedence list does not know.
        "[A-Z][a-z]{3,10}".prop_filter("must be unknown", |c| {
            !CATEGORY_ORDER.contains(&c.as_str())
        }),
    ]
}

fn line_item_strategy(index: usize) -> impl Strategy<Value = LineItem> {
    (category_strategy(), 0u32..50, 0.0f64..20_000.0).prop_map(
        move |(category, quantity, unit_price)| LineItem {
            category,
            item_description: format!("item-{index}"),
            brand: "Brand".to_string(),
            model: "M".to_string(),
            quantity,
            unit_price,
            // Deliberately wrong so normalization has to fix it.
            total_price: -1.0,
            source: ItemSource::Database,
            price_source: PriceSource::Database,
        },
    )
}

fn quote_strategy() -> impl Strategy<Value = Vec<LineItem>> {
    (0usize..12).prop_flat_map(|len| {
        let items: Vec<_> = (0..len).map(line_item_strategy).collect();
        items
    })
}

proptest! {
    // Totals always equal quantity times unit price, whatever the model said.
    #[test]
    fn prop_totals_recomputed(quote in quote_strategy()) {
        let normalized = normalize_quote(quote);
        for item in &normalized {
            prop_assert_eq!(item.total_price, f64::from(item.quantity) * item.unit_price);
        }
    }

    // Category ranks are non-decreasing and the sort is stable: items of the
    // same category keep their input order, identified by description.
    #[test]
    fn prop_sort_is_stable_by_precedence(quote in quote_strategy()) {
        let input = quote.clone();
        let normalized = normalize_quote(quote);

        for pair in normalized.windows(2) {
            prop_assert!(category_rank(&pair[0].category) <= category_rank(&pair[1].category));
        }

        for category in normalized.iter().map(|i| i.category.as_str()) {
            let input_order: Vec<&str> = input
                .iter()
                .filter(|i| i.category == category)
                .map(|i| i.item_description.as_str())
                .collect();
            let output_order: Vec<&str> = normalized
                .iter()
                .filter(|i| i.category == category)
                .map(|i| i.item_description.as_str())
                .collect();
            prop_assert_eq!(input_order, output_order);
        }
    }

    // The allowed-category set always comes from the fixed table, always
    // includes Accessories, and never contains duplicates.
    #[test]
    fn prop_allowed_categories_are_known(
        systems in proptest::collection::vec(
            proptest::sample::select(vec![
                RequiredSystem::Display,
                RequiredSystem::Projection,
                RequiredSystem::Audio,
                RequiredSystem::VideoConferencing,
                RequiredSystem::Control,
                RequiredSystem::Streaming,
                RequiredSystem::SignalDistribution,
            ]),
            0..7,
        )
    ) {
        let answers = RequirementAnswers { required_systems: systems, ..Default::default() };
        let allowed = answers.allowed_categories();
        prop_assert!(allowed.contains(&ACCESSORIES));
        for category in &allowed {
            prop_assert!(CATEGORY_ORDER.contains(category));
        }
        let mut deduped = allowed.clone();
        deduped.dedup();
        prop_assert_eq!(deduped, allowed);
    }
}
