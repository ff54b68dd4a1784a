use super::{SuggestError, SuggestionItem, SuggestionProvider};

/// Built-in function/reference table for the demo binary. Stands in for
/// the autocomplete backend; values are the numeric payloads the formula
/// reduction consumes.
const BUILTINS: &[(&str, &str, &str)] = &[
    ("admin_fee", "Fees", "25"),
    ("avg_basket", "Metrics", "73"),
    ("base_price", "Pricing", "199"),
    ("conversion_rate", "Metrics", "4"),
    ("daily_visitors", "Traffic", "1340"),
    ("discount_pct", "Pricing", "15"),
    ("handling_fee", "Fees", "8"),
    ("item_count", "Inventory", "56"),
    ("monthly_target", "Goals", "20000"),
    ("refund_total", "Fees", "310"),
    ("shipping_cost", "Fees", "12"),
    ("tax_rate", "Pricing", "21"),
    ("unit_margin", "Pricing", "35"),
    ("weekly_orders", "Traffic", "480"),
];

/// In-memory provider matching case-insensitively against the built-in
/// table. Prefix matches rank ahead of substring matches.
pub struct FunctionCatalog {
    entries: Vec<SuggestionItem>,
    limit: usize,
}

impl FunctionCatalog {
    pub fn new(limit: usize) -> Self {
        let entries = BUILTINS
            .iter()
            .map(|(name, category, value)| SuggestionItem {
                name: name.to_string(),
                category: category.to_string(),
                value: value.to_string(),
            })
            .collect();
        Self { entries, limit }
    }
}

impl SuggestionProvider for FunctionCatalog {
    fn search(&self, query: &str) -> Result<Vec<SuggestionItem>, SuggestError> {
        let needle = query.to_lowercase();

        let mut prefix_hits = Vec::new();
        let mut substring_hits = Vec::new();
        for item in &self.entries {
            let name = item.name.to_lowercase();
            if name.starts_with(&needle) {
                prefix_hits.push(item.clone());
            } else if name.contains(&needle) {
                substring_hits.push(item.clone());
            }
        }

        prefix_hits.extend(substring_hits);
        prefix_hits.truncate(self.limit);
        Ok(prefix_hits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_matches_rank_first() {
        let catalog = FunctionCatalog::new(8);
        let results = catalog.search("ta").unwrap();
        assert_eq!(results[0].name, "tax_rate");
        // "monthly_target" contains "ta" but does not start with it
        assert!(results.iter().any(|i| i.name == "monthly_target"));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let catalog = FunctionCatalog::new(8);
        let results = catalog.search("AD").unwrap();
        assert_eq!(results[0].name, "admin_fee");
    }

    #[test]
    fn test_no_match_yields_empty_list() {
        let catalog = FunctionCatalog::new(8);
        assert!(catalog.search("zzzz").unwrap().is_empty());
    }

    #[test]
    fn test_limit_caps_results() {
        let catalog = FunctionCatalog::new(2);
        let results = catalog.search("e").unwrap();
        assert_eq!(results.len(), 2);
    }
}
