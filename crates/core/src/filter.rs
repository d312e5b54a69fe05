//! Stateless, order-preserving product filtering.
//!
//! Criteria are ANDed: a product survives only when it passes the text
//! search, the category constraint, and the price bracket. Filtering never
//! reorders survivors; ordering is [`rank`](crate::rank)'s job.

use std::fmt;
use std::str::FromStr;

use crate::domain::product::Product;
use crate::rank::{self, SortKey};

/// Wildcard category label that lifts the category constraint.
pub const ANY_CATEGORY: &str = "all";

/// Inclusive price bracket in whole currency units. A missing `max` leaves
/// the bracket open-ended upward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PriceBracket {
    pub min: u32,
    pub max: Option<u32>,
}

impl PriceBracket {
    /// Bracket that admits every price.
    pub const ANY: PriceBracket = PriceBracket { min: 0, max: None };

    /// Brackets offered by the storefront's price menu, widest first.
    pub const STANDARD: [PriceBracket; 6] = [
        PriceBracket::ANY,
        PriceBracket { min: 0, max: Some(50) },
        PriceBracket { min: 50, max: Some(100) },
        PriceBracket { min: 100, max: Some(200) },
        PriceBracket { min: 200, max: Some(500) },
        PriceBracket { min: 500, max: None },
    ];

    pub const fn new(min: u32, max: Option<u32>) -> Self {
        Self { min, max }
    }

    /// Whether `price` falls inside the bracket, bounds included.
    pub fn contains(&self, price: u32) -> bool {
        price >= self.min && self.max.map_or(true, |max| price <= max)
    }
}

impl fmt::Display for PriceBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.min, self.max) {
            (0, None) => write!(f, "All Prices"),
            (min, None) => write!(f, "${min}+"),
            (0, Some(max)) => write!(f, "Under ${max}"),
            (min, Some(max)) => write!(f, "${min} - ${max}"),
        }
    }
}

impl FromStr for PriceBracket {
    type Err = String;

    /// Accepts `all`, `min-max`, and `min` / `min+` for open-ended
    /// brackets, e.g. `0-50`, `200-500`, `500+`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unsupported =
            || format!("unsupported price bracket `{s}` (expected `all`, `min-max`, or `min+`)");

        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("all") {
            return Ok(PriceBracket::ANY);
        }

        if let Some((min, max)) = trimmed.split_once('-') {
            let min = min.trim().parse().map_err(|_| unsupported())?;
            let max = max.trim().parse().map_err(|_| unsupported())?;
            return Ok(PriceBracket::new(min, Some(max)));
        }

        let min = trimmed.strip_suffix('+').unwrap_or(trimmed);
        let min = min.trim().parse().map_err(|_| unsupported())?;
        Ok(PriceBracket::new(min, None))
    }
}

/// Filter criteria for one pass over a product list.
///
/// The default value matches everything and leaves order untouched.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterCriteria {
    /// Case-insensitive substring matched against name, description, and
    /// brand. Empty matches every product.
    pub search_term: String,
    /// Exact category label; `None` or [`ANY_CATEGORY`] matches all.
    pub category: Option<String>,
    pub price_bracket: PriceBracket,
    pub sort_key: SortKey,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search_term(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_price_bracket(mut self, bracket: PriceBracket) -> Self {
        self.price_bracket = bracket;
        self
    }

    pub fn with_sort_key(mut self, key: SortKey) -> Self {
        self.sort_key = key;
        self
    }

    /// Whether a single product passes every criterion.
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_search(product)
            && self.matches_category(product)
            && self.price_bracket.contains(product.price)
    }

    /// Keep matching products in their incoming order.
    pub fn filter(&self, products: &[Product]) -> Vec<Product> {
        products.iter().filter(|product| self.matches(product)).cloned().collect()
    }

    /// Filter, then order the survivors by the criteria's sort key.
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        let mut matched = self.filter(products);
        rank::rank_in_place(&mut matched, self.sort_key);
        matched
    }

    fn matches_search(&self, product: &Product) -> bool {
        if self.search_term.is_empty() {
            return true;
        }
        let term = self.search_term.to_lowercase();
        product.name.to_lowercase().contains(&term)
            || product.description.to_lowercase().contains(&term)
            || product.brand.to_lowercase().contains(&term)
    }

    fn matches_category(&self, product: &Product) -> bool {
        match self.category.as_deref() {
            None | Some(ANY_CATEGORY) => true,
            Some(wanted) => product.category == wanted,
        }
    }
}

/// Distinct category labels in first-seen order, for populating a
/// category menu from a live product list.
pub fn available_categories(products: &[Product]) -> Vec<String> {
    let mut seen = Vec::new();
    for product in products {
        if !seen.contains(&product.category) {
            seen.push(product.category.clone());
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use crate::domain::product::ProductId;

    use super::*;

    fn product(id: &str, name: &str, brand: &str, category: &str, price: u32) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            description: format!("{name} for everyday use"),
            price,
            original_price: None,
            image: "https://images.example.com/placeholder".to_string(),
            rating: 4.0,
            review_count: 100,
            category: category.to_string(),
            brand: brand.to_string(),
            features: Vec::new(),
            in_stock: true,
            fast_shipping: false,
            ai_reasoning: None,
            suitability_score: None,
            occasion_match: None,
            age_appropriate: None,
        }
    }

    fn storefront() -> Vec<Product> {
        vec![
            product("p-1", "Wireless Headphones", "Sony", "Electronics", 180),
            product("p-2", "Scented Candle Set", "Amazon", "Home & Garden", 35),
            product("p-3", "Running Shoes", "Nike", "Sports & Outdoors", 120),
            product("p-4", "Smart Watch", "Apple", "Electronics", 430),
            product("p-5", "Building Blocks", "Lego", "Toys & Games", 60),
        ]
    }

    #[test]
    fn parses_the_storefront_bracket_menu() {
        assert_eq!("all".parse::<PriceBracket>(), Ok(PriceBracket::ANY));
        assert_eq!("0-50".parse::<PriceBracket>(), Ok(PriceBracket::new(0, Some(50))));
        assert_eq!("200-500".parse::<PriceBracket>(), Ok(PriceBracket::new(200, Some(500))));
        assert_eq!("500".parse::<PriceBracket>(), Ok(PriceBracket::new(500, None)));
        assert_eq!("500+".parse::<PriceBracket>(), Ok(PriceBracket::new(500, None)));
        assert!("cheap".parse::<PriceBracket>().is_err());
        assert!("10-".parse::<PriceBracket>().is_err());
        assert!("-50".parse::<PriceBracket>().is_err());
    }

    #[test]
    fn bracket_bounds_are_inclusive_on_both_ends() {
        let bracket = PriceBracket::new(200, Some(500));
        assert!(bracket.contains(200));
        assert!(bracket.contains(500));
        assert!(!bracket.contains(199));
        assert!(!bracket.contains(501));

        let open = PriceBracket::new(500, None);
        assert!(open.contains(500));
        assert!(open.contains(u32::MAX));
        assert!(!open.contains(499));
    }

    #[test]
    fn brackets_label_themselves_like_the_price_menu() {
        let labels: Vec<String> =
            PriceBracket::STANDARD.iter().map(ToString::to_string).collect();
        assert_eq!(
            labels,
            vec!["All Prices", "Under $50", "$50 - $100", "$100 - $200", "$200 - $500", "$500+"]
        );
    }

    #[test]
    fn search_scans_name_description_and_brand_case_insensitively() {
        let products = storefront();

        let by_name = FilterCriteria::new().with_search_term("WIRELESS").filter(&products);
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].id.as_str(), "p-1");

        let by_description = FilterCriteria::new().with_search_term("everyday").filter(&products);
        assert_eq!(by_description.len(), products.len());

        let by_brand = FilterCriteria::new().with_search_term("nike").filter(&products);
        assert_eq!(by_brand.len(), 1);
        assert_eq!(by_brand[0].id.as_str(), "p-3");
    }

    #[test]
    fn an_empty_search_term_matches_everything() {
        let products = storefront();
        assert_eq!(FilterCriteria::new().filter(&products).len(), products.len());
    }

    #[test]
    fn category_matches_exactly_unless_wildcarded() {
        let products = storefront();

        let electronics = FilterCriteria::new().with_category("Electronics").filter(&products);
        assert_eq!(electronics.len(), 2);

        let wildcard = FilterCriteria::new().with_category(ANY_CATEGORY).filter(&products);
        assert_eq!(wildcard.len(), products.len());

        let near_miss = FilterCriteria::new().with_category("electronics").filter(&products);
        assert!(near_miss.is_empty());
    }

    #[test]
    fn criteria_compose_like_sequential_passes() {
        let products = storefront();
        let combined = FilterCriteria::new()
            .with_search_term("s")
            .with_category("Electronics")
            .with_price_bracket(PriceBracket::new(100, Some(200)))
            .filter(&products);

        let sequential = FilterCriteria::new()
            .with_price_bracket(PriceBracket::new(100, Some(200)))
            .filter(
                &FilterCriteria::new()
                    .with_category("Electronics")
                    .filter(&FilterCriteria::new().with_search_term("s").filter(&products)),
            );

        assert_eq!(combined, sequential);
        assert_eq!(combined.len(), 1);
        assert_eq!(combined[0].id.as_str(), "p-1");
    }

    #[test]
    fn filtering_preserves_incoming_order() {
        let products = storefront();
        let survivors = FilterCriteria::new()
            .with_price_bracket(PriceBracket::new(0, Some(200)))
            .filter(&products);
        let ids: Vec<&str> = survivors.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p-1", "p-2", "p-3", "p-5"]);
    }

    #[test]
    fn apply_filters_then_sorts() {
        let products = storefront();
        let ranked = FilterCriteria::new()
            .with_category("Electronics")
            .with_sort_key(SortKey::PriceLow)
            .apply(&products);
        let ids: Vec<&str> = ranked.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p-1", "p-4"]);
    }

    #[test]
    fn empty_input_filters_to_empty_output() {
        assert!(FilterCriteria::new().with_search_term("anything").filter(&[]).is_empty());
    }

    #[test]
    fn categories_list_in_first_seen_order_without_duplicates() {
        let categories = available_categories(&storefront());
        assert_eq!(
            categories,
            vec!["Electronics", "Home & Garden", "Sports & Outdoors", "Toys & Games"]
        );
        assert!(available_categories(&[]).is_empty());
    }
}
