//! Client-side product filtering: division, category, price range, and
//! search. Criteria compose with AND semantics; unset criteria match
//! everything.

use super::Product;

#[derive(Clone, Debug, Default)]
pub struct ProductFilter {
    /// Division names; a product matches when its division is listed.
    pub divisions: Vec<String>,
    pub category: Option<String>,
    pub min_price: Option<u32>,
    pub max_price: Option<u32>,
    /// Case-insensitive search over name and tags.
    pub query: Option<String>,
}

impl ProductFilter {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.divisions.is_empty()
            && self.category.is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
            && self.query.is_none()
    }

    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_division(product)
            && self.matches_category(product)
            && self.matches_price(product)
            && self.matches_query(product)
    }

    fn matches_division(&self, product: &Product) -> bool {
        if self.divisions.is_empty() {
            return true;
        }
        self.divisions
            .iter()
            .any(|division| division.eq_ignore_ascii_case(&product.division))
    }

    fn matches_category(&self, product: &Product) -> bool {
        match &self.category {
            Some(category) if !category.eq_ignore_ascii_case("all") => {
                category.eq_ignore_ascii_case(&product.category)
            }
            _ => true,
        }
    }

    /// A product satisfies a price bound when any variant price falls
    /// inside the range.
    fn matches_price(&self, product: &Product) -> bool {
        if self.min_price.is_none() && self.max_price.is_none() {
            return true;
        }

        let min = self.min_price.unwrap_or(0);
        let max = self.max_price.unwrap_or(u32::MAX);

        product.prices().any(|price| price >= min && price <= max)
    }

    fn matches_query(&self, product: &Product) -> bool {
        let Some(query) = &self.query else {
            return true;
        };

        let needle = query.to_lowercase();
        product.name.to_lowercase().contains(&needle)
            || product.tags.to_lowercase().contains(&needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn catalog() -> Catalog {
        Catalog::embedded().unwrap()
    }

    #[test]
    fn empty_filter_matches_everything() {
        let catalog = catalog();
        let filter = ProductFilter::default();

        assert!(filter.is_empty());
        assert_eq!(catalog.filtered(&filter).len(), catalog.products().len());
    }

    #[test]
    fn category_filter_narrows() {
        let catalog = catalog();
        let filter = ProductFilter {
            category: Some("dresses".to_string()),
            ..ProductFilter::default()
        };

        let matched = catalog.filtered(&filter);
        assert_eq!(matched.len(), 2);
        assert!(matched.iter().all(|p| p.category == "dresses"));
    }

    #[test]
    fn category_all_is_a_no_op() {
        let catalog = catalog();
        let filter = ProductFilter {
            category: Some("All".to_string()),
            ..ProductFilter::default()
        };

        assert_eq!(catalog.filtered(&filter).len(), catalog.products().len());
    }

    #[test]
    fn price_range_matches_any_variant() {
        let catalog = catalog();

        // Only ednaa has a variant at 250.
        let filter = ProductFilter {
            min_price: Some(240),
            ..ProductFilter::default()
        };
        let matched = catalog.filtered(&filter);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].slug, "ednaa");

        // esdal's cheapest variant is 200.
        let filter = ProductFilter {
            max_price: Some(199),
            ..ProductFilter::default()
        };
        let matched = catalog.filtered(&filter);
        assert!(matched.iter().all(|p| p.slug != "esdal"));
    }

    #[test]
    fn search_covers_name_and_tags() {
        let catalog = catalog();

        let filter = ProductFilter {
            query: Some("KRIP".to_string()),
            ..ProductFilter::default()
        };
        let matched = catalog.filtered(&filter);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].slug, "basic-long-sleeve-krip");

        let filter = ProductFilter {
            query: Some("havan".to_string()),
            ..ProductFilter::default()
        };
        let matched = catalog.filtered(&filter);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].slug, "ednaa");
    }

    #[test]
    fn criteria_compose_with_and() {
        let catalog = catalog();
        let filter = ProductFilter {
            category: Some("dresses".to_string()),
            query: Some("esdal".to_string()),
            ..ProductFilter::default()
        };

        let matched = catalog.filtered(&filter);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].slug, "esdal");
    }

    #[test]
    fn division_filter_is_case_insensitive() {
        let catalog = catalog();
        let filter = ProductFilter {
            divisions: vec!["Clothes".to_string()],
            ..ProductFilter::default()
        };

        assert_eq!(catalog.filtered(&filter).len(), 3);

        let filter = ProductFilter {
            divisions: vec!["accessories".to_string()],
            ..ProductFilter::default()
        };
        assert!(catalog.filtered(&filter).is_empty());
    }
}
