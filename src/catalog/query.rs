//! Catalog Queries
//!
//! Filter and sort configuration for a catalog view. All filters are
//! conjunctive; sorting is stable.

use std::cmp::Reverse;

use rusty_money::{Money, iso::Currency};

use crate::{
    pricing::whole_units,
    products::{Condition, Product},
};

/// Default price ceiling, in major units of the catalog currency.
pub const DEFAULT_MAX_PRICE: i64 = 250_000;

/// Brand selector.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BrandFilter {
    /// Every brand
    #[default]
    All,

    /// Exactly this brand (case-sensitive)
    Brand(String),
}

impl BrandFilter {
    /// Whether the product passes this selector.
    pub fn matches(&self, product: &Product<'_>) -> bool {
        match self {
            Self::All => true,
            Self::Brand(brand) => product.brand == *brand,
        }
    }
}

/// Condition selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConditionFilter {
    /// Every condition
    #[default]
    All,

    /// Exactly this condition
    Only(Condition),
}

impl ConditionFilter {
    /// Whether the product passes this selector.
    pub fn matches(self, product: &Product<'_>) -> bool {
        match self {
            Self::All => true,
            Self::Only(condition) => product.condition == condition,
        }
    }
}

/// Result ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Declared catalog order
    #[default]
    Featured,

    /// Cheapest first
    PriceAscending,

    /// Most expensive first
    PriceDescending,

    /// Most recent release year first; unknown years last
    Newest,
}

impl SortKey {
    /// Sorts products in place. The sort is stable, so equal keys keep their
    /// relative order.
    pub fn sort(self, products: &mut [&Product<'_>]) {
        match self {
            Self::Featured => {}
            Self::PriceAscending => products.sort_by_key(|product| product.price.to_minor_units()),
            Self::PriceDescending => {
                products.sort_by_key(|product| Reverse(product.price.to_minor_units()));
            }
            Self::Newest => products.sort_by_key(|product| Reverse(product.sort_year())),
        }
    }
}

/// Filter and sort configuration for a catalog view.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogQuery<'a> {
    brand: BrandFilter,
    condition: ConditionFilter,
    search: String,
    max_price: Money<'a, Currency>,
    sort: SortKey,
}

impl<'a> CatalogQuery<'a> {
    /// Create a query with default settings, priced in `currency`.
    pub fn new(currency: &'a Currency) -> Self {
        Self {
            brand: BrandFilter::All,
            condition: ConditionFilter::All,
            search: String::new(),
            max_price: default_max_price(currency),
            sort: SortKey::Featured,
        }
    }

    /// Restore every field to its default.
    pub fn reset(&mut self) {
        *self = Self::new(self.max_price.currency());
    }

    /// Whether any field differs from its default.
    pub fn is_filtered(&self) -> bool {
        *self != Self::new(self.max_price.currency())
    }

    /// Whether the product passes every active filter.
    pub fn matches(&self, product: &Product<'_>) -> bool {
        self.brand.matches(product)
            && self.condition.matches(product)
            && product.price.to_minor_units() <= self.max_price.to_minor_units()
            && self.matches_search(product)
    }

    fn matches_search(&self, product: &Product<'_>) -> bool {
        if self.search.is_empty() {
            return true;
        }

        let needle = self.search.to_lowercase();

        [&product.model, &product.brand, &product.reference]
            .into_iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    /// Brand selector.
    pub fn brand(&self) -> &BrandFilter {
        &self.brand
    }

    /// Condition selector.
    pub fn condition(&self) -> ConditionFilter {
        self.condition
    }

    /// Search text.
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Inclusive price ceiling.
    pub fn max_price(&self) -> &Money<'a, Currency> {
        &self.max_price
    }

    /// Sort key.
    pub fn sort(&self) -> SortKey {
        self.sort
    }

    /// Select a brand.
    pub fn set_brand(&mut self, brand: BrandFilter) {
        self.brand = brand;
    }

    /// Select a condition.
    pub fn set_condition(&mut self, condition: ConditionFilter) {
        self.condition = condition;
    }

    /// Replace the search text.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    /// Replace the price ceiling.
    pub fn set_max_price(&mut self, max_price: Money<'a, Currency>) {
        self.max_price = max_price;
    }

    /// Replace the sort key.
    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
    }

    /// Builder-style brand selection.
    #[must_use]
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = BrandFilter::Brand(brand.into());
        self
    }

    /// Builder-style condition selection.
    #[must_use]
    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.condition = ConditionFilter::Only(condition);
        self
    }

    /// Builder-style search text.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Builder-style price ceiling.
    #[must_use]
    pub fn with_max_price(mut self, max_price: Money<'a, Currency>) -> Self {
        self.max_price = max_price;
        self
    }

    /// Builder-style sort key.
    #[must_use]
    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }
}

fn default_max_price(currency: &Currency) -> Money<'_, Currency> {
    whole_units(DEFAULT_MAX_PRICE, currency)
}
