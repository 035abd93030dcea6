//! Collection Grid Filters
//!
//! The landing-page collection grid offers quick filters instead of the full
//! query: everything, a single brand, or investment-grade pieces only.

use std::fmt;

use crate::products::Product;

/// Page size used by the collection grid.
pub const COLLECTION_PAGE_SIZE: usize = 3;

/// Quick filter for the collection grid.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CollectionFilter {
    /// Every product
    #[default]
    All,

    /// Exactly this brand
    Brand(String),

    /// Investment-grade products only
    Investment,
}

impl CollectionFilter {
    /// Whether the product passes this filter.
    pub fn matches(&self, product: &Product<'_>) -> bool {
        match self {
            Self::All => true,
            Self::Brand(brand) => product.brand == *brand,
            Self::Investment => product.investment_grade,
        }
    }

    /// Filter options for a set of brands: `All`, each brand, then `Investment`.
    pub fn options<'b>(brands: impl IntoIterator<Item = &'b str>) -> Vec<Self> {
        std::iter::once(Self::All)
            .chain(brands.into_iter().map(|brand| Self::Brand(brand.to_string())))
            .chain(std::iter::once(Self::Investment))
            .collect()
    }
}

impl fmt::Display for CollectionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("All"),
            Self::Brand(brand) => f.write_str(brand),
            Self::Investment => f.write_str("Investment"),
        }
    }
}
