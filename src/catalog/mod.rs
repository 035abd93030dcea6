//! Catalog
//!
//! The static product collection and the pure query engine over it. Products
//! keep their declared order, which is the `Featured` ordering.

use rustc_hash::FxHashMap;
use rusty_money::iso::Currency;
use slotmap::SlotMap;
use thiserror::Error;

use crate::products::{Condition, Product, ProductId, ProductKey};

pub mod collection;
pub mod pagination;
pub mod query;
pub mod related;

pub use collection::{COLLECTION_PAGE_SIZE, CollectionFilter};
pub use pagination::{Page, page_count, paginate};
pub use query::{BrandFilter, CatalogQuery, ConditionFilter, DEFAULT_MAX_PRICE, SortKey};
pub use related::{RELATED_LIMIT, related};

/// Errors raised while assembling a catalog.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// Two products share an identifier.
    #[error("Duplicate product id: {0}")]
    DuplicateId(ProductId),

    /// A product is priced in a different currency
    /// (product id, product currency, catalog currency).
    #[error("Product {0} has currency {1}, but catalog has currency {2}")]
    CurrencyMismatch(ProductId, &'static str, &'static str),
}

/// Catalog
#[derive(Debug, Clone)]
pub struct Catalog<'a> {
    products: SlotMap<ProductKey, Product<'a>>,
    order: Vec<ProductKey>,
    keys: FxHashMap<ProductId, ProductKey>,
    currency: &'a Currency,
}

impl<'a> Catalog<'a> {
    /// Create an empty catalog priced in `currency`.
    pub fn new(currency: &'a Currency) -> Self {
        Self {
            products: SlotMap::with_key(),
            order: Vec::new(),
            keys: FxHashMap::default(),
            currency,
        }
    }

    /// Create a catalog from products in declared order.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] on a duplicate id or a currency mismatch.
    pub fn with_products(
        products: impl IntoIterator<Item = Product<'a>>,
        currency: &'a Currency,
    ) -> Result<Self, CatalogError> {
        let mut catalog = Self::new(currency);

        products
            .into_iter()
            .try_for_each(|product| catalog.insert(product).map(|_key| ()))?;

        Ok(catalog)
    }

    /// Append a product to the end of the declared order.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] on a duplicate id or a currency mismatch.
    pub fn insert(&mut self, product: Product<'a>) -> Result<ProductKey, CatalogError> {
        if self.keys.contains_key(&product.id) {
            return Err(CatalogError::DuplicateId(product.id));
        }

        let product_currency = product.price.currency();

        if product_currency != self.currency {
            return Err(CatalogError::CurrencyMismatch(
                product.id,
                product_currency.iso_alpha_code,
                self.currency.iso_alpha_code,
            ));
        }

        let id = product.id.clone();
        let key = self.products.insert(product);

        self.order.push(key);
        self.keys.insert(id, key);

        Ok(key)
    }

    /// Look up a product by id.
    pub fn get(&self, id: &ProductId) -> Option<&Product<'a>> {
        self.keys.get(id).and_then(|key| self.products.get(*key))
    }

    /// Look up a product by key.
    pub fn get_by_key(&self, key: ProductKey) -> Option<&Product<'a>> {
        self.products.get(key)
    }

    /// Products in declared order.
    pub fn iter(&self) -> impl Iterator<Item = &Product<'a>> {
        self.order.iter().filter_map(|key| self.products.get(*key))
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Catalog currency.
    pub fn currency(&self) -> &'a Currency {
        self.currency
    }

    /// Distinct brands in first-seen order.
    pub fn brands(&self) -> Vec<&str> {
        let mut brands: Vec<&str> = Vec::new();

        for product in self.iter() {
            if !brands.contains(&product.brand.as_str()) {
                brands.push(&product.brand);
            }
        }

        brands
    }

    /// Condition options, in display order.
    pub fn conditions(&self) -> [Condition; 4] {
        Condition::ALL
    }

    /// Filter and sort the catalog.
    pub fn query(&self, query: &CatalogQuery<'_>) -> QueryResult<'_, 'a> {
        let mut products: Vec<&Product<'a>> = self
            .iter()
            .filter(|product| query.matches(product))
            .collect();

        query.sort().sort(&mut products);

        QueryResult { products }
    }

    /// Products passing a collection-grid quick filter, in declared order.
    pub fn collection(&self, filter: &CollectionFilter) -> QueryResult<'_, 'a> {
        QueryResult {
            products: self.iter().filter(|product| filter.matches(product)).collect(),
        }
    }
}

/// Ordered products produced by a query.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult<'c, 'a> {
    products: Vec<&'c Product<'a>>,
}

impl<'c, 'a> QueryResult<'c, 'a> {
    /// Matching products, in result order.
    pub fn products(&self) -> &[&'c Product<'a>] {
        &self.products
    }

    /// Iterate over matching products.
    pub fn iter(&self) -> impl Iterator<Item = &'c Product<'a>> + '_ {
        self.products.iter().copied()
    }

    /// Number of matching products.
    pub fn count(&self) -> usize {
        self.products.len()
    }

    /// Whether nothing matched.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// One 1-based page of the result.
    pub fn page(&self, number: usize, page_size: usize) -> Page<'_, &'c Product<'a>> {
        Page::new(&self.products, number, page_size)
    }

    /// Number of pages at `page_size`.
    pub fn page_count(&self, page_size: usize) -> usize {
        page_count(self.products.len(), page_size)
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::{Money, iso};
    use testresult::TestResult;

    use super::*;

    #[test]
    fn rejects_duplicate_ids() {
        let price = Money::from_minor(100, iso::NGN);

        let result = Catalog::with_products(
            [
                Product::new("1", "Rolex", "Daytona", "116500LN", price),
                Product::new("1", "Omega", "Speedmaster", "310.30", price),
            ],
            iso::NGN,
        );

        assert_eq!(result.err(), Some(CatalogError::DuplicateId(ProductId::from("1"))));
    }

    #[test]
    fn rejects_currency_mismatch() {
        let result = Catalog::with_products(
            [Product::new("1", "Rolex", "Daytona", "116500LN", Money::from_minor(100, iso::USD))],
            iso::NGN,
        );

        match result {
            Err(CatalogError::CurrencyMismatch(id, product_currency, catalog_currency)) => {
                assert_eq!(id.as_str(), "1");
                assert_eq!(product_currency, iso::USD.iso_alpha_code);
                assert_eq!(catalog_currency, iso::NGN.iso_alpha_code);
            }
            other => panic!("expected CurrencyMismatch error, got {other:?}"),
        }
    }

    #[test]
    fn brands_are_distinct_in_first_seen_order() -> TestResult {
        let price = Money::from_minor(100, iso::NGN);
        let catalog = Catalog::with_products(
            [
                Product::new("1", "Rolex", "Daytona", "a", price),
                Product::new("2", "Omega", "Speedmaster", "b", price),
                Product::new("3", "Rolex", "Submariner", "c", price),
            ],
            iso::NGN,
        )?;

        assert_eq!(catalog.brands(), ["Rolex", "Omega"]);
        assert_eq!(catalog.len(), 3);
        assert_eq!(
            catalog.get(&ProductId::from("3")).map(|p| p.model.as_str()),
            Some("Submariner")
        );

        Ok(())
    }

    #[test]
    fn empty_catalog_queries_to_empty_result() {
        let catalog = Catalog::new(iso::NGN);
        let result = catalog.query(&CatalogQuery::new(iso::NGN));

        assert!(result.is_empty());
        assert_eq!(result.page_count(3), 0);
        assert!(result.page(1, 3).items().is_empty());
    }
}
