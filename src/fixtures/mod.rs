//! Fixtures
//!
//! Catalog seeds written in YAML. The storefront's own seed is embedded in the
//! binary; other seeds can be read from disk.

use std::{fs, path::Path};

use thiserror::Error;

use crate::{
    catalog::{Catalog, CatalogError},
    products::{ParseLabelError, Product},
};

pub mod products;

/// Seed compiled into the crate.
pub const BUILTIN_CATALOG_YAML: &str = include_str!("../../fixtures/products/vault.yml");

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Unknown status or condition label
    #[error(transparent)]
    Label(#[from] ParseLabelError),

    /// The products do not form a valid catalog
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Parse a catalog seed from YAML.
///
/// # Errors
///
/// Returns a [`FixtureError`] if the YAML is malformed, a field cannot be
/// parsed, or the products do not form a valid catalog.
pub fn parse_catalog(yaml: &str) -> Result<Catalog<'static>, FixtureError> {
    let fixture: products::ProductsFixture = serde_norway::from_str(yaml)?;
    let currency = products::parse_currency(&fixture.currency)?;

    let products = fixture
        .products
        .into_iter()
        .map(Product::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Catalog::with_products(products, currency)?)
}

/// Read and parse a catalog seed file.
///
/// # Errors
///
/// Returns a [`FixtureError`] if the file cannot be read or parsed.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Catalog<'static>, FixtureError> {
    let contents = fs::read_to_string(path)?;

    parse_catalog(&contents)
}

/// The storefront's built-in catalog.
///
/// # Errors
///
/// Returns a [`FixtureError`] if the embedded seed is invalid.
pub fn builtin_catalog() -> Result<Catalog<'static>, FixtureError> {
    parse_catalog(BUILTIN_CATALOG_YAML)
}
