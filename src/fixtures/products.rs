//! Product Fixtures

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::{
    Money,
    iso::{self, Currency},
};
use serde::Deserialize;
use smallvec::SmallVec;

use crate::{fixtures::FixtureError, products::Product};

/// Catalog seed as written in YAML.
#[derive(Debug, Deserialize)]
pub struct ProductsFixture {
    /// ISO code of the catalog currency (e.g., "NGN")
    pub currency: String,

    /// Products in declared (featured) order
    pub products: Vec<ProductFixture>,
}

/// Product Fixture
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Product identifier
    pub id: String,

    /// Manufacturer
    pub brand: String,

    /// Model name
    pub model: String,

    /// Manufacturer reference
    pub reference: String,

    /// Product price (e.g., "85000 NGN")
    pub price: String,

    /// Primary image
    #[serde(default)]
    pub image: String,

    /// Gallery images
    #[serde(default)]
    pub images: Vec<String>,

    /// Stock status label (e.g., "AVAILABLE")
    pub status: String,

    /// Condition label (e.g., "Like New")
    pub condition: String,

    /// Release year
    #[serde(default)]
    pub year: Option<i32>,

    /// Specification tags
    #[serde(default)]
    pub specs: Vec<String>,

    /// Investment-grade badge
    #[serde(default)]
    pub investment_grade: bool,

    /// New-arrival badge
    #[serde(default)]
    pub new_arrival: bool,

    /// Free-text description
    #[serde(default)]
    pub description: String,
}

impl TryFrom<ProductFixture> for Product<'static> {
    type Error = FixtureError;

    fn try_from(fixture: ProductFixture) -> Result<Self, Self::Error> {
        let (minor_units, currency) = parse_price(&fixture.price)?;

        Ok(Product {
            id: fixture.id.into(),
            brand: fixture.brand,
            model: fixture.model,
            reference: fixture.reference,
            price: Money::from_minor(minor_units, currency),
            image: fixture.image,
            images: SmallVec::from_vec(fixture.images),
            status: fixture.status.parse()?,
            condition: fixture.condition.parse()?,
            year: fixture.year,
            specs: SmallVec::from_vec(fixture.specs),
            investment_grade: fixture.investment_grade,
            new_arrival: fixture.new_arrival,
            description: fixture.description,
        })
    }
}

/// Look up an ISO currency by code.
///
/// # Errors
///
/// Returns [`FixtureError::UnknownCurrency`] if the code is not an ISO 4217 currency.
pub fn parse_currency(code: &str) -> Result<&'static Currency, FixtureError> {
    iso::find(code.trim()).ok_or_else(|| FixtureError::UnknownCurrency(code.to_string()))
}

/// Parse price string (e.g., "85000 NGN") into minor units and currency
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY",
/// if the amount is not a non-negative decimal, or if the currency code
/// is not recognized.
pub fn parse_price(s: &str) -> Result<(i64, &'static Currency), FixtureError> {
    let parts: Vec<&str> = s.split_whitespace().collect();

    let [amount, currency_code] = parts.as_slice() else {
        return Err(FixtureError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    };

    let amount = amount
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidPrice(s.to_string()))?;

    if amount.is_sign_negative() {
        return Err(FixtureError::InvalidPrice(s.to_string()));
    }

    let currency = parse_currency(currency_code)?;

    let minor_units = amount
        .checked_mul(Decimal::from(10_i64.saturating_pow(currency.exponent)))
        .and_then(|value| value.round_dp(0).to_i64())
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?;

    Ok((minor_units, currency))
}
