//! Products

use std::{fmt, str::FromStr};

use rusty_money::{Money, iso::Currency};
use slotmap::new_key_type;
use smallvec::SmallVec;
use thiserror::Error;

new_key_type! {
    /// Product Key
    pub struct ProductKey;
}

/// Stable, human-assigned product identifier (e.g. `"1"` or `"daytona-panda"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductId(String);

impl ProductId {
    /// Create a new product identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ProductId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Error returned when a status or condition label is not recognised.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseLabelError {
    /// Unknown availability label
    #[error("Unknown availability: {0}")]
    Availability(String),

    /// Unknown condition label
    #[error("Unknown condition: {0}")]
    Condition(String),
}

/// Availability of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Availability {
    /// Ready to buy
    Available,

    /// Held for a client
    Reserved,

    /// No longer in stock
    Sold,
}

impl Availability {
    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Reserved => "Reserved",
            Self::Sold => "Sold",
        }
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Availability {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AVAILABLE" => Ok(Self::Available),
            "RESERVED" => Ok(Self::Reserved),
            "SOLD" => Ok(Self::Sold),
            _ => Err(ParseLabelError::Availability(s.to_string())),
        }
    }
}

/// Physical condition of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    /// Unworn
    New,

    /// Worn briefly, no visible marks
    LikeNew,

    /// Light signs of wear
    Excellent,

    /// Older reference with patina
    Vintage,
}

impl Condition {
    /// All conditions in display order.
    pub const ALL: [Condition; 4] = [
        Condition::New,
        Condition::LikeNew,
        Condition::Excellent,
        Condition::Vintage,
    ];

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::LikeNew => "Like New",
            Self::Excellent => "Excellent",
            Self::Vintage => "Vintage",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Condition {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_ascii_lowercase();

        match normalised.as_str() {
            "new" => Ok(Self::New),
            "likenew" => Ok(Self::LikeNew),
            "excellent" => Ok(Self::Excellent),
            "vintage" => Ok(Self::Vintage),
            _ => Err(ParseLabelError::Condition(s.to_string())),
        }
    }
}

/// Product
#[derive(Debug, Clone, PartialEq)]
pub struct Product<'a> {
    /// Product identifier
    pub id: ProductId,

    /// Manufacturer
    pub brand: String,

    /// Model name
    pub model: String,

    /// Manufacturer reference code
    pub reference: String,

    /// Product price
    pub price: Money<'a, Currency>,

    /// Primary image
    pub image: String,

    /// Additional images, in gallery order
    pub images: SmallVec<[String; 3]>,

    /// Stock status
    pub status: Availability,

    /// Physical condition
    pub condition: Condition,

    /// Release year, if known
    pub year: Option<i32>,

    /// Specification tags, in display order
    pub specs: SmallVec<[String; 5]>,

    /// Investment-grade badge
    pub investment_grade: bool,

    /// New-arrival badge
    pub new_arrival: bool,

    /// Free-text description
    pub description: String,
}

impl<'a> Product<'a> {
    /// Create a product with the required fields; everything else starts empty.
    pub fn new(
        id: impl Into<ProductId>,
        brand: impl Into<String>,
        model: impl Into<String>,
        reference: impl Into<String>,
        price: Money<'a, Currency>,
    ) -> Self {
        Self {
            id: id.into(),
            brand: brand.into(),
            model: model.into(),
            reference: reference.into(),
            price,
            image: String::new(),
            images: SmallVec::new(),
            status: Availability::Available,
            condition: Condition::New,
            year: None,
            specs: SmallVec::new(),
            investment_grade: false,
            new_arrival: false,
            description: String::new(),
        }
    }

    /// Set the condition.
    #[must_use]
    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.condition = condition;
        self
    }

    /// Set the release year.
    #[must_use]
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Mark the product as investment grade.
    #[must_use]
    pub fn investment_grade(mut self) -> Self {
        self.investment_grade = true;
        self
    }

    /// Year used for ordering; unknown years sort as 0.
    pub fn sort_year(&self) -> i32 {
        self.year.unwrap_or(0)
    }

    /// Brand and model, e.g. `Rolex Daytona`.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }
}
