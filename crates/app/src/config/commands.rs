//! Subcommands

use clap::{Args, Subcommand, ValueEnum};
use vault::{catalog::SortKey, products::Condition};

use crate::store::CATALOG_PAGE_SIZE;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Filter, sort and page through the catalog
    Catalog(CatalogArgs),

    /// Build an order from product ids and print its hand-off
    Checkout(CheckoutArgs),

    /// Show recommendations for a product
    Related(RelatedArgs),

    /// Check specialist credentials
    SignIn(SignInArgs),
}

/// Catalog sort order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    /// Seed order
    Featured,

    /// Cheapest first
    PriceAscending,

    /// Most expensive first
    PriceDescending,

    /// Latest year first
    Newest,
}

impl From<SortArg> for SortKey {
    fn from(sort: SortArg) -> Self {
        match sort {
            SortArg::Featured => SortKey::Featured,
            SortArg::PriceAscending => SortKey::PriceAscending,
            SortArg::PriceDescending => SortKey::PriceDescending,
            SortArg::Newest => SortKey::Newest,
        }
    }
}

#[derive(Debug, Args)]
pub struct CatalogArgs {
    /// Only this brand (exact name)
    #[arg(long)]
    pub brand: Option<String>,

    /// Only this condition (new, like new, excellent, vintage)
    #[arg(long)]
    pub condition: Option<Condition>,

    /// Case-insensitive text matched against model, brand and reference
    #[arg(long)]
    pub search: Option<String>,

    /// Price ceiling in whole currency units
    #[arg(long)]
    pub max_price: Option<i64>,

    /// Sort order
    #[arg(long, value_enum, default_value_t = SortArg::Featured)]
    pub sort: SortArg,

    /// Page to show (1-based)
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Products per page (at least 1)
    #[arg(long, default_value_t = CATALOG_PAGE_SIZE, value_parser = parse_page_size)]
    pub page_size: usize,
}

fn parse_page_size(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("page size must be at least 1".to_string()),
        Ok(page_size) => Ok(page_size),
        Err(error) => Err(error.to_string()),
    }
}

#[derive(Debug, Args)]
pub struct CheckoutArgs {
    /// Product id to add; repeat to add more, or the same id to raise its quantity
    #[arg(long, required = true)]
    pub add: Vec<String>,

    /// Buyer name shown in the order message
    #[arg(long)]
    pub buyer: Option<String>,
}

#[derive(Debug, Args)]
pub struct RelatedArgs {
    /// Product id
    pub id: String,

    /// Shuffle seed, for repeatable output
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Debug, Args)]
pub struct SignInArgs {
    /// Specialist identifier
    #[arg(long)]
    pub identifier: String,

    /// Security code
    #[arg(long, env = "VAULT_SPECIALIST_CODE", hide_env_values = true)]
    pub code: String,
}
