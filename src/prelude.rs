//! Vault prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{AddOutcome, Cart, LineItem},
    catalog::{
        BrandFilter, COLLECTION_PAGE_SIZE, Catalog, CatalogError, CatalogQuery, CollectionFilter,
        ConditionFilter, Page, QueryResult, SortKey, related,
    },
    checkout::{CheckoutError, Handoff, render_message},
    fixtures::{FixtureError, builtin_catalog, load_catalog},
    orders::{FinalizedOrder, OrderStatus, Portfolio, PortfolioItem, finalize},
    pricing::{PricingError, format_amount, whole_units},
    products::{Availability, Condition, Product, ProductId, ProductKey},
    wishlist::Wishlist,
};
