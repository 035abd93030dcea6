//! Vault
//!
//! Catalog query engine and cart/order ledger for a luxury-watch storefront.
//! Everything here is synchronous and in memory: the catalog is a static seed,
//! the cart and portfolio live for one session, and checkout ends at a
//! prefilled messaging link.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod fixtures;
pub mod orders;
pub mod prelude;
pub mod pricing;
pub mod products;
pub mod wishlist;
