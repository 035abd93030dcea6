//! Storefront session layer: the session store, the specialist sign-in gate,
//! configuration, logging and terminal output.

pub mod auth;
pub mod config;
pub mod context;
pub mod observability;
pub mod render;
pub mod store;

#[cfg(test)]
mod test;
