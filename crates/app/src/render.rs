//! Terminal tables for catalog listings and carts.

use std::io;

use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};
use thiserror::Error;
use vault::{
    cart::Cart,
    pricing::{PricingError, format_amount},
    products::Product,
};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Pricing(#[from] PricingError),
}

/// Write one row per product.
///
/// # Errors
///
/// Returns an error if `out` cannot be written to.
pub fn write_products(out: &mut impl io::Write, products: &[&Product<'_>]) -> io::Result<()> {
    let mut builder = Builder::default();

    builder.push_record([
        "Id",
        "Brand",
        "Model",
        "Reference",
        "Condition",
        "Year",
        "Price",
        "Status",
    ]);

    for product in products {
        builder.push_record([
            product.id.to_string(),
            product.brand.clone(),
            product.model.clone(),
            product.reference.clone(),
            product.condition.to_string(),
            product.year.map_or_else(String::new, |year| year.to_string()),
            format_amount(&product.price),
            product.status.to_string(),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(6..7), Alignment::right());

    writeln!(out, "{table}")
}

/// Write the cart lines followed by the total.
///
/// # Errors
///
/// Returns an error if a subtotal overflows or `out` cannot be written to.
pub fn write_cart(out: &mut impl io::Write, cart: &Cart<'_>) -> Result<(), RenderError> {
    let mut builder = Builder::default();

    builder.push_record(["Item", "Reference", "Price", "Qty", "Subtotal"]);

    for line in cart.line_items() {
        let product = line.product();

        builder.push_record([
            product.display_name(),
            product.reference.clone(),
            format_amount(line.price()),
            line.quantity().to_string(),
            format_amount(&line.subtotal()?),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(2..5), Alignment::right());

    writeln!(out, "{table}")?;
    writeln!(
        out,
        "{} item(s), total {}",
        cart.item_count(),
        format_amount(&cart.total()?)
    )?;

    Ok(())
}
