//! Cart
//!
//! An ordered ledger of line items keyed by product id. Adding a product that is
//! already present bumps its quantity; quantities never drop below one.

use std::mem;

use rusty_money::{Money, iso::Currency};

use crate::{
    pricing::{PricingError, line_total, total_price},
    products::{Product, ProductId},
};

/// One product and how many of it are in the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem<'a> {
    product: Product<'a>,
    quantity: u32,
}

impl<'a> LineItem<'a> {
    fn new(product: Product<'a>) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// Product on this line.
    pub fn product(&self) -> &Product<'a> {
        &self.product
    }

    /// Quantity, always at least one.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unit price.
    pub fn price(&self) -> &Money<'a, Currency> {
        &self.product.price
    }

    /// Unit price times quantity.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::Overflow`] if the subtotal does not fit in minor units.
    pub fn subtotal(&self) -> Result<Money<'a, Currency>, PricingError> {
        line_total(&self.product.price, self.quantity)
    }
}

/// What [`Cart::add`] did.
///
/// Either way the cart should be shown to the shopper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new line was appended.
    Added,

    /// An existing line's quantity went up.
    Incremented {
        /// Quantity after the increment
        quantity: u32,
    },
}

/// Cart
#[derive(Debug, Clone)]
pub struct Cart<'a> {
    items: Vec<LineItem<'a>>,
    currency: &'a Currency,
}

impl<'a> Cart<'a> {
    /// Create an empty cart priced in `currency`.
    pub fn new(currency: &'a Currency) -> Self {
        Self {
            items: Vec::new(),
            currency,
        }
    }

    /// Add one unit of `product`.
    ///
    /// Increments the existing line for the same id, otherwise appends a new line
    /// with quantity one at the end.
    pub fn add(&mut self, product: &Product<'a>) -> AddOutcome {
        if let Some(line) = self.line_mut(&product.id) {
            line.quantity = line.quantity.saturating_add(1);

            return AddOutcome::Incremented {
                quantity: line.quantity,
            };
        }

        self.items.push(LineItem::new(product.clone()));

        AddOutcome::Added
    }

    /// Remove the line for `id`. Absent ids are ignored.
    pub fn remove(&mut self, id: &ProductId) -> Option<LineItem<'a>> {
        let position = self.items.iter().position(|line| line.product.id == *id)?;

        Some(self.items.remove(position))
    }

    /// Change the quantity for `id` by `delta`, flooring at one.
    ///
    /// Returns the new quantity, or `None` if `id` is not in the cart.
    pub fn adjust_quantity(&mut self, id: &ProductId, delta: i64) -> Option<u32> {
        let line = self.line_mut(id)?;

        let adjusted = i64::from(line.quantity).saturating_add(delta).max(1);
        line.quantity = u32::try_from(adjusted).unwrap_or(u32::MAX);

        Some(line.quantity)
    }

    /// Sum of every line's price times quantity; zero for an empty cart.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if a line total overflows.
    pub fn total(&self) -> Result<Money<'a, Currency>, PricingError> {
        total_price(
            self.items.iter().map(|line| (&line.product.price, line.quantity)),
            self.currency,
        )
    }

    /// Line for `id`, if present.
    pub fn get(&self, id: &ProductId) -> Option<&LineItem<'a>> {
        self.items.iter().find(|line| line.product.id == *id)
    }

    fn line_mut(&mut self, id: &ProductId) -> Option<&mut LineItem<'a>> {
        self.items.iter_mut().find(|line| line.product.id == *id)
    }

    /// Lines in insertion order.
    pub fn line_items(&self) -> &[LineItem<'a>] {
        &self.items
    }

    /// Take every line out of the cart, leaving it empty.
    pub fn clear(&mut self) -> Vec<LineItem<'a>> {
        mem::take(&mut self.items)
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total units across every line.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Cart currency.
    pub fn currency(&self) -> &'a Currency {
        self.currency
    }
}
