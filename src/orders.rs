//! Orders
//!
//! Finalizing a cart snapshots its lines into the portfolio (purchase history)
//! and empties the cart. There is no way back: a portfolio item is never
//! modified once recorded.

use std::fmt;

use jiff::civil::Date;
use rusty_money::{Money, iso::Currency};
use uuid::Uuid;

use crate::{
    cart::{Cart, LineItem},
    pricing::{PricingError, line_total, total_price},
    products::Product,
};

/// Name used when the buyer leaves theirs blank.
pub const GUEST_NAME: &str = "Guest";

/// Fulfilment status of a purchased piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderStatus {
    /// Awaiting confirmation from the seller
    #[default]
    Pending,

    /// Delivered to the client
    Acquired,

    /// Shipped, not yet delivered
    InTransit,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pending => "Pending",
            Self::Acquired => "Acquired",
            Self::InTransit => "In Transit",
        })
    }
}

/// Frozen copy of a cart line at the moment of purchase.
#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioItem<'a> {
    product: Product<'a>,
    quantity: u32,
    status: OrderStatus,
    purchased_on: Date,
}

impl<'a> PortfolioItem<'a> {
    fn snapshot(line: &LineItem<'a>, purchased_on: Date) -> Self {
        Self {
            product: line.product().clone(),
            quantity: line.quantity(),
            status: OrderStatus::Pending,
            purchased_on,
        }
    }

    /// Product as it was when purchased.
    pub fn product(&self) -> &Product<'a> {
        &self.product
    }

    /// Quantity purchased.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unit price paid.
    pub fn price(&self) -> &Money<'a, Currency> {
        &self.product.price
    }

    /// Fulfilment status.
    pub fn status(&self) -> OrderStatus {
        self.status
    }

    /// Date the order was finalized.
    pub fn purchased_on(&self) -> Date {
        self.purchased_on
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

/// Purchase history, most recent batch first.
#[derive(Debug, Clone)]
pub struct Portfolio<'a> {
    items: Vec<PortfolioItem<'a>>,
    currency: &'a Currency,
}

impl<'a> Portfolio<'a> {
    /// Create an empty portfolio priced in `currency`.
    pub fn new(currency: &'a Currency) -> Self {
        Self {
            items: Vec::new(),
            currency,
        }
    }

    fn prepend(&mut self, batch: &[PortfolioItem<'a>]) {
        self.items.splice(0..0, batch.iter().cloned());
    }

    /// Items, most recent batch first.
    pub fn items(&self) -> &[PortfolioItem<'a>] {
        &self.items
    }

    /// Number of recorded items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing has been purchased yet.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total paid across every recorded item.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if the sum overflows.
    pub fn total_value(&self) -> Result<Money<'a, Currency>, PricingError> {
        total_price(
            self.items.iter().map(|item| (&item.product.price, item.quantity)),
            self.currency,
        )
    }
}

/// A finalized order, as handed to the outbound channel.
#[derive(Debug, Clone, PartialEq)]
pub struct FinalizedOrder<'a> {
    uuid: Uuid,
    buyer: String,
    date: Date,
    items: Vec<PortfolioItem<'a>>,
    total: Money<'a, Currency>,
}

impl<'a> FinalizedOrder<'a> {
    /// Order identifier.
    pub fn uuid(&self) -> Uuid {
        self.uuid
    }

    /// Buyer display name; [`GUEST_NAME`] when none was given.
    pub fn buyer(&self) -> &str {
        &self.buyer
    }

    /// Date of finalization.
    pub fn date(&self) -> Date {
        self.date
    }

    /// Snapshotted lines, in cart order.
    pub fn items(&self) -> &[PortfolioItem<'a>] {
        &self.items
    }

    /// Grand total.
    pub fn total(&self) -> &Money<'a, Currency> {
        &self.total
    }

    /// Whether the cart was empty when finalized.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Normalise a buyer name, falling back to [`GUEST_NAME`] when blank.
pub fn buyer_name(buyer: Option<&str>) -> String {
    buyer
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(GUEST_NAME)
        .to_string()
}

/// Snapshot every cart line into `portfolio` and empty the cart.
///
/// The batch is prepended to the portfolio in cart order, every entry `Pending`
/// and dated `date`. An empty cart produces an empty order and changes nothing.
///
/// # Errors
///
/// Returns a [`PricingError`] if the order total overflows. The cart and
/// portfolio are left untouched in that case.
pub fn finalize<'a>(
    cart: &mut Cart<'a>,
    portfolio: &mut Portfolio<'a>,
    buyer: Option<&str>,
    date: Date,
) -> Result<FinalizedOrder<'a>, PricingError> {
    let total = cart.total()?;

    let items: Vec<PortfolioItem<'a>> = cart
        .line_items()
        .iter()
        .map(|line| PortfolioItem::snapshot(line, date))
        .collect();

    portfolio.prepend(&items);
    cart.clear();

    Ok(FinalizedOrder {
        uuid: Uuid::now_v7(),
        buyer: buyer_name(buyer),
        date,
        items,
        total,
    })
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use rusty_money::iso;
    use testresult::TestResult;

    use super::*;

    fn product(id: &str, major: i64) -> Product<'static> {
        Product::new(id, "Rolex", id, id, Money::from_minor(major * 100, iso::NGN))
    }

    #[test]
    fn finalize_clears_cart_and_prepends_batch() -> TestResult {
        let (a, b, c) = (product("a", 10), product("b", 20), product("c", 30));
        let mut cart = Cart::new(iso::NGN);
        let mut portfolio = Portfolio::new(iso::NGN);

        cart.add(&a);
        finalize(&mut cart, &mut portfolio, Some("Ada"), date(2026, 1, 2))?;

        cart.add(&b);
        cart.add(&c);
        cart.add(&b);
        let order = finalize(&mut cart, &mut portfolio, Some("Jane"), date(2026, 3, 4))?;

        assert!(cart.is_empty());
        assert_eq!(order.items().len(), 2);
        assert_eq!(order.total(), &Money::from_minor(7_000, iso::NGN));

        let ids: Vec<&str> = portfolio
            .items()
            .iter()
            .map(|item| item.product().id.as_str())
            .collect();
        assert_eq!(ids, ["b", "c", "a"], "latest batch first, cart order kept");

        let first = portfolio.items().first().ok_or("portfolio should not be empty")?;
        assert_eq!(first.quantity(), 2);
        assert_eq!(first.status(), OrderStatus::Pending);
        assert_eq!(first.purchased_on(), date(2026, 3, 4));

        Ok(())
    }

    #[test]
    fn finalize_on_empty_cart_is_noop() -> TestResult {
        let mut cart = Cart::new(iso::NGN);
        let mut portfolio = Portfolio::new(iso::NGN);

        let order = finalize(&mut cart, &mut portfolio, None, date(2026, 1, 1))?;

        assert!(order.is_empty());
        assert_eq!(order.buyer(), GUEST_NAME);
        assert!(portfolio.is_empty());

        Ok(())
    }

    #[test]
    fn snapshots_do_not_follow_the_cart() -> TestResult {
        let a = product("a", 10);
        let mut cart = Cart::new(iso::NGN);
        let mut portfolio = Portfolio::new(iso::NGN);

        cart.add(&a);
        finalize(&mut cart, &mut portfolio, None, date(2026, 1, 1))?;

        cart.add(&a);
        cart.adjust_quantity(&a.id, 5);

        assert_eq!(portfolio.items().first().map(PortfolioItem::quantity), Some(1));
        assert_eq!(portfolio.total_value()?, Money::from_minor(1_000, iso::NGN));

        Ok(())
    }

    #[test]
    fn blank_buyer_names_become_guest() {
        assert_eq!(buyer_name(Some("  ")), GUEST_NAME);
        assert_eq!(buyer_name(Some(" Jane Doe ")), "Jane Doe");
        assert_eq!(buyer_name(None), GUEST_NAME);
    }
}
