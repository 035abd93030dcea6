//! Checkout Hand-off
//!
//! Builds the prefilled order message and the messaging deep link that carries
//! it. Opening the link happens outside this crate and is never confirmed.

use std::fmt::Write;

use jiff::civil::Date;
use thiserror::Error;

use crate::{
    orders::FinalizedOrder,
    pricing::{PricingError, format_amount},
};

/// Default recipient for order messages.
pub const DEFAULT_RECIPIENT: &str = "2349072900500";

/// Store name shown in the message header and sign-off.
pub const STORE_NAME: &str = "Luxurious.ng";

const RULE: &str = "━━━━━━━━━━━━━━━━";

/// Errors building an order message.
#[derive(Debug, Error, PartialEq)]
pub enum CheckoutError {
    /// A line subtotal could not be computed.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// Writing to the message buffer failed.
    #[error("failed to format order message")]
    Format(#[from] std::fmt::Error),
}

/// Format a date the way the message shows it (`17/10/2026`).
pub fn format_date(date: Date) -> String {
    date.strftime("%d/%m/%Y").to_string()
}

/// Render the human-readable order message for `order`.
///
/// # Errors
///
/// Returns a [`CheckoutError`] if a line subtotal overflows.
pub fn render_message(order: &FinalizedOrder<'_>) -> Result<String, CheckoutError> {
    let mut message = String::new();

    writeln!(message, "🛍️ *NEW ORDER - {STORE_NAME}* 🛍️")?;
    writeln!(message)?;
    writeln!(message, "👤 *Name:* {}", order.buyer())?;
    writeln!(message, "📅 *Date:* {}", format_date(order.date()))?;
    writeln!(message)?;
    writeln!(message, "{RULE}")?;
    writeln!(message, "📦 *ORDER DETAILS*")?;
    writeln!(message, "{RULE}")?;
    writeln!(message)?;

    for (idx, item) in order.items().iter().enumerate() {
        let product = item.product();

        writeln!(message, "{}. ⌚ *{} {}*", idx + 1, product.brand, product.model)?;
        writeln!(message, "   📋 Ref: {}", product.reference)?;
        writeln!(message, "   💰 Price: {}", format_amount(item.price()))?;
        writeln!(message, "   🔢 Qty: {}", item.quantity())?;
        writeln!(message, "   💵 Subtotal: {}", format_amount(&item.subtotal()?))?;
        writeln!(message)?;
    }

    writeln!(message, "{RULE}")?;
    writeln!(message, "🚚 *Shipping:* FREE ✅")?;
    writeln!(message, "💎 *TOTAL:* {}", format_amount(order.total()))?;
    writeln!(message, "{RULE}")?;
    writeln!(message)?;
    writeln!(message, "✨ Thank you for choosing {STORE_NAME}!")?;
    write!(message, "📞 We will contact you shortly to confirm your order.")?;

    Ok(message)
}

/// Outbound messaging channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Handoff {
    recipient: String,
}

impl Handoff {
    /// Create a hand-off to `recipient` (international number, digits only).
    pub fn new(recipient: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
        }
    }

    /// Recipient number.
    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    /// Deep link carrying `message` as its URL-escaped `text` parameter.
    pub fn deep_link(&self, message: &str) -> String {
        format!(
            "https://wa.me/{}?text={}",
            self.recipient,
            urlencoding::encode(message)
        )
    }

    /// Render `order` and wrap it in a deep link.
    ///
    /// # Errors
    ///
    /// Returns a [`CheckoutError`] if the message cannot be rendered.
    pub fn link_for(&self, order: &FinalizedOrder<'_>) -> Result<String, CheckoutError> {
        Ok(self.deep_link(&render_message(order)?))
    }
}

impl Default for Handoff {
    fn default() -> Self {
        Self::new(DEFAULT_RECIPIENT)
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use rusty_money::{Money, iso};
    use testresult::TestResult;

    use crate::{
        cart::Cart,
        orders::{Portfolio, finalize},
        products::Product,
    };

    use super::*;

    fn order() -> Result<FinalizedOrder<'static>, PricingError> {
        let daytona = Product::new(
            "1",
            "Rolex",
            "Daytona",
            "116500LN",
            Money::from_minor(8_500_000, iso::NGN),
        );
        let santos = Product::new(
            "6",
            "Cartier",
            "Santos de Cartier",
            "WSSA0018",
            Money::from_minor(4_800_000, iso::NGN),
        );

        let mut cart = Cart::new(iso::NGN);
        cart.add(&daytona);
        cart.add(&daytona);
        cart.add(&santos);

        finalize(&mut cart, &mut Portfolio::new(iso::NGN), Some("Jane"), date(2026, 10, 17))
    }

    #[test]
    fn message_itemizes_order() -> TestResult {
        let message = render_message(&order()?)?;

        assert!(message.contains("👤 *Name:* Jane"));
        assert!(message.contains("📅 *Date:* 17/10/2026"));
        assert!(message.contains("1. ⌚ *Rolex Daytona*"));
        assert!(message.contains("   📋 Ref: 116500LN"));
        assert!(message.contains("   🔢 Qty: 2"));
        assert!(message.contains("   💵 Subtotal: ₦170,000"));
        assert!(message.contains("2. ⌚ *Cartier Santos de Cartier*"));
        assert!(message.contains("🚚 *Shipping:* FREE ✅"));
        assert!(message.contains("💎 *TOTAL:* ₦218,000"));

        Ok(())
    }

    #[test]
    fn deep_link_escapes_message() -> TestResult {
        let handoff = Handoff::default();
        let link = handoff.link_for(&order()?)?;

        assert!(link.starts_with("https://wa.me/2349072900500?text="));
        assert!(!link.contains(' '));
        assert!(!link.contains('\n'));
        assert!(link.contains("Jane"));

        Ok(())
    }

    #[test]
    fn deep_link_uses_recipient() {
        let handoff = Handoff::new("441234567890");

        assert_eq!(
            handoff.deep_link("hello world"),
            "https://wa.me/441234567890?text=hello%20world"
        );
    }
}
