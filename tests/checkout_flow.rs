//! Cart bookkeeping through to a finalized order.

use jiff::civil::date;
use rusty_money::{Money, iso};
use testresult::TestResult;

use vault::prelude::*;

fn priced(id: &str, major: i64) -> Product<'static> {
    Product::new(
        id,
        "Rolex",
        format!("Model {id}"),
        format!("REF-{id}"),
        Money::from_minor(major * 100, iso::NGN),
    )
}

#[test]
fn merged_adds_total_correctly() -> TestResult {
    let p1 = priced("p1", 100);
    let p2 = priced("p2", 50);
    let mut cart = Cart::new(iso::NGN);

    cart.add(&p1);
    cart.add(&p1);
    cart.add(&p2);

    assert_eq!(cart.len(), 2);
    assert_eq!(cart.total()?, Money::from_minor(25_000, iso::NGN));
    assert_eq!(format_amount(&cart.total()?), "₦250");

    Ok(())
}

#[test]
fn large_negative_adjustment_clamps_to_one() {
    let p1 = priced("p1", 100);
    let mut cart = Cart::new(iso::NGN);

    cart.add(&p1);
    cart.add(&p1);

    assert_eq!(cart.adjust_quantity(&p1.id, -5), Some(1));
    assert_eq!(cart.get(&p1.id).map(LineItem::quantity), Some(1));
}

#[test]
fn add_counts_match_quantities() {
    let products = [priced("a", 1), priced("b", 2), priced("c", 3)];
    let sequence = [0_usize, 1, 0, 2, 0, 1];
    let mut cart = Cart::new(iso::NGN);

    for idx in sequence {
        if let Some(product) = products.get(idx) {
            cart.add(product);
        }
    }

    assert_eq!(cart.len(), 3);

    for (idx, product) in products.iter().enumerate() {
        let expected = sequence.iter().filter(|&&added| added == idx).count();
        let quantity = cart.get(&product.id).map(LineItem::quantity);

        assert_eq!(quantity.map(|q| q as usize), Some(expected), "product {}", product.id);
    }
}

#[test]
fn finalize_moves_cart_into_portfolio() -> TestResult {
    let catalog = builtin_catalog()?;
    let mut cart = Cart::new(catalog.currency());
    let mut portfolio = Portfolio::new(catalog.currency());
    let today = date(2026, 10, 17);

    let earlier = catalog.get(&ProductId::from("4")).ok_or("product 4 missing")?;
    cart.add(earlier);
    finalize(&mut cart, &mut portfolio, Some("Sam"), date(2026, 9, 1))?;

    for id in ["2", "6"] {
        let product = catalog.get(&ProductId::from(id)).ok_or("seed product missing")?;
        cart.add(product);
    }

    let order = finalize(&mut cart, &mut portfolio, Some("Jane"), today)?;

    assert!(cart.is_empty());
    assert_eq!(portfolio.len(), 3);
    assert_eq!(order.buyer(), "Jane");
    assert_eq!(format_amount(order.total()), "₦173,000");

    let recorded: Vec<(&str, OrderStatus, jiff::civil::Date)> = portfolio
        .items()
        .iter()
        .map(|item| (item.product().id.as_str(), item.status(), item.purchased_on()))
        .collect();

    assert_eq!(
        recorded,
        [
            ("2", OrderStatus::Pending, today),
            ("6", OrderStatus::Pending, today),
            ("4", OrderStatus::Pending, date(2026, 9, 1)),
        ]
    );

    Ok(())
}

#[test]
fn order_link_carries_the_itemized_message() -> TestResult {
    let catalog = builtin_catalog()?;
    let mut cart = Cart::new(catalog.currency());
    let mut portfolio = Portfolio::new(catalog.currency());

    let daytona = catalog.get(&ProductId::from("1")).ok_or("product 1 missing")?;
    cart.add(daytona);

    let order = finalize(&mut cart, &mut portfolio, None, date(2026, 10, 17))?;
    let message = render_message(&order)?;
    let link = Handoff::default().deep_link(&message);

    assert!(message.contains("👤 *Name:* Guest"));
    assert!(message.contains("💎 *TOTAL:* ₦85,000"));
    assert_eq!(
        link,
        format!("https://wa.me/2349072900500?text={}", urlencoding::encode(&message))
    );

    Ok(())
}
