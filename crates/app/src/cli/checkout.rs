use std::io;

use vault::products::ProductId;
use vault_app::{config::commands::CheckoutArgs, render, store::Store};

pub(crate) fn run(mut store: Store, args: CheckoutArgs) -> Result<(), String> {
    for id in args.add {
        store
            .add_to_cart(&ProductId::from(id))
            .map_err(|error| format!("failed to add to cart: {error}"))?;
    }

    render::write_cart(&mut io::stdout().lock(), store.cart())
        .map_err(|error| format!("failed to write output: {error}"))?;

    let checkout = store
        .checkout(args.buyer.as_deref())
        .map_err(|error| format!("failed to finalize order: {error}"))?;

    println!("order_uuid: {}", checkout.order.uuid());
    println!();
    println!("{}", checkout.message);
    println!();
    println!("{}", checkout.link);

    Ok(())
}
