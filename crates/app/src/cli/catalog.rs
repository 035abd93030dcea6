use std::io;

use vault::{
    catalog::{BrandFilter, ConditionFilter},
    pricing::whole_units,
};
use vault_app::{config::commands::CatalogArgs, render, store::Store};

pub(crate) fn run(store: Store, args: CatalogArgs) -> Result<(), String> {
    let mut store = store.with_page_size(args.page_size);

    if let Some(brand) = args.brand {
        store.set_brand(BrandFilter::Brand(brand));
    }

    if let Some(condition) = args.condition {
        store.set_condition(ConditionFilter::Only(condition));
    }

    if let Some(search) = args.search {
        store.set_search(search);
    }

    if let Some(max_price) = args.max_price {
        store.set_max_price(whole_units(max_price, store.currency()));
    }

    store.set_sort(args.sort.into());

    if args.page != 1 && !store.go_to_page(args.page) {
        return Err(format!("page {} is out of range", args.page));
    }

    let total = store.results().count();
    let (products, page_count) = store.page();

    if products.is_empty() {
        println!("no matching pieces");
        return Ok(());
    }

    render::write_products(&mut io::stdout().lock(), &products)
        .map_err(|error| format!("failed to write output: {error}"))?;

    println!(
        "page {} of {page_count}, {total} matching piece(s)",
        store.current_page()
    );

    Ok(())
}
