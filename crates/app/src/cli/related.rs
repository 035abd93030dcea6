use std::io;

use rand::{SeedableRng, rngs::StdRng};
use vault::products::ProductId;
use vault_app::{config::commands::RelatedArgs, render, store::Store};

pub(crate) fn run(store: &Store, args: RelatedArgs) -> Result<(), String> {
    let id = ProductId::from(args.id);

    let Some(product) = store.catalog().get(&id) else {
        return Err(format!("unknown product: {id}"));
    };

    let mut rng = args
        .seed
        .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);

    let related = store.related(&id, &mut rng);

    println!("pieces related to {}:", product.display_name());

    render::write_products(&mut io::stdout().lock(), &related)
        .map_err(|error| format!("failed to write output: {error}"))
}
