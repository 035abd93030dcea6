//! Related Products
//!
//! Recommendations shown under a product: other pieces from the same brand in
//! catalog order, then the rest of the catalog in a shuffled order.

use rand::{Rng, seq::SliceRandom};

use crate::{
    catalog::Catalog,
    products::{Product, ProductId},
};

/// Maximum number of related products returned.
pub const RELATED_LIMIT: usize = 3;

/// Products related to `id`, never including `id` itself.
///
/// The shuffle draws from `rng`, so a seeded generator gives a reproducible order.
/// Unknown ids yield no recommendations.
pub fn related<'c, 'a, R>(
    catalog: &'c Catalog<'a>,
    id: &ProductId,
    rng: &mut R,
) -> Vec<&'c Product<'a>>
where
    R: Rng + ?Sized,
{
    let Some(source) = catalog.get(id) else {
        return Vec::new();
    };

    let (mut same_brand, mut others): (Vec<_>, Vec<_>) = catalog
        .iter()
        .filter(|product| product.id != source.id)
        .partition(|product| product.brand == source.brand);

    others.shuffle(rng);
    same_brand.append(&mut others);
    same_brand.truncate(RELATED_LIMIT);

    same_brand
}
