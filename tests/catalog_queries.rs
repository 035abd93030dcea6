//! Catalog query behaviour against the built-in seed.
//!
//! The seed holds six watches in declared order:
//!
//! 1. Rolex Daytona "Panda" (₦85,000)
//! 2. Patek Philippe Nautilus (₦125,000, investment grade)
//! 3. Audemars Piguet Royal Oak (₦95,000, investment grade)
//! 4. Omega Speedmaster Professional (₦55,000)
//! 5. Rolex Submariner Date (₦65,000)
//! 6. Cartier Santos de Cartier (₦48,000)

use rusty_money::{Money, iso};
use testresult::TestResult;

use vault::prelude::*;

fn ids<'c, 'a: 'c>(products: impl IntoIterator<Item = &'c Product<'a>>) -> Vec<&'c str> {
    products.into_iter().map(|product| product.id.as_str()).collect()
}

#[test]
fn brand_filter_keeps_declared_order() -> TestResult {
    let catalog = builtin_catalog()?;
    let query = CatalogQuery::new(iso::NGN).with_brand("Rolex");

    let result = catalog.query(&query);

    assert_eq!(ids(result.iter()), ["1", "5"]);
    assert_eq!(result.count(), 2);

    Ok(())
}

#[test]
fn search_is_case_insensitive_across_fields() -> TestResult {
    let catalog = builtin_catalog()?;

    for needle in ["daytona", "DAYTONA", "DayTona"] {
        let result = catalog.query(&CatalogQuery::new(iso::NGN).with_search(needle));
        assert_eq!(ids(result.iter()), ["1"], "search {needle:?}");
    }

    let by_reference = catalog.query(&CatalogQuery::new(iso::NGN).with_search("126610"));
    assert_eq!(ids(by_reference.iter()), ["5"]);

    let by_brand = catalog.query(&CatalogQuery::new(iso::NGN).with_search("cartier"));
    assert_eq!(ids(by_brand.iter()), ["6"]);

    Ok(())
}

#[test]
fn filters_are_the_intersection_of_each_predicate() -> TestResult {
    let catalog = builtin_catalog()?;
    let ceiling = Money::from_minor(9_000_000, iso::NGN);

    let single = |query: CatalogQuery<'static>| -> Vec<String> {
        catalog
            .query(&query)
            .iter()
            .map(|product| product.id.to_string())
            .collect()
    };

    let by_brand = single(CatalogQuery::new(iso::NGN).with_brand("Rolex"));
    let by_condition = single(CatalogQuery::new(iso::NGN).with_condition(Condition::New));
    let by_price = single(CatalogQuery::new(iso::NGN).with_max_price(ceiling));
    let by_search = single(CatalogQuery::new(iso::NGN).with_search("a"));

    let combined = single(
        CatalogQuery::new(iso::NGN)
            .with_brand("Rolex")
            .with_condition(Condition::New)
            .with_max_price(ceiling)
            .with_search("a"),
    );

    let expected: Vec<String> = by_brand
        .iter()
        .filter(|id| by_condition.contains(id) && by_price.contains(id) && by_search.contains(id))
        .cloned()
        .collect();

    assert_eq!(combined, expected);
    assert_eq!(combined, ["1", "5"]);

    Ok(())
}

#[test]
fn price_ceiling_is_inclusive() -> TestResult {
    let catalog = builtin_catalog()?;
    let query = CatalogQuery::new(iso::NGN).with_max_price(Money::from_minor(5_500_000, iso::NGN));

    assert_eq!(ids(catalog.query(&query).iter()), ["4", "6"]);

    Ok(())
}

#[test]
fn default_ceiling_hides_nothing_in_the_seed() -> TestResult {
    let catalog = builtin_catalog()?;

    assert_eq!(catalog.query(&CatalogQuery::new(iso::NGN)).count(), 6);

    Ok(())
}

#[test]
fn sort_keys_order_results() -> TestResult {
    let catalog = builtin_catalog()?;

    let ascending = catalog.query(&CatalogQuery::new(iso::NGN).with_sort(SortKey::PriceAscending));
    assert_eq!(ids(ascending.iter()), ["6", "4", "5", "1", "3", "2"]);

    let descending =
        catalog.query(&CatalogQuery::new(iso::NGN).with_sort(SortKey::PriceDescending));
    assert_eq!(ids(descending.iter()), ["2", "3", "1", "5", "4", "6"]);

    // Every seed watch is from 2024, so a stable sort keeps declared order.
    let newest = catalog.query(&CatalogQuery::new(iso::NGN).with_sort(SortKey::Newest));
    assert_eq!(ids(newest.iter()), ["1", "2", "3", "4", "5", "6"]);

    Ok(())
}

#[test]
fn pages_reassemble_the_full_result() -> TestResult {
    let catalog = builtin_catalog()?;
    let result = catalog.query(&CatalogQuery::new(iso::NGN).with_sort(SortKey::PriceAscending));

    for page_size in 1..=7 {
        let pages = result.page_count(page_size);
        let rebuilt: Vec<&str> = (1..=pages)
            .flat_map(|number| result.page(number, page_size).items().to_vec())
            .map(|product| product.id.as_str())
            .collect();

        assert_eq!(rebuilt, ids(result.iter()), "page size {page_size}");
        assert!(result.page(pages + 1, page_size).items().is_empty());
    }

    Ok(())
}

#[test]
fn unmatched_query_is_an_empty_result() -> TestResult {
    let catalog = builtin_catalog()?;
    let result = catalog.query(&CatalogQuery::new(iso::NGN).with_search("tourbillon"));

    assert!(result.is_empty());
    assert_eq!(result.page_count(3), 0);

    Ok(())
}

#[test]
fn collection_grid_filters() -> TestResult {
    let catalog = builtin_catalog()?;

    let investment = catalog.collection(&CollectionFilter::Investment);
    assert_eq!(ids(investment.iter()), ["2", "3"]);

    let all = catalog.collection(&CollectionFilter::All);
    assert_eq!(all.page_count(COLLECTION_PAGE_SIZE), 2);
    assert_eq!(ids(all.page(2, COLLECTION_PAGE_SIZE).items().iter().copied()), ["4", "5", "6"]);

    let options = CollectionFilter::options(catalog.brands());
    assert_eq!(options.len(), 7, "All, five brands, Investment");

    Ok(())
}
