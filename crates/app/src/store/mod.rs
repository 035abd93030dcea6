//! Session Store
//!
//! One explicit state object per shopper session. Views read derived state from
//! it and call its methods; every mutation is announced to subscribers.

use std::sync::Arc;

use jiff::{Zoned, civil::Date};
use rand::Rng;
use rusty_money::{Money, iso::Currency};
use thiserror::Error;
use tracing::{debug, info, warn};
use vault::{
    cart::{AddOutcome, Cart},
    catalog::{
        BrandFilter, COLLECTION_PAGE_SIZE, Catalog, CatalogQuery, CollectionFilter, ConditionFilter,
        QueryResult, SortKey, related,
    },
    checkout::{CheckoutError, Handoff, render_message},
    orders::{FinalizedOrder, Portfolio, finalize},
    pricing::PricingError,
    products::{Product, ProductId},
    wishlist::Wishlist,
};

use crate::auth::{AuthError, AuthProvider, Credentials, Principal};

pub mod events;

pub use events::{StoreEvent, SubscriptionKey};

use events::Subscribers;

/// Default page size of the full catalog view.
pub const CATALOG_PAGE_SIZE: usize = 6;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Unknown product: {0}")]
    UnknownProduct(ProductId),

    #[error(transparent)]
    Pricing(#[from] PricingError),

    #[error(transparent)]
    Checkout(#[from] CheckoutError),

    #[error(transparent)]
    Auth(#[from] AuthError),
}

/// Result of a checkout: the archived order and its outbound hand-off.
#[derive(Debug, Clone)]
pub struct Checkout {
    pub order: FinalizedOrder<'static>,
    pub message: String,
    pub link: String,
}

/// A paged view over a filtered product list.
#[derive(Debug, Clone, PartialEq)]
struct View<F> {
    filter: F,
    page: usize,
    page_size: usize,
}

impl<F> View<F> {
    fn new(filter: F, page_size: usize) -> Self {
        Self {
            filter,
            page: 1,
            page_size,
        }
    }
}

pub struct Store {
    catalog: Catalog<'static>,
    browse: View<CatalogQuery<'static>>,
    collection: View<CollectionFilter>,
    cart: Cart<'static>,
    portfolio: Portfolio<'static>,
    wishlist: Wishlist,
    principal: Option<Principal>,
    auth: Arc<dyn AuthProvider>,
    handoff: Handoff,
    subscribers: Subscribers,
}

impl Store {
    #[must_use]
    pub fn new(catalog: Catalog<'static>, auth: Arc<dyn AuthProvider>, handoff: Handoff) -> Self {
        let currency = catalog.currency();

        Self {
            browse: View::new(CatalogQuery::new(currency), CATALOG_PAGE_SIZE),
            collection: View::new(CollectionFilter::All, COLLECTION_PAGE_SIZE),
            cart: Cart::new(currency),
            portfolio: Portfolio::new(currency),
            wishlist: Wishlist::new(),
            principal: None,
            catalog,
            auth,
            handoff,
            subscribers: Subscribers::default(),
        }
    }

    /// Use `page_size` for the full catalog view, floored at one.
    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.browse.page_size = page_size.max(1);
        self
    }

    /// Register a listener called after every mutation.
    pub fn subscribe(
        &mut self,
        listener: impl Fn(&StoreEvent) + Send + Sync + 'static,
    ) -> SubscriptionKey {
        self.subscribers.insert(Box::new(listener))
    }

    /// Remove a listener. Returns whether it was registered.
    pub fn unsubscribe(&mut self, key: SubscriptionKey) -> bool {
        self.subscribers.remove(key)
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    fn emit(&self, event: StoreEvent) {
        self.subscribers.notify(&event);
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog<'static> {
        &self.catalog
    }

    #[must_use]
    pub fn currency(&self) -> &'static Currency {
        self.catalog.currency()
    }

    fn product(&self, id: &ProductId) -> Result<&Product<'static>, StoreError> {
        self.catalog
            .get(id)
            .ok_or_else(|| StoreError::UnknownProduct(id.clone()))
    }

    // Catalog browsing

    #[must_use]
    pub fn query(&self) -> &CatalogQuery<'static> {
        &self.browse.filter
    }

    #[must_use]
    pub fn results(&self) -> QueryResult<'_, 'static> {
        self.catalog.query(&self.browse.filter)
    }

    #[must_use]
    pub fn current_page(&self) -> usize {
        self.browse.page
    }

    /// Products on the current catalog page, with the page count.
    #[must_use]
    pub fn page(&self) -> (Vec<&Product<'static>>, usize) {
        let results = self.results();
        let page = results.page(self.browse.page, self.browse.page_size);

        (page.items().to_vec(), page.page_count())
    }

    fn update_query(&mut self, update: impl FnOnce(&mut CatalogQuery<'static>)) {
        update(&mut self.browse.filter);
        self.browse.page = 1;

        debug!(query = ?self.browse.filter, "catalog query changed");

        self.emit(StoreEvent::QueryChanged);
    }

    pub fn set_brand(&mut self, brand: BrandFilter) {
        self.update_query(|query| query.set_brand(brand));
    }

    pub fn set_condition(&mut self, condition: ConditionFilter) {
        self.update_query(|query| query.set_condition(condition));
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        let search = search.into();
        self.update_query(|query| query.set_search(search));
    }

    pub fn set_max_price(&mut self, max_price: Money<'static, Currency>) {
        self.update_query(|query| query.set_max_price(max_price));
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.update_query(|query| query.set_sort(sort));
    }

    /// Restore every catalog filter to its default and return to page one.
    pub fn reset_filters(&mut self) {
        self.update_query(CatalogQuery::reset);
    }

    /// Move to a catalog page. Pages outside `1..=page_count` are refused.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        let page_count = self.results().page_count(self.browse.page_size);

        if page == 0 || page > page_count {
            debug!(page, page_count, "catalog page out of range");
            return false;
        }

        self.browse.page = page;
        self.emit(StoreEvent::PageChanged);

        true
    }

    // Collection grid

    #[must_use]
    pub fn collection_filter(&self) -> &CollectionFilter {
        &self.collection.filter
    }

    pub fn set_collection_filter(&mut self, filter: CollectionFilter) {
        self.collection = View::new(filter, COLLECTION_PAGE_SIZE);
        self.emit(StoreEvent::CollectionChanged);
    }

    #[must_use]
    pub fn collection_page(&self) -> (Vec<&Product<'static>>, usize) {
        let results = self.catalog.collection(&self.collection.filter);
        let page = results.page(self.collection.page, self.collection.page_size);

        (page.items().to_vec(), page.page_count())
    }

    /// Move to a collection page. Pages outside `1..=page_count` are refused.
    pub fn go_to_collection_page(&mut self, page: usize) -> bool {
        let page_count = self
            .catalog
            .collection(&self.collection.filter)
            .page_count(self.collection.page_size);

        if page == 0 || page > page_count {
            return false;
        }

        self.collection.page = page;
        self.emit(StoreEvent::PageChanged);

        true
    }

    /// Recommendations for a product detail view.
    pub fn related<R: Rng + ?Sized>(&self, id: &ProductId, rng: &mut R) -> Vec<&Product<'static>> {
        related(&self.catalog, id, rng)
    }

    // Cart

    #[must_use]
    pub fn cart(&self) -> &Cart<'static> {
        &self.cart
    }

    /// Add one unit of a catalog product and ask for the cart to be shown.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UnknownProduct`] if the id is not in the catalog.
    pub fn add_to_cart(&mut self, id: &ProductId) -> Result<AddOutcome, StoreError> {
        let product = self.product(id)?.clone();
        let outcome = self.cart.add(&product);

        debug!(product = %id, ?outcome, "added to cart");

        self.emit(StoreEvent::CartChanged);
        self.emit(StoreEvent::CartRevealRequested);

        Ok(outcome)
    }

    /// Remove a line. Returns whether anything was removed.
    pub fn remove_from_cart(&mut self, id: &ProductId) -> bool {
        let removed = self.cart.remove(id).is_some();

        if removed {
            debug!(product = %id, "removed from cart");
            self.emit(StoreEvent::CartChanged);
        }

        removed
    }

    /// Change a line's quantity, flooring at one. Returns the new quantity.
    pub fn adjust_quantity(&mut self, id: &ProductId, delta: i64) -> Option<u32> {
        let quantity = self.cart.adjust_quantity(id, delta)?;

        debug!(product = %id, delta, quantity, "adjusted cart quantity");
        self.emit(StoreEvent::CartChanged);

        Some(quantity)
    }

    /// # Errors
    ///
    /// Returns [`StoreError::Pricing`] if the total overflows.
    pub fn cart_total(&self) -> Result<Money<'static, Currency>, StoreError> {
        Ok(self.cart.total()?)
    }

    // Checkout

    #[must_use]
    pub fn portfolio(&self) -> &Portfolio<'static> {
        &self.portfolio
    }

    /// Finalize the cart as of today in the local time zone.
    ///
    /// # Errors
    ///
    /// See [`Store::checkout_on`].
    pub fn checkout(&mut self, buyer: Option<&str>) -> Result<Checkout, StoreError> {
        self.checkout_on(buyer, Zoned::now().date())
    }

    /// Finalize the cart into the portfolio and build the outbound hand-off.
    ///
    /// The cart is archived as soon as the link is built; whether the link is
    /// ever opened is not tracked. An empty cart yields an empty order and no
    /// events.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the order total overflows or the message
    /// cannot be rendered.
    pub fn checkout_on(&mut self, buyer: Option<&str>, date: Date) -> Result<Checkout, StoreError> {
        let order = finalize(&mut self.cart, &mut self.portfolio, buyer, date)?;
        let message = render_message(&order)?;
        let link = self.handoff.deep_link(&message);

        info!(
            order = %order.uuid(),
            lines = order.items().len(),
            buyer = order.buyer(),
            "order finalized"
        );

        if !order.is_empty() {
            self.emit(StoreEvent::OrderFinalized {
                order: order.uuid(),
                lines: order.items().len(),
            });
            self.emit(StoreEvent::CartChanged);
        }

        Ok(Checkout {
            order,
            message,
            link,
        })
    }

    // Wishlist

    #[must_use]
    pub fn wishlist(&self) -> &Wishlist {
        &self.wishlist
    }

    /// Saved products, in the order they were saved.
    #[must_use]
    pub fn wishlist_products(&self) -> Vec<&Product<'static>> {
        self.wishlist
            .iter()
            .filter_map(|id| self.catalog.get(id))
            .collect()
    }

    /// # Errors
    ///
    /// Returns [`StoreError::UnknownProduct`] if the id is not in the catalog.
    pub fn toggle_wishlist(&mut self, id: &ProductId) -> Result<bool, StoreError> {
        self.product(id)?;

        let saved = self.wishlist.toggle(id);
        self.emit(StoreEvent::WishlistChanged);

        Ok(saved)
    }

    // Sign-in

    #[must_use]
    pub fn principal(&self) -> Option<&Principal> {
        self.principal.as_ref()
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.principal.is_some()
    }

    /// Check credentials with the configured provider.
    ///
    /// Incomplete credentials are refused without consulting the provider.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Auth`] when the credentials are incomplete or rejected.
    pub async fn sign_in(&mut self, credentials: Credentials) -> Result<&Principal, StoreError> {
        if !credentials.is_complete() {
            warn!("sign-in refused: incomplete credentials");
            self.emit(StoreEvent::SignInRejected);

            return Err(AuthError::MissingCredentials.into());
        }

        match self.auth.authenticate(&credentials).await {
            Ok(principal) => {
                info!(identifier = %principal.identifier, "signed in");
                self.emit(StoreEvent::SignedIn);

                Ok(self.principal.insert(principal))
            }
            Err(error) => {
                warn!(identifier = %credentials.identifier, %error, "sign-in rejected");
                self.emit(StoreEvent::SignInRejected);

                Err(error.into())
            }
        }
    }

    pub fn sign_out(&mut self) {
        if self.principal.take().is_some() {
            info!("signed out");
            self.emit(StoreEvent::SignedOut);
        }
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("products", &self.catalog.len())
            .field("query", &self.browse.filter)
            .field("cart_lines", &self.cart.len())
            .field("portfolio", &self.portfolio.len())
            .field("signed_in", &self.principal.is_some())
            .field("subscribers", &self.subscribers)
            .finish_non_exhaustive()
    }
}
