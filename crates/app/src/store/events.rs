//! Store events and subscriptions.

use slotmap::{SlotMap, new_key_type};
use uuid::Uuid;

new_key_type! {
    /// Handle returned by [`crate::store::Store::subscribe`].
    pub struct SubscriptionKey;
}

/// Something the rendering layer may want to redraw for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    /// Lines or quantities changed.
    CartChanged,

    /// The cart should be shown (after an add).
    CartRevealRequested,

    /// The cart was finalized into the portfolio.
    OrderFinalized {
        /// Order identifier
        order: Uuid,
        /// Number of lines archived
        lines: usize,
    },

    /// Catalog filters or sort changed.
    QueryChanged,

    /// The catalog or collection page changed.
    PageChanged,

    /// The collection-grid quick filter changed.
    CollectionChanged,

    /// A product was saved to or removed from the wishlist.
    WishlistChanged,

    /// A specialist signed in.
    SignedIn,

    /// A sign-in attempt failed.
    SignInRejected,

    /// The specialist signed out.
    SignedOut,
}

type Listener = Box<dyn Fn(&StoreEvent) + Send + Sync>;

/// Registered listeners.
#[derive(Default)]
pub(crate) struct Subscribers {
    listeners: SlotMap<SubscriptionKey, Listener>,
}

impl Subscribers {
    pub(crate) fn insert(&mut self, listener: Listener) -> SubscriptionKey {
        self.listeners.insert(listener)
    }

    pub(crate) fn remove(&mut self, key: SubscriptionKey) -> bool {
        self.listeners.remove(key).is_some()
    }

    pub(crate) fn notify(&self, event: &StoreEvent) {
        for listener in self.listeners.values() {
            listener(event);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.listeners.len()
    }
}

impl std::fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscribers")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
