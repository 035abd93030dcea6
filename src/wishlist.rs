//! Wishlist

use crate::products::ProductId;

/// Saved product ids, in the order they were first saved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Wishlist {
    ids: Vec<ProductId>,
}

impl Wishlist {
    /// Create an empty wishlist.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `id` if absent, remove it if present. Returns whether it is now saved.
    pub fn toggle(&mut self, id: &ProductId) -> bool {
        if let Some(position) = self.ids.iter().position(|saved| saved == id) {
            self.ids.remove(position);
            return false;
        }

        self.ids.push(id.clone());

        true
    }

    /// Whether `id` is saved.
    pub fn contains(&self, id: &ProductId) -> bool {
        self.ids.contains(id)
    }

    /// Saved ids.
    pub fn iter(&self) -> impl Iterator<Item = &ProductId> {
        self.ids.iter()
    }

    /// Number of saved ids.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether nothing is saved.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_twice_is_identity() {
        let mut wishlist = Wishlist::new();
        let id = ProductId::from("1");

        assert!(wishlist.toggle(&id));
        assert!(wishlist.contains(&id));
        assert!(!wishlist.toggle(&id));
        assert!(wishlist.is_empty());
    }

    #[test]
    fn keeps_first_saved_order() {
        let mut wishlist = Wishlist::new();

        for id in ["3", "1", "2"] {
            wishlist.toggle(&ProductId::from(id));
        }

        let ids: Vec<&str> = wishlist.iter().map(ProductId::as_str).collect();
        assert_eq!(ids, ["3", "1", "2"]);
        assert_eq!(wishlist.len(), 3);
    }
}
