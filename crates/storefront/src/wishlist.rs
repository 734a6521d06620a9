//! Saved-for-later wishlist.
//!
//! A flat, deduplicated list of books the shopper has hearted. Moving an
//! entry into the cart does not remove it from the wishlist; the shopper
//! removes entries explicitly.

use serde::{Deserialize, Serialize};

use paper_lantern_core::{CandidateItem, Price, ProductId};

use crate::catalog::Book;

/// One saved book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WishlistEntry {
    pub id: ProductId,
    pub title: String,
    pub author: String,
    pub image: String,
    pub price: Price,
}

impl From<&Book> for WishlistEntry {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id,
            title: book.title.clone(),
            author: book.author.clone(),
            image: book.image.clone(),
            price: book.price,
        }
    }
}

/// The shopper's wishlist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wishlist {
    entries: Vec<WishlistEntry>,
}

impl Wishlist {
    /// Create an empty wishlist.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Save an entry. Saving an already-present id is a no-op; the
    /// wishlist holds at most one entry per book.
    pub fn add(&mut self, entry: WishlistEntry) {
        if !self.contains(entry.id) {
            self.entries.push(entry);
        }
    }

    /// Remove the entry matching `id`, if present. No-op when absent.
    pub fn remove(&mut self, id: ProductId) {
        self.entries.retain(|e| e.id != id);
    }

    /// Whether an entry with this id is saved.
    #[must_use]
    pub fn contains(&self, id: ProductId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// The saved entries, in save order.
    #[must_use]
    pub fn entries(&self) -> &[WishlistEntry] {
        &self.entries
    }

    /// Whether the wishlist is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build a cart candidate from a saved entry. The entry stays saved;
    /// callers pass the candidate to `Cart::add_item`.
    #[must_use]
    pub fn candidate(&self, id: ProductId) -> Option<CandidateItem> {
        self.entries.iter().find(|e| e.id == id).map(|e| CandidateItem {
            id: e.id,
            title: e.title.clone(),
            image: e.image.clone(),
            price: e.price,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use paper_lantern_core::{Cart, CurrencyCode};

    fn entry(id: i32) -> WishlistEntry {
        WishlistEntry {
            id: ProductId::new(id),
            title: format!("Book {id}"),
            author: "Author".to_owned(),
            image: String::new(),
            price: Price::from_cents(1999, CurrencyCode::USD),
        }
    }

    #[test]
    fn test_add_dedups_by_id() {
        let mut wishlist = Wishlist::new();
        wishlist.add(entry(1));
        wishlist.add(entry(1));
        wishlist.add(entry(2));
        assert_eq!(wishlist.entries().len(), 2);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut wishlist = Wishlist::new();
        wishlist.add(entry(1));
        wishlist.remove(ProductId::new(9));
        assert!(wishlist.contains(ProductId::new(1)));
        wishlist.remove(ProductId::new(1));
        wishlist.remove(ProductId::new(1));
        assert!(wishlist.is_empty());
    }

    #[test]
    fn test_candidate_keeps_entry_saved() {
        let mut wishlist = Wishlist::new();
        wishlist.add(entry(1));

        let candidate = wishlist.candidate(ProductId::new(1)).unwrap();
        let mut cart = Cart::new();
        cart.add_item(candidate, 1).unwrap();

        assert_eq!(cart.total_item_count(), 1);
        assert!(wishlist.contains(ProductId::new(1)));
    }

    #[test]
    fn test_candidate_missing_id() {
        let wishlist = Wishlist::new();
        assert!(wishlist.candidate(ProductId::new(1)).is_none());
    }
}
