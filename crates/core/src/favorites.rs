//! Session-local favorite tracking over product ids.

use std::collections::HashSet;

use crate::domain::product::ProductId;

/// The set of products a shopper has hearted this session.
///
/// Toggling is involutive: toggling the same id twice restores the set to
/// where it started.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FavoriteSet {
    ids: HashSet<ProductId>,
}

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership for `id` and report the new state: `true` when the
    /// product is now a favorite, `false` when it just stopped being one.
    pub fn toggle(&mut self, id: &ProductId) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.clone());
            true
        }
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProductId> {
        self.ids.iter()
    }
}

impl FromIterator<ProductId> for FavoriteSet {
    fn from_iter<I: IntoIterator<Item = ProductId>>(iter: I) -> Self {
        Self { ids: iter.into_iter().collect() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_reports_the_new_membership() {
        let mut favorites = FavoriteSet::new();
        let lamp = ProductId::new("ai-rec-1");

        assert!(favorites.toggle(&lamp), "first toggle favorites the product");
        assert!(favorites.contains(&lamp));
        assert!(!favorites.toggle(&lamp), "second toggle un-favorites it");
        assert!(!favorites.contains(&lamp));
    }

    #[test]
    fn double_toggle_restores_the_set() {
        let mut favorites: FavoriteSet =
            [ProductId::new("ai-rec-2"), ProductId::new("electronics-4")].into_iter().collect();
        let snapshot = favorites.clone();
        let candle = ProductId::new("home-garden-1");

        favorites.toggle(&candle);
        assert_ne!(favorites, snapshot);
        favorites.toggle(&candle);
        assert_eq!(favorites, snapshot);
    }

    #[test]
    fn tracks_distinct_ids_only() {
        let mut favorites = FavoriteSet::new();
        favorites.toggle(&ProductId::new("a"));
        favorites.toggle(&ProductId::new("b"));
        favorites.toggle(&ProductId::new("a"));

        assert_eq!(favorites.len(), 1);
        assert!(!favorites.is_empty());
        assert_eq!(favorites.iter().next().map(ProductId::as_str), Some("b"));
    }
}
