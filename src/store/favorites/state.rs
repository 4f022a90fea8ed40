use std::collections::HashSet;

use crate::domain::DishId;
use crate::mvi::StoreState;
use crate::store::Loadable;

/// Favorited dish ids with their load lifecycle.
///
/// Backed by a set so membership stays O(1) however large the list grows.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FavoritesState {
    pub favorites: Loadable<HashSet<DishId>>,
}

impl StoreState for FavoritesState {}

impl FavoritesState {
    /// Whether the dish is currently marked as a favorite.
    pub fn is_favorite(&self, dish_id: DishId) -> bool {
        self.favorites.data.contains(&dish_id)
    }

    /// Number of favorited dishes.
    pub fn count(&self) -> usize {
        self.favorites.data.len()
    }
}
