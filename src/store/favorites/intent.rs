use crate::domain::DishId;
use crate::mvi::Intent;

/// Fetch lifecycle and marking events for the favorites slice.
#[derive(Debug, Clone)]
pub enum FavoritesIntent {
    /// A fetch has started.
    Loading,
    /// The fetch completed; replaces the set.
    LoadSuccess { dish_ids: Vec<DishId> },
    /// The fetch failed with a user-presentable message.
    LoadFailure { message: String },
    /// User marked a dish. Idempotent: marking twice is a no-op.
    Add { dish_id: DishId },
}

impl Intent for FavoritesIntent {}
