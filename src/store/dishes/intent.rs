use crate::domain::Dish;
use crate::mvi::Intent;

/// Fetch lifecycle events for the dishes slice.
#[derive(Debug, Clone)]
pub enum DishesIntent {
    /// A fetch has started.
    Loading,
    /// The fetch completed; replaces the menu wholesale.
    LoadSuccess { dishes: Vec<Dish> },
    /// The fetch failed with a user-presentable message.
    LoadFailure { message: String },
}

impl Intent for DishesIntent {}
