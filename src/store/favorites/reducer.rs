use crate::mvi::Reducer;

use super::intent::FavoritesIntent;
use super::state::FavoritesState;

/// Reducer for the favorites slice.
pub struct FavoritesReducer;

impl Reducer for FavoritesReducer {
    type State = FavoritesState;
    type Intent = FavoritesIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FavoritesIntent::Loading => FavoritesState {
                favorites: state.favorites.begin_loading(),
            },
            FavoritesIntent::LoadSuccess { dish_ids } => FavoritesState {
                favorites: state.favorites.succeed(dish_ids.into_iter().collect()),
            },
            FavoritesIntent::LoadFailure { message } => FavoritesState {
                favorites: state.favorites.fail(message),
            },
            FavoritesIntent::Add { dish_id } => {
                let mut favorites = state.favorites;
                favorites.data.insert(dish_id);
                FavoritesState { favorites }
            }
        }
    }
}
