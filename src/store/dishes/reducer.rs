use crate::mvi::Reducer;

use super::intent::DishesIntent;
use super::state::DishesState;

/// Reducer for the dishes slice.
pub struct DishesReducer;

impl Reducer for DishesReducer {
    type State = DishesState;
    type Intent = DishesIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DishesIntent::Loading => DishesState {
                dishes: state.dishes.begin_loading(),
            },
            DishesIntent::LoadSuccess { dishes } => DishesState {
                dishes: state.dishes.succeed(dishes),
            },
            DishesIntent::LoadFailure { message } => DishesState {
                dishes: state.dishes.fail(message),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Dish;

    fn sample_dish(id: u32) -> Dish {
        Dish {
            id,
            name: format!("Dish {id}"),
            description: "A sample dish".to_string(),
            image: "images/sample.png".to_string(),
            category: "mains".to_string(),
        }
    }

    #[test]
    fn load_success_replaces_menu() {
        let state = DishesReducer::reduce(
            DishesState::default(),
            DishesIntent::LoadSuccess {
                dishes: vec![sample_dish(0), sample_dish(1)],
            },
        );
        assert_eq!(state.dishes.data.len(), 2);
        assert!(!state.dishes.is_loading);
        assert!(!state.dishes.has_error());
    }

    #[test]
    fn load_failure_keeps_stale_menu() {
        let state = DishesReducer::reduce(
            DishesState::default(),
            DishesIntent::LoadSuccess {
                dishes: vec![sample_dish(3)],
            },
        );
        let state = DishesReducer::reduce(state, DishesIntent::Loading);
        let state = DishesReducer::reduce(
            state,
            DishesIntent::LoadFailure {
                message: "network down".to_string(),
            },
        );
        assert_eq!(state.dishes.error_message.as_deref(), Some("network down"));
        assert_eq!(state.dishes.data.len(), 1);
        assert_eq!(state.dish(3).map(|d| d.id), Some(3));
    }

    #[test]
    fn lookup_misses_unknown_id() {
        let state = DishesState::default();
        assert!(state.dish(42).is_none());
    }
}
