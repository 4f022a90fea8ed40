use crate::domain::{Dish, DishId};
use crate::mvi::StoreState;
use crate::store::Loadable;

/// Menu data with its load lifecycle.
///
/// A failed refetch keeps the previously loaded menu on screen.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DishesState {
    pub dishes: Loadable<Vec<Dish>>,
}

impl StoreState for DishesState {}

impl DishesState {
    /// Look up a dish by id, if the menu holds it.
    pub fn dish(&self, dish_id: DishId) -> Option<&Dish> {
        self.dishes.data.iter().find(|dish| dish.id == dish_id)
    }
}
