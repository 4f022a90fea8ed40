use crate::domain::{Comment, DishId};
use crate::mvi::StoreState;
use crate::store::Loadable;

/// Comment collection with its load lifecycle.
///
/// Unlike the other slices, a failed load drops the collection: the error
/// banner replaces the list on screen.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CommentsState {
    pub comments: Loadable<Vec<Comment>>,
}

impl StoreState for CommentsState {}

impl CommentsState {
    /// Comments for one dish, in insertion order.
    pub fn for_dish(&self, dish_id: DishId) -> impl Iterator<Item = &Comment> + '_ {
        self.comments
            .data
            .iter()
            .filter(move |comment| comment.dish_id == dish_id)
    }

    /// Id for the next appended comment: one past the current maximum,
    /// or 0 on an empty collection.
    pub(super) fn next_id(&self) -> u32 {
        self.comments
            .data
            .iter()
            .map(|comment| comment.id)
            .max()
            .map_or(0, |max| max + 1)
    }
}
