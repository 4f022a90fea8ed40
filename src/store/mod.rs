//! Domain store: dishes, comments and favorites behind one container.
//!
//! The store owns the three slices for the lifetime of the session and is
//! the single authoritative update path for each: every change goes through
//! a `dispatch_*` entry point, which runs the slice's reducer under the
//! write lock. Readers take cloned snapshots, so a render never observes a
//! half-applied transition.

pub mod comments;
pub mod dishes;
pub mod favorites;
mod loadable;

pub use loadable::Loadable;

use std::sync::{Arc, RwLock};

use crate::domain::DishId;
use crate::mvi::Reducer;
use crate::ports::MenuGateway;

use comments::{CommentsIntent, CommentsReducer, CommentsState};
use dishes::{DishesIntent, DishesReducer, DishesState};
use favorites::{FavoritesIntent, FavoritesReducer, FavoritesState};

/// Session-scoped state container.
///
/// Cheap to clone and hand to screens or completion callbacks; clones share
/// the same slices. There is no ambient singleton: whoever needs the store
/// gets a handle passed in.
#[derive(Clone, Default)]
pub struct DomainStore {
    inner: Arc<RwLock<Slices>>,
}

#[derive(Default)]
struct Slices {
    dishes: DishesState,
    comments: CommentsState,
    favorites: FavoritesState,
}

impl DomainStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the dishes slice.
    pub fn dishes(&self) -> DishesState {
        self.inner.read().expect("domain store lock poisoned").dishes.clone()
    }

    /// Snapshot of the comments slice.
    pub fn comments(&self) -> CommentsState {
        self.inner.read().expect("domain store lock poisoned").comments.clone()
    }

    /// Snapshot of the favorites slice.
    pub fn favorites(&self) -> FavoritesState {
        self.inner.read().expect("domain store lock poisoned").favorites.clone()
    }

    /// Favorite membership without cloning the slice.
    pub fn is_favorite(&self, dish_id: DishId) -> bool {
        self.inner
            .read()
            .expect("domain store lock poisoned")
            .favorites
            .is_favorite(dish_id)
    }

    /// Single update entry point for the dishes slice.
    pub fn dispatch_dishes(&self, intent: DishesIntent) {
        let mut slices = self.inner.write().expect("domain store lock poisoned");
        slices.dishes = DishesReducer::reduce(std::mem::take(&mut slices.dishes), intent);
    }

    /// Single update entry point for the comments slice.
    pub fn dispatch_comments(&self, intent: CommentsIntent) {
        let mut slices = self.inner.write().expect("domain store lock poisoned");
        slices.comments = CommentsReducer::reduce(std::mem::take(&mut slices.comments), intent);
    }

    /// Single update entry point for the favorites slice.
    pub fn dispatch_favorites(&self, intent: FavoritesIntent) {
        let mut slices = self.inner.write().expect("domain store lock poisoned");
        slices.favorites = FavoritesReducer::reduce(std::mem::take(&mut slices.favorites), intent);
    }

    /// Fetch the menu, driving the slice through its load lifecycle.
    pub async fn load_dishes(&self, gateway: &dyn MenuGateway) {
        self.dispatch_dishes(DishesIntent::Loading);
        match gateway.fetch_dishes().await {
            Ok(dishes) => {
                tracing::info!(count = dishes.len(), "Dishes loaded");
                self.dispatch_dishes(DishesIntent::LoadSuccess { dishes });
            }
            Err(err) => {
                tracing::warn!(error = %err, "Dish fetch failed");
                self.dispatch_dishes(DishesIntent::LoadFailure {
                    message: err.to_string(),
                });
            }
        }
    }

    /// Fetch the comments, driving the slice through its load lifecycle.
    pub async fn load_comments(&self, gateway: &dyn MenuGateway) {
        self.dispatch_comments(CommentsIntent::Loading);
        match gateway.fetch_comments().await {
            Ok(comments) => {
                tracing::info!(count = comments.len(), "Comments loaded");
                self.dispatch_comments(CommentsIntent::LoadSuccess { comments });
            }
            Err(err) => {
                tracing::warn!(error = %err, "Comment fetch failed");
                self.dispatch_comments(CommentsIntent::LoadFailure {
                    message: err.to_string(),
                });
            }
        }
    }

    /// Fetch the favorites, driving the slice through its load lifecycle.
    pub async fn load_favorites(&self, gateway: &dyn MenuGateway) {
        self.dispatch_favorites(FavoritesIntent::Loading);
        match gateway.fetch_favorites().await {
            Ok(dish_ids) => {
                tracing::info!(count = dish_ids.len(), "Favorites loaded");
                self.dispatch_favorites(FavoritesIntent::LoadSuccess { dish_ids });
            }
            Err(err) => {
                tracing::warn!(error = %err, "Favorites fetch failed");
                self.dispatch_favorites(FavoritesIntent::LoadFailure {
                    message: err.to_string(),
                });
            }
        }
    }

    /// Kick off all three fetches, as the root screen does on mount.
    pub async fn load_all(&self, gateway: &dyn MenuGateway) {
        tokio::join!(
            self.load_dishes(gateway),
            self.load_comments(gateway),
            self.load_favorites(gateway),
        );
    }
}
