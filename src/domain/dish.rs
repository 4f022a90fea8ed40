use serde::{Deserialize, Serialize};

/// Stable identifier for a dish, assigned by the remote service.
pub type DishId = u32;

/// A menu entry as served by the remote service.
///
/// Immutable once loaded; a refetch replaces the whole collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub id: DishId,
    pub name: String,
    pub description: String,
    /// Image path relative to the content host.
    pub image: String,
    pub category: String,
}
