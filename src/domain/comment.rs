use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::DishId;

/// Lowest rating the comment widget offers.
pub const MIN_RATING: u8 = 1;
/// Highest rating the comment widget offers.
pub const MAX_RATING: u8 = 5;

/// A published comment. The id is assigned by the comments slice and is
/// unique within the collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: u32,
    #[serde(rename = "dishId")]
    pub dish_id: DishId,
    pub author: String,
    /// Star rating, within the widget's option set.
    pub rating: u8,
    pub comment: String,
    pub date: DateTime<Utc>,
}

/// User input for a new comment, before the slice assigns an id.
#[derive(Debug, Clone, PartialEq)]
pub struct CommentDraft {
    pub dish_id: DishId,
    pub author: String,
    pub rating: u8,
    pub comment: String,
    pub date: DateTime<Utc>,
}

impl CommentDraft {
    /// Attach an id, producing a publishable comment.
    pub(crate) fn into_comment(self, id: u32) -> Comment {
        Comment {
            id,
            dish_id: self.dish_id,
            author: self.author,
            rating: self.rating,
            comment: self.comment,
            date: self.date,
        }
    }
}
