use crate::domain::{Comment, CommentDraft};
use crate::mvi::Intent;

/// Fetch lifecycle and submission events for the comments slice.
#[derive(Debug, Clone)]
pub enum CommentsIntent {
    /// A fetch has started.
    Loading,
    /// The fetch completed; replaces the collection.
    LoadSuccess { comments: Vec<Comment> },
    /// The fetch failed; the collection is dropped.
    LoadFailure { message: String },
    /// User submitted a comment; the slice assigns its id.
    Add { draft: CommentDraft },
}

impl Intent for CommentsIntent {}
