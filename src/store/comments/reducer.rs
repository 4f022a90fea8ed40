use crate::mvi::Reducer;
use crate::store::Loadable;

use super::intent::CommentsIntent;
use super::state::CommentsState;

/// Reducer for the comments slice.
///
/// Appends are strictly monotonic: a new comment's id is one past the
/// current maximum, existing entries are never touched or reordered.
pub struct CommentsReducer;

impl Reducer for CommentsReducer {
    type State = CommentsState;
    type Intent = CommentsIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CommentsIntent::Loading => CommentsState {
                comments: state.comments.begin_loading(),
            },
            CommentsIntent::LoadSuccess { comments } => CommentsState {
                comments: state.comments.succeed(comments),
            },
            // Comments do not keep stale data on a failed load.
            CommentsIntent::LoadFailure { message } => CommentsState {
                comments: Loadable {
                    is_loading: false,
                    error_message: Some(message),
                    data: Vec::new(),
                },
            },
            CommentsIntent::Add { draft } => {
                let id = state.next_id();
                let mut comments = state.comments;
                comments.data.push(draft.into_comment(id));
                CommentsState { comments }
            }
        }
    }
}
