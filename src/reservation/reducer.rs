use crate::mvi::Reducer;

use super::intent::ReservationIntent;
use super::state::{ReservationDraft, ReservationFormState, MAX_GUESTS, MIN_GUESTS};

/// Reducer for the reservation form.
///
/// Pure function — the dialog, permission prompts and calendar/notification
/// calls are handled by the submit pipeline around the dispatch calls.
/// Field edits only apply while Editing: once the draft is captured for
/// confirmation it no longer changes.
pub struct ReservationReducer;

impl Reducer for ReservationReducer {
    type State = ReservationFormState;
    type Intent = ReservationIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ReservationIntent::SetGuests { guests } => match state {
                ReservationFormState::Editing { draft }
                    if (MIN_GUESTS..=MAX_GUESTS).contains(&guests) =>
                {
                    ReservationFormState::Editing {
                        draft: ReservationDraft { guests, ..draft },
                    }
                }
                other => other,
            },

            ReservationIntent::SetSmoking { smoking } => match state {
                ReservationFormState::Editing { draft } => ReservationFormState::Editing {
                    draft: ReservationDraft { smoking, ..draft },
                },
                other => other,
            },

            ReservationIntent::SetDate { date } => match state {
                ReservationFormState::Editing { draft } => ReservationFormState::Editing {
                    draft: ReservationDraft {
                        date: Some(date),
                        ..draft
                    },
                },
                other => other,
            },

            ReservationIntent::SubmitRequested => match state {
                ReservationFormState::Editing { draft } => {
                    ReservationFormState::ConfirmPending { draft }
                }
                other => other,
            },

            ReservationIntent::Confirmed => match state {
                ReservationFormState::ConfirmPending { .. } => ReservationFormState::Submitted,
                other => other,
            },

            ReservationIntent::Declined => match state {
                ReservationFormState::ConfirmPending { .. } => ReservationFormState::Cancelled,
                other => other,
            },

            ReservationIntent::Reset => ReservationFormState::default(),
        }
    }
}
