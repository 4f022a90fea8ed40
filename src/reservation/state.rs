//! State for the reservation form.

use chrono::{DateTime, Utc};

use crate::mvi::StoreState;

/// Smallest party the picker offers.
pub const MIN_GUESTS: u8 = 1;
/// Largest party the picker offers.
pub const MAX_GUESTS: u8 = 6;

/// Ephemeral form fields, owned by the reservation screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ReservationDraft {
    /// Party size, within the picker's option set.
    pub guests: u8,
    pub smoking: bool,
    /// Unset until the user picks a date and time.
    pub date: Option<DateTime<Utc>>,
}

impl Default for ReservationDraft {
    fn default() -> Self {
        Self {
            guests: MIN_GUESTS,
            smoking: false,
            date: None,
        }
    }
}

/// Reservation form lifecycle.
///
/// Editing → ConfirmPending → (Submitted | Cancelled) → Editing (reset).
/// The confirmation dialog is visible exactly while the machine sits in
/// ConfirmPending; the draft it shows is the one captured on submit.
#[derive(Debug, Clone, PartialEq)]
pub enum ReservationFormState {
    /// Fields editable; the initial state.
    Editing { draft: ReservationDraft },

    /// Confirmation dialog shown; fields captured and locked.
    ConfirmPending { draft: ReservationDraft },

    /// Confirmed; side effects dispatched. Awaiting reset.
    Submitted,

    /// Declined at the dialog; pending input discarded. Awaiting reset.
    Cancelled,
}

impl Default for ReservationFormState {
    fn default() -> Self {
        ReservationFormState::Editing {
            draft: ReservationDraft::default(),
        }
    }
}

impl StoreState for ReservationFormState {}

impl ReservationFormState {
    /// Check if the fields are currently editable.
    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing { .. })
    }

    /// Check if the confirmation dialog should be visible.
    pub fn is_confirming(&self) -> bool {
        matches!(self, Self::ConfirmPending { .. })
    }

    /// Draft backing the form, while the machine still holds one.
    pub fn draft(&self) -> Option<&ReservationDraft> {
        match self {
            Self::Editing { draft } | Self::ConfirmPending { draft } => Some(draft),
            Self::Submitted | Self::Cancelled => None,
        }
    }
}
