use chrono::{DateTime, Utc};

use crate::mvi::Intent;

/// User and dialog events for the reservation form.
#[derive(Debug, Clone)]
pub enum ReservationIntent {
    /// Picker change. Values outside the option set leave the draft alone.
    SetGuests { guests: u8 },
    /// Smoking switch change.
    SetSmoking { smoking: bool },
    /// Date picker change.
    SetDate { date: DateTime<Utc> },
    /// User asked to book; captures the draft for the confirmation dialog.
    SubmitRequested,
    /// Dialog accepted.
    Confirmed,
    /// Dialog declined; pending input is discarded.
    Declined,
    /// Return to Editing with the default draft.
    Reset,
}

impl Intent for ReservationIntent {}
