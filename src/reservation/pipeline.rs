//! Submit pipeline for the reservation form.
//!
//! Drives the dialog → calendar permission → calendar write → notification
//! permission → notification chain as a sequence of awaited fallible steps
//! around the pure reducer. Permission denial aborts the remaining side
//! effects; calendar and notification failures are logged and swallowed.

use chrono::{DateTime, Utc};

use crate::config::VenueConfig;
use crate::ports::{
    CalendarWriter, Confirmation, ConfirmationDialog, Notifier, PermissionService,
    PermissionStatus,
};

use super::intent::ReservationIntent;
use super::reducer::ReservationReducer;
use super::state::ReservationFormState;
use crate::mvi::Reducer;

/// What happened to a submit request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Confirmed; the chain ran. Flags record which effects actually landed.
    Submitted {
        calendar_added: bool,
        notified: bool,
    },
    /// Declined at the dialog; no side effects.
    Declined,
    /// No date chosen yet; the dialog was not shown and the input was kept.
    MissingDate,
}

/// The reservation screen's handle on the form.
///
/// Owned by a single screen and dropped with it; the draft never outlives
/// the visit. All transitions go through [`ReservationReducer`]; `submit`
/// wraps the transitions around the external side-effect chain.
#[derive(Debug, Default)]
pub struct ReservationForm {
    state: ReservationFormState,
}

impl ReservationForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current machine state, for rendering.
    pub fn state(&self) -> &ReservationFormState {
        &self.state
    }

    /// Route a user event through the reducer.
    pub fn dispatch(&mut self, intent: ReservationIntent) {
        self.state = ReservationReducer::reduce(std::mem::take(&mut self.state), intent);
    }

    /// Run the full submit chain.
    ///
    /// Every path out of the dialog resets the form to defaults; only a
    /// missing date leaves the input in place.
    pub async fn submit(
        &mut self,
        dialog: &dyn ConfirmationDialog,
        permissions: &dyn PermissionService,
        calendar: &dyn CalendarWriter,
        notifier: &dyn Notifier,
        venue: &VenueConfig,
    ) -> SubmitOutcome {
        let (draft, start) = match self.state.draft() {
            Some(draft) => match draft.date {
                Some(start) => (draft.clone(), start),
                None => {
                    tracing::debug!("Submit requested without a date, keeping input");
                    return SubmitOutcome::MissingDate;
                }
            },
            None => return SubmitOutcome::MissingDate,
        };

        self.dispatch(ReservationIntent::SubmitRequested);

        match dialog.confirm(&draft).await {
            Confirmation::Cancelled => {
                tracing::info!("Reservation declined at confirmation");
                self.dispatch(ReservationIntent::Declined);
                self.dispatch(ReservationIntent::Reset);
                return SubmitOutcome::Declined;
            }
            Confirmation::Confirmed => {
                tracing::info!(
                    guests = draft.guests,
                    smoking = draft.smoking,
                    start = %start,
                    "Reservation confirmed"
                );
            }
        }

        let outcome = run_side_effects(start, permissions, calendar, notifier, venue).await;
        self.dispatch(ReservationIntent::Confirmed);
        self.dispatch(ReservationIntent::Reset);
        outcome
    }
}

/// Calendar permission gates the whole chain; notification permission gates
/// only the notification. Effect failures after a grant are fire-and-forget.
async fn run_side_effects(
    start: DateTime<Utc>,
    permissions: &dyn PermissionService,
    calendar: &dyn CalendarWriter,
    notifier: &dyn Notifier,
    venue: &VenueConfig,
) -> SubmitOutcome {
    let mut calendar_added = false;
    let mut notified = false;

    match permissions.request_calendar_permission().await {
        PermissionStatus::Denied => {
            tracing::warn!("Calendar permission denied, skipping reservation side effects");
            return SubmitOutcome::Submitted {
                calendar_added,
                notified,
            };
        }
        PermissionStatus::Granted => {
            let event = venue.reservation_event(start);
            match calendar.add_event(&event).await {
                Ok(()) => {
                    tracing::info!(start = %start, "Reservation added to calendar");
                    calendar_added = true;
                }
                Err(err) => tracing::warn!(error = %err, "Calendar write failed"),
            }
        }
    }

    match permissions.request_notification_permission().await {
        PermissionStatus::Denied => {
            tracing::warn!("Notification permission denied, skipping reservation notification");
        }
        PermissionStatus::Granted => {
            let notification = venue.reservation_notification(start);
            match notifier.present(&notification).await {
                Ok(()) => notified = true,
                Err(err) => tracing::warn!(error = %err, "Reservation notification failed"),
            }
        }
    }

    SubmitOutcome::Submitted {
        calendar_added,
        notified,
    }
}
