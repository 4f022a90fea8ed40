//! Collaborator contracts the state core calls across.
//!
//! The remote content service, the confirmation dialog and the platform
//! calendar/notification services sit behind these traits so screens and
//! tests can substitute their own implementations. Each trait is a narrow
//! seam: the core never sees platform handles, only these calls.

mod error;
mod types;

pub use error::{EffectError, FetchError};
pub use types::{
    CalendarEvent, Confirmation, Notification, NotificationOptions, PermissionStatus,
};

use async_trait::async_trait;

use crate::domain::{Comment, Dish, DishId};
use crate::reservation::ReservationDraft;

/// Remote source of dishes, comments and favorites.
///
/// Each fetch completes exactly once with success or failure; the domain
/// store maps the result into the slice's loadable lifecycle.
#[async_trait]
pub trait MenuGateway: Send + Sync {
    async fn fetch_dishes(&self) -> Result<Vec<Dish>, FetchError>;
    async fn fetch_comments(&self) -> Result<Vec<Comment>, FetchError>;
    async fn fetch_favorites(&self) -> Result<Vec<DishId>, FetchError>;
}

/// Modal confirmation shown before a reservation is booked.
///
/// Presents the captured draft (guest count, smoking preference, date) and
/// resolves to the user's answer.
#[async_trait]
pub trait ConfirmationDialog: Send + Sync {
    async fn confirm(&self, draft: &ReservationDraft) -> Confirmation;
}

/// Platform permission prompts for calendar and notification access.
#[async_trait]
pub trait PermissionService: Send + Sync {
    async fn request_calendar_permission(&self) -> PermissionStatus;
    async fn request_notification_permission(&self) -> PermissionStatus;
}

/// Writes reservation events into the device calendar.
#[async_trait]
pub trait CalendarWriter: Send + Sync {
    async fn add_event(&self, event: &CalendarEvent) -> Result<(), EffectError>;
}

/// Presents local notifications on the device.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn present(&self, notification: &Notification) -> Result<(), EffectError>;
}
