use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of the reservation confirmation dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Cancelled,
}

/// Outcome of a platform permission prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
}

impl PermissionStatus {
    pub fn is_granted(&self) -> bool {
        matches!(self, Self::Granted)
    }
}

/// Event written into the device calendar for a confirmed reservation.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarEvent {
    pub title: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// IANA timezone name the event is anchored to.
    pub timezone: String,
    pub location: String,
}

/// Local notification shown after a reservation is requested.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub title: String,
    pub body: String,
    pub options: NotificationOptions,
}

/// Platform presentation options for a local notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationOptions {
    #[serde(default = "default_true")]
    pub sound: bool,
    #[serde(default = "default_true")]
    pub vibrate: bool,
    /// Accent color for the Android tray entry.
    #[serde(default = "default_color")]
    pub color: Option<String>,
}

impl Default for NotificationOptions {
    fn default() -> Self {
        Self {
            sound: true,
            vibrate: true,
            color: default_color(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_color() -> Option<String> {
    Some("#512DA8".to_string())
}
