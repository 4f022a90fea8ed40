use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::ports::{CalendarEvent, Notification, NotificationOptions};

/// Venue settings.
///
/// Every field has a default, so a missing or partial config file still
/// yields a working setup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VenueConfig {
    /// Restaurant name, used in calendar event titles.
    #[serde(default = "default_name")]
    pub name: String,
    /// Street address written into calendar events.
    #[serde(default = "default_location")]
    pub location: String,
    /// IANA timezone of the venue.
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// How long a table is held, in minutes.
    #[serde(default = "default_duration_minutes")]
    pub reservation_duration_minutes: u32,
    /// Base URL of the remote content service.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Notification presentation options.
    #[serde(default)]
    pub notification: NotificationOptions,
}

impl Default for VenueConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            location: default_location(),
            timezone: default_timezone(),
            reservation_duration_minutes: default_duration_minutes(),
            base_url: default_base_url(),
            notification: NotificationOptions::default(),
        }
    }
}

impl VenueConfig {
    /// Calendar entry for a reservation starting at `start`.
    pub fn reservation_event(&self, start: DateTime<Utc>) -> CalendarEvent {
        CalendarEvent {
            title: format!("{} Table Reservation", self.name),
            start,
            end: start + Duration::minutes(i64::from(self.reservation_duration_minutes)),
            timezone: self.timezone.clone(),
            location: self.location.clone(),
        }
    }

    /// Local notification for a reservation starting at `start`.
    pub fn reservation_notification(&self, start: DateTime<Utc>) -> Notification {
        Notification {
            title: "Your Reservation".to_string(),
            body: format!("Reservation for {} requested", start.to_rfc3339()),
            options: self.notification.clone(),
        }
    }
}

fn default_name() -> String {
    "Con Fusion".to_string()
}

fn default_location() -> String {
    "121, Clear Water Bay Road, Clear Water Bay, Kowloon, Hong Kong".to_string()
}

fn default_timezone() -> String {
    "Asia/Hong_Kong".to_string()
}

fn default_duration_minutes() -> u32 {
    120
}

fn default_base_url() -> String {
    "http://localhost:3001".to_string()
}
