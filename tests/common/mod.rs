//! Shared fakes for the collaborator contracts.

#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

use tableside::domain::{Comment, CommentDraft, Dish, DishId, MAX_RATING};
use tableside::ports::{
    CalendarEvent, CalendarWriter, Confirmation, ConfirmationDialog, EffectError, FetchError,
    MenuGateway, Notification, Notifier, PermissionService, PermissionStatus,
};
use tableside::reservation::ReservationDraft;

/// Gateway serving canned results.
pub struct StaticGateway {
    pub dishes: Result<Vec<Dish>, FetchError>,
    pub comments: Result<Vec<Comment>, FetchError>,
    pub favorites: Result<Vec<DishId>, FetchError>,
}

impl Default for StaticGateway {
    fn default() -> Self {
        Self {
            dishes: Ok(Vec::new()),
            comments: Ok(Vec::new()),
            favorites: Ok(Vec::new()),
        }
    }
}

#[async_trait]
impl MenuGateway for StaticGateway {
    async fn fetch_dishes(&self) -> Result<Vec<Dish>, FetchError> {
        self.dishes.clone()
    }

    async fn fetch_comments(&self) -> Result<Vec<Comment>, FetchError> {
        self.comments.clone()
    }

    async fn fetch_favorites(&self) -> Result<Vec<DishId>, FetchError> {
        self.favorites.clone()
    }
}

/// Dialog that always gives the same answer and records what it was shown.
pub struct ScriptedDialog {
    pub answer: Confirmation,
    pub seen: Mutex<Vec<ReservationDraft>>,
}

impl ScriptedDialog {
    pub fn answering(answer: Confirmation) -> Self {
        Self {
            answer,
            seen: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ConfirmationDialog for ScriptedDialog {
    async fn confirm(&self, draft: &ReservationDraft) -> Confirmation {
        self.seen.lock().unwrap().push(draft.clone());
        self.answer
    }
}

/// Permission service with a fixed answer per prompt.
pub struct ScriptedPermissions {
    pub calendar: PermissionStatus,
    pub notifications: PermissionStatus,
}

impl ScriptedPermissions {
    pub fn granting_all() -> Self {
        Self {
            calendar: PermissionStatus::Granted,
            notifications: PermissionStatus::Granted,
        }
    }

    pub fn denying_calendar() -> Self {
        Self {
            calendar: PermissionStatus::Denied,
            notifications: PermissionStatus::Granted,
        }
    }

    pub fn denying_notifications() -> Self {
        Self {
            calendar: PermissionStatus::Granted,
            notifications: PermissionStatus::Denied,
        }
    }
}

#[async_trait]
impl PermissionService for ScriptedPermissions {
    async fn request_calendar_permission(&self) -> PermissionStatus {
        self.calendar
    }

    async fn request_notification_permission(&self) -> PermissionStatus {
        self.notifications
    }
}

/// Calendar that records every event, optionally failing each write.
#[derive(Default)]
pub struct RecordingCalendar {
    pub fail: bool,
    pub events: Mutex<Vec<CalendarEvent>>,
}

impl RecordingCalendar {
    pub fn failing() -> Self {
        Self {
            fail: true,
            events: Mutex::new(Vec::new()),
        }
    }

    pub fn event_count(&self) -> usize {
        self.events.lock().unwrap().len()
    }
}

#[async_trait]
impl CalendarWriter for RecordingCalendar {
    async fn add_event(&self, event: &CalendarEvent) -> Result<(), EffectError> {
        if self.fail {
            return Err(EffectError::Calendar("calendar unavailable".to_string()));
        }
        self.events.lock().unwrap().push(event.clone());
        Ok(())
    }
}

/// Notifier that records every notification, optionally failing each call.
#[derive(Default)]
pub struct RecordingNotifier {
    pub fail: bool,
    pub notifications: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn failing() -> Self {
        Self {
            fail: true,
            notifications: Mutex::new(Vec::new()),
        }
    }

    pub fn notification_count(&self) -> usize {
        self.notifications.lock().unwrap().len()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn present(&self, notification: &Notification) -> Result<(), EffectError> {
        if self.fail {
            return Err(EffectError::Notification("notifier unavailable".to_string()));
        }
        self.notifications.lock().unwrap().push(notification.clone());
        Ok(())
    }
}

pub fn sample_dish(id: DishId) -> Dish {
    Dish {
        id,
        name: format!("Dish {id}"),
        description: "A sample dish".to_string(),
        image: "images/sample.png".to_string(),
        category: "mains".to_string(),
    }
}

pub fn published_comment(id: u32, dish_id: DishId) -> Comment {
    Comment {
        id,
        dish_id,
        author: "Jay".to_string(),
        rating: MAX_RATING,
        comment: "Great".to_string(),
        date: Utc::now(),
    }
}

pub fn comment_draft(dish_id: DishId) -> CommentDraft {
    CommentDraft {
        dish_id,
        author: "Jay".to_string(),
        rating: MAX_RATING,
        comment: "Great".to_string(),
        date: Utc::now(),
    }
}

/// A fixed reservation slot used across the flow tests.
pub fn dinner_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 19, 0, 0).unwrap()
}
