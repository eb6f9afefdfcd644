use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::enums::{NotificationCategory, NotificationKind};

/// One user-facing event. `read` is the only mutable field; everything
/// else is fixed at creation.
///
/// The serialized shape matches the payload the web client kept in
/// localStorage: camelCase keys, severity under `"type"`, and the
/// creation time under `"timestamp"` as an RFC 3339 string so it
/// round-trips to the same instant on reload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub category: NotificationCategory,
    #[serde(rename = "timestamp")]
    pub created_at: DateTime<Utc>,
    pub read: bool,
}

/// Caller-supplied fields of a notification about to be created.
#[derive(Debug, Clone, Validate)]
pub struct NewNotification {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "message must not be empty"))]
    pub message: String,
    pub kind: NotificationKind,
    pub category: NotificationCategory,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Notification {
        Notification {
            id: "n-1".to_string(),
            title: "Quiz Completed! 🎯".to_string(),
            message: "Your top match is Software Engineering.".to_string(),
            kind: NotificationKind::Success,
            category: NotificationCategory::Quiz,
            created_at: "2025-03-14T09:26:53.589Z".parse().unwrap(),
            read: false,
        }
    }

    #[test]
    fn serializes_with_web_client_field_names() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["type"], "success");
        assert_eq!(value["category"], "quiz");
        assert_eq!(value["timestamp"], "2025-03-14T09:26:53.589Z");
        assert_eq!(value["read"], false);
    }

    #[test]
    fn timestamp_round_trips_exactly() {
        let original = sample();
        let payload = serde_json::to_string(&original).unwrap();
        let reloaded: Notification = serde_json::from_str(&payload).unwrap();
        assert_eq!(reloaded.created_at, original.created_at);
        assert_eq!(reloaded, original);
    }

    #[test]
    fn empty_title_fails_validation() {
        let new = NewNotification {
            title: String::new(),
            message: "body".to_string(),
            kind: NotificationKind::Info,
            category: NotificationCategory::General,
        };
        assert!(new.validate().is_err());
    }
}
