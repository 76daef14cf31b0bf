use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::RwLock;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Notification {
    pub id: u64,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    #[serde(rename = "createdAt")]
    #[schema(format = "date-time", value_type = String)]
    pub created_at: DateTime<Utc>,
}

/// Notifications kept for the lifetime of the server process. Shared through
/// `web::Data`; contents are gone after a restart.
#[derive(Default)]
pub struct NotificationStore {
    items: RwLock<Vec<Notification>>,
}

impl NotificationStore {
    pub fn push(&self, title: String, message: String, kind: Option<String>) -> Notification {
        let mut items = self.items.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        let notification = Notification {
            id: items.len() as u64 + 1,
            title,
            message,
            kind,
            created_at: Utc::now(),
        };
        items.push(notification.clone());
        notification
    }

    pub fn all(&self) -> Vec<Notification> {
        self.items
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_sequential_from_one() {
        let store = NotificationStore::default();
        let first = store.push("Holiday".into(), "Office closed".into(), None);
        let second = store.push("Town hall".into(), "Friday 4pm".into(), Some("event".into()));

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(store.all().len(), 2);
    }
}
