use std::cell::RefCell;
use std::rc::{Rc, Weak};

use chrono::{Duration, Utc};
use uuid::Uuid;
use validator::Validate;

use crate::constants::NOTIFICATIONS_SLOT_KEY;
use crate::core::storage::{StorageSlot, file_slot::FileSlot};
use crate::enums::{NotificationCategory, NotificationKind};
use crate::errors::Error;
use crate::events::DomainEvent;
use crate::models::notification::{NewNotification, Notification};

type Observer = Rc<dyn Fn(&[Notification])>;

/// Single source of truth for the session's notifications.
///
/// Cloning the store yields another handle to the same state, so feature
/// screens and UI observers can share one instance while tests construct
/// isolated ones against a fake slot. All operations are synchronous:
/// a mutation persists the full set and fans out to every subscriber
/// before returning.
#[derive(Clone)]
pub struct NotificationStore {
    inner: Rc<RefCell<Inner>>,
}

struct Inner {
    notifications: Vec<Notification>,
    observers: Vec<(u64, Observer)>,
    next_observer_id: u64,
    slot: Box<dyn StorageSlot>,
}

/// Handle returned by [`NotificationStore::subscribe`]. `cancel` is
/// idempotent and may be called from inside an observer callback.
pub struct Subscription {
    inner: Weak<RefCell<Inner>>,
    id: u64,
}

impl Subscription {
    pub fn cancel(&self) {
        if let Some(inner) = self.inner.upgrade() {
            inner.borrow_mut().observers.retain(|(id, _)| *id != self.id);
        }
    }
}

impl NotificationStore {
    /// Builds a store over the given slot. A persisted set is loaded as-is
    /// (including an explicitly cleared, empty one); an absent or
    /// unparseable payload falls back to the bootstrap seed, which is
    /// persisted immediately.
    pub fn new(slot: impl StorageSlot + 'static) -> Self {
        let (notifications, seeded) = load_or_seed(&slot);
        let inner = Inner {
            notifications,
            observers: Vec::new(),
            next_observer_id: 0,
            slot: Box::new(slot),
        };
        if seeded {
            inner.persist();
        }
        NotificationStore {
            inner: Rc::new(RefCell::new(inner)),
        }
    }

    /// Store over the default file-backed slot from `APP_CONFIG`.
    pub fn open_default() -> Self {
        Self::new(FileSlot::from_config(NOTIFICATIONS_SLOT_KEY))
    }

    /// Creates a notification and returns it. Rejects empty titles and
    /// messages; persistence trouble is logged, never surfaced.
    pub fn add(
        &self,
        title: impl Into<String>,
        message: impl Into<String>,
        kind: NotificationKind,
        category: NotificationCategory,
    ) -> Result<Notification, Error> {
        let new = NewNotification {
            title: title.into(),
            message: message.into(),
            kind,
            category,
        };
        new.validate()?;

        let now = Utc::now();
        let notification = Notification {
            // Millisecond prefix plus a random suffix keeps ids unique even
            // for same-millisecond calls.
            id: format!("{}{}", now.timestamp_millis(), Uuid::new_v4().simple()),
            title: new.title,
            message: new.message,
            kind,
            category,
            created_at: now,
            read: false,
        };

        {
            let mut inner = self.inner.borrow_mut();
            inner.notifications.insert(0, notification.clone());
            inner.persist();
        }
        self.dispatch();

        Ok(notification)
    }

    /// Renders a domain event through its template and adds it.
    pub fn publish(&self, event: DomainEvent) -> Result<Notification, Error> {
        self.add(event.title(), event.message(), event.kind(), event.category())
    }

    /// Snapshot of the live set, newest first. The caller owns the copy.
    pub fn list(&self) -> Vec<Notification> {
        self.inner.borrow().sorted_snapshot()
    }

    pub fn unread_count(&self) -> usize {
        self.inner
            .borrow()
            .notifications
            .iter()
            .filter(|n| !n.read)
            .count()
    }

    /// Marks one notification read. Unknown ids are a benign no-op so a
    /// mark racing a deletion never errors.
    pub fn mark_read(&self, id: &str) {
        let changed = {
            let mut inner = self.inner.borrow_mut();
            let found = match inner.notifications.iter_mut().find(|n| n.id == id) {
                Some(notification) => {
                    notification.read = true;
                    true
                }
                None => false,
            };
            if found {
                inner.persist();
            }
            found
        };
        if changed {
            self.dispatch();
        }
    }

    pub fn mark_all_read(&self) {
        {
            let mut inner = self.inner.borrow_mut();
            for notification in &mut inner.notifications {
                notification.read = true;
            }
            inner.persist();
        }
        self.dispatch();
    }

    /// Deletes one notification; unknown ids are a no-op.
    pub fn remove(&self, id: &str) {
        {
            let mut inner = self.inner.borrow_mut();
            inner.notifications.retain(|n| n.id != id);
            inner.persist();
        }
        self.dispatch();
    }

    pub fn clear_all(&self) {
        {
            let mut inner = self.inner.borrow_mut();
            inner.notifications.clear();
            inner.persist();
        }
        self.dispatch();
    }

    /// Registers an observer and immediately calls it with the current
    /// snapshot, so late subscribers need no separate initial fetch. The
    /// observer runs again, synchronously, after every mutation.
    pub fn subscribe(&self, observer: impl Fn(&[Notification]) + 'static) -> Subscription {
        let observer: Observer = Rc::new(observer);
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_observer_id;
            inner.next_observer_id += 1;
            inner.observers.push((id, Rc::clone(&observer)));
            id
        };

        let snapshot = self.inner.borrow().sorted_snapshot();
        observer(&snapshot);

        Subscription {
            inner: Rc::downgrade(&self.inner),
            id,
        }
    }

    fn dispatch(&self) {
        // Iterate over a copy of the registry so an observer may cancel
        // itself (or subscribe another) mid-dispatch.
        let (snapshot, observers) = {
            let inner = self.inner.borrow();
            let observers: Vec<Observer> =
                inner.observers.iter().map(|(_, o)| Rc::clone(o)).collect();
            (inner.sorted_snapshot(), observers)
        };
        for observer in observers {
            observer(&snapshot);
        }
    }
}

impl Inner {
    fn sorted_snapshot(&self) -> Vec<Notification> {
        let mut snapshot = self.notifications.clone();
        // Stable sort: identical timestamps keep their insertion order.
        snapshot.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        snapshot
    }

    fn persist(&self) {
        let payload = match serde_json::to_string(&self.notifications) {
            Ok(payload) => payload,
            Err(err) => {
                tracing::warn!("Failed to serialize notifications: {err}");
                return;
            }
        };
        if let Err(err) = self.slot.store(&payload) {
            tracing::warn!("Failed to save notifications to storage: {err}");
        }
    }
}

fn load_or_seed(slot: &dyn StorageSlot) -> (Vec<Notification>, bool) {
    match slot.load() {
        Ok(Some(payload)) => match serde_json::from_str::<Vec<Notification>>(&payload) {
            Ok(notifications) => return (notifications, false),
            Err(err) => {
                tracing::warn!("Discarding unparseable notification payload: {err}");
            }
        },
        Ok(None) => {}
        Err(err) => {
            tracing::warn!("Error loading notifications from storage: {err}");
        }
    }
    (bootstrap_seed(), true)
}

/// First-run inbox: fixed sample notifications with staggered ages so a
/// new user sees a plausibly lived-in panel.
fn bootstrap_seed() -> Vec<Notification> {
    let now = Utc::now();
    vec![
        Notification {
            id: "welcome".to_string(),
            title: "Welcome to CareerDisha! 🎉".to_string(),
            message: "Complete your career assessment quiz to get personalized career recommendations."
                .to_string(),
            kind: NotificationKind::Info,
            category: NotificationCategory::Quiz,
            created_at: now,
            read: false,
        },
        Notification {
            id: "new-resources".to_string(),
            title: "New Resources Added".to_string(),
            message: "5 new career guidance videos and PDFs have been added to our library."
                .to_string(),
            kind: NotificationKind::Success,
            category: NotificationCategory::Resources,
            created_at: now - Duration::hours(2),
            read: false,
        },
        Notification {
            id: "ai-chatbot".to_string(),
            title: "AI Assistant Available".to_string(),
            message: "Need career guidance? Chat with our AI assistant powered by Google AI."
                .to_string(),
            kind: NotificationKind::Info,
            category: NotificationCategory::General,
            created_at: now - Duration::hours(24),
            read: false,
        },
    ]
}
