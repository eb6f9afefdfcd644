/// Slot key the notification set is persisted under, kept identical to the
/// key the web client used for its localStorage entry.
pub const NOTIFICATIONS_SLOT_KEY: &str = "careerdisha_notifications";
