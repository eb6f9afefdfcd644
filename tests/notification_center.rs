//! End-to-end tests over the file-backed persistence slot.

use std::cell::Cell;
use std::fs;
use std::rc::Rc;

use careerdisha_notify::core::storage::file_slot::FileSlot;
use careerdisha_notify::{DomainEvent, NotificationCategory, NotificationKind, NotificationStore};

#[test]
fn file_backed_round_trip_preserves_state() {
    let dir = tempfile::tempdir().unwrap();

    let store = NotificationStore::new(FileSlot::new(dir.path(), "notifications"));
    let added = store
        .add(
            "Quiz Completed! 🎯",
            "Your top match is Data Science.",
            NotificationKind::Success,
            NotificationCategory::Quiz,
        )
        .unwrap();
    store.mark_read(&added.id);
    let expected = store.list();
    drop(store);

    let reopened = NotificationStore::new(FileSlot::new(dir.path(), "notifications"));
    let list = reopened.list();
    assert_eq!(list, expected);
    assert_eq!(list[0].id, added.id);
    assert!(list[0].read);
    assert_eq!(list[0].created_at, added.created_at);
}

#[test]
fn corrupt_slot_file_resets_to_bootstrap_inbox() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("notifications.json"), "not json at all").unwrap();

    let store = NotificationStore::new(FileSlot::new(dir.path(), "notifications"));
    let list = store.list();
    assert_eq!(list.len(), 3);
    assert_eq!(list[0].title, "Welcome to CareerDisha! 🎉");

    // The reset inbox was written back out and loads cleanly next time.
    let reopened = NotificationStore::new(FileSlot::new(dir.path(), "notifications"));
    assert_eq!(reopened.list().len(), 3);
}

#[test]
fn bell_observer_tracks_unread_count_across_a_session() {
    let dir = tempfile::tempdir().unwrap();
    let store = NotificationStore::new(FileSlot::new(dir.path(), "notifications"));

    let badge = Rc::new(Cell::new(0usize));
    let _sub = store.subscribe({
        let badge = Rc::clone(&badge);
        move |snapshot| badge.set(snapshot.iter().filter(|n| !n.read).count())
    });
    assert_eq!(badge.get(), 3);

    store
        .publish(DomainEvent::ResourceAdded {
            resource_type: "PDF".to_string(),
            title: "Scholarship Guide 2026".to_string(),
        })
        .unwrap();
    assert_eq!(badge.get(), 4);
    assert_eq!(store.unread_count(), 4);

    store.mark_all_read();
    assert_eq!(badge.get(), 0);

    store.clear_all();
    assert!(store.list().is_empty());

    // An explicitly cleared inbox stays empty on the next launch.
    drop(store);
    let reopened = NotificationStore::new(FileSlot::new(dir.path(), "notifications"));
    assert!(reopened.list().is_empty());
    assert_eq!(reopened.unread_count(), 0);
}
