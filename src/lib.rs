pub mod config;
pub mod constants;
pub mod core;
pub mod enums;
pub mod errors;
pub mod events;
pub mod models;
pub mod store;
pub mod utils;

pub use enums::{NotificationCategory, NotificationKind};
pub use events::DomainEvent;
pub use models::notification::Notification;
pub use store::{NotificationStore, Subscription};
