// src/ui.rs

pub mod alerts;
pub mod confirm;
pub mod notification;
pub mod page_init;
pub mod status_toggle;

pub use confirm::{DeleteGuard, Prompt};
pub use notification::{show_notification, Notification, Severity};
pub use status_toggle::{toggle_user_status, ToggleOutcome};
