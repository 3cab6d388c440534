//! Terminal presentation state: busy indicator, notifications and the view-model

pub mod busy;
pub mod notify;
pub mod view;

pub use busy::{BusyGuard, BusyIndicator};
pub use notify::{ConsoleNotifier, MemoryNotifier, Notification, Notifier};
pub use view::{Page, Screen, ViewModel};
