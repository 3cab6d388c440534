//! Blocking alerts and transient success toasts

use colored::Colorize;
use std::sync::{Mutex, PoisonError};

pub trait Notifier: Send + Sync {
    /// A failure the user must see before continuing.
    fn alert(&self, message: &str);

    /// A short-lived success message.
    fn toast(&self, message: &str);
}

pub struct ConsoleNotifier {
    use_colors: bool,
}

impl ConsoleNotifier {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }
}

impl Notifier for ConsoleNotifier {
    fn alert(&self, message: &str) {
        if self.use_colors {
            eprintln!("{} {}", "✖".red().bold(), message.red());
        } else {
            eprintln!("[!] {}", message);
        }
    }

    fn toast(&self, message: &str) {
        if self.use_colors {
            println!("{} {}", "✔".green().bold(), message.green());
        } else {
            println!("[+] {}", message);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Alert(String),
    Toast(String),
}

/// Keeps every notification in order instead of printing it.
#[derive(Default)]
pub struct MemoryNotifier {
    log: Mutex<Vec<Notification>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.log.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.notifications()
            .into_iter()
            .filter_map(|n| match n {
                Notification::Alert(message) => Some(message),
                Notification::Toast(_) => None,
            })
            .collect()
    }

    pub fn toasts(&self) -> Vec<String> {
        self.notifications()
            .into_iter()
            .filter_map(|n| match n {
                Notification::Toast(message) => Some(message),
                Notification::Alert(_) => None,
            })
            .collect()
    }

    fn push(&self, notification: Notification) {
        self.log
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notification);
    }
}

impl Notifier for MemoryNotifier {
    fn alert(&self, message: &str) {
        self.push(Notification::Alert(message.to_string()));
    }

    fn toast(&self, message: &str) {
        self.push(Notification::Toast(message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_notifier_keeps_order() {
        let notifier = MemoryNotifier::new();
        notifier.toast("saved");
        notifier.alert("broken");
        notifier.toast("again");

        assert_eq!(
            notifier.notifications(),
            vec![
                Notification::Toast("saved".to_string()),
                Notification::Alert("broken".to_string()),
                Notification::Toast("again".to_string()),
            ]
        );
        assert_eq!(notifier.alerts(), vec!["broken"]);
        assert_eq!(notifier.toasts().len(), 2);
    }
}
