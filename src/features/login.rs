//! Login with best-effort user registration

use super::users::UserListView;
use super::Outcome;
use crate::studio::{rejection_message, Studio};
use log::{info, warn};
use std::time::Duration;

/// Result of the registration side channel. Login continues in every case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Registration {
    /// No name was given, so nothing was sent.
    Skipped,
    Recorded,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoginReport {
    pub registration: Registration,
    pub users: UserListView,
}

impl Studio {
    pub async fn login(&self) -> Outcome<LoginReport> {
        let form = self.with_view(|view| view.forms.login.clone());
        if form.email.is_empty() {
            return self.reject("Please enter email");
        }

        let login_delay = Duration::from_millis(self.config().session.login_delay_ms);
        let registration = {
            let _busy = self.busy.acquire();
            let registration = if form.name.is_empty() {
                Registration::Skipped
            } else {
                self.register_user(&form.name, &form.email).await
            };
            tokio::time::sleep(login_delay).await;
            registration
        };

        self.with_view(|view| view.enter_app());
        info!("Logged in as {}", form.email);

        let users = self.fetch_users().await;
        Outcome::Done(LoginReport { registration, users })
    }

    async fn register_user(&self, name: &str, email: &str) -> Registration {
        match self.client.add_user(name, email).await {
            Ok(()) => {
                self.notifier.toast("User recorded in database!");
                Registration::Recorded
            }
            Err(e) if e.is_rejection() => {
                let message = format!("Database Error: {}", rejection_message(&e));
                warn!("{}", message);
                self.notifier.alert(&message);
                Registration::Failed(message)
            }
            Err(e) => {
                warn!("User registration request failed: {}", e);
                let message = "Failed to connect to database endpoint.".to_string();
                self.notifier.alert(&message);
                Registration::Failed(message)
            }
        }
    }
}
