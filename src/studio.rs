//! Shared context for the feature controllers.

use crate::api::ApiClient;
use crate::config::Config;
use crate::error::{Result, StudioError};
use crate::features::Outcome;
use crate::ui::{BusyIndicator, Notifier, Page, ViewModel};
use log::{debug, error, info};
use std::future::Future;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

pub struct Studio {
    pub(crate) client: ApiClient,
    pub(crate) busy: BusyIndicator,
    pub(crate) notifier: Arc<dyn Notifier>,
    view: Mutex<ViewModel>,
    config: Config,
    /// What settings save writes: the config as stored, without command-line
    /// overrides.
    saved_config: Config,
    config_path: Option<PathBuf>,
}

impl Studio {
    pub fn new(config: Config, notifier: Arc<dyn Notifier>, busy: BusyIndicator) -> Result<Self> {
        config.validate()?;
        let client = ApiClient::from_config(&config)?;
        info!("Using resume service at {}", client.base_url());

        Ok(Self {
            client,
            busy,
            notifier,
            view: Mutex::new(ViewModel::new()),
            saved_config: config.clone(),
            config,
            config_path: None,
        })
    }

    /// Persist settings to `path` instead of the default location.
    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    /// Persist `stored` on settings save instead of the effective config.
    pub fn with_saved_config(mut self, stored: Config) -> Self {
        self.saved_config = stored;
        self
    }

    pub fn busy(&self) -> &BusyIndicator {
        &self.busy
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub(crate) fn persist_config(&self) -> Result<PathBuf> {
        let path = self.config_path.clone().unwrap_or_else(Config::config_path);
        self.saved_config.save_to(&path)?;
        Ok(path)
    }

    /// Mutate the view. The lock is never held across an await point.
    pub fn with_view<R>(&self, f: impl FnOnce(&mut ViewModel) -> R) -> R {
        f(&mut self.lock_view())
    }

    /// Copy of the current view state.
    pub fn snapshot(&self) -> ViewModel {
        self.lock_view().clone()
    }

    pub fn show_page(&self, page: Page) {
        debug!("Showing page: {}", page.title());
        self.with_view(|view| view.show_page(page));
    }

    pub fn toggle_chat(&self) -> bool {
        self.with_view(ViewModel::toggle_chat)
    }

    fn lock_view(&self) -> MutexGuard<'_, ViewModel> {
        self.view.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Local validation failure: alert and issue no request.
    pub(crate) fn reject<T>(&self, message: &str) -> Outcome<T> {
        self.notifier.alert(message);
        Outcome::Invalid(message.to_string())
    }

    /// Run one request while holding the busy indicator. Failures are
    /// alerted as `Error <action>: <cause>`; nothing is retried.
    pub(crate) async fn dispatch<T, F>(&self, action: &str, request: F) -> Outcome<T>
    where
        F: Future<Output = Result<T>>,
    {
        let _busy = self.busy.acquire();
        match request.await {
            Ok(value) => Outcome::Done(value),
            Err(e) => {
                error!("Error {}: {}", action, e);
                let message = format!("Error {}: {}", action, e);
                self.notifier.alert(&message);
                Outcome::Failed(message)
            }
        }
    }
}

/// Message carried by a server-side rejection.
pub(crate) fn rejection_message(err: &StudioError) -> String {
    match err {
        StudioError::Rejected(message) | StudioError::Server { message, .. } => message.clone(),
        other => other.to_string(),
    }
}
