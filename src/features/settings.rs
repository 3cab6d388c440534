//! Settings persistence

use super::Outcome;
use crate::studio::Studio;
use log::info;
use std::path::PathBuf;
use std::time::Duration;

impl Studio {
    /// Hold the busy indicator for the configured delay, write the current
    /// configuration, then confirm.
    pub async fn save_settings(&self) -> Outcome<PathBuf> {
        let delay = Duration::from_millis(self.config().session.settings_delay_ms);

        let saved = {
            let _busy = self.busy.acquire();
            tokio::time::sleep(delay).await;
            self.persist_config()
        };

        match saved {
            Ok(path) => {
                info!("Settings written to {}", path.display());
                self.notifier.toast("Settings saved successfully!");
                Outcome::Done(path)
            }
            Err(e) => {
                let message = format!("Error saving settings: {}", e);
                self.notifier.alert(&message);
                Outcome::Failed(message)
            }
        }
    }
}
