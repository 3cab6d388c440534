//! Cover letter generation and download

use super::Outcome;
use crate::output::download::{save_download, COVER_LETTER_FILE_NAME};
use crate::studio::Studio;
use std::path::PathBuf;

impl Studio {
    pub async fn generate_cover_letter(&self) -> Outcome<String> {
        let form = self.with_view(|view| view.forms.cover_letter.clone());
        if form.company.is_empty() || form.job_title.is_empty() {
            return self.reject("Please provide company name and job title");
        }

        let outcome = self
            .dispatch(
                "generating cover letter",
                self.client.generate_cover_letter(&form.company, &form.job_title),
            )
            .await;

        if let Outcome::Done(letter) = &outcome {
            self.with_view(|view| view.panels.cover_letter = Some(letter.clone()));
        }
        outcome
    }

    /// Writes the letter text verbatim to `CoverLetter.txt`. An empty letter
    /// is saved as an empty file.
    pub fn download_cover_letter(&self) -> Outcome<PathBuf> {
        let text = self.with_view(|view| view.panels.cover_letter.clone().unwrap_or_default());
        let download_dir = self.config().output.download_dir.clone();

        match save_download(&download_dir, COVER_LETTER_FILE_NAME, text.as_bytes()) {
            Ok(path) => Outcome::Done(path),
            Err(e) => {
                let message = format!("Error saving cover letter: {}", e);
                self.notifier.alert(&message);
                Outcome::Failed(message)
            }
        }
    }
}
