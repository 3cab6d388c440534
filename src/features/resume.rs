//! Resume PDF generation and download

use super::Outcome;
use crate::api::types::ResumeRequest;
use crate::output::download::{resume_file_name, save_download};
use crate::studio::Studio;
use log::info;
use std::path::PathBuf;

impl Studio {
    /// Saves the generated document into the download directory and returns
    /// its path. The bytes are written as received.
    pub async fn download_resume(&self) -> Outcome<PathBuf> {
        let form = self.with_view(|view| view.forms.resume.clone());
        if form.full_name.is_empty() {
            return self.reject("Please enter your full name");
        }

        let skills = form.skill_list();
        let download_dir = self.config().output.download_dir.clone();
        let request = ResumeRequest {
            full_name: &form.full_name,
            email: &form.email,
            phone: &form.phone,
            summary: &form.summary,
            skills: &skills,
        };

        let outcome = self
            .dispatch("downloading resume", async {
                let bytes = self.client.generate_resume(&request).await?;
                info!("Received {} bytes of resume document", bytes.len());
                save_download(&download_dir, &resume_file_name(&form.full_name), &bytes)
            })
            .await;

        if outcome.is_done() {
            self.notifier.toast("Resume downloaded!");
        }
        outcome
    }
}
