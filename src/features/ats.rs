//! ATS compatibility check, from pasted text or an uploaded PDF

use super::Outcome;
use crate::api::types::AtsReport;
use crate::cli::validate_file_extension;
use crate::studio::Studio;
use log::info;

impl Studio {
    /// The uploaded file takes precedence over pasted text.
    pub async fn check_ats(&self) -> Outcome<AtsReport> {
        let form = self.with_view(|view| view.forms.ats.clone());
        if form.resume_text.is_empty() && form.resume_file.is_none() {
            return self.reject("Please upload a resume (PDF) or paste resume text");
        }

        let outcome = match &form.resume_file {
            Some(path) => {
                if let Err(e) = validate_file_extension(path, &["pdf"]) {
                    return self.reject(&format!("Resume upload: {}", e));
                }
                info!("Uploading {} for ATS check", path.display());
                self.dispatch("checking ATS", self.client.ats_check_upload(path)).await
            }
            None => {
                self.dispatch("checking ATS", self.client.ats_check(&form.resume_text))
                    .await
            }
        };

        if let Outcome::Done(report) = &outcome {
            self.with_view(|view| view.panels.ats = Some(report.clone()));
        }
        outcome
    }
}
