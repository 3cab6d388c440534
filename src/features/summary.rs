//! Professional summary generation

use super::Outcome;
use crate::studio::Studio;

const SUMMARY_JOB_TITLE: &str = "Professional";
const SUMMARY_SECTION: &str = "summary";

impl Studio {
    /// Writes the generated text into the resume form's summary field.
    pub async fn generate_summary(&self) -> Outcome<String> {
        let outcome = self
            .dispatch(
                "generating summary",
                self.client.generate_content(SUMMARY_JOB_TITLE, SUMMARY_SECTION),
            )
            .await;

        if let Outcome::Done(content) = &outcome {
            self.with_view(|view| view.forms.resume.summary = content.clone());
        }
        outcome
    }
}
