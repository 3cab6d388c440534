//! Resume gap analysis

use super::Outcome;
use crate::api::types::GapReport;
use crate::studio::Studio;

impl Studio {
    pub async fn analyze_gap(&self) -> Outcome<GapReport> {
        let form = self.with_view(|view| view.forms.gap.clone());
        if form.resume_text.is_empty() || form.job_description.is_empty() {
            return self.reject("Please provide both resume and job description");
        }

        let outcome = self
            .dispatch(
                "analyzing gap",
                self.client.analyze_gap(&form.resume_text, &form.job_description),
            )
            .await;

        if let Outcome::Done(report) = &outcome {
            self.with_view(|view| view.panels.gap = Some(report.clone()));
        }
        outcome
    }
}
