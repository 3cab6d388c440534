//! Bullet point improvement

use super::Outcome;
use crate::studio::Studio;

impl Studio {
    pub fn add_bullet_field(&self) -> usize {
        self.with_view(|view| {
            view.forms.bullets.bullets.add_field();
            view.forms.bullets.bullets.len()
        })
    }

    /// Sends only the non-empty bullets. The job description is optional.
    pub async fn improve_bullets(&self) -> Outcome<Vec<String>> {
        let (bullets, job_description) = self.with_view(|view| {
            let form = &view.forms.bullets;
            (form.bullets.submitted(), form.job_description.clone())
        });
        if bullets.is_empty() {
            return self.reject("Please add at least one bullet point");
        }

        let outcome = self
            .dispatch(
                "improving bullets",
                self.client.improve_bullets(&bullets, &job_description),
            )
            .await;

        if let Outcome::Done(improved) = &outcome {
            self.with_view(|view| view.panels.improved_bullets = Some(improved.clone()));
        }
        outcome
    }
}
