//! LinkedIn headline and summary suggestions, templated locally

use super::Outcome;
use crate::studio::Studio;
use serde::Serialize;

pub const HEADLINE_SUFFIX: &str = " | AI-Driven Professional | Open to Opportunities";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkedinSuggestion {
    pub headline: String,
    pub summary: String,
}

/// Deterministic in its inputs. The summary splices in the last two
/// space-separated tokens of the headline; the current summary is not used.
pub fn optimize_profile(headline: &str, _summary: &str) -> LinkedinSuggestion {
    let tokens: Vec<&str> = headline.split(' ').collect();
    let expertise = tokens[tokens.len().saturating_sub(2)..].join(" ");

    LinkedinSuggestion {
        headline: format!("{}{}", headline, HEADLINE_SUFFIX),
        summary: format!(
            "Innovative professional with expertise in {}. \n\
             Passionate about delivering results and driving impact. \n\
             Skilled in problem-solving, team collaboration, and continuous learning.",
            expertise
        ),
    }
}

impl Studio {
    pub fn optimize_linkedin(&self) -> Outcome<LinkedinSuggestion> {
        let form = self.with_view(|view| view.forms.linkedin.clone());
        if form.headline.is_empty() || form.summary.is_empty() {
            return self.reject("Please provide headline and summary");
        }

        let suggestion = optimize_profile(&form.headline, &form.summary);
        self.with_view(|view| view.panels.linkedin = Some(suggestion.clone()));
        Outcome::Done(suggestion)
    }
}
