//! Local keyword extraction.
//!
//! A placeholder heuristic: lower-case, split on whitespace, keep tokens
//! longer than four characters, drop repeats, stop at fifteen. No stemming,
//! no stop words, no frequency ranking.

use super::Outcome;
use crate::studio::Studio;
use std::collections::HashSet;

pub const MAX_KEYWORDS: usize = 15;
pub const MIN_KEYWORD_CHARS: usize = 5;

pub fn extract_keywords(job_description: &str) -> Vec<String> {
    let lowered = job_description.to_lowercase();
    let mut seen = HashSet::new();

    lowered
        .split_whitespace()
        .filter(|word| word.chars().count() >= MIN_KEYWORD_CHARS)
        .filter(|word| seen.insert(*word))
        .take(MAX_KEYWORDS)
        .map(str::to_string)
        .collect()
}

impl Studio {
    pub fn extract_keywords(&self) -> Outcome<Vec<String>> {
        let job_description = self.with_view(|view| view.forms.keywords_job_description.clone());
        if job_description.is_empty() {
            return self.reject("Please provide job description");
        }

        let keywords = extract_keywords(&job_description);
        self.with_view(|view| view.panels.keywords = Some(keywords.clone()));
        Outcome::Done(keywords)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_description() {
        let keywords = extract_keywords("Experienced Software Engineer with Python and React skills");
        assert_eq!(
            keywords,
            vec!["experienced", "software", "engineer", "python", "react", "skills"]
        );
    }

    #[test]
    fn test_dedup_keeps_first_seen_order() {
        let keywords = extract_keywords("Rust rust RUST tokio\n\tTokio serde");
        assert_eq!(keywords, vec!["tokio", "serde"]);
    }

    #[test]
    fn test_punctuation_is_part_of_the_token() {
        let keywords = extract_keywords("Kafka, kafka");
        assert_eq!(keywords, vec!["kafka,", "kafka"]);
    }

    #[test]
    fn test_caps_at_fifteen() {
        let text: Vec<String> = (0..40).map(|i| format!("keyword{:02}", i)).collect();
        let keywords = extract_keywords(&text.join(" "));
        assert_eq!(keywords.len(), MAX_KEYWORDS);
        assert_eq!(keywords[0], "keyword00");
        assert_eq!(keywords[14], "keyword14");
    }

    #[test]
    fn test_output_invariants() {
        let text = "Senior Backend Engineer; distributed systems, Kubernetes, observability. \
                    Senior engineers mentor juniors and own distributed services end-to-end. \
                    Experience with PostgreSQL, Redis, Kafka, gRPC, Terraform, and AWS required.";
        let keywords = extract_keywords(text);

        assert!(keywords.len() <= MAX_KEYWORDS);
        let unique: HashSet<_> = keywords.iter().collect();
        assert_eq!(unique.len(), keywords.len());
        for keyword in &keywords {
            assert!(keyword.chars().count() > 4);
            assert_eq!(keyword, &keyword.to_lowercase());
        }
    }

    #[test]
    fn test_short_words_only() {
        assert!(extract_keywords("a an the and with").is_empty());
        assert!(extract_keywords("").is_empty());
    }
}
