//! Feature controllers.
//!
//! Each controller reads its form from the view-model, validates required
//! fields, performs at most one request through [`Studio::dispatch`] and
//! renders the result into its panel.
//!
//! [`Studio::dispatch`]: crate::studio::Studio

pub mod ats;
pub mod bullets;
pub mod chat;
pub mod cover_letter;
pub mod gap;
pub mod keywords;
pub mod linkedin;
pub mod login;
pub mod resume;
pub mod settings;
pub mod summary;
pub mod users;

/// How a user action ended.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// Rendered successfully.
    Done(T),
    /// A required field was missing; no request was made.
    Invalid(String),
    /// The request failed or the server reported failure.
    Failed(String),
}

impl<T> Outcome<T> {
    pub fn is_done(&self) -> bool {
        matches!(self, Outcome::Done(_))
    }

    pub fn ok(self) -> Option<T> {
        match self {
            Outcome::Done(value) => Some(value),
            Outcome::Invalid(_) | Outcome::Failed(_) => None,
        }
    }
}
