//! Typed view-model.
//!
//! Holds every form field and result panel the feature controllers read and
//! write, so controllers never look anything up by identifier.

use crate::api::types::{AtsReport, GapReport};
use crate::features::chat::Transcript;
use crate::features::linkedin::LinkedinSuggestion;
use crate::features::users::UserListView;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    Gap,
    Ats,
    Bullets,
    Resume,
    CoverLetter,
    Keywords,
    Linkedin,
    Settings,
}

impl Page {
    pub const ALL: [Page; 8] = [
        Page::Gap,
        Page::Ats,
        Page::Bullets,
        Page::Resume,
        Page::CoverLetter,
        Page::Keywords,
        Page::Linkedin,
        Page::Settings,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Page::Gap => "Resume Gap Analysis",
            Page::Ats => "ATS Checker",
            Page::Bullets => "Bullet Improver",
            Page::Resume => "Resume Builder",
            Page::CoverLetter => "Cover Letter",
            Page::Keywords => "Keyword Extractor",
            Page::Linkedin => "LinkedIn Optimizer",
            Page::Settings => "Settings",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    Login,
    App,
}

/// Growable list of bullet inputs. Starts with three empty fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulletList {
    fields: Vec<String>,
}

impl BulletList {
    pub const INITIAL_FIELDS: usize = 3;

    pub fn new() -> Self {
        let mut list = Self { fields: Vec::new() };
        for _ in 0..Self::INITIAL_FIELDS {
            list.add_field();
        }
        list
    }

    pub fn add_field(&mut self) {
        self.fields.push(String::new());
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Returns false when `index` has no field.
    pub fn set(&mut self, index: usize, value: impl Into<String>) -> bool {
        match self.fields.get_mut(index) {
            Some(field) => {
                *field = value.into();
                true
            }
            None => false,
        }
    }

    /// Type `values` into consecutive fields, adding fields when they run out.
    pub fn fill<I, S>(&mut self, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for (index, value) in values.into_iter().enumerate() {
            if index >= self.fields.len() {
                self.add_field();
            }
            self.fields[index] = value.into();
        }
    }

    /// Non-empty values in field order.
    pub fn submitted(&self) -> Vec<String> {
        self.fields.iter().filter(|v| !v.is_empty()).cloned().collect()
    }
}

impl Default for BulletList {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GapForm {
    pub resume_text: String,
    pub job_description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AtsForm {
    pub resume_text: String,
    pub resume_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulletsForm {
    pub bullets: BulletList,
    pub job_description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResumeForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub summary: String,
    /// Comma-separated, as typed.
    pub skills: String,
}

impl ResumeForm {
    /// Split on commas and trim. Empty entries are kept.
    pub fn skill_list(&self) -> Vec<String> {
        self.skills.split(',').map(|s| s.trim().to_string()).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoverLetterForm {
    pub company: String,
    pub job_title: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkedinForm {
    pub headline: String,
    pub summary: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Forms {
    pub gap: GapForm,
    pub ats: AtsForm,
    pub bullets: BulletsForm,
    pub resume: ResumeForm,
    pub cover_letter: CoverLetterForm,
    pub keywords_job_description: String,
    pub linkedin: LinkedinForm,
    pub login: LoginForm,
    pub chat_input: String,
}

/// Result panels. `None` means the panel is hidden.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Panels {
    pub gap: Option<GapReport>,
    pub ats: Option<AtsReport>,
    pub improved_bullets: Option<Vec<String>>,
    pub cover_letter: Option<String>,
    pub keywords: Option<Vec<String>>,
    pub linkedin: Option<LinkedinSuggestion>,
    pub users: Option<UserListView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel {
    pub screen: Screen,
    active_page: Page,
    pub chat_widget_visible: bool,
    pub chat_open: bool,
    pub forms: Forms,
    pub panels: Panels,
    pub transcript: Transcript,
}

impl Default for ViewModel {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewModel {
    pub fn new() -> Self {
        Self {
            screen: Screen::Login,
            active_page: Page::Gap,
            chat_widget_visible: false,
            chat_open: false,
            forms: Forms::default(),
            panels: Panels::default(),
            transcript: Transcript::default(),
        }
    }

    /// Make `page` and its nav item the only active ones.
    pub fn show_page(&mut self, page: Page) {
        self.active_page = page;
    }

    pub fn active_page(&self) -> Page {
        self.active_page
    }

    pub fn is_page_active(&self, page: Page) -> bool {
        self.active_page == page
    }

    /// Swap the login screen for the application and reveal the chat widget.
    pub fn enter_app(&mut self) {
        self.screen = Screen::App;
        self.chat_widget_visible = true;
    }

    pub fn toggle_chat(&mut self) -> bool {
        self.chat_open = !self.chat_open;
        self.chat_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bullet_list_starts_with_three_empty_fields() {
        let list = BulletList::new();
        assert_eq!(list.len(), 3);
        assert!(list.fields().iter().all(String::is_empty));
        assert!(list.submitted().is_empty());
    }

    #[test]
    fn test_bullet_list_add_and_filter() {
        let mut list = BulletList::new();
        list.add_field();
        assert_eq!(list.len(), 4);

        assert!(list.set(0, "Shipped billing service"));
        assert!(list.set(2, "Cut latency by 40%"));
        assert!(!list.set(9, "out of range"));
        assert_eq!(list.submitted(), vec!["Shipped billing service", "Cut latency by 40%"]);
    }

    #[test]
    fn test_bullet_list_fill_grows() {
        let mut list = BulletList::new();
        list.fill(["a", "b", "c", "d", "e"]);
        assert_eq!(list.len(), 5);
        assert_eq!(list.submitted().len(), 5);
    }

    #[test]
    fn test_skill_list_trims_and_keeps_empties() {
        let form = ResumeForm {
            skills: " Rust, Go ,, SQL".to_string(),
            ..Default::default()
        };
        assert_eq!(form.skill_list(), vec!["Rust", "Go", "", "SQL"]);
        assert_eq!(ResumeForm::default().skill_list(), vec![""]);
    }

    #[test]
    fn test_navigation_keeps_single_active_page() {
        let mut view = ViewModel::new();
        view.show_page(Page::Keywords);
        let active: Vec<_> = Page::ALL.iter().filter(|p| view.is_page_active(**p)).collect();
        assert_eq!(active, vec![&Page::Keywords]);
    }

    #[test]
    fn test_enter_app_and_toggle_chat() {
        let mut view = ViewModel::new();
        assert_eq!(view.screen, Screen::Login);
        view.enter_app();
        assert_eq!(view.screen, Screen::App);
        assert!(view.chat_widget_visible);
        assert!(view.toggle_chat());
        assert!(!view.toggle_chat());
    }
}
