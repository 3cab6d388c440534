//! Output formatters for result panels: console, JSON and HTML

use crate::api::types::{AtsReport, GapReport};
use crate::config::OutputFormat;
use crate::error::{Result, StudioError};
use crate::features::chat::{ChatMessage, Sender};
use crate::features::linkedin::LinkedinSuggestion;
use crate::features::users::UserListView;
use crate::ui::Page;
use askama::Template;
use colored::{Color, Colorize};
use serde::Serialize;
use std::path::PathBuf;

/// Anything a command can show once it completes.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "panel", content = "data", rename_all = "snake_case")]
pub enum Panel {
    Gap(GapReport),
    Ats(AtsReport),
    ImprovedBullets(Vec<String>),
    Summary(String),
    CoverLetter(String),
    Keywords(Vec<String>),
    Linkedin(LinkedinSuggestion),
    Users(UserListView),
    Chat(Vec<ChatMessage>),
    Download(PathBuf),
}

/// Trait for formatting result panels
pub trait OutputFormatter {
    fn format_panel(&self, panel: &Panel) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors
pub struct ConsoleFormatter {
    use_colors: bool,
}

/// JSON formatter for scripting
pub struct JsonFormatter {
    pretty: bool,
}

/// HTML fragment formatter
pub struct HtmlFormatter;

/// Coordinates the formatters
pub struct PanelRenderer {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    html_formatter: HtmlFormatter,
}

#[derive(Template)]
#[template(source = r#"<section class="result-panel">
    <h2>{{ title }}</h2>
    {% if let Some(score) = score %}<div class="score">{{ score }}</div>{% endif %}
    {% if let Some(status) = status %}<p class="status">{{ status }}</p>{% endif %}
    {% if let Some(description) = description %}<p class="description">{{ description }}</p>{% endif %}
    {% if !tags.is_empty() %}<div class="keywords">{% for tag in tags %}<span class="keyword-tag">{{ tag }}</span>{% endfor %}</div>{% endif %}
    {% if !missing_tags.is_empty() %}<div class="keywords missing">{% for tag in missing_tags %}<span class="keyword-tag">{{ tag }}</span>{% endfor %}</div>{% endif %}
    {% if !items.is_empty() %}<ul>{% for item in items %}<li>{{ item }}</li>{% endfor %}</ul>{% endif %}
    {% for paragraph in paragraphs %}<p>{{ paragraph }}</p>
    {% endfor %}
</section>"#, ext = "html")]
struct PanelTemplate {
    title: String,
    score: Option<u32>,
    status: Option<String>,
    description: Option<String>,
    tags: Vec<String>,
    missing_tags: Vec<String>,
    items: Vec<String>,
    paragraphs: Vec<String>,
}

impl PanelTemplate {
    fn titled(title: &str) -> Self {
        Self {
            title: title.to_string(),
            score: None,
            status: None,
            description: None,
            tags: Vec::new(),
            missing_tags: Vec::new(),
            items: Vec::new(),
            paragraphs: Vec::new(),
        }
    }
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str) -> String {
        if self.use_colors {
            format!("\n{} {}\n", "▓".blue().bold(), title.blue().bold())
        } else {
            format!("\n# {}\n", title)
        }
    }

    fn format_tags(&self, tags: &[String]) -> String {
        if tags.is_empty() {
            return "  (none)\n".to_string();
        }
        let joined = tags
            .iter()
            .map(|tag| format!("[{}]", self.colorize(tag, Color::Cyan)))
            .collect::<Vec<_>>()
            .join(" ");
        format!("  {}\n", joined)
    }

    fn format_score(&self, score: u32) -> String {
        let color = match score {
            70..=u32::MAX => Color::Green,
            50..=69 => Color::Yellow,
            _ => Color::Red,
        };
        self.colorize(&score.to_string(), color)
    }

    /// One chat line, prefixed by who sent it.
    pub fn format_message(&self, message: &ChatMessage) -> String {
        match message.sender {
            Sender::User => format!("{} {}", self.colorize("you ›", Color::BrightBlack), message.text),
            Sender::Bot => format!("{} {}", self.colorize("coach ›", Color::Green), message.text),
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_panel(&self, panel: &Panel) -> Result<String> {
        let mut output = String::new();

        match panel {
            Panel::Gap(report) => {
                output.push_str(&self.format_header("Compatibility"));
                output.push_str(&format!(
                    "Score: {}  Status: {}\n",
                    self.format_score(report.analysis.score),
                    self.colorize(&report.status, Color::Cyan)
                ));
                output.push_str(&format!("{}\n", report.match_description()));
                output.push_str(&self.format_header("Matching Keywords"));
                output.push_str(&self.format_tags(&report.analysis.matching_keywords));
                output.push_str(&self.format_header("Missing Keywords"));
                output.push_str(&self.format_tags(&report.analysis.missing_keywords));
                output.push_str(&self.format_header("Suggestions"));
                for suggestion in &report.suggestions {
                    output.push_str(&format!("  💡 {}\n", suggestion));
                }
            }
            Panel::Ats(report) => {
                output.push_str(&self.format_header("ATS Score"));
                output.push_str(&format!("Score: {}\n", self.format_score(report.score)));
                output.push_str(&format!("ATS Compatibility: {}\n", report.status));
                for issue in &report.issues {
                    output.push_str(&format!("  ⚠️  {}\n", self.colorize(issue, Color::Yellow)));
                }
            }
            Panel::ImprovedBullets(bullets) => {
                output.push_str(&self.format_header("Improved Bullets"));
                for bullet in bullets {
                    output.push_str(&format!("  ✨ {}\n", bullet));
                }
            }
            Panel::Summary(summary) => {
                output.push_str(&self.format_header("Professional Summary"));
                output.push_str(&format!("{}\n", summary));
            }
            Panel::CoverLetter(letter) => {
                output.push_str(&self.format_header("Cover Letter"));
                output.push_str(&format!("{}\n", letter));
            }
            Panel::Keywords(keywords) => {
                output.push_str(&self.format_header("Keywords"));
                output.push_str(&self.format_tags(keywords));
            }
            Panel::Linkedin(suggestion) => {
                output.push_str(&self.format_header("Optimized Headline"));
                output.push_str(&format!("{}\n", suggestion.headline));
                output.push_str(&self.format_header("Optimized Summary"));
                output.push_str(&format!("{}\n", suggestion.summary));
            }
            Panel::Users(users) => {
                output.push_str(&self.format_header("Users"));
                match users {
                    UserListView::Users(records) => {
                        for user in records {
                            output.push_str(&format!(
                                "  {} <{}>\n",
                                self.colorize(user.display_name(), Color::White),
                                user.email.as_deref().unwrap_or_default()
                            ));
                        }
                    }
                    other => {
                        let color = match other {
                            UserListView::Empty => Color::BrightBlack,
                            _ => Color::Red,
                        };
                        let message = other.message().unwrap_or_default();
                        output.push_str(&format!("  {}\n", self.colorize(message, color)));
                    }
                }
            }
            Panel::Chat(messages) => {
                for message in messages {
                    output.push_str(&self.format_message(message));
                    output.push('\n');
                }
            }
            Panel::Download(path) => {
                output.push_str(&format!("Saved to {}\n", self.colorize(&path.display().to_string(), Color::Green)));
            }
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_panel(&self, panel: &Panel) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(panel)?)
        } else {
            Ok(serde_json::to_string(panel)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl HtmlFormatter {
    fn create_template_data(&self, panel: &Panel) -> PanelTemplate {
        match panel {
            Panel::Gap(report) => {
                let mut data = PanelTemplate::titled(Page::Gap.title());
                data.score = Some(report.analysis.score);
                data.status = Some(report.status.clone());
                data.description = Some(report.match_description());
                data.tags = report.analysis.matching_keywords.clone();
                data.missing_tags = report.analysis.missing_keywords.clone();
                data.items = report.suggestions.iter().map(|s| format!("💡 {}", s)).collect();
                data
            }
            Panel::Ats(report) => {
                let mut data = PanelTemplate::titled(Page::Ats.title());
                data.score = Some(report.score);
                data.status = Some(format!("ATS Compatibility: {}", report.status));
                data.items = report.issues.iter().map(|i| format!("⚠️ {}", i)).collect();
                data
            }
            Panel::ImprovedBullets(bullets) => {
                let mut data = PanelTemplate::titled("Improved Bullets");
                data.paragraphs = bullets.iter().map(|b| format!("✨ {}", b)).collect();
                data
            }
            Panel::Summary(summary) => {
                let mut data = PanelTemplate::titled("Professional Summary");
                data.paragraphs = vec![summary.clone()];
                data
            }
            Panel::CoverLetter(letter) => {
                let mut data = PanelTemplate::titled(Page::CoverLetter.title());
                data.paragraphs = letter.split("\n\n").map(str::to_string).collect();
                data
            }
            Panel::Keywords(keywords) => {
                let mut data = PanelTemplate::titled(Page::Keywords.title());
                data.tags = keywords.clone();
                data
            }
            Panel::Linkedin(suggestion) => {
                let mut data = PanelTemplate::titled(Page::Linkedin.title());
                data.status = Some(suggestion.headline.clone());
                data.paragraphs = suggestion.summary.lines().map(str::to_string).collect();
                data
            }
            Panel::Users(users) => {
                let mut data = PanelTemplate::titled("Users");
                match users {
                    UserListView::Users(records) => {
                        data.items = records
                            .iter()
                            .map(|u| format!("{} <{}>", u.display_name(), u.email.as_deref().unwrap_or_default()))
                            .collect();
                    }
                    other => data.description = other.message().map(str::to_string),
                }
                data
            }
            Panel::Chat(messages) => {
                let mut data = PanelTemplate::titled("Chat");
                data.paragraphs = messages
                    .iter()
                    .map(|m| match m.sender {
                        Sender::User => format!("You: {}", m.text),
                        Sender::Bot => format!("Coach: {}", m.text),
                    })
                    .collect();
                data
            }
            Panel::Download(path) => {
                let mut data = PanelTemplate::titled("Download");
                data.description = Some(path.display().to_string());
                data
            }
        }
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_panel(&self, panel: &Panel) -> Result<String> {
        self.create_template_data(panel)
            .render()
            .map_err(|e| StudioError::OutputFormatting(e.to_string()))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Html
    }
}

impl PanelRenderer {
    pub fn new(use_colors: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors),
            json_formatter: JsonFormatter::new(true),
            html_formatter: HtmlFormatter,
        }
    }

    pub fn render(&self, panel: &Panel, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_panel(panel),
            OutputFormat::Json => self.json_formatter.format_panel(panel),
            OutputFormat::Html => self.html_formatter.format_panel(panel),
        }
    }

    pub fn console(&self) -> &ConsoleFormatter {
        &self.console_formatter
    }
}

impl Default for PanelRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
