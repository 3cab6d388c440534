//! CLI interface for the resume studio

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-studio")]
#[command(about = "Terminal client for AI-assisted resume tooling")]
#[command(long_about = "Gap analysis, ATS checks, bullet improvement, resume and cover letter generation, and a career chatbot backed by a remote resume service")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the service base URL
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Output format: console, json, html
    #[arg(short, long, global = true)]
    pub output: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compare a resume against a job description
    Gap {
        /// Resume file (PDF, TXT, MD)
        #[arg(short, long, conflicts_with = "resume_text")]
        resume: Option<PathBuf>,

        /// Resume text given inline
        #[arg(long)]
        resume_text: Option<String>,

        /// Job description file (TXT, MD)
        #[arg(short, long, conflicts_with = "job_text")]
        job: Option<PathBuf>,

        /// Job description given inline
        #[arg(long)]
        job_text: Option<String>,
    },

    /// Score a resume for ATS compatibility
    Ats {
        /// Resume PDF to upload
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Resume text file (TXT, MD) to send as text
        #[arg(short, long, conflicts_with = "resume_text")]
        resume: Option<PathBuf>,

        /// Resume text given inline
        #[arg(long)]
        resume_text: Option<String>,
    },

    /// Rewrite resume bullet points
    Bullets {
        /// Bullet point, may be repeated
        #[arg(short, long = "bullet")]
        bullets: Vec<String>,

        /// Job description given inline
        #[arg(short, long)]
        job_text: Option<String>,
    },

    /// Generate and download a resume PDF
    Resume {
        /// Full name
        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long)]
        email: Option<String>,

        #[arg(short, long)]
        phone: Option<String>,

        /// Professional summary
        #[arg(short, long)]
        summary: Option<String>,

        /// Comma-separated skills
        #[arg(short = 'k', long)]
        skills: Option<String>,

        /// Ask the service to write the summary first
        #[arg(long)]
        generate_summary: bool,
    },

    /// Generate a professional summary
    Summary,

    /// Generate a cover letter
    CoverLetter {
        #[arg(long)]
        company: Option<String>,

        /// Job title
        #[arg(short, long)]
        title: Option<String>,

        /// Save the letter as CoverLetter.txt in the download directory
        #[arg(short, long)]
        save: bool,
    },

    /// Extract keywords from a job description locally
    Keywords {
        /// Job description file (TXT, MD)
        #[arg(short, long, conflicts_with = "job_text")]
        job: Option<PathBuf>,

        /// Job description given inline
        #[arg(long)]
        job_text: Option<String>,
    },

    /// Suggest an optimized LinkedIn headline and summary
    Linkedin {
        #[arg(long)]
        headline: Option<String>,

        #[arg(long)]
        summary: Option<String>,
    },

    /// Chat with the career coach
    Chat {
        /// Send a single message and exit
        #[arg(short, long)]
        message: Option<String>,
    },

    /// Log in, register the user and list known users
    Login {
        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long)]
        email: Option<String>,

        #[arg(short, long)]
        password: Option<String>,
    },

    /// List registered users
    Users,

    /// Save the current settings
    Settings,

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., "server.base_url")
        key: String,

        /// Configuration value
        value: String,
    },
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "html" => Ok(crate::config::OutputFormat::Html),
        _ => Err(format!("Invalid output format: {}. Supported: console, json, html", format)),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &std::path::Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use std::path::Path;

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("JSON"), Ok(OutputFormat::Json));
        assert_eq!(parse_output_format("html"), Ok(OutputFormat::Html));
        assert!(parse_output_format("pdf").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension(Path::new("cv.PDF"), &["pdf"]).is_ok());
        assert!(validate_file_extension(Path::new("cv.docx"), &["pdf", "txt"]).is_err());
        assert!(validate_file_extension(Path::new("cv"), &["pdf"]).is_err());
    }

    #[test]
    fn test_cli_parses_repeated_bullets() {
        let cli = Cli::parse_from([
            "resume-studio",
            "bullets",
            "-b",
            "Built APIs",
            "--bullet",
            "Led a team",
        ]);
        match cli.command {
            Commands::Bullets { bullets, job_text } => {
                assert_eq!(bullets, vec!["Built APIs", "Led a team"]);
                assert!(job_text.is_none());
            }
            _ => panic!("expected bullets command"),
        }
    }
}
