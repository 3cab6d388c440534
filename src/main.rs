//! Resume studio: terminal client for AI-assisted resume tooling

use anyhow::Context;
use clap::Parser;
use log::{error, info};
use resume_studio::cli::{self, Cli, Commands, ConfigAction};
use resume_studio::config::{Config, OutputFormat};
use resume_studio::features::users::UserListView;
use resume_studio::input::{InputManager, InputSource};
use resume_studio::output::{Panel, PanelRenderer};
use resume_studio::ui::{BusyIndicator, ConsoleNotifier, Page};
use resume_studio::{Outcome, Studio};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let configs = match load_config(&cli, &config_path) {
        Ok(configs) => configs,
        Err(e) => {
            error!("Failed to load configuration: {:#}", e);
            process::exit(1);
        }
    };

    match run_command(cli.command, configs, config_path).await {
        Ok(true) => {}
        // The failure has already been shown to the user.
        Ok(false) => process::exit(1),
        Err(e) => {
            error!("Command failed: {:#}", e);
            process::exit(1);
        }
    }
}

/// Stored and effective configuration. Command-line overrides only ever reach
/// the effective one; nothing that writes the file sees them.
struct Configs {
    stored: Config,
    effective: Config,
}

fn load_config(cli: &Cli, config_path: &Path) -> anyhow::Result<Configs> {
    let stored = Config::load_from(config_path)
        .with_context(|| format!("reading {}", config_path.display()))?;

    let mut config = stored.clone();

    if let Some(server) = &cli.server {
        config.server.base_url = server.clone();
    }
    if let Some(output) = &cli.output {
        config.output.format = cli::parse_output_format(output).map_err(anyhow::Error::msg)?;
    }
    config.validate()?;
    Ok(Configs { stored, effective: config })
}

/// Returns `Ok(false)` when the action ended in an alert.
async fn run_command(command: Commands, configs: Configs, config_path: PathBuf) -> anyhow::Result<bool> {
    let Configs { stored, effective: config } = configs;
    if let Commands::Config { action } = command {
        return run_config_command(action, config, stored, &config_path);
    }

    let renderer = PanelRenderer::new(config.output.color_output);
    let format = config.output.format;
    let notifier = Arc::new(ConsoleNotifier::new(config.output.color_output));
    let busy = BusyIndicator::new(std::io::stderr().is_terminal());
    let studio = Studio::new(config, notifier, busy)?
        .with_saved_config(stored)
        .with_config_path(config_path);
    let mut inputs = InputManager::new();

    let show = |panel: Panel| -> anyhow::Result<()> {
        println!("{}", renderer.render(&panel, format)?);
        Ok(())
    };

    match command {
        Commands::Gap { resume, resume_text, job, job_text } => {
            let resume_text = inputs
                .resolve(InputSource::from_args(resume, resume_text).as_ref())
                .await
                .context("reading resume")?;
            let job_description = inputs
                .resolve(InputSource::from_args(job, job_text).as_ref())
                .await
                .context("reading job description")?;

            studio.show_page(Page::Gap);
            studio.with_view(|view| {
                view.forms.gap.resume_text = resume_text;
                view.forms.gap.job_description = job_description;
            });

            if let Outcome::Done(report) = studio.analyze_gap().await {
                show(Panel::Gap(report))?;
                return Ok(true);
            }
        }

        Commands::Ats { file, resume, resume_text } => {
            let resume_text = inputs
                .resolve(InputSource::from_args(resume, resume_text).as_ref())
                .await
                .context("reading resume")?;

            studio.show_page(Page::Ats);
            studio.with_view(|view| {
                view.forms.ats.resume_text = resume_text;
                view.forms.ats.resume_file = file;
            });

            if let Outcome::Done(report) = studio.check_ats().await {
                show(Panel::Ats(report))?;
                return Ok(true);
            }
        }

        Commands::Bullets { bullets, job_text } => {
            studio.show_page(Page::Bullets);
            studio.with_view(|view| {
                view.forms.bullets.bullets.fill(bullets);
                view.forms.bullets.job_description = job_text.unwrap_or_default();
            });

            if let Outcome::Done(improved) = studio.improve_bullets().await {
                show(Panel::ImprovedBullets(improved))?;
                return Ok(true);
            }
        }

        Commands::Resume { name, email, phone, summary, skills, generate_summary } => {
            studio.show_page(Page::Resume);
            studio.with_view(|view| {
                let form = &mut view.forms.resume;
                form.full_name = name.unwrap_or_default();
                form.email = email.unwrap_or_default();
                form.phone = phone.unwrap_or_default();
                form.summary = summary.unwrap_or_default();
                form.skills = skills.unwrap_or_default();
            });

            if generate_summary {
                match studio.generate_summary().await {
                    Outcome::Done(content) => show(Panel::Summary(content))?,
                    _ => return Ok(false),
                }
            }

            if let Outcome::Done(path) = studio.download_resume().await {
                show(Panel::Download(path))?;
                return Ok(true);
            }
        }

        Commands::Summary => {
            studio.show_page(Page::Resume);
            if let Outcome::Done(content) = studio.generate_summary().await {
                show(Panel::Summary(content))?;
                return Ok(true);
            }
        }

        Commands::CoverLetter { company, title, save } => {
            studio.show_page(Page::CoverLetter);
            studio.with_view(|view| {
                view.forms.cover_letter.company = company.unwrap_or_default();
                view.forms.cover_letter.job_title = title.unwrap_or_default();
            });

            if let Outcome::Done(letter) = studio.generate_cover_letter().await {
                show(Panel::CoverLetter(letter))?;
                if !save {
                    return Ok(true);
                }
                if let Outcome::Done(path) = studio.download_cover_letter() {
                    show(Panel::Download(path))?;
                    return Ok(true);
                }
            }
        }

        Commands::Keywords { job, job_text } => {
            let job_description = inputs
                .resolve(InputSource::from_args(job, job_text).as_ref())
                .await
                .context("reading job description")?;

            studio.show_page(Page::Keywords);
            studio.with_view(|view| view.forms.keywords_job_description = job_description);

            if let Outcome::Done(keywords) = studio.extract_keywords() {
                show(Panel::Keywords(keywords))?;
                return Ok(true);
            }
        }

        Commands::Linkedin { headline, summary } => {
            studio.show_page(Page::Linkedin);
            studio.with_view(|view| {
                view.forms.linkedin.headline = headline.unwrap_or_default();
                view.forms.linkedin.summary = summary.unwrap_or_default();
            });

            if let Outcome::Done(suggestion) = studio.optimize_linkedin() {
                show(Panel::Linkedin(suggestion))?;
                return Ok(true);
            }
        }

        Commands::Chat { message } => {
            studio.toggle_chat();
            match message {
                Some(message) => {
                    studio.chat(&message).await;
                }
                None => run_chat_repl(&studio, &renderer, format).await?,
            }
            show(Panel::Chat(studio.snapshot().transcript.messages().to_vec()))?;
            return Ok(true);
        }

        Commands::Login { name, email, password } => {
            studio.with_view(|view| {
                let form = &mut view.forms.login;
                form.name = name.unwrap_or_default();
                form.email = email.unwrap_or_default();
                form.password = password.unwrap_or_default();
            });

            if let Outcome::Done(report) = studio.login().await {
                show(Panel::Users(report.users))?;
                return Ok(true);
            }
        }

        Commands::Users => {
            let users = studio.fetch_users().await;
            let loaded = !matches!(users, UserListView::LoadError | UserListView::ConnectionError);
            show(Panel::Users(users))?;
            return Ok(loaded);
        }

        Commands::Settings => {
            studio.show_page(Page::Settings);
            return Ok(studio.save_settings().await.is_done());
        }

        Commands::Config { .. } => unreachable!("handled above"),
    }

    Ok(false)
}

/// One message per line until EOF or `/quit`. Replies are printed as they
/// arrive when the output is the console.
async fn run_chat_repl(studio: &Studio, renderer: &PanelRenderer, format: OutputFormat) -> anyhow::Result<()> {
    println!("💬 Career coach chat. Type /quit to leave.");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await.context("reading chat input")? {
        if line.trim() == "/quit" {
            break;
        }
        if let Some(reply) = studio.chat(&line).await {
            if format == OutputFormat::Console {
                println!("{}", renderer.console().format_message(&reply));
            }
        }
    }

    info!("Chat session ended after {} messages", studio.snapshot().transcript.len());
    Ok(())
}

fn run_config_command(
    action: Option<ConfigAction>,
    config: Config,
    mut stored: Config,
    config_path: &Path,
) -> anyhow::Result<bool> {
    match action {
        Some(ConfigAction::Show) | None => {
            println!("⚙️  Current Configuration ({})\n", config_path.display());
            println!("Server: {}", config.server.base_url);
            match config.server.request_timeout_secs {
                Some(secs) => println!("Request timeout: {}s", secs),
                None => println!("Request timeout: none"),
            }
            println!("Login delay: {}ms", config.session.login_delay_ms);
            println!("Settings delay: {}ms", config.session.settings_delay_ms);
            println!("Output format: {:?}", config.output.format);
            println!("Colors: {}", config.output.color_output);
            println!("Download directory: {}", config.output.download_dir.display());
        }

        Some(ConfigAction::Reset) => {
            println!("🔄 Resetting configuration to defaults...");
            Config::default().save_to(config_path)?;
            println!("✅ Configuration reset successfully!");
        }

        Some(ConfigAction::Set { key, value }) => {
            stored.set_value(&key, &value)?;
            stored.save_to(config_path)?;
            println!("🔧 {} = {}", key, value);
        }
    }

    Ok(true)
}
