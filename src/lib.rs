//! Resume studio library

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod features;
pub mod input;
pub mod output;
pub mod studio;
pub mod ui;

pub use config::Config;
pub use error::{Result, StudioError};
pub use features::Outcome;
pub use studio::Studio;
