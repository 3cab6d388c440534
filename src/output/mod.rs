//! Rendering of result panels and client-side downloads

pub mod download;
pub mod formatter;

pub use formatter::{Panel, PanelRenderer};
