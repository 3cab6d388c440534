//! Process-wide busy indicator.
//!
//! Every in-flight request holds a [`BusyGuard`]. The spinner appears when the
//! first guard is taken and is cleared only when the last one is dropped, so
//! overlapping requests cannot hide it early.

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

#[derive(Default)]
struct BusyState {
    depth: usize,
    spinner: Option<ProgressBar>,
}

#[derive(Clone, Default)]
pub struct BusyIndicator {
    state: Arc<Mutex<BusyState>>,
    visual: bool,
}

/// Releases its hold on the indicator when dropped.
#[must_use = "the indicator is released as soon as the guard is dropped"]
pub struct BusyGuard {
    state: Arc<Mutex<BusyState>>,
}

impl BusyIndicator {
    /// `visual` controls whether a spinner is drawn on stderr.
    pub fn new(visual: bool) -> Self {
        Self {
            state: Arc::default(),
            visual,
        }
    }

    pub fn hidden() -> Self {
        Self::new(false)
    }

    pub fn acquire(&self) -> BusyGuard {
        let mut state = lock(&self.state);
        state.depth += 1;
        if state.depth == 1 && self.visual {
            state.spinner = Some(processing_spinner());
        }
        BusyGuard {
            state: Arc::clone(&self.state),
        }
    }

    pub fn is_active(&self) -> bool {
        self.depth() > 0
    }

    pub fn depth(&self) -> usize {
        lock(&self.state).depth
    }
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        let mut state = lock(&self.state);
        state.depth = state.depth.saturating_sub(1);
        if state.depth == 0 {
            if let Some(spinner) = state.spinner.take() {
                spinner.finish_and_clear();
            }
        }
    }
}

fn lock(state: &Mutex<BusyState>) -> MutexGuard<'_, BusyState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

fn processing_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("Processing...");
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner
}
