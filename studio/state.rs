use std::sync::{Arc, Mutex, MutexGuard};

use timetable_studio::{RawConfig, ScheduleService, Submission};

// ---------------------------------------------------------------------------
// Flash messages
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub enum FlashKind { Success, Error }

#[derive(Debug, Clone)]
pub struct FlashMessage {
    pub kind: FlashKind,
    pub text: String,
}

impl FlashMessage {
    pub fn success(text: impl Into<String>) -> Self {
        FlashMessage { kind: FlashKind::Success, text: text.into() }
    }
    pub fn error(text: impl Into<String>) -> Self {
        FlashMessage { kind: FlashKind::Error, text: text.into() }
    }
}

// ---------------------------------------------------------------------------
// Main state struct
// ---------------------------------------------------------------------------

pub struct StudioState {
    /// The form exactly as last posted.
    pub form:       RawConfig,
    /// Lifecycle of the most recent timetable request.
    pub submission: Submission,
    /// One-shot flash message for the next page render.
    pub flash:      Option<FlashMessage>,
}

impl StudioState {
    pub fn new() -> Self {
        StudioState {
            form:       RawConfig::default(),
            submission: Submission::new(),
            flash:      None,
        }
    }

    /// Takes and returns the current flash message, clearing it.
    pub fn take_flash(&mut self) -> Option<FlashMessage> {
        self.flash.take()
    }
}

/// Shared state type — an `Arc<Mutex<StudioState>>` passed to every handler.
pub type SharedState = Arc<Mutex<StudioState>>;

/// The scheduler every submission goes to.
pub type SharedService = Arc<dyn ScheduleService + Send + Sync>;

/// Locks the studio state. A handler that panicked while holding the lock
/// leaves the state usable; the page must keep working.
pub fn lock(state: &SharedState) -> MutexGuard<'_, StudioState> {
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
