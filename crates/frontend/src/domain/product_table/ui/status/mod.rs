//! Status banner with a timed fade
//!
//! The banner shows the outcome of an add-product submit, locks the
//! submit button, stays visible for a while, fades out and unlocks the
//! button again.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// How long the banner stays fully visible.
const FADE_DELAY_MS: u32 = 3000;
/// Duration of the opacity transition.
const FADE_DURATION_MS: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

impl StatusKind {
    pub fn css_class(self) -> &'static str {
        match self {
            StatusKind::Success => "flash-success",
            StatusKind::Error => "flash-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

/// Owns the banner state and the submit-button lock.
///
/// Every `show` bumps a generation counter before spawning its fade
/// task; a task that wakes up to a newer generation exits without
/// touching the banner. A second message therefore supersedes an
/// in-flight fade instead of racing its timers.
#[derive(Clone, Copy)]
pub struct StatusController {
    message: RwSignal<Option<StatusMessage>>,
    fading: RwSignal<bool>,
    locked: RwSignal<bool>,
    generation: RwSignal<u64>,
}

impl StatusController {
    pub fn new() -> Self {
        Self {
            message: RwSignal::new(None),
            fading: RwSignal::new(false),
            locked: RwSignal::new(false),
            generation: RwSignal::new(0),
        }
    }

    pub fn message(&self) -> Option<StatusMessage> {
        self.message.get()
    }

    pub fn is_fading(&self) -> bool {
        self.fading.get()
    }

    /// Whether the submit button should currently be disabled.
    pub fn is_locked(&self) -> bool {
        self.locked.get()
    }

    /// Show a message and run one full fade cycle for it.
    pub fn show(&self, kind: StatusKind, text: String) {
        let generation = self.arm(kind, text);

        let this = *self;
        spawn_local(async move {
            TimeoutFuture::new(FADE_DELAY_MS).await;
            this.begin_fade(generation);

            TimeoutFuture::new(FADE_DURATION_MS).await;
            this.finish_fade(generation);
        });
    }

    /// Put the message up, lock the button and invalidate any older
    /// fade cycle. Returns the generation the new cycle runs under.
    fn arm(&self, kind: StatusKind, text: String) -> u64 {
        let generation = self.generation.get_untracked() + 1;
        self.generation.set(generation);
        self.message.set(Some(StatusMessage { kind, text }));
        self.fading.set(false);
        self.locked.set(true);
        generation
    }

    /// Start the opacity transition; no-op when superseded.
    fn begin_fade(&self, generation: u64) {
        if self.generation.get_untracked() != generation {
            return;
        }
        self.fading.set(true);
    }

    /// Clear the banner and unlock the button; no-op when superseded.
    fn finish_fade(&self, generation: u64) {
        if self.generation.get_untracked() != generation {
            return;
        }
        self.message.set(None);
        self.fading.set(false);
        self.locked.set(false);
    }
}

impl Default for StatusController {
    fn default() -> Self {
        Self::new()
    }
}

/// The banner itself. Unmounts completely once the fade finishes, so
/// no residual content, class or inline style is left on the page.
#[component]
pub fn StatusBanner(status: StatusController) -> impl IntoView {
    view! {
        {move || {
            status
                .message()
                .map(|m| {
                    view! {
                        <div
                            id="status-message"
                            class=m.kind.css_class()
                            style=move || {
                                if status.is_fading() {
                                    format!("opacity: 0; transition: opacity {}ms;", FADE_DURATION_MS)
                                } else {
                                    String::new()
                                }
                            }
                        >
                            {m.text}
                        </div>
                    }
                })
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_kinds_map_to_flash_classes() {
        assert_eq!(StatusKind::Success.css_class(), "flash-success");
        assert_eq!(StatusKind::Error.css_class(), "flash-error");
    }

    #[test]
    fn completed_fade_clears_banner_and_unlocks_button() {
        let status = StatusController::new();

        let generation = status.arm(
            StatusKind::Success,
            "Product added successfully.".to_string(),
        );
        assert!(status.is_locked());
        assert!(!status.is_fading());
        assert_eq!(
            status.message().map(|m| m.kind),
            Some(StatusKind::Success)
        );

        status.begin_fade(generation);
        assert!(status.is_fading());

        status.finish_fade(generation);
        assert!(status.message().is_none());
        assert!(!status.is_fading());
        assert!(!status.is_locked());
    }

    #[test]
    fn stale_fade_cycle_leaves_newer_message_untouched() {
        let status = StatusController::new();

        let first = status.arm(StatusKind::Error, "Invalid URL".to_string());
        let second = status.arm(
            StatusKind::Success,
            "Product added successfully.".to_string(),
        );

        // the superseded cycle wakes up and must not touch the banner
        status.begin_fade(first);
        assert!(!status.is_fading());
        status.finish_fade(first);

        let m = status.message().expect("newer message must survive");
        assert_eq!(m.kind, StatusKind::Success);
        assert!(status.is_locked());

        // the live cycle still runs to completion
        status.begin_fade(second);
        assert!(status.is_fading());
        status.finish_fade(second);
        assert!(status.message().is_none());
        assert!(!status.is_locked());
    }
}
