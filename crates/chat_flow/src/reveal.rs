//! Cooperative typewriter reveal for animated bot messages.
//!
//! The stepper is pure so the rendering surface can drive it however it
//! likes; [`drive`] is the timer loop described by the flow: one character
//! per tick, cancellable, completion reported exactly once. On completion
//! the surface is expected to call
//! [`FlowController::mark_revealed`](crate::FlowController::mark_revealed).

use std::time::Duration;

use tokio::time::{self, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

/// Default delay between revealed characters.
pub const DEFAULT_TICK: Duration = Duration::from_millis(15);

/// Character-by-character reveal progress for one piece of bot text.
#[derive(Debug, Clone)]
pub struct Typewriter {
    text: String,
    /// Byte offset of the reveal frontier; always on a char boundary.
    shown: usize,
}

impl Typewriter {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            shown: 0,
        }
    }

    /// Restart progress if the source text changed; a no-op otherwise.
    pub fn rekey(&mut self, text: &str) {
        if self.text != text {
            self.text.clear();
            self.text.push_str(text);
            self.shown = 0;
        }
    }

    /// Reveal the next character. Returns false once everything is shown.
    pub fn tick(&mut self) -> bool {
        match self.text[self.shown..].chars().next() {
            Some(c) => {
                self.shown += c.len_utf8();
                true
            }
            None => false,
        }
    }

    pub fn revealed(&self) -> &str {
        &self.text[..self.shown]
    }

    pub fn is_done(&self) -> bool {
        self.shown == self.text.len()
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Drive a reveal to the end, calling `sink` with the visible prefix after
/// each tick.
///
/// Returns true when the reveal ran to completion - the single completion
/// notification - and false when it was cancelled first (view unmounted or
/// the source text changed), in which case no completion must be reported.
pub async fn drive<F>(
    typewriter: &mut Typewriter,
    tick: Duration,
    cancel: &CancellationToken,
    mut sink: F,
) -> bool
where
    F: FnMut(&str),
{
    let mut interval = time::interval(tick);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            // Cancellation wins over a due tick.
            biased;
            _ = cancel.cancelled() => return false,
            _ = interval.tick() => {
                if !typewriter.tick() {
                    return true;
                }
                sink(typewriter.revealed());
                if typewriter.is_done() {
                    return true;
                }
            }
        }
    }
}
