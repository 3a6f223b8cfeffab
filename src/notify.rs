use std::time::{Duration, Instant};

use crate::timer::Phase;

/// How long a banner stays up before it dismisses itself.
const DISMISS_AFTER: Duration = Duration::from_secs(5);

/// Message for the phase that just ran out.
fn message_for(ended: Phase) -> &'static str {
    match ended {
        Phase::Work => "Break time!",
        Phase::Break => "Time to work!",
    }
}

/// The transient phase-change banner.
///
/// Holds at most one message. Raising a new one while another is on
/// screen replaces it and starts the five second window over, so a
/// fresh message never inherits a stale dismissal deadline.
#[derive(Debug, Default)]
pub struct Banner {
    shown: Option<(&'static str, Instant)>,
}

impl Banner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise the banner for a finished phase.
    pub fn phase_ended(&mut self, ended: Phase, now: Instant) {
        self.shown = Some((message_for(ended), now + DISMISS_AFTER));
    }

    /// Take the banner down. Fine to call when nothing is shown.
    pub fn dismiss(&mut self) {
        self.shown = None;
    }

    /// Drop the banner once its dismissal deadline has passed.
    pub fn poll(&mut self, now: Instant) {
        if let Some((_, deadline)) = self.shown {
            if now >= deadline {
                self.dismiss();
            }
        }
    }

    /// The message currently on screen, if any.
    pub fn message(&self) -> Option<&'static str> {
        self.shown.map(|(message, _)| message)
    }
}
