use crate::settings::Settings;
use crate::util::round2;

/// Which half of the cycle is on the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Work,
    Break,
}

impl Phase {
    pub fn other(self) -> Phase {
        match self {
            Phase::Work => Phase::Break,
            Phase::Break => Phase::Work,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Phase::Work => "Work",
            Phase::Break => "Break",
        }
    }
}

/// The countdown state machine.
///
/// Owns the phase, the seconds left in it, the derived progress
/// percentage, and the running flag. The event loop feeds it one tick
/// per second while it runs; everything else happens through the
/// user-facing operations below.
#[derive(Debug, Clone, PartialEq)]
pub struct Timer {
    phase: Phase,
    remaining: u32,
    progress: f64,
    running: bool,
}

impl Timer {
    /// A paused work phase wound to its full duration.
    pub fn new(settings: &Settings) -> Self {
        Self {
            phase: Phase::Work,
            remaining: settings.duration_seconds(Phase::Work),
            progress: 100.0,
            running: false,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining
    }

    /// Percent of the phase still ahead, 100 down to 0, two decimals.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Start or pause the countdown.
    pub fn toggle(&mut self) {
        self.running = !self.running;
    }

    /// Pause and wind the current phase back to its full duration.
    pub fn reset(&mut self, settings: &Settings) {
        self.running = false;
        self.remaining = settings.duration_seconds(self.phase);
        self.progress = 100.0;
    }

    /// Advance the countdown by one second.
    ///
    /// Applies only while running with time on the clock. Progress is
    /// recomputed against the duration configured at this moment, so an
    /// edit to the active phase's duration changes the slope from the
    /// next tick on.
    pub fn tick(&mut self, settings: &Settings) {
        if !self.running || self.remaining == 0 {
            return;
        }
        self.remaining -= 1;
        let duration = settings.duration_seconds(self.phase);
        let elapsed = duration.saturating_sub(self.remaining);
        self.progress = round2(100.0 - 100.0 * f64::from(elapsed) / f64::from(duration));
    }

    /// Flip to the other phase once the countdown has run out.
    ///
    /// Completion is settled here, on the evaluation after the tick
    /// that reached zero, never inside `tick` itself. Returns the phase
    /// that just ended so a banner can be raised for it. The running
    /// flag is left alone: a running timer rolls straight into the next
    /// phase.
    pub fn advance_if_elapsed(&mut self, settings: &Settings) -> Option<Phase> {
        if self.remaining > 0 {
            return None;
        }
        let ended = self.phase;
        self.phase = ended.other();
        self.remaining = settings.duration_seconds(self.phase);
        self.progress = 100.0;
        Some(ended)
    }

    /// Jump to the other phase by hand. Unlike a natural completion
    /// this always pauses, and no banner is raised for it.
    pub fn switch_phase(&mut self, settings: &Settings) {
        self.phase = self.phase.other();
        self.remaining = settings.duration_seconds(self.phase);
        self.progress = 100.0;
        self.running = false;
    }

    /// Rewind the current phase to its full configured duration without
    /// touching the running flag. Called when an edit to the active
    /// phase's duration lands, mid-countdown or not.
    pub fn resync(&mut self, settings: &Settings) {
        self.remaining = settings.duration_seconds(self.phase);
        self.progress = 100.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_timer_is_a_paused_full_work_phase() {
        let settings = Settings::default();
        let timer = Timer::new(&settings);
        assert_eq!(timer.phase(), Phase::Work);
        assert_eq!(timer.remaining_seconds(), 1500);
        assert_eq!(timer.progress(), 100.0);
        assert!(!timer.is_running());
    }

    #[test]
    fn toggle_starts_and_pauses() {
        let settings = Settings::default();
        let mut timer = Timer::new(&settings);
        timer.toggle();
        assert!(timer.is_running());
        timer.toggle();
        assert!(!timer.is_running());
    }

    #[test]
    fn tick_needs_a_running_clock() {
        let settings = Settings::default();
        let mut timer = Timer::new(&settings);
        timer.tick(&settings);
        assert_eq!(timer.remaining_seconds(), 1500);
        assert_eq!(timer.progress(), 100.0);
    }

    #[test]
    fn tick_counts_down_and_recomputes_progress() {
        let settings = Settings::default();
        let mut timer = Timer::new(&settings);
        timer.toggle();

        // 100 - 100*1/1500 = 99.9333… → 99.93
        timer.tick(&settings);
        assert_eq!(timer.remaining_seconds(), 1499);
        assert_eq!(timer.progress(), 99.93);

        // 100 - 100*2/1500 = 99.8666… → 99.87
        timer.tick(&settings);
        assert_eq!(timer.remaining_seconds(), 1498);
        assert_eq!(timer.progress(), 99.87);
    }

    #[test]
    fn reset_pauses_and_rewinds_current_phase() {
        let settings = Settings::default();
        let mut timer = Timer::new(&settings);
        timer.toggle();
        for _ in 0..90 {
            timer.tick(&settings);
        }
        timer.reset(&settings);
        assert!(!timer.is_running());
        assert_eq!(timer.remaining_seconds(), 1500);
        assert_eq!(timer.progress(), 100.0);
        assert_eq!(timer.phase(), Phase::Work);
    }

    #[test]
    fn full_work_countdown_rolls_into_break() {
        let settings = Settings::default();
        let mut timer = Timer::new(&settings);
        timer.toggle();
        for _ in 0..1500 {
            timer.tick(&settings);
        }
        // The zeroing tick itself leaves the phase alone
        assert_eq!(timer.remaining_seconds(), 0);
        assert_eq!(timer.progress(), 0.0);
        assert_eq!(timer.phase(), Phase::Work);

        // Ticking a spent clock is a no-op until completion settles
        timer.tick(&settings);
        assert_eq!(timer.remaining_seconds(), 0);

        assert_eq!(timer.advance_if_elapsed(&settings), Some(Phase::Work));
        assert_eq!(timer.phase(), Phase::Break);
        assert_eq!(timer.remaining_seconds(), 300);
        assert_eq!(timer.progress(), 100.0);
        // Natural completion keeps the clock running
        assert!(timer.is_running());

        // 100 - 100*1/300 = 99.6666… → 99.67
        timer.tick(&settings);
        assert_eq!(timer.remaining_seconds(), 299);
        assert_eq!(timer.progress(), 99.67);
    }

    #[test]
    fn completion_settles_once() {
        let settings = Settings::default();
        let mut timer = Timer::new(&settings);
        timer.toggle();
        for _ in 0..1500 {
            timer.tick(&settings);
        }
        assert_eq!(timer.advance_if_elapsed(&settings), Some(Phase::Work));
        assert_eq!(timer.advance_if_elapsed(&settings), None);
    }

    #[test]
    fn manual_switch_always_pauses() {
        let settings = Settings::default();
        let mut timer = Timer::new(&settings);
        timer.toggle();
        for _ in 0..10 {
            timer.tick(&settings);
        }
        timer.switch_phase(&settings);
        assert_eq!(timer.phase(), Phase::Break);
        assert_eq!(timer.remaining_seconds(), 300);
        assert_eq!(timer.progress(), 100.0);
        assert!(!timer.is_running());
    }

    #[test]
    fn active_phase_edit_resyncs_mid_countdown() {
        let mut settings = Settings::default();
        let mut timer = Timer::new(&settings);
        timer.toggle();
        // Burn down to 10 minutes left of the 25
        for _ in 0..900 {
            timer.tick(&settings);
        }
        assert_eq!(timer.remaining_seconds(), 600);

        assert!(settings.set_work_minutes("10"));
        timer.resync(&settings);
        assert_eq!(timer.remaining_seconds(), 600);
        assert_eq!(timer.progress(), 100.0);
        assert!(timer.is_running());

        // The next tick runs on the new 10 minute slope:
        // 100 - 100*1/600 = 99.8333… → 99.83
        timer.tick(&settings);
        assert_eq!(timer.progress(), 99.83);
    }

    #[test]
    fn inactive_phase_edit_leaves_countdown_alone() {
        let mut settings = Settings::default();
        let mut timer = Timer::new(&settings);
        timer.toggle();
        for _ in 0..5 {
            timer.tick(&settings);
        }
        let before = timer.clone();
        assert!(settings.set_break_minutes("12"));
        // No resync: only the active phase's duration feeds the clock
        assert_eq!(timer, before);
    }
}
