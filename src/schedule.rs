use std::time::{Duration, Instant};

use crate::settings::Settings;
use crate::timer::{Phase, Timer};

const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// The state a pending tick was armed against. A tick may only fire
/// for the exact state it was scheduled from; any change in between
/// invalidates it.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Key {
    running: bool,
    remaining: u32,
    phase: Phase,
    work_minutes: u32,
    break_minutes: u32,
}

impl Key {
    fn capture(timer: &Timer, settings: &Settings) -> Self {
        Self {
            running: timer.is_running(),
            remaining: timer.remaining_seconds(),
            phase: timer.phase(),
            work_minutes: settings.work_minutes(),
            break_minutes: settings.break_minutes(),
        }
    }

    /// A countdown only advances while running with time on the clock.
    fn wants_tick(&self) -> bool {
        self.running && self.remaining > 0
    }
}

/// Scheduler for the once-per-second countdown tick.
///
/// Holds at most one armed deadline. Each loop pass reconciles it
/// against the current state: a deadline armed for a state that no
/// longer holds is cancelled rather than fired, and a fresh one is
/// armed in its place. Pausing mid-second therefore never leaks a tick,
/// and editing a duration restarts the second.
#[derive(Debug, Default)]
pub struct TickScheduler {
    armed: Option<(Key, Instant)>,
}

impl TickScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconcile with the current state and report whether a second has
    /// elapsed for exactly that state. A fired tick is consumed; the
    /// caller applies it and calls [`Self::rearm`].
    pub fn poll(&mut self, now: Instant, timer: &Timer, settings: &Settings) -> bool {
        let key = Key::capture(timer, settings);

        if let Some((armed_key, _)) = &self.armed {
            if *armed_key != key {
                self.armed = None;
            }
        }

        if !key.wants_tick() {
            self.armed = None;
            return false;
        }

        match self.armed {
            Some((_, deadline)) if now >= deadline => {
                self.armed = None;
                true
            }
            Some(_) => false,
            None => {
                self.armed = Some((key, now + TICK_INTERVAL));
                false
            }
        }
    }

    /// Arm the next tick one second out from the state just produced.
    /// Anchoring at fire time keeps the cadence from drifting by the
    /// loop's wakeup latency.
    pub fn rearm(&mut self, now: Instant, timer: &Timer, settings: &Settings) {
        let key = Key::capture(timer, settings);
        self.armed = if key.wants_tick() {
            Some((key, now + TICK_INTERVAL))
        } else {
            None
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_clock_never_arms() {
        let settings = Settings::default();
        let timer = Timer::new(&settings);
        let mut scheduler = TickScheduler::new();
        let now = Instant::now();

        assert!(!scheduler.poll(now, &timer, &settings));
        assert!(scheduler.armed.is_none());
    }

    #[test]
    fn arms_on_first_poll_and_fires_a_second_later() {
        let settings = Settings::default();
        let mut timer = Timer::new(&settings);
        timer.toggle();
        let mut scheduler = TickScheduler::new();
        let now = Instant::now();

        // First poll arms, nothing due yet
        assert!(!scheduler.poll(now, &timer, &settings));
        assert!(!scheduler.poll(now + Duration::from_millis(999), &timer, &settings));
        assert!(scheduler.poll(now + Duration::from_secs(1), &timer, &settings));

        // Fired tick is consumed until rearmed
        assert!(!scheduler.poll(now + Duration::from_secs(1), &timer, &settings));
    }

    #[test]
    fn rearm_anchors_the_next_second_at_fire_time() {
        let settings = Settings::default();
        let mut timer = Timer::new(&settings);
        timer.toggle();
        let mut scheduler = TickScheduler::new();
        let now = Instant::now();

        scheduler.poll(now, &timer, &settings);
        assert!(scheduler.poll(now + Duration::from_secs(1), &timer, &settings));
        timer.tick(&settings);
        scheduler.rearm(now + Duration::from_secs(1), &timer, &settings);

        assert!(!scheduler.poll(now + Duration::from_millis(1500), &timer, &settings));
        assert!(scheduler.poll(now + Duration::from_secs(2), &timer, &settings));
    }

    #[test]
    fn pausing_cancels_the_pending_tick() {
        let settings = Settings::default();
        let mut timer = Timer::new(&settings);
        timer.toggle();
        let mut scheduler = TickScheduler::new();
        let now = Instant::now();

        scheduler.poll(now, &timer, &settings);
        timer.toggle();

        // Well past the old deadline, but the state it was armed for is gone
        assert!(!scheduler.poll(now + Duration::from_secs(2), &timer, &settings));
        assert!(scheduler.armed.is_none());
    }

    #[test]
    fn any_watched_change_restarts_the_second() {
        let mut settings = Settings::default();
        let mut timer = Timer::new(&settings);
        timer.toggle();
        let mut scheduler = TickScheduler::new();
        let now = Instant::now();

        scheduler.poll(now, &timer, &settings);

        // Editing the idle phase's duration does not touch the timer,
        // but it still invalidates the armed tick
        assert!(settings.set_break_minutes("7"));
        assert!(!scheduler.poll(now + Duration::from_secs(1), &timer, &settings));
        assert!(scheduler.poll(now + Duration::from_secs(2), &timer, &settings));
    }

    #[test]
    fn spent_clock_disarms() {
        let mut settings = Settings::default();
        assert!(settings.set_work_minutes("1"));
        let mut timer = Timer::new(&settings);
        timer.toggle();
        for _ in 0..60 {
            timer.tick(&settings);
        }
        assert_eq!(timer.remaining_seconds(), 0);

        let mut scheduler = TickScheduler::new();
        let now = Instant::now();
        assert!(!scheduler.poll(now, &timer, &settings));
        assert!(scheduler.armed.is_none());
    }
}
