use crate::theme::ThemeKey;
use crate::timer::Phase;

/// User-adjustable options, edited through the settings dialog.
///
/// Everything lives in memory only. Closing the app returns to factory
/// settings; there is no config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    work_minutes: u32,
    break_minutes: u32,
    pub theme: ThemeKey,
    pub dark_mode: bool,
}

impl Default for Settings {
    /// Factory settings: the classic 25/5 split, light default theme.
    fn default() -> Self {
        Self {
            work_minutes: 25,
            break_minutes: 5,
            theme: ThemeKey::Default,
            dark_mode: false,
        }
    }
}

impl Settings {
    pub fn work_minutes(&self) -> u32 {
        self.work_minutes
    }

    pub fn break_minutes(&self) -> u32 {
        self.break_minutes
    }

    /// Apply a work-duration entry. Returns whether the value was
    /// accepted; anything but a positive whole number of minutes is
    /// ignored and the previous value stays.
    pub fn set_work_minutes(&mut self, raw: &str) -> bool {
        match parse_minutes(raw) {
            Some(minutes) => {
                self.work_minutes = minutes;
                true
            }
            None => false,
        }
    }

    /// Apply a break-duration entry, with the same acceptance rule as
    /// [`Self::set_work_minutes`].
    pub fn set_break_minutes(&mut self, raw: &str) -> bool {
        match parse_minutes(raw) {
            Some(minutes) => {
                self.break_minutes = minutes;
                true
            }
            None => false,
        }
    }

    /// Seconds a full countdown of the given phase lasts.
    pub fn duration_seconds(&self, phase: Phase) -> u32 {
        let minutes = match phase {
            Phase::Work => self.work_minutes,
            Phase::Break => self.break_minutes,
        };
        minutes.saturating_mul(60)
    }
}

/// Positive whole minutes, or None. Surrounding whitespace is tolerated;
/// zero, negative, and non-numeric entries are not.
fn parse_minutes(raw: &str) -> Option<u32> {
    match raw.trim().parse::<u32>() {
        Ok(minutes) if minutes > 0 => Some(minutes),
        _ => None,
    }
}
