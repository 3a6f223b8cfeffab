use std::time::{Duration, Instant};

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::notify::Banner;
use crate::schedule::TickScheduler;
use crate::settings::Settings;
use crate::timer::{Phase, Timer};
use crate::tui::event::{AppEvent, EventHandler};
use crate::tui::{view, Tui};

/// Fields of the settings dialog, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogField {
    WorkMinutes,
    BreakMinutes,
    Theme,
    DarkMode,
}

impl DialogField {
    fn next(self) -> Self {
        match self {
            DialogField::WorkMinutes => DialogField::BreakMinutes,
            DialogField::BreakMinutes => DialogField::Theme,
            DialogField::Theme => DialogField::DarkMode,
            DialogField::DarkMode => DialogField::WorkMinutes,
        }
    }

    fn prev(self) -> Self {
        match self {
            DialogField::WorkMinutes => DialogField::DarkMode,
            DialogField::BreakMinutes => DialogField::WorkMinutes,
            DialogField::Theme => DialogField::BreakMinutes,
            DialogField::DarkMode => DialogField::Theme,
        }
    }
}

/// Interaction state of the open settings dialog: which field has
/// focus, and the text being typed into a duration field.
pub struct Dialog {
    pub field: DialogField,
    pub buffer: String,
}

impl Dialog {
    fn open(settings: &Settings) -> Self {
        let mut dialog = Self {
            field: DialogField::WorkMinutes,
            buffer: String::new(),
        };
        dialog.reload(settings);
        dialog
    }

    /// Load the focused field's stored value into the edit buffer.
    fn reload(&mut self, settings: &Settings) {
        self.buffer = match self.field {
            DialogField::WorkMinutes => settings.work_minutes().to_string(),
            DialogField::BreakMinutes => settings.break_minutes().to_string(),
            DialogField::Theme | DialogField::DarkMode => String::new(),
        };
    }
}

/// The mounted widget: timer, settings, banner, and the scheduling
/// glue between them.
pub struct App {
    pub timer: Timer,
    pub settings: Settings,
    pub banner: Banner,
    pub scheduler: TickScheduler,
    pub dialog: Option<Dialog>,
}

impl App {
    pub fn new() -> Self {
        let settings = Settings::default();
        let timer = Timer::new(&settings);
        Self {
            timer,
            settings,
            banner: Banner::new(),
            scheduler: TickScheduler::new(),
            dialog: None,
        }
    }

    /// Drive the widget until the user quits.
    pub fn run(&mut self, terminal: &mut Tui) -> anyhow::Result<()> {
        let events = EventHandler::new(Duration::from_millis(50));

        loop {
            terminal.draw(|frame| view::render(frame, self))?;

            let event = events.next()?;
            let now = Instant::now();

            match event {
                AppEvent::Key(key) if key.kind == KeyEventKind::Press => {
                    if self.handle_key(key) {
                        break;
                    }
                }
                AppEvent::Pulse | AppEvent::Resize(_, _) => {}
                _ => {}
            }

            self.advance(now);
        }

        Ok(())
    }

    /// One pass of time-driven work: fire a due tick, settle a finished
    /// phase into the next one, drop an expired banner. Runs after
    /// every event, so key-driven state changes are reconciled before
    /// any pending tick can land on them.
    fn advance(&mut self, now: Instant) {
        if self.scheduler.poll(now, &self.timer, &self.settings) {
            self.timer.tick(&self.settings);
            self.scheduler.rearm(now, &self.timer, &self.settings);
        }
        if let Some(ended) = self.timer.advance_if_elapsed(&self.settings) {
            self.banner.phase_ended(ended, now);
        }
        self.banner.poll(now);
    }

    /// Returns true when the app should quit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return true;
        }

        if self.dialog.is_some() {
            self.handle_dialog_key(key);
            return false;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return true,
            KeyCode::Char(' ') => self.timer.toggle(),
            KeyCode::Char('r') | KeyCode::Char('R') => self.timer.reset(&self.settings),
            KeyCode::Tab => self.timer.switch_phase(&self.settings),
            KeyCode::Char('s') | KeyCode::Char('S') => {
                self.dialog = Some(Dialog::open(&self.settings));
            }
            _ => {}
        }
        false
    }

    fn handle_dialog_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc {
            self.dialog = None;
            return;
        }

        let Some(dialog) = self.dialog.as_mut() else {
            return;
        };

        match key.code {
            KeyCode::Up | KeyCode::BackTab | KeyCode::Char('k') => {
                dialog.field = dialog.field.prev();
                dialog.reload(&self.settings);
            }
            KeyCode::Down | KeyCode::Tab | KeyCode::Char('j') => {
                dialog.field = dialog.field.next();
                dialog.reload(&self.settings);
            }
            _ => match dialog.field {
                DialogField::WorkMinutes | DialogField::BreakMinutes => match key.code {
                    KeyCode::Char(c) if c.is_ascii_digit() => dialog.buffer.push(c),
                    KeyCode::Backspace => {
                        dialog.buffer.pop();
                    }
                    KeyCode::Enter => self.commit_minutes(),
                    _ => {}
                },
                DialogField::Theme => match key.code {
                    KeyCode::Left => self.settings.theme = self.settings.theme.prev(),
                    KeyCode::Right | KeyCode::Char(' ') => {
                        self.settings.theme = self.settings.theme.next();
                    }
                    _ => {}
                },
                DialogField::DarkMode => {
                    if matches!(
                        key.code,
                        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Left | KeyCode::Right
                    ) {
                        self.settings.dark_mode = !self.settings.dark_mode;
                    }
                }
            },
        }
    }

    /// Apply the edit buffer to the focused duration field. An accepted
    /// edit to the active phase's duration rewinds the countdown to the
    /// new full length, running or not. A rejected entry changes
    /// nothing; either way the buffer goes back to showing the stored
    /// value.
    fn commit_minutes(&mut self) {
        let Some(dialog) = self.dialog.as_mut() else {
            return;
        };

        match dialog.field {
            DialogField::WorkMinutes => {
                if self.settings.set_work_minutes(&dialog.buffer)
                    && self.timer.phase() == Phase::Work
                {
                    self.timer.resync(&self.settings);
                }
            }
            DialogField::BreakMinutes => {
                if self.settings.set_break_minutes(&dialog.buffer)
                    && self.timer.phase() == Phase::Break
                {
                    self.timer.resync(&self.settings);
                }
            }
            DialogField::Theme | DialogField::DarkMode => return,
        }

        dialog.reload(&self.settings);
    }
}
