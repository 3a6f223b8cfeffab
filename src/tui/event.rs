use std::sync::mpsc;
use std::time::Duration;

use ratatui::crossterm::event::{self, Event, KeyEvent};

/// Events consumed by the main loop.
pub enum AppEvent {
    /// A keyboard event.
    Key(KeyEvent),
    /// Terminal was resized.
    Resize(u16, u16),
    /// Periodic wakeup so countdown and banner deadlines get checked
    /// even while the keyboard is idle.
    Pulse,
}

/// Polls crossterm events and sends them to the main loop.
///
/// Runs in a background thread. Keys and resizes are forwarded as they
/// arrive; when the keyboard stays idle for one pulse interval a Pulse
/// is sent instead, so the loop never sleeps past a due deadline by
/// more than that interval.
pub struct EventHandler {
    rx: mpsc::Receiver<AppEvent>,
    _handle: std::thread::JoinHandle<()>,
}

impl EventHandler {
    /// Start the event polling thread.
    pub fn new(pulse_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();

        let handle = std::thread::spawn(move || loop {
            if event::poll(pulse_rate).unwrap_or(false) {
                match event::read() {
                    Ok(Event::Key(key)) => {
                        if tx.send(AppEvent::Key(key)).is_err() {
                            return;
                        }
                    }
                    Ok(Event::Resize(w, h)) => {
                        if tx.send(AppEvent::Resize(w, h)).is_err() {
                            return;
                        }
                    }
                    _ => {}
                }
            } else if tx.send(AppEvent::Pulse).is_err() {
                return;
            }
        });

        Self {
            rx,
            _handle: handle,
        }
    }

    /// Receive the next event, blocking until one is available.
    pub fn next(&self) -> Result<AppEvent, mpsc::RecvError> {
        self.rx.recv()
    }
}
