use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::theme::Palette;
use crate::timer::Timer;
use crate::util::format_clock;

/// The big countdown readout: time left over the phase name.
pub struct ClockWidget<'a> {
    timer: &'a Timer,
    palette: Palette,
}

impl<'a> ClockWidget<'a> {
    pub fn new(timer: &'a Timer, palette: Palette) -> Self {
        Self { timer, palette }
    }
}

impl Widget for ClockWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let state = if self.timer.is_running() {
            ""
        } else {
            "  (paused)"
        };
        let lines = vec![
            Line::from(Span::styled(
                format_clock(self.timer.remaining_seconds()),
                Style::default()
                    .fg(self.palette.text)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("{}{}", self.timer.phase().label(), state),
                Style::default().fg(self.palette.muted),
            )),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::default().bg(self.palette.panel))
            .render(area, buf);
    }
}
