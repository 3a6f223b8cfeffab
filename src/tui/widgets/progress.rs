use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::{Gauge, Widget};

use crate::theme::Palette;
use crate::timer::Timer;

/// Countdown progress as a filled gauge, the flat stand-in for a ring
/// dial. Full at the top of a phase, empty exactly when it runs out.
pub struct ProgressWidget<'a> {
    timer: &'a Timer,
    palette: Palette,
}

impl<'a> ProgressWidget<'a> {
    pub fn new(timer: &'a Timer, palette: Palette) -> Self {
        Self { timer, palette }
    }
}

impl Widget for ProgressWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let progress = self.timer.progress();
        Gauge::default()
            .gauge_style(
                Style::default()
                    .fg(self.palette.ring)
                    .bg(self.palette.track),
            )
            .ratio((progress / 100.0).clamp(0.0, 1.0))
            .label(Span::styled(
                format!("{progress:.2}%"),
                Style::default().fg(self.palette.text),
            ))
            .use_unicode(true)
            .render(area, buf);
    }
}
