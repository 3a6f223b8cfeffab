use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget};

use crate::theme::Palette;

/// The transient phase-change toast. Drawn last, over whatever else is
/// on screen, so an open dialog never hides it.
pub struct BannerWidget<'a> {
    message: &'a str,
    palette: Palette,
}

impl<'a> BannerWidget<'a> {
    pub fn new(message: &'a str, palette: Palette) -> Self {
        Self { message, palette }
    }
}

impl Widget for BannerWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let line = Line::from(Span::styled(
            self.message,
            Style::default()
                .fg(self.palette.text)
                .add_modifier(Modifier::BOLD),
        ));

        Paragraph::new(line)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(self.palette.ring))
                    .style(Style::default().bg(self.palette.panel)),
            )
            .render(area, buf);
    }
}
