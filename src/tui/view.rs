use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::app::{App, Dialog, DialogField};
use crate::settings::Settings;
use crate::theme::Palette;
use crate::tui::widgets::banner::BannerWidget;
use crate::tui::widgets::clock::ClockWidget;
use crate::tui::widgets::progress::ProgressWidget;

/// Compose one frame from the current state.
///
/// The palette is resolved once here and threaded through; nothing
/// below this point reads the theme or dark-mode settings directly.
pub fn render(frame: &mut Frame, app: &App) {
    let palette = app.settings.theme.palette(app.settings.dark_mode);
    let area = frame.area();

    // Backdrop
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background)),
        area,
    );

    render_card(frame, centered_rect(60, 70, area), app, palette);

    if let Some(dialog) = &app.dialog {
        render_settings(frame, area, dialog, &app.settings, palette);
    }

    // The banner floats over everything, dialog included
    if let Some(message) = app.banner.message() {
        render_banner(frame, area, message, palette);
    }
}

fn render_card(frame: &mut Frame, panel: Rect, app: &App, palette: Palette) {
    let card = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.muted))
        .style(Style::default().bg(palette.panel));
    let inner = card.inner(panel);
    frame.render_widget(card, panel);

    let rows = Layout::vertical([
        Constraint::Length(2), // title
        Constraint::Length(2), // clock
        Constraint::Length(1), // spacer
        Constraint::Length(1), // progress
        Constraint::Min(1),    // spacer
        Constraint::Length(2), // key hints
    ])
    .horizontal_margin(2)
    .split(inner);

    let title = Paragraph::new(Line::from(Span::styled(
        "FlowPomo",
        Style::default()
            .fg(palette.text)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, rows[0]);

    frame.render_widget(ClockWidget::new(&app.timer, palette), rows[1]);
    frame.render_widget(ProgressWidget::new(&app.timer, palette), rows[3]);

    let toggle_label = if app.timer.is_running() {
        " pause   "
    } else {
        " start   "
    };
    let hints = vec![
        Line::from(vec![
            key_span("[Space]", palette),
            hint_span(toggle_label, palette),
            key_span("[R]", palette),
            hint_span(" reset   ", palette),
            key_span("[Tab]", palette),
            hint_span(" work/break", palette),
        ]),
        Line::from(vec![
            key_span("[S]", palette),
            hint_span(" settings   ", palette),
            key_span("[Q]", palette),
            hint_span(" quit", palette),
        ]),
    ];
    frame.render_widget(
        Paragraph::new(hints).alignment(Alignment::Center),
        rows[5],
    );
}

fn render_settings(
    frame: &mut Frame,
    area: Rect,
    dialog: &Dialog,
    settings: &Settings,
    palette: Palette,
) {
    let popup = centered_rect(50, 60, area);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(" Settings ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.ring))
        .style(Style::default().bg(palette.panel));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let rows = Layout::vertical([
        Constraint::Length(1), // spacer
        Constraint::Length(2), // work minutes
        Constraint::Length(2), // break minutes
        Constraint::Length(2), // theme
        Constraint::Length(2), // dark mode
        Constraint::Min(0),
        Constraint::Length(1), // key hint
    ])
    .horizontal_margin(2)
    .split(inner);

    let selected = dialog.field;

    // The focused duration field shows the edit buffer with a cursor;
    // everything else shows the stored value.
    let work_value = if selected == DialogField::WorkMinutes {
        format!("{}|", dialog.buffer)
    } else {
        settings.work_minutes().to_string()
    };
    let break_value = if selected == DialogField::BreakMinutes {
        format!("{}|", dialog.buffer)
    } else {
        settings.break_minutes().to_string()
    };
    let theme_value = if selected == DialogField::Theme {
        format!("< {} >", settings.theme.label())
    } else {
        settings.theme.label().to_string()
    };
    let dark_value = if settings.dark_mode { "on" } else { "off" }.to_string();

    let fields = [
        ("Work Duration (min)", work_value, DialogField::WorkMinutes),
        ("Break Duration (min)", break_value, DialogField::BreakMinutes),
        ("Theme", theme_value, DialogField::Theme),
        ("Dark Mode", dark_value, DialogField::DarkMode),
    ];
    for (i, (label, value, field)) in fields.into_iter().enumerate() {
        frame.render_widget(
            field_row(label, value, selected == field, palette),
            rows[i + 1],
        );
    }

    let mut hint = vec![key_span("[\u{2191}/\u{2193}]", palette), hint_span(" field  ", palette)];
    match selected {
        DialogField::WorkMinutes | DialogField::BreakMinutes => {
            hint.push(key_span("[0-9]", palette));
            hint.push(hint_span(" edit  ", palette));
            hint.push(key_span("[Enter]", palette));
            hint.push(hint_span(" apply  ", palette));
        }
        DialogField::Theme => {
            hint.push(key_span("[\u{2190}/\u{2192}]", palette));
            hint.push(hint_span(" cycle  ", palette));
        }
        DialogField::DarkMode => {
            hint.push(key_span("[Space]", palette));
            hint.push(hint_span(" toggle  ", palette));
        }
    }
    hint.push(key_span("[Esc]", palette));
    hint.push(hint_span(" close", palette));
    frame.render_widget(Paragraph::new(Line::from(hint)), rows[6]);
}

fn render_banner(frame: &mut Frame, area: Rect, message: &str, palette: Palette) {
    let width = (message.len() as u16 + 6).min(area.width);
    let banner = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: (area.y + area.height).saturating_sub(4),
        width,
        height: 3,
    }
    .intersection(area);

    if !banner.is_empty() {
        frame.render_widget(BannerWidget::new(message, palette), banner);
    }
}

fn field_row(
    label: &'static str,
    value: String,
    selected: bool,
    palette: Palette,
) -> Paragraph<'static> {
    let marker = if selected { "> " } else { "  " };
    let value_style = if selected {
        Style::default()
            .fg(palette.text)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.text)
    };

    Paragraph::new(Line::from(vec![
        Span::styled(
            marker,
            Style::default()
                .fg(palette.ring)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("{label:<22}"), Style::default().fg(palette.muted)),
        Span::styled(value, value_style),
    ]))
}

fn key_span(text: &'static str, palette: Palette) -> Span<'static> {
    Span::styled(
        text,
        Style::default()
            .fg(palette.ring)
            .add_modifier(Modifier::BOLD),
    )
}

fn hint_span(text: &'static str, palette: Palette) -> Span<'static> {
    Span::styled(text, Style::default().fg(palette.muted))
}

/// Center a rect of the given percentage size inside `r`.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let rows = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(r);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(rows[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_stays_inside_its_parent() {
        let outer = Rect::new(0, 0, 80, 24);
        let inner = centered_rect(60, 70, outer);
        assert_eq!(inner.intersection(outer), inner);
        // Horizontal thirds of 80 at 60%: 16 / 48 / 16
        assert_eq!(inner.x, 16);
        assert_eq!(inner.width, 48);
    }

    #[test]
    fn centered_rect_handles_a_tiny_parent() {
        let outer = Rect::new(0, 0, 3, 2);
        let inner = centered_rect(50, 50, outer);
        assert_eq!(inner.intersection(outer), inner);
    }
}
