//! Screen chrome around the play field: border, sidebar, status lines and
//! the centered overlay used for the start and game over screens.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Areas produced by [`split_screen`].
pub struct ScreenLayout {
    pub field: Rect,
    /// Two rows under the field.
    pub status: Rect,
    pub sidebar: Rect,
}

/// Draw the outer border and split the inside.
///
/// ```text
/// ┌─ Flappy ────────────────────────┬─ Info ──────┐
/// │ field                           │ sidebar     │
/// │                                 │             │
/// │ status (2 rows)                 │             │
/// └─────────────────────────────────┴─────────────┘
/// ```
pub fn split_screen(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    sidebar_width: u16,
) -> ScreenLayout {
    frame.render_widget(Clear, area);

    let border = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = border.inner(area);
    frame.render_widget(border, area);

    let [main, sidebar_area] = split(
        inner,
        Direction::Horizontal,
        [Constraint::Min(20), Constraint::Length(sidebar_width)],
    );
    let [field, status] = split(
        main,
        Direction::Vertical,
        [Constraint::Min(6), Constraint::Length(2)],
    );

    let sidebar_block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let sidebar = sidebar_block.inner(sidebar_area);
    frame.render_widget(sidebar_block, sidebar_area);

    ScreenLayout {
        field,
        status,
        sidebar,
    }
}

fn split(area: Rect, direction: Direction, constraints: [Constraint; 2]) -> [Rect; 2] {
    let chunks = Layout::default()
        .direction(direction)
        .constraints(constraints)
        .split(area);
    [chunks[0], chunks[1]]
}

/// First row: `message`. Second row: `[key] action` hints.
pub fn draw_status(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    color: Color,
    keys: &[(&str, &str)],
) {
    if area.height == 0 {
        return;
    }
    frame.render_widget(
        Paragraph::new(message)
            .style(Style::default().fg(color))
            .alignment(Alignment::Center),
        Rect { height: 1, ..area },
    );

    if area.height < 2 {
        return;
    }
    let mut spans = Vec::with_capacity(keys.len() * 3);
    for (key, action) in keys {
        if !spans.is_empty() {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(*key, Style::default().fg(Color::White)));
        spans.push(Span::styled(
            format!(" {}", action),
            Style::default().fg(Color::DarkGray),
        ));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        Rect {
            y: area.y + 1,
            height: 1,
            ..area
        },
    );
}

/// Centered box drawn over the field.
pub struct Overlay<'a> {
    pub title: &'a str,
    pub color: Color,
    pub lines: Vec<String>,
    pub hint: &'a str,
}

impl Overlay<'_> {
    const WIDTH: u16 = 40;

    pub fn draw(&self, frame: &mut Frame, area: Rect) {
        let width = Self::WIDTH.min(area.width);
        let height = (self.lines.len() as u16 + 6).min(area.height);
        let rect = Rect::new(
            area.x + (area.width - width) / 2,
            area.y + (area.height - height) / 2,
            width,
            height,
        );
        frame.render_widget(Clear, rect);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.color).add_modifier(Modifier::BOLD));
        let inner = block.inner(rect);
        frame.render_widget(block, rect);

        let mut text = Vec::with_capacity(self.lines.len() + 4);
        text.push(Line::styled(
            self.title,
            Style::default().fg(self.color).add_modifier(Modifier::BOLD),
        ));
        text.push(Line::default());
        text.extend(
            self.lines
                .iter()
                .map(|line| Line::styled(line.as_str(), Style::default().fg(Color::White))),
        );
        text.push(Line::default());
        text.push(Line::styled(self.hint, Style::default().fg(Color::DarkGray)));

        frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), inner);
    }
}
