//! Terminal rendering of the play field.
//!
//! World coordinates are scaled onto the cell grid; each cell is classified by
//! sampling the world at its center.

use crate::config::GameConfig;
use crate::simulation::{CrashCause, GameState, Phase};
use crate::ui::layout::{draw_status, split_screen, Overlay};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// What a single terminal cell shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Sky,
    Bird,
    Pipe,
    /// First or last row of a gap, drawn faintly so the opening is visible.
    GapEdge,
    Ground,
}

/// Everything the scene needs besides the state snapshot.
pub struct SceneInfo<'a> {
    pub config: &'a GameConfig,
    pub best_score: u32,
    pub last_crash: Option<CrashCause>,
}

/// Classify the cell at (`col`, `row`) of a `width` x `height` grid.
///
/// The bottom row is always ground.
pub fn cell_at(
    state: &GameState,
    config: &GameConfig,
    col: u16,
    row: u16,
    width: u16,
    height: u16,
) -> CellKind {
    if height == 0 || width == 0 {
        return CellKind::Sky;
    }
    if row + 1 == height {
        return CellKind::Ground;
    }

    // Rows above the ground strip cover the full world height.
    let sky_rows = f64::from(height - 1);
    let cell_w = config.world_width / f64::from(width);
    let cell_h = config.world_height / sky_rows;
    let wx = (f64::from(col) + 0.5) * cell_w;
    let wy = (f64::from(row) + 0.5) * cell_h;

    if bird_covers(state.bird_y, config, col, row, cell_w, cell_h) {
        return CellKind::Bird;
    }

    for pipe in &state.pipes {
        if wx < pipe.x || wx >= pipe.right(config) {
            continue;
        }
        if wy < pipe.gap_y || wy >= pipe.gap_bottom(config) {
            return CellKind::Pipe;
        }
        if wy < pipe.gap_y + cell_h || wy >= pipe.gap_bottom(config) - cell_h {
            return CellKind::GapEdge;
        }
        return CellKind::Sky;
    }

    CellKind::Sky
}

/// The bird always covers at least the cell holding its center, so it stays
/// visible on small terminals.
fn bird_covers(
    bird_y: f64,
    config: &GameConfig,
    col: u16,
    row: u16,
    cell_w: f64,
    cell_h: f64,
) -> bool {
    let center_x = config.bird_x + config.bird_size / 2.0;
    let center_y = bird_y + config.bird_size / 2.0;
    if (center_x / cell_w).floor() == f64::from(col)
        && (center_y / cell_h).floor() == f64::from(row)
    {
        return true;
    }

    let wx = (f64::from(col) + 0.5) * cell_w;
    let wy = (f64::from(row) + 0.5) * cell_h;
    wx >= config.bird_x
        && wx < config.bird_x + config.bird_size
        && wy >= bird_y
        && wy < bird_y + config.bird_size
}

/// Render the whole game screen.
pub fn render_flappy(frame: &mut Frame, area: Rect, state: &GameState, info: &SceneInfo) {
    let layout = split_screen(frame, area, " Flappy ", 22);

    render_play_area(frame, layout.field, state, info.config);
    render_status_line(frame, layout.status, state);
    render_sidebar(frame, layout.sidebar, state, info);

    let overlay = match state.phase {
        Phase::Idle => Overlay {
            title: "FLAPPY",
            color: Color::Yellow,
            lines: vec!["Fly through the gaps.".to_string()],
            hint: "[Space] to flap and start",
        },
        Phase::GameOver => {
            let mut lines = vec![format!("Score: {}", state.score)];
            if let Some(cause) = info.last_crash {
                lines.push(crash_message(cause).to_string());
            }
            lines.push(format!("Best: {}", info.best_score));
            Overlay {
                title: "GAME OVER",
                color: Color::Red,
                lines,
                hint: "[Space] to play again",
            }
        }
        Phase::Playing => return,
    };
    overlay.draw(frame, layout.field);
}

fn crash_message(cause: CrashCause) -> &'static str {
    match cause {
        CrashCause::Ground => "You hit the ground.",
        CrashCause::Ceiling => "You flew too high.",
        CrashCause::Pipe => "You hit a pipe.",
    }
}

/// Render the bird, pipes and ground.
fn render_play_area(frame: &mut Frame, area: Rect, state: &GameState, config: &GameConfig) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let bird_char = if state.bird_velocity < -2.0 {
        "▲"
    } else if state.bird_velocity > 6.0 {
        "▼"
    } else {
        "►"
    };

    let buf = frame.buffer_mut();
    for row in 0..area.height {
        for col in 0..area.width {
            let (symbol, style) = match cell_at(state, config, col, row, area.width, area.height) {
                CellKind::Sky => (" ", Style::default()),
                CellKind::Bird => (
                    bird_char,
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                CellKind::Pipe => ("█", Style::default().fg(Color::Green)),
                CellKind::GapEdge => ("░", Style::default().fg(Color::DarkGray)),
                CellKind::Ground => ("▀", Style::default().fg(Color::Rgb(84, 168, 55))),
            };
            buf.get_mut(area.x + col, area.y + row)
                .set_symbol(symbol)
                .set_style(style);
        }
    }
}

fn render_status_line(frame: &mut Frame, area: Rect, state: &GameState) {
    let keys = [("[Space]", "Flap"), ("[R]", "Reset"), ("[Q]", "Quit")];
    let (message, color) = match state.phase {
        Phase::Idle => ("Press Space to start!".to_string(), Color::Yellow),
        Phase::Playing => (format!("Score: {}", state.score), Color::Green),
        Phase::GameOver => (format!("Crashed with {} points", state.score), Color::Red),
    };
    draw_status(frame, area, &message, color, &keys);
}

fn render_sidebar(frame: &mut Frame, area: Rect, state: &GameState, info: &SceneInfo) {
    if area.height < 2 || area.width < 4 {
        return;
    }

    let label = Style::default().fg(Color::DarkGray);
    let lines = vec![
        Line::from(vec![
            Span::styled(" Score: ", label),
            Span::styled(
                state.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Best:  ", label),
            Span::styled(info.best_score.to_string(), Style::default().fg(Color::Yellow)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Pipes: ", label),
            Span::styled(state.pipes.len().to_string(), Style::default().fg(Color::Green)),
        ]),
        Line::from(vec![
            Span::styled(" Speed: ", label),
            Span::styled(
                format!("{:+.1}", state.bird_velocity),
                Style::default().fg(Color::Cyan),
            ),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}
