//! Terminal rendering of a `RenderSnapshot`.
//!
//! The logical screen (pixels) is scaled onto whatever cell grid the play
//! field gets; each cell shows what lies under its center point.

use crate::core::config::GameConfig;
use crate::core::constants::{
    CAP_HEIGHT, CAP_OVERHANG, MIN_PLAY_AREA_HEIGHT, MIN_PLAY_AREA_WIDTH, STATUS_BAR_HEIGHT,
};
use crate::game::{ObstacleView, RenderSnapshot};
use crate::ui::game_common::{
    create_game_layout, render_game_over_box, render_info_panel_frame, render_status_bar,
};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const SKY: Color = Color::Rgb(135, 206, 235);
const PIPE: Color = Color::Rgb(0, 128, 0);
const AVATAR: Color = Color::Rgb(255, 255, 0);
const INFO_PANEL_WIDTH: u16 = 22;

/// What occupies one sampled point of the play field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Sky,
    Pipe,
    Cap,
    Avatar,
    Eye,
}

/// Draw the whole game screen.
pub fn render_game(frame: &mut Frame, area: Rect, snapshot: &RenderSnapshot, config: &GameConfig) {
    let layout = create_game_layout(
        frame,
        area,
        " Flapper ",
        Color::Cyan,
        MIN_PLAY_AREA_HEIGHT,
        MIN_PLAY_AREA_WIDTH,
        INFO_PANEL_WIDTH,
    );

    render_play_field(frame, layout.content, snapshot, config);
    render_status_bar_content(frame, layout.status_bar, snapshot);
    render_info_panel(frame, layout.info_panel, snapshot, config);

    if snapshot.game_over {
        render_game_over_box(
            frame,
            layout.content,
            "GAME OVER",
            "Press SPACE to restart",
        );
    }
}

/// Classify the logical point `(px, py)`. The avatar is drawn on top of pipes.
pub fn classify_point(snapshot: &RenderSnapshot, config: &GameConfig, px: f64, py: f64) -> Cell {
    let eye_x = snapshot.avatar_x + 10.0;
    let eye_y = snapshot.avatar_y - 5.0;
    if (px - eye_x).hypot(py - eye_y) <= 3.0 {
        return Cell::Eye;
    }
    if (px - snapshot.avatar_x).hypot(py - snapshot.avatar_y) <= snapshot.avatar_radius {
        return Cell::Avatar;
    }

    snapshot
        .obstacles
        .iter()
        .map(|o| classify_obstacle(o, config, px, py))
        .find(|cell| *cell != Cell::Sky)
        .unwrap_or(Cell::Sky)
}

fn classify_obstacle(obstacle: &ObstacleView, config: &GameConfig, px: f64, py: f64) -> Cell {
    let gap_top = f64::from(obstacle.gap_center_y) - config.half_gap();
    let gap_bottom = f64::from(obstacle.gap_center_y) + config.half_gap();

    let in_cap_x = px >= obstacle.x - CAP_OVERHANG
        && px < obstacle.x + config.obstacle_width + CAP_OVERHANG;
    let in_top_cap = py >= gap_top - CAP_HEIGHT && py < gap_top;
    let in_bottom_cap = py >= gap_bottom && py < gap_bottom + CAP_HEIGHT;
    if in_cap_x && (in_top_cap || in_bottom_cap) {
        return Cell::Cap;
    }

    let in_column = px >= obstacle.x && px < obstacle.x + config.obstacle_width;
    if in_column && (py < gap_top || py >= gap_bottom) {
        return Cell::Pipe;
    }

    Cell::Sky
}

fn cell_span(cell: Cell) -> Span<'static> {
    match cell {
        Cell::Sky => Span::styled(" ", Style::default().bg(SKY)),
        Cell::Pipe => Span::styled("█", Style::default().fg(PIPE).bg(SKY)),
        Cell::Cap => Span::styled(
            "▓",
            Style::default()
                .fg(PIPE)
                .bg(SKY)
                .add_modifier(Modifier::BOLD),
        ),
        Cell::Avatar => Span::styled("█", Style::default().fg(AVATAR).bg(SKY)),
        Cell::Eye => Span::styled("●", Style::default().fg(Color::Black).bg(AVATAR)),
    }
}

/// Sample the logical screen at each cell center.
fn render_play_field(frame: &mut Frame, area: Rect, snapshot: &RenderSnapshot, config: &GameConfig) {
    let width = area.width as usize;
    let height = area.height as usize;
    if width == 0 || height == 0 {
        return;
    }

    let x_scale = f64::from(config.screen_width) / width as f64;
    let y_scale = f64::from(config.screen_height) / height as f64;

    let mut lines = Vec::with_capacity(height);
    for row in 0..height {
        let py = (row as f64 + 0.5) * y_scale;
        let spans: Vec<Span> = (0..width)
            .map(|col| {
                let px = (col as f64 + 0.5) * x_scale;
                cell_span(classify_point(snapshot, config, px, py))
            })
            .collect();
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);

    let score = Paragraph::new(Span::styled(
        format!("Score: {}", snapshot.score),
        Style::default()
            .fg(Color::White)
            .bg(SKY)
            .add_modifier(Modifier::BOLD),
    ));
    let score_width = area.width.min(16);
    frame.render_widget(score, Rect::new(area.x, area.y, score_width, 1));
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, snapshot: &RenderSnapshot) {
    let area = Rect {
        height: area.height.min(STATUS_BAR_HEIGHT),
        ..area
    };
    if snapshot.game_over {
        render_status_bar(
            frame,
            area,
            &format!("Crashed with {} points", snapshot.score),
            Color::Red,
            &[("[Space]", "Restart"), ("[Esc/Q]", "Quit")],
        );
    } else {
        render_status_bar(
            frame,
            area,
            &format!("Score: {}", snapshot.score),
            Color::Green,
            &[("[Space/Up/Enter]", "Flap"), ("[Esc/Q]", "Quit")],
        );
    }
}

fn render_info_panel(
    frame: &mut Frame,
    area: Rect,
    snapshot: &RenderSnapshot,
    config: &GameConfig,
) {
    let inner = render_info_panel_frame(frame, area);
    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);

    let (state_text, state_color) = if snapshot.game_over {
        ("Game Over", Color::Red)
    } else {
        ("Playing", Color::Green)
    };

    let seconds = snapshot.tick / u64::from(config.ticks_per_second.max(1));

    let lines = vec![
        Line::from(Span::styled(
            format!(" {} ", state_text),
            Style::default()
                .fg(state_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Score: ", label),
            Span::styled(snapshot.score.to_string(), value),
        ]),
        Line::from(vec![
            Span::styled(" Time: ", label),
            Span::styled(format!("{}s", seconds), value),
        ]),
        Line::from(vec![
            Span::styled(" Pipes: ", label),
            Span::styled(snapshot.obstacles.len().to_string(), value),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Height: ", label),
            Span::styled(
                format!("{:.0}", f64::from(config.screen_height) - snapshot.avatar_y),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Speed: ", label),
            Span::styled(
                format!("{:+.1}", -snapshot.avatar_velocity),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Gap: ", label),
            Span::styled(config.gap_size.to_string(), Style::default().fg(Color::Green)),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
