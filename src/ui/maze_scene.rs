//! Maze scene: walls and the runner, drawn on a scaled cell grid.

use super::game_common::{
    create_game_layout, render_game_over_overlay, render_info_panel_frame, render_status_bar,
    GameResultType,
};
use crate::games::maze::MazeGame;
use crate::games::GameOutcome;
use crate::geometry::Rect as WorldRect;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// World units per terminal column / row. Rows are twice as coarse because
/// terminal cells are roughly twice as tall as they are wide.
const CELL_W: i32 = 10;
const CELL_H: i32 = 20;

pub fn render_maze_scene(frame: &mut Frame, area: Rect, game: &MazeGame) {
    if let Some(outcome) = game.outcome {
        let (result, title, message) = match outcome {
            GameOutcome::Won => (GameResultType::Win, ":: MAZE CLEARED! ::", String::new()),
            GameOutcome::Lost => (
                GameResultType::Loss,
                "GAME OVER",
                "You hit a wall.".to_string(),
            ),
        };
        render_game_over_overlay(frame, area, result, title, &message);
        return;
    }

    let layout = create_game_layout(frame, area, " Maze ", Color::Magenta, 20);

    render_field(frame, layout.content, game);
    render_status_bar(
        frame,
        layout.status_bar,
        "Thread the passages!",
        Color::Magenta,
        &[("[Arrows]", "Move"), ("[Esc]", "Leave booth")],
    );
    render_info_panel(frame, layout.info_panel, game);
}

fn render_field(frame: &mut Frame, area: Rect, game: &MazeGame) {
    let cols = (game.field.0 / CELL_W).min(area.width as i32).max(0) as usize;
    let rows = (game.field.1 / CELL_H).min(area.height as i32).max(0) as usize;
    if cols == 0 || rows == 0 {
        return;
    }

    let mut cells: Vec<Vec<Color>> = vec![vec![Color::Reset; cols]; rows];

    for wall in &game.walls {
        fill_box(&mut cells, wall, Color::Gray);
    }
    fill_box(&mut cells, &game.player_box(), Color::LightGreen);

    let lines: Vec<Line> = cells
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .iter()
                .map(|&color| match color {
                    Color::Reset => Span::raw(" "),
                    c => Span::styled("\u{2588}", Style::default().fg(c)),
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

/// Mark every cell covered by a world-unit box.
fn fill_box(cells: &mut [Vec<Color>], rect: &WorldRect, color: Color) {
    let x0 = rect.left() / CELL_W;
    let x1 = (rect.right() + CELL_W - 1) / CELL_W;
    let y0 = rect.top() / CELL_H;
    let y1 = (rect.bottom() + CELL_H - 1) / CELL_H;

    for y in y0..y1 {
        for x in x0..x1 {
            if y >= 0 && x >= 0 && (y as usize) < cells.len() && (x as usize) < cells[0].len() {
                cells[y as usize][x as usize] = color;
            }
        }
    }
}

fn render_info_panel(frame: &mut Frame, area: Rect, game: &MazeGame) {
    let inner = render_info_panel_frame(frame, area);

    let lines = vec![
        Line::from(vec![
            Span::styled("Position: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{},{}", game.player.x, game.player.y),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "One touch of a wall",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            "ends the run.",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
