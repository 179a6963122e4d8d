//! Shooting gallery scene: drifting targets and the crosshair.

use super::game_common::{
    create_game_layout, render_game_over_overlay, render_info_panel_frame, render_status_bar,
    GameResultType,
};
use crate::games::shooting::{ShootingGame, TARGETS_TO_WIN};
use crate::games::GameOutcome;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// World units per terminal column / row, matching the maze scene's scale.
const CELL_W: i32 = 10;
const CELL_H: i32 = 20;

pub fn render_shooting_scene(frame: &mut Frame, area: Rect, game: &ShootingGame) {
    if let Some(outcome) = game.outcome {
        let (result, title, message) = match outcome {
            GameOutcome::Won => (
                GameResultType::Win,
                ":: SHOOTING GALLERY WON! ::",
                format!("All {} targets down.", TARGETS_TO_WIN),
            ),
            GameOutcome::Lost => (GameResultType::Loss, "DEFEAT", String::new()),
        };
        render_game_over_overlay(frame, area, result, title, &message);
        return;
    }

    let layout = create_game_layout(frame, area, " Shooting Gallery ", Color::LightRed, 20);

    render_field(frame, layout.content, game);
    render_status_bar(
        frame,
        layout.status_bar,
        "Shoot them down!",
        Color::LightRed,
        &[
            ("[Arrows]", "Aim"),
            ("[Enter]", "Shoot"),
            ("[Esc]", "Leave booth"),
        ],
    );
    render_info_panel(frame, layout.info_panel, game);
}

fn render_field(frame: &mut Frame, area: Rect, game: &ShootingGame) {
    let cols = (game.field.0 / CELL_W).min(area.width as i32).max(0) as usize;
    let rows = (game.field.1 / CELL_H).min(area.height as i32).max(0) as usize;
    if cols == 0 || rows == 0 {
        return;
    }

    let mut cells: Vec<Vec<(char, Color)>> = vec![vec![(' ', Color::Reset); cols]; rows];

    for target in game.targets.iter().filter(|t| t.alive) {
        let bounds = target.bounds();
        let x0 = bounds.left() / CELL_W;
        let x1 = (bounds.right() + CELL_W - 1) / CELL_W;
        let y0 = bounds.top() / CELL_H;
        let y1 = (bounds.bottom() + CELL_H - 1) / CELL_H;
        for y in y0..y1 {
            for x in x0..x1 {
                if y >= 0 && x >= 0 && (y as usize) < rows && (x as usize) < cols {
                    cells[y as usize][x as usize] = ('\u{25A0}', Color::Red);
                }
            }
        }
    }

    // Crosshair drawn last so it reads on top of a target
    let cx = game.crosshair.x / CELL_W;
    let cy = game.crosshair.y / CELL_H;
    if cx >= 0 && cy >= 0 && (cx as usize) < cols && (cy as usize) < rows {
        cells[cy as usize][cx as usize] = ('+', Color::Yellow);
    }

    let lines: Vec<Line> = cells
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .iter()
                .map(|&(ch, color)| match color {
                    Color::Reset => Span::raw(" "),
                    c => Span::styled(ch.to_string(), Style::default().fg(c)),
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_info_panel(frame: &mut Frame, area: Rect, game: &ShootingGame) {
    let inner = render_info_panel_frame(frame, area);

    let lines = vec![
        Line::from(vec![
            Span::styled("Hits: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}/{}", game.hits, TARGETS_TO_WIN),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Targets left: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", game.targets_alive()),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(" \u{25A0} ", Style::default().fg(Color::Red)),
            Span::styled("Target", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(vec![
            Span::styled(" + ", Style::default().fg(Color::Yellow)),
            Span::styled("Crosshair", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
