//! Memory match scene: the card grid.

use super::game_common::{
    create_game_layout, render_game_over_overlay, render_info_panel_frame, render_status_bar,
    GameResultType,
};
use crate::games::memory::{CardFace, MemoryGame, GRID_COLS, GRID_ROWS, PAIR_COUNT};
use crate::games::GameOutcome;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render_memory_scene(frame: &mut Frame, area: Rect, game: &MemoryGame) {
    if let Some(outcome) = game.outcome {
        let (result, title, message) = match outcome {
            GameOutcome::Won => (
                GameResultType::Win,
                ":: MEMORY MATCH WON! ::",
                format!("All {} pairs found.", PAIR_COUNT),
            ),
            GameOutcome::Lost => (
                GameResultType::Loss,
                "DEFEAT",
                String::new(),
            ),
        };
        render_game_over_overlay(frame, area, result, title, &message);
        return;
    }

    let layout = create_game_layout(frame, area, " Memory Match ", Color::LightYellow, 20);

    render_board(frame, layout.content, game);
    render_status_bar(
        frame,
        layout.status_bar,
        "Find the pairs!",
        Color::LightYellow,
        &[
            ("[Arrows]", "Move"),
            ("[Enter]", "Flip"),
            ("[Esc]", "Leave booth"),
        ],
    );
    render_info_panel(frame, layout.info_panel, game);
}

fn render_board(frame: &mut Frame, area: Rect, game: &MemoryGame) {
    let mut lines: Vec<Line> = Vec::with_capacity(GRID_ROWS * 2);

    for row in 0..GRID_ROWS {
        let mut spans: Vec<Span> = Vec::with_capacity(GRID_COLS * 2);
        for col in 0..GRID_COLS {
            let index = row * GRID_COLS + col;
            let card = game.cards[index];

            let (text, mut style) = match card.face {
                CardFace::Down => ("[ ?? ]".to_string(), Style::default().fg(Color::DarkGray)),
                CardFace::Up => (
                    format!("[ {:>2} ]", card.value),
                    Style::default().fg(Color::Yellow),
                ),
                CardFace::Matched => (
                    format!("( {:>2} )", card.value),
                    Style::default().fg(Color::Green),
                ),
            };

            if game.cursor == (row, col) {
                style = style.add_modifier(Modifier::REVERSED);
            }

            spans.push(Span::styled(text, style));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_info_panel(frame: &mut Frame, area: Rect, game: &MemoryGame) {
    let inner = render_info_panel_frame(frame, area);

    let mut lines = vec![Line::from(vec![
        Span::styled("Pairs: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{}/{}", game.matched_pairs, PAIR_COUNT),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
    ])];

    if game.pending_hide.is_some() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "No match...",
            Style::default().fg(Color::Red),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
