//! Typing race scene.

use super::game_common::{
    create_game_layout, render_game_over_overlay, render_info_panel_frame, render_status_bar,
    GameResultType,
};
use crate::games::typing::{TypingGame, PROMPT_WORDS};
use crate::games::GameOutcome;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

pub fn render_typing_scene(frame: &mut Frame, area: Rect, game: &TypingGame) {
    if let Some(outcome) = game.outcome {
        let (result, title, message) = match outcome {
            GameOutcome::Won => (
                GameResultType::Win,
                ":: TYPING RACE WON! ::",
                format!("All {} words typed inside the minute.", PROMPT_WORDS),
            ),
            GameOutcome::Lost => (
                GameResultType::Loss,
                "TIME'S UP",
                format!("{}/{} words. Too slow this time.", game.matched, PROMPT_WORDS),
            ),
        };
        render_game_over_overlay(frame, area, result, title, &message);
        return;
    }

    let layout = create_game_layout(frame, area, " Typing Race ", Color::LightBlue, 20);

    render_prompt_and_input(frame, layout.content, game);
    render_status_bar(
        frame,
        layout.status_bar,
        "Type!",
        Color::LightBlue,
        &[("[Esc]", "Leave booth")],
    );
    render_info_panel(frame, layout.info_panel, game);
}

fn render_prompt_and_input(frame: &mut Frame, area: Rect, game: &TypingGame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(2)])
        .split(area);

    let typed_words: Vec<&str> = game.typed.split_whitespace().collect();
    let cursor_index = typed_words.len();

    // One span per prompt word: green once matched, highlighted at the
    // cursor, dim otherwise.
    let mut spans: Vec<Span> = Vec::with_capacity(game.prompt.len() * 2);
    for (i, word) in game.prompt.iter().enumerate() {
        let matched = typed_words.get(i).is_some_and(|typed| typed == word);
        let style = if matched {
            Style::default().fg(Color::Green)
        } else if i == cursor_index {
            Style::default().fg(Color::White).add_modifier(Modifier::UNDERLINED)
        } else if i < cursor_index {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(*word, style));
        spans.push(Span::raw(" "));
    }

    let prompt = Paragraph::new(Line::from(spans)).wrap(Wrap { trim: false });
    frame.render_widget(prompt, chunks[0]);

    // Show the tail of the input if it has outgrown the row
    let visible_width = chunks[1].width.saturating_sub(2) as usize;
    let tail: String = game
        .typed
        .chars()
        .rev()
        .take(visible_width)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    let input_line = Line::from(vec![
        Span::styled("> ", Style::default().fg(Color::DarkGray)),
        Span::styled(tail, Style::default().fg(Color::White)),
    ]);
    frame.render_widget(Paragraph::new(input_line), chunks[1]);
}

fn render_info_panel(frame: &mut Frame, area: Rect, game: &TypingGame) {
    let inner = render_info_panel_frame(frame, area);

    let time_color = if game.seconds_left <= 10 {
        Color::Red
    } else {
        Color::Yellow
    };

    let lines = vec![
        Line::from(vec![
            Span::styled("Time: ", Style::default().fg(Color::DarkGray)),
            Span::styled(format!("{}s", game.seconds_left), Style::default().fg(time_color)),
        ]),
        Line::from(vec![
            Span::styled("Words: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}/{}", game.matched, PROMPT_WORDS),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Match every word at",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            "its own position.",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
