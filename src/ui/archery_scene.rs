//! Archery scene. The booth is an empty shell, and the scene says so.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::games::archery::ArcheryGame;

pub fn render_archery_scene(frame: &mut Frame, area: Rect, _game: &ArcheryGame) {
    let block = Block::default()
        .title(" Archery ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::LightMagenta));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let content_height: u16 = 5;
    let y_offset = inner.y + inner.height.saturating_sub(content_height) / 2;

    let lines = vec![
        Line::from(Span::styled(
            "The archery range is quiet.",
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "No targets have been set up yet.",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[Esc] Back to the midway",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let text = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(
        text,
        Rect::new(inner.x, y_offset, inner.width, content_height.min(inner.height)),
    );
}
