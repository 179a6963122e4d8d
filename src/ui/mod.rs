//! Terminal rendering: a projection of the game state, nothing more.

pub mod archery_scene;
pub mod game_common;
pub mod maze_scene;
pub mod memory_scene;
pub mod shooting_scene;
pub mod typing_scene;
pub mod world_scene;

use crate::core::game_state::GameState;
use crate::games::{ActiveMinigame, GameId};
use chrono::Utc;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw one frame: the active scene, the event log, and the footer.
pub fn draw_ui(frame: &mut Frame, state: &GameState) {
    let size = frame.size();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(14),   // Scene
            Constraint::Length(6), // Event log
            Constraint::Length(1), // Footer
        ])
        .split(size);

    draw_scene(frame, chunks[0], state);
    draw_event_log(frame, chunks[1], state);
    draw_footer(frame, chunks[2], state);
}

/// Dispatch the scene area to the active mini-game, or the midway itself.
fn draw_scene(frame: &mut Frame, area: Rect, state: &GameState) {
    match &state.active_minigame {
        Some(ActiveMinigame::Archery(game)) => {
            archery_scene::render_archery_scene(frame, area, game);
        }
        Some(ActiveMinigame::Typing(game)) => {
            typing_scene::render_typing_scene(frame, area, game);
        }
        Some(ActiveMinigame::Maze(game)) => {
            maze_scene::render_maze_scene(frame, area, game);
        }
        Some(ActiveMinigame::Memory(game)) => {
            memory_scene::render_memory_scene(frame, area, game);
        }
        Some(ActiveMinigame::Shooting(game)) => {
            shooting_scene::render_shooting_scene(frame, area, game);
        }
        None => {
            world_scene::render_world_scene(frame, area, state);
        }
    }
}

fn draw_event_log(frame: &mut Frame, area: Rect, state: &GameState) {
    let block = Block::default()
        .title(" Events ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = state
        .event_log
        .iter()
        .take(inner.height as usize)
        .enumerate()
        .map(|(i, message)| {
            let color = if i == 0 { Color::White } else { Color::DarkGray };
            Line::from(Span::styled(message.clone(), Style::default().fg(color)))
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

fn draw_footer(frame: &mut Frame, area: Rect, state: &GameState) {
    let elapsed = (Utc::now().timestamp() - state.session_started).max(0);
    let clock = format!(
        "{:02}:{:02}:{:02}",
        elapsed / 3600,
        (elapsed % 3600) / 60,
        elapsed % 60
    );

    let hints = if state.in_minigame() {
        "[Esc] Leave booth"
    } else {
        "[Arrows] Move  [Enter] Play  [Q] Quit"
    };

    let line = Line::from(vec![
        Span::styled(
            format!(" Booths beaten: {}/{} ", state.beaten_count(), GameId::ALL.len()),
            Style::default().fg(Color::Green),
        ),
        Span::styled(
            format!(" Session: {} ", clock),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(format!(" {}", hints), Style::default().fg(Color::DarkGray)),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}
