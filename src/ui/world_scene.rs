//! Main-world scene: the midway grounds, booths, and the wandering player.

use crate::core::game_state::GameState;
use crate::world::Zone;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const BORDER_H: char = '\u{2500}'; // ─
const BORDER_V: char = '\u{2502}'; // │
const BORDER_TL: char = '\u{250C}'; // ┌
const BORDER_TR: char = '\u{2510}'; // ┐
const BORDER_BL: char = '\u{2514}'; // └
const BORDER_BR: char = '\u{2518}'; // ┘

/// A character cell buffer the scene is composed into before rendering.
struct CharGrid {
    cols: usize,
    rows: usize,
    cells: Vec<(char, Color)>,
}

impl CharGrid {
    fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            cells: vec![(' ', Color::Reset); cols * rows],
        }
    }

    fn put(&mut self, x: i32, y: i32, ch: char, color: Color) {
        if x >= 0 && y >= 0 && (x as usize) < self.cols && (y as usize) < self.rows {
            self.cells[y as usize * self.cols + x as usize] = (ch, color);
        }
    }

    fn put_str(&mut self, x: i32, y: i32, text: &str, color: Color) {
        for (i, ch) in text.chars().enumerate() {
            self.put(x + i as i32, y, ch, color);
        }
    }

    /// Convert a row into a line, batching runs of the same color.
    fn line(&self, row: usize) -> Line<'static> {
        let mut spans = Vec::new();
        let mut run = String::new();
        let mut run_color = Color::Reset;

        for col in 0..self.cols {
            let (ch, color) = self.cells[row * self.cols + col];
            if color != run_color && !run.is_empty() {
                spans.push(Span::styled(
                    std::mem::take(&mut run),
                    Style::default().fg(run_color),
                ));
            }
            run_color = color;
            run.push(ch);
        }
        if !run.is_empty() {
            spans.push(Span::styled(run, Style::default().fg(run_color)));
        }

        Line::from(spans)
    }
}

/// Render the midway grounds.
pub fn render_world_scene(frame: &mut Frame, area: Rect, state: &GameState) {
    let block = Block::default()
        .title(" The Midway ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width < 20 || inner.height < 8 {
        return;
    }

    let mut grid = CharGrid::new(inner.width as usize, inner.height as usize);

    for zone in &state.layout.zones {
        draw_zone(&mut grid, state, zone);
    }

    // The player, if it is on the visible grounds at all
    let (px, py) = project(state, state.player.x, state.player.y, &grid);
    grid.put(px, py, '@', Color::White);

    // Hover banner above the hovered booth
    if let Some(id) = state.hovered_zone {
        if let Some(rect) = state.layout.zone_rect(id) {
            let (bx, by) = project(state, rect.x, rect.y, &grid);
            let banner = format!(" Press Enter to play {} ", id.name());
            grid.put_str(bx, by - 1, &banner, Color::Yellow);
        }
    }

    let lines: Vec<Line> = (0..grid.rows).map(|row| grid.line(row)).collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

/// Project world units onto grid cells.
fn project(state: &GameState, x: i32, y: i32, grid: &CharGrid) -> (i32, i32) {
    let world = state.layout.world;
    // Guard against a degenerate layout; the asset test enforces > 0
    let w = world.width.max(1);
    let h = world.height.max(1);
    (
        x * grid.cols as i32 / w,
        y * grid.rows as i32 / h,
    )
}

fn draw_zone(grid: &mut CharGrid, state: &GameState, zone: &Zone) {
    let beaten = state.beaten.contains(&zone.game);
    let hovered = state.hovered_zone == Some(zone.game);

    let color = if beaten {
        Color::DarkGray
    } else if hovered {
        Color::Yellow
    } else {
        Color::Green
    };

    let (x0, y0) = project(state, zone.rect.x, zone.rect.y, grid);
    let (x1, y1) = project(state, zone.rect.right(), zone.rect.bottom(), grid);
    let (x1, y1) = (x1.max(x0 + 3), y1.max(y0 + 2));

    // Border
    for x in x0..=x1 {
        grid.put(x, y0, BORDER_H, color);
        grid.put(x, y1, BORDER_H, color);
    }
    for y in y0..=y1 {
        grid.put(x0, y, BORDER_V, color);
        grid.put(x1, y, BORDER_V, color);
    }
    grid.put(x0, y0, BORDER_TL, color);
    grid.put(x1, y0, BORDER_TR, color);
    grid.put(x0, y1, BORDER_BL, color);
    grid.put(x1, y1, BORDER_BR, color);

    // Centered label
    let label = if beaten {
        format!("{} \u{2713}", zone.game.name())
    } else {
        zone.game.name().to_string()
    };
    let label_len = label.chars().count() as i32;
    let label_x = x0 + ((x1 - x0).saturating_sub(label_len) / 2).max(1);
    let label_y = y0 + (y1 - y0) / 2;
    grid.put_str(label_x, label_y, &label, color);
}
