use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::game::{GameState, GameStatus};
use crate::position::{GridSize, Position};

/// Terminal columns per grid cell; keeps cells roughly square.
const CELL_WIDTH: u16 = 2;

const GLYPH_SNAKE_HEAD: &str = "██";
const GLYPH_SNAKE_BODY: &str = "▓▓";
const GLYPH_FOOD: &str = "()";

/// Renders the full game frame from an immutable snapshot.
pub fn render(frame: &mut Frame<'_>, state: &GameState) {
    let [play_area, status_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());

    let bounds = state.bounds();
    let board = Rect {
        width: bounds
            .width
            .saturating_mul(CELL_WIDTH)
            .saturating_add(2)
            .min(play_area.width),
        height: bounds.height.saturating_add(2).min(play_area.height),
        ..play_area
    };

    let block = Block::bordered()
        .title(" snake ")
        .border_style(Style::new().fg(Color::White));
    let inner = block.inner(board);
    frame.render_widget(block, board);

    render_food(frame, inner, state);
    render_snake(frame, inner, state);
    render_status_line(frame, status_area, state);

    let score = format!("Score: {}", state.score);
    match state.status {
        GameStatus::Playing => {}
        GameStatus::Paused => {
            render_popup(frame, board, " pause ", &["PAUSED", "", "[Space] Resume"]);
        }
        GameStatus::GameOver => render_popup(
            frame,
            board,
            " game over ",
            &["GAME OVER", "", score.as_str(), "", "[R] Restart"],
        ),
        GameStatus::BoardFull => render_popup(
            frame,
            board,
            " board full ",
            &["YOU WIN", "", score.as_str(), "", "[R] Restart"],
        ),
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, state: &GameState) {
    let Some((x, y)) = logical_to_terminal(inner, state.bounds(), state.food.position) else {
        return;
    };

    frame
        .buffer_mut()
        .set_string(x, y, GLYPH_FOOD, Style::new().fg(Color::Red));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, state: &GameState) {
    let buffer = frame.buffer_mut();
    for (index, segment) in state.snake.segments().enumerate() {
        let Some((x, y)) = logical_to_terminal(inner, state.bounds(), *segment) else {
            continue;
        };

        if index == 0 {
            buffer.set_string(
                x,
                y,
                GLYPH_SNAKE_HEAD,
                Style::new().fg(Color::White).add_modifier(Modifier::BOLD),
            );
        } else {
            buffer.set_string(x, y, GLYPH_SNAKE_BODY, Style::new().fg(Color::Green));
        }
    }
}

fn render_status_line(frame: &mut Frame<'_>, area: Rect, state: &GameState) {
    let line = format!(
        " Score: {}   Length: {}   [Arrows/WASD] Move  [Space] Pause  [R] Restart  [Q] Quit",
        state.score,
        state.snake.len()
    );
    frame.render_widget(
        Paragraph::new(Line::from(line)).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

fn render_popup(frame: &mut Frame<'_>, area: Rect, title: &str, lines: &[&str]) {
    let popup = centered_popup(area, 70, 50);
    frame.render_widget(Clear, popup);

    let lines: Vec<Line<'_>> = lines.iter().map(|line| Line::from(*line)).collect();
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(title)),
        popup,
    );
}

fn centered_popup(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [_, mid, _] = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .areas(mid);

    center
}

fn logical_to_terminal(inner: Rect, bounds: GridSize, position: Position) -> Option<(u16, u16)> {
    if !position.is_in_bounds(bounds) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?.saturating_mul(CELL_WIDTH);
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x.saturating_add(CELL_WIDTH) > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
