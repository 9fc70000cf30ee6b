use std::collections::HashMap;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{
    classify_segment_orientation, Cell, CollisionType, Direction, GameEngine, GameStatus,
    SegmentOrientation, TickResult,
};
use crate::metrics::GameMetrics;

/// Draws the game. Reads the engine through its accessors only.
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render<R>(&self, frame: &mut Frame, engine: &GameEngine<R>, metrics: &GameMetrics) {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let stats = self.render_stats(engine, metrics);
        frame.render_widget(stats, chunks[0]);

        // Center the game grid horizontally
        let game_area = Layout::default()
            .direction(LayoutDirection::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        if engine.status() == GameStatus::GameOver {
            let game_over = self.render_game_over(engine);
            frame.render_widget(game_over, game_area);
        } else {
            let grid = self.render_grid(engine);
            frame.render_widget(grid, game_area);
        }

        let controls = self.render_controls(engine.status());
        frame.render_widget(controls, chunks[2]);
    }

    fn render_grid<R>(&self, engine: &GameEngine<R>) -> Paragraph<'static> {
        let board = engine.board();
        let segments = snake_glyphs(engine.snake_cells(), engine.head_orientation());
        let food = engine.food_cell();
        let mut lines = Vec::with_capacity(board.height());

        for y in 1..=board.height() as i32 {
            let spans: Vec<Span> = (1..=board.width() as i32)
                .map(|x| {
                    let cell = Cell::new(x, y);
                    if let Some(&(glyph, is_head)) = segments.get(&cell) {
                        let style = if is_head {
                            Style::default()
                                .fg(Color::Cyan)
                                .add_modifier(Modifier::BOLD)
                        } else {
                            Style::default().fg(Color::Green)
                        };
                        Span::styled(glyph, style)
                    } else if cell == food {
                        Span::styled(
                            "● ",
                            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                        )
                    } else {
                        Span::styled("· ", Style::default().fg(Color::DarkGray))
                    }
                })
                .collect();

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats<R>(
        &self,
        engine: &GameEngine<R>,
        metrics: &GameMetrics,
    ) -> Paragraph<'static> {
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default().fg(Color::White);

        let text = vec![Line::from(vec![
            Span::styled("Score: ", label),
            Span::styled(
                engine.score().to_string(),
                value.add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Best: ", label),
            Span::styled(engine.high_score().to_string(), value),
            Span::raw("    "),
            Span::styled("Time: ", label),
            Span::styled(metrics.format_time(), value),
            Span::raw("    "),
            Span::styled("Games: ", label),
            Span::styled(metrics.games_played.to_string(), value),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over<R>(&self, engine: &GameEngine<R>) -> Paragraph<'static> {
        let reason = match engine.outcome() {
            Some(TickResult::GameOver(collision_type)) => {
                format!("You hit the {}", obstacle_name(collision_type))
            }
            Some(TickResult::BoardFull) => "The board is full".to_string(),
            _ => String::new(),
        };

        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(Span::styled(reason, Style::default().fg(Color::Gray))),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    engine.score().to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("   "),
                Span::styled("Best: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    engine.high_score().to_string(),
                    Style::default().fg(Color::White),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "R",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to restart or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self, status: GameStatus) -> Paragraph<'static> {
        let mut spans = Vec::new();
        if status == GameStatus::Idle {
            spans.push(Span::styled(
                "Pick a direction to start | ",
                Style::default().fg(Color::Green),
            ));
        }
        spans.extend([
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(", "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" or drag to move | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" to restart | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ]);

        Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

fn obstacle_name(collision_type: CollisionType) -> &'static str {
    match collision_type {
        CollisionType::Wall => "wall",
        CollisionType::SelfCollision => "snake",
    }
}

/// Two-column glyph for every snake cell, flagged with whether it is the head
fn snake_glyphs(
    body: &[Cell],
    head_orientation: Direction,
) -> HashMap<Cell, (&'static str, bool)> {
    let mut glyphs = HashMap::with_capacity(body.len());

    for (index, &cell) in body.iter().enumerate() {
        let glyph = if index == 0 {
            head_glyph(head_orientation)
        } else if let Some(&next) = body.get(index + 1) {
            joint_glyph(body[index - 1], cell, next)
        } else {
            straight_glyph(body[index - 1], cell)
        };
        glyphs.insert(cell, (glyph, index == 0));
    }

    glyphs
}

fn head_glyph(orientation: Direction) -> &'static str {
    match orientation {
        Direction::Up => "▲ ",
        Direction::Down => "▼ ",
        Direction::Left => "◀ ",
        Direction::Right => "▶ ",
    }
}

fn joint_glyph(prev: Cell, curr: Cell, next: Cell) -> &'static str {
    match classify_segment_orientation(prev, curr, next) {
        SegmentOrientation::TopLeft => "╭─",
        SegmentOrientation::TopRight => "╮ ",
        SegmentOrientation::BottomLeft => "╰─",
        SegmentOrientation::BottomRight => "╯ ",
        SegmentOrientation::Straight => straight_glyph(prev, curr),
    }
}

fn straight_glyph(prev: Cell, curr: Cell) -> &'static str {
    if prev.y == curr.y {
        "──"
    } else {
        "│ "
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameConfig;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw<R>(engine: &GameEngine<R>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
        let metrics = GameMetrics::new();
        terminal
            .draw(|frame| Renderer::new().render(frame, engine, &metrics))
            .unwrap();

        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_frame_shows_grid_while_playing() {
        let engine = GameEngine::with_seed(GameConfig::default(), 3).unwrap();
        let screen = draw(&engine);

        assert!(screen.contains("Snake"));
        assert!(screen.contains('▶'));
        assert!(screen.contains('●'));
        assert!(!screen.contains("GAME OVER"));
    }

    #[test]
    fn test_frame_shows_panel_after_game_over() {
        let mut engine = GameEngine::with_seed(GameConfig::default(), 3).unwrap();
        engine.set_direction(Direction::Left);
        engine.tick();
        let screen = draw(&engine);

        assert!(screen.contains("GAME OVER"));
        assert!(!screen.contains('●'));
    }

    #[test]
    fn test_head_glyph_follows_orientation() {
        let body = [Cell::new(7, 10), Cell::new(6, 10), Cell::new(5, 10)];

        let glyphs = snake_glyphs(&body, Direction::Right);
        assert_eq!(glyphs[&Cell::new(7, 10)], ("▶ ", true));

        let glyphs = snake_glyphs(&body, Direction::Up);
        assert_eq!(glyphs[&Cell::new(7, 10)], ("▲ ", true));
    }

    #[test]
    fn test_straight_body() {
        let body = [Cell::new(7, 10), Cell::new(6, 10), Cell::new(5, 10)];
        let glyphs = snake_glyphs(&body, Direction::Right);

        assert_eq!(glyphs[&Cell::new(6, 10)], ("──", false));
        assert_eq!(glyphs[&Cell::new(5, 10)], ("──", false));

        let body = [Cell::new(3, 3), Cell::new(3, 4), Cell::new(3, 5)];
        let glyphs = snake_glyphs(&body, Direction::Up);
        assert_eq!(glyphs[&Cell::new(3, 4)], ("│ ", false));
    }

    #[test]
    fn test_corner_glyphs() {
        // Head moved up from (8,10) after travelling right
        let body = [Cell::new(8, 9), Cell::new(8, 10), Cell::new(7, 10)];
        let glyphs = snake_glyphs(&body, Direction::Up);
        assert_eq!(glyphs[&Cell::new(8, 10)], ("╯ ", false));

        let body = [Cell::new(5, 5), Cell::new(5, 6), Cell::new(6, 6)];
        let glyphs = snake_glyphs(&body, Direction::Up);
        assert_eq!(glyphs[&Cell::new(5, 6)], ("╰─", false));
    }

    #[test]
    fn test_single_cell_snake() {
        let glyphs = snake_glyphs(&[Cell::new(1, 1)], Direction::Left);
        assert_eq!(glyphs.len(), 1);
        assert_eq!(glyphs[&Cell::new(1, 1)], ("◀ ", true));
    }
}
