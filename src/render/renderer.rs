use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::game::{GameState, Phase, Point, Position, PredatorKind};
use crate::metrics::GameMetrics;
use crate::render::theme::{ColorScheme, Theme, anger_tint};

/// What occupies one grid cell on screen
#[derive(Debug, Clone, Copy, PartialEq)]
enum Tile {
    Empty,
    Body,
    Head,
    /// Segment the snake died on
    Wreck,
    Food,
    SpecialFood,
    DiveTarget,
    Predator { kind: PredatorKind, anger: u8, diving: bool },
}

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        state: &GameState,
        metrics: &GameMetrics,
        scheme: ColorScheme,
    ) {
        let theme = scheme.theme();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let stats = self.render_stats(state, metrics, &theme);
        frame.render_widget(stats, chunks[0]);

        // Center the game grid horizontally
        let game_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(5),
                Constraint::Percentage(90),
                Constraint::Percentage(5),
            ])
            .split(chunks[1])[1];

        match state.phase {
            Phase::Menu => {
                frame.render_widget(self.render_menu(state, scheme, &theme), game_area);
            }
            Phase::Playing => {
                frame.render_widget(self.render_grid(state, &theme), game_area);
            }
            Phase::Paused => {
                frame.render_widget(self.render_grid(state, &theme), game_area);
                let overlay = centered(game_area, 60, 20);
                frame.render_widget(Clear, overlay);
                frame.render_widget(self.render_pause(), overlay);
            }
            Phase::GameOver if state.death_animation_finished() => {
                frame.render_widget(self.render_game_over(state), game_area);
            }
            Phase::GameOver => {
                frame.render_widget(self.render_grid(state, &theme), game_area);
            }
        }

        let controls = self.render_controls(state.phase);
        frame.render_widget(controls, chunks[2]);
    }

    fn render_grid(&self, state: &GameState, theme: &Theme) -> Paragraph<'_> {
        let tiles = layout_tiles(state);
        let blink = state.phase == Phase::GameOver && (state.death_frames / 6) % 2 == 1;

        let lines: Vec<Line> = tiles
            .iter()
            .map(|row| {
                let spans: Vec<Span> = row
                    .iter()
                    .map(|tile| tile_span(*tile, state, theme, blink))
                    .collect();
                Line::from(spans)
            })
            .collect();

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .style(Style::default().bg(theme.background))
                    .title(" Snake Hunt "),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, state: &GameState, metrics: &GameMetrics, theme: &Theme) -> Paragraph<'_> {
        let snake = &state.snake;
        let filled = snake.boost_charge() as usize;
        let empty = snake.max_boost_charge().saturating_sub(snake.boost_charge()) as usize;
        let bar_color = if snake.is_boost_active() {
            theme.special_food
        } else {
            Color::Green
        };

        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                state.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("High: ", Style::default().fg(Color::Yellow)),
            Span::styled(state.high_score.to_string(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Boost: ", Style::default().fg(Color::Yellow)),
            Span::styled("■".repeat(filled), Style::default().fg(bar_color)),
            Span::styled("□".repeat(empty), Style::default().fg(Color::DarkGray)),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_menu(&self, state: &GameState, scheme: ColorScheme, theme: &Theme) -> Paragraph<'_> {
        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "SNAKE HUNT",
                Style::default()
                    .fg(theme.body)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("High Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(state.high_score.to_string(), Style::default().fg(Color::White)),
            ]),
            Line::from(vec![
                Span::styled("Colours: ", Style::default().fg(Color::Yellow)),
                Span::styled(scheme.to_string(), Style::default().fg(theme.head)),
                Span::styled("  (C to change)", Style::default().fg(Color::Gray)),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Enter",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to play or ", Style::default().fg(Color::Gray)),
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
                .border_type(BorderType::Rounded),
        )
    }

    fn render_pause(&self) -> Paragraph<'_> {
        let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::Cyan));
        let mut text = vec![
            Line::from(Span::styled(
                "PAUSED",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![key("↑↓←→ / WASD"), Span::raw("  move")]),
            Line::from(vec![key("Space"), Span::raw("  boost")]),
            Line::from(vec![key("P"), Span::raw("  resume")]),
            Line::from(vec![key("Q"), Span::raw("  quit")]),
            Line::from(""),
            Line::from(Span::styled("Predators", Style::default().fg(Color::Yellow))),
        ];
        for kind in PredatorKind::ALL {
            text.push(Line::from(vec![
                Span::styled(glyph(kind), Style::default().fg(anger_tint(base_color(kind), 1))),
                Span::raw(format!("{}: {}", kind.name(), describe(kind))),
            ]));
        }
        text.push(Line::from(""));
        text.push(Line::from(Span::styled(
            "Boost through a head-on hit. Predators flee your body.",
            Style::default().fg(Color::Gray),
        )));

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        )
    }

    fn render_game_over(&self, state: &GameState) -> Paragraph<'_> {
        let mut text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    state.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::styled("High Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(state.high_score.to_string(), Style::default().fg(Color::White)),
            ]),
        ];
        if state.is_new_high_score() {
            text.push(Line::from(Span::styled(
                "NEW HIGH SCORE!",
                Style::default()
                    .fg(Color::Rgb(255, 215, 0))
                    .add_modifier(Modifier::BOLD),
            )));
        }
        text.push(Line::from(""));
        text.push(Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::Gray)),
            Span::styled(
                "R",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" to restart, ", Style::default().fg(Color::Gray)),
            Span::styled(
                "M",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" for the menu or ", Style::default().fg(Color::Gray)),
            Span::styled(
                "Q",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" to quit", Style::default().fg(Color::Gray)),
        ]));

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self, phase: Phase) -> Paragraph<'_> {
        let line = match phase {
            Phase::Menu => Line::from(vec![
                Span::styled("Enter", Style::default().fg(Color::Cyan)),
                Span::raw(" to start | "),
                Span::styled("C", Style::default().fg(Color::Cyan)),
                Span::raw(" colours | "),
                Span::styled("Q", Style::default().fg(Color::Red)),
                Span::raw(" to quit"),
            ]),
            _ => Line::from(vec![
                Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
                Span::raw(" or "),
                Span::styled("WASD", Style::default().fg(Color::Cyan)),
                Span::raw(" to move | "),
                Span::styled("Space", Style::default().fg(Color::Cyan)),
                Span::raw(" boost | "),
                Span::styled("P", Style::default().fg(Color::Cyan)),
                Span::raw(" pause | "),
                Span::styled("Q", Style::default().fg(Color::Red)),
                Span::raw(" to quit"),
            ]),
        };

        Paragraph::new(vec![line]).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Rasterise the world into one tile per cell, later layers winning
fn layout_tiles(state: &GameState) -> Vec<Vec<Tile>> {
    let field = &state.field;
    let cols = field.cols().max(0) as usize;
    let rows = field.rows().max(0) as usize;
    let mut tiles = vec![vec![Tile::Empty; cols]; rows];

    let put = |pos: Position, tile: Tile, tiles: &mut Vec<Vec<Tile>>| {
        if field.contains(pos) {
            let col = (pos.x / field.cell_size) as usize;
            let row = (pos.y / field.cell_size) as usize;
            tiles[row][col] = tile;
        }
    };

    let food_tile = if state.food.is_special() {
        Tile::SpecialFood
    } else {
        Tile::Food
    };
    put(state.food.position(), food_tile, &mut tiles);

    for segment in state.snake.body_without_head() {
        put(*segment, Tile::Body, &mut tiles);
    }
    put(state.snake.head(), Tile::Head, &mut tiles);
    if let Some(index) = state.snake.collision_index() {
        if let Some(segment) = state.snake.body().get(index) {
            put(*segment, Tile::Wreck, &mut tiles);
        }
    }

    for predator in state.active_predators() {
        if let Some(target) = predator.dive_target() {
            put(target, Tile::DiveTarget, &mut tiles);
        }
        let tile = Tile::Predator {
            kind: predator.kind(),
            anger: predator.anger(),
            diving: predator.is_diving(),
        };
        put(cell_of(predator.position(), field.cell_size), tile, &mut tiles);
    }

    tiles
}

/// Grid cell containing a continuous point
fn cell_of(point: Point, cell_size: i32) -> Position {
    let cell = cell_size as f32;
    Position::new(
        (point.x / cell).floor() as i32 * cell_size,
        (point.y / cell).floor() as i32 * cell_size,
    )
}

fn tile_span(tile: Tile, state: &GameState, theme: &Theme, blink: bool) -> Span<'static> {
    match tile {
        Tile::Empty => Span::styled(". ", Style::default().fg(Color::DarkGray)),
        Tile::Body if blink => Span::raw("  "),
        Tile::Body => Span::styled("□ ", Style::default().fg(theme.body)),
        Tile::Head => Span::styled(
            "■ ",
            Style::default().fg(theme.head).add_modifier(Modifier::BOLD),
        ),
        Tile::Wreck => Span::styled(
            "✖ ",
            Style::default()
                .fg(Color::Rgb(213, 50, 80))
                .add_modifier(Modifier::BOLD),
        ),
        Tile::Food => Span::styled(
            "O ",
            Style::default().fg(theme.food).add_modifier(Modifier::BOLD),
        ),
        Tile::SpecialFood => Span::styled(
            "★ ",
            Style::default()
                .fg(theme.pulsed_special(state.food.pulse_intensity()))
                .add_modifier(Modifier::BOLD),
        ),
        Tile::DiveTarget => Span::styled("x ", Style::default().fg(Color::Red)),
        Tile::Predator {
            kind,
            anger,
            diving,
        } => {
            let mut style = Style::default()
                .fg(anger_tint(base_color(kind), anger))
                .add_modifier(Modifier::BOLD);
            if diving {
                style = style.add_modifier(Modifier::REVERSED);
            }
            Span::styled(glyph(kind), style)
        }
    }
}

fn glyph(kind: PredatorKind) -> &'static str {
    match kind {
        PredatorKind::DirectPursuit => "▲ ",
        PredatorKind::ErraticPursuit => "✦ ",
        PredatorKind::CircleAndDive => "▼ ",
    }
}

fn base_color(kind: PredatorKind) -> (u8, u8, u8) {
    match kind {
        PredatorKind::DirectPursuit => (165, 42, 42),
        PredatorKind::ErraticPursuit => (200, 150, 100),
        PredatorKind::CircleAndDive => (80, 80, 80),
    }
}

fn describe(kind: PredatorKind) -> &'static str {
    match kind {
        PredatorKind::DirectPursuit => "flies straight at you",
        PredatorKind::ErraticPursuit => "twitchy, hard to read",
        PredatorKind::CircleAndDive => "circles, then dives",
    }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
