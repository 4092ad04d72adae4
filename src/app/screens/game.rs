//! Game screen implementation
//!
//! Shows the round header, the shuffling or revealed flag, the feedback
//! banner and the 4x2 category board. The board cursor and difficulty are
//! owned here; everything else is read from the `GameSession`.

use crate::config::Difficulty;
use crate::game::{GameSession, PointsBand, RoundPhase};
use crate::models::Category;
use crate::{ROUNDS_PER_SESSION, SHUFFLE_LENGTH};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

const BOARD_COLUMNS: usize = 4;

/// Game screen component
#[derive(Debug)]
pub struct GameScreen {
    cursor: usize,
    difficulty: Difficulty,
}

impl GameScreen {
    /// Create a new game screen
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            cursor: 0,
            difficulty,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Switch between easy and hard mode
    pub fn toggle_difficulty(&mut self) {
        self.difficulty = self.difficulty.toggled();
    }

    /// Category under the board cursor
    pub fn selected_category(&self) -> Category {
        Category::from_index(self.cursor).unwrap_or(Category::Population)
    }

    /// Put the cursor back on the first tile
    pub fn reset_cursor(&mut self) {
        self.cursor = 0;
    }

    /// Move the cursor to a tile by board position
    pub fn point_at(&mut self, index: usize) {
        if index < Category::ALL.len() {
            self.cursor = index;
        }
    }

    pub fn move_left(&mut self) {
        let column = self.cursor % BOARD_COLUMNS;
        let row = self.cursor - column;
        self.cursor = row + (column + BOARD_COLUMNS - 1) % BOARD_COLUMNS;
    }

    pub fn move_right(&mut self) {
        let column = self.cursor % BOARD_COLUMNS;
        let row = self.cursor - column;
        self.cursor = row + (column + 1) % BOARD_COLUMNS;
    }

    /// Up and down swap rows on the two-row board
    pub fn move_vertical(&mut self) {
        self.cursor = (self.cursor + BOARD_COLUMNS) % Category::ALL.len();
    }

    /// Move to the next tile that still accepts a flag
    pub fn move_to_next_open(&mut self, session: &GameSession) {
        let total = Category::ALL.len();
        for step in 1..=total {
            let index = (self.cursor + step) % total;
            if let Some(category) = Category::from_index(index) {
                if !session.is_used(category) {
                    self.cursor = index;
                    return;
                }
            }
        }
    }

    /// Render the game screen
    pub fn render(&self, f: &mut Frame, session: &GameSession) {
        let size = f.size();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(3), // Session progress
                Constraint::Length(7), // Flag
                Constraint::Length(3), // Feedback
                Constraint::Min(8),    // Category board
                Constraint::Length(3), // Help
            ])
            .split(size);

        self.render_header(f, chunks[0], session);
        self.render_progress(f, chunks[1], session);
        self.render_flag(f, chunks[2], session);
        self.render_feedback(f, chunks[3], session);
        self.render_board(f, chunks[4], session);
        self.render_help(f, chunks[5]);
    }

    fn render_header(&self, f: &mut Frame, area: Rect, session: &GameSession) {
        let mode_color = match self.difficulty {
            Difficulty::Easy => Color::Green,
            Difficulty::Hard => Color::Red,
        };

        let header = Paragraph::new(Line::from(vec![
            Span::styled(
                "🌍 Geo Hunter",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("   SCORE "),
            Span::styled(
                session.score().to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("   MODE "),
            Span::styled(
                self.difficulty.label(),
                Style::default().fg(mode_color).add_modifier(Modifier::BOLD),
            ),
        ]))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

        f.render_widget(header, area);
    }

    fn render_progress(&self, f: &mut Frame, area: Rect, session: &GameSession) {
        let round = (session.round_index() + 1).min(ROUNDS_PER_SESSION);
        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL).title("Session"))
            .gauge_style(Style::default().fg(Color::Blue))
            .ratio(session.progress().clamp(0.0, 1.0))
            .label(format!("Flag {} of {}", round, ROUNDS_PER_SESSION));

        f.render_widget(gauge, area);
    }

    fn render_flag(&self, f: &mut Frame, area: Rect, session: &GameSession) {
        let flag = session.current_flag().unwrap_or(crate::PLACEHOLDER_FLAG);

        let (title, lines) = match session.phase() {
            RoundPhase::Shuffling { cursor } => {
                let dots: String = (0..SHUFFLE_LENGTH)
                    .map(|i| if i <= *cursor { '●' } else { '○' })
                    .collect();
                (
                    "🔀 Shuffling flags...",
                    vec![
                        Line::from(""),
                        Line::from(Span::styled(
                            flag.to_string(),
                            Style::default().add_modifier(Modifier::BOLD),
                        )),
                        Line::from(Span::styled(dots, Style::default().fg(Color::Blue))),
                        Line::from(Span::styled(
                            "Revealing your challenge...",
                            Style::default().fg(Color::DarkGray),
                        )),
                    ],
                )
            }
            RoundPhase::SessionComplete => (
                "Session complete",
                vec![Line::from(""), Line::from("Tallying your score...")],
            ),
            RoundPhase::Revealed | RoundPhase::Resolved { .. } => {
                let mut lines = vec![
                    Line::from(""),
                    Line::from(Span::styled(
                        flag.to_string(),
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
                ];
                if self.difficulty.shows_country_name() {
                    if let Some(country) = session.current_country() {
                        lines.push(Line::from(Span::styled(
                            country.name.clone(),
                            Style::default()
                                .fg(Color::Yellow)
                                .add_modifier(Modifier::BOLD),
                        )));
                    }
                }
                (self.difficulty.prompt(), lines)
            }
        };

        let panel = Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(Color::White)),
        );

        f.render_widget(panel, area);
    }

    fn render_feedback(&self, f: &mut Frame, area: Rect, session: &GameSession) {
        let (text, style) = match (session.feedback(), session.phase()) {
            (Some(feedback), _) => (
                format!("✓ {}", feedback),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            (None, RoundPhase::Revealed) => (
                "Pick a category for this flag".to_string(),
                Style::default().fg(Color::White),
            ),
            _ => (String::new(), Style::default()),
        };

        let banner = Paragraph::new(text)
            .style(style)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));

        f.render_widget(banner, area);
    }

    fn render_board(&self, f: &mut Frame, area: Rect, session: &GameSession) {
        let placed = session.placed_flags();
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
            .split(area);

        for (row_index, row) in rows.iter().enumerate() {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Ratio(1, BOARD_COLUMNS as u32); BOARD_COLUMNS])
                .split(*row);

            for (column_index, tile) in columns.iter().enumerate() {
                let index = row_index * BOARD_COLUMNS + column_index;
                let Some(category) = Category::from_index(index) else {
                    continue;
                };

                let is_cursor = index == self.cursor;
                let is_open = session.can_select(category);
                let border_style = if is_cursor && is_open {
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else if is_cursor {
                    Style::default().fg(Color::Yellow)
                } else if placed.contains_key(&category) {
                    Style::default().fg(Color::Green)
                } else if is_open {
                    Style::default().fg(Color::White)
                } else {
                    Style::default().fg(Color::DarkGray)
                };

                let body = match placed.get(&category) {
                    Some(entry) => {
                        let band = PointsBand::for_points(entry.rank);
                        vec![
                            Line::from(entry.flag.clone()),
                            Line::from(Span::styled(
                                format!("#{}", category.display_rank(entry.rank)),
                                Style::default()
                                    .fg(band.color())
                                    .add_modifier(Modifier::BOLD),
                            )),
                        ]
                    }
                    None if is_open => vec![Line::from(""), Line::from("Drop here")],
                    None => vec![Line::from(""), Line::from("")],
                };

                let widget = Paragraph::new(body).alignment(Alignment::Center).block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(border_style)
                        .title(format!(
                            "{} {} {}",
                            index + 1,
                            category.icon(),
                            category.label()
                        )),
                );

                f.render_widget(widget, *tile);
            }
        }
    }

    fn render_help(&self, f: &mut Frame, area: Rect) {
        let key = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let help_text = vec![Line::from(vec![
            Span::styled("←↑↓→", key),
            Span::raw(" Move  "),
            Span::styled("Enter/1-8", key),
            Span::raw(" Place flag  "),
            Span::styled("D", key),
            Span::raw(" Easy/Hard  "),
            Span::styled("R", key),
            Span::raw(" Restart  "),
            Span::styled("Esc", key),
            Span::raw(" Menu  "),
            Span::styled("Q", key),
            Span::raw(" Quit"),
        ])];

        let help = Paragraph::new(help_text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );

        f.render_widget(help, area);
    }
}
