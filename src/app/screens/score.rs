//! Score screen implementation
//!
//! Displays the final total and tier, the per-round breakdown, a trivia
//! fact with a handful of tips, and the Play Again / Back to Menu actions.

use crate::game::{GameOutcome, Insights, PointsBand};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table, Wrap},
    Frame,
};

/// Available actions on the score screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreAction {
    PlayAgain,
    BackToMenu,
}

impl ScoreAction {
    /// Get all available actions
    pub fn all() -> Vec<Self> {
        vec![Self::PlayAgain, Self::BackToMenu]
    }

    /// Get display text for the action
    pub fn display_text(&self) -> &'static str {
        match self {
            Self::PlayAgain => "🔄 Play Again",
            Self::BackToMenu => "🏠 Back to Menu",
        }
    }
}

/// Score screen component that displays a finished session
#[derive(Debug)]
pub struct ScoreScreen {
    outcome: Option<GameOutcome>,
    insights: Option<Insights>,
    selected_action: ScoreAction,
}

impl ScoreScreen {
    /// Create a new score screen
    pub fn new() -> Self {
        Self {
            outcome: None,
            insights: None,
            selected_action: ScoreAction::PlayAgain,
        }
    }

    /// Set the outcome to display
    pub fn set_outcome(&mut self, outcome: GameOutcome, insights: Insights) {
        self.outcome = Some(outcome);
        self.insights = Some(insights);
        self.selected_action = ScoreAction::PlayAgain;
    }

    /// Get the current outcome
    pub fn outcome(&self) -> Option<&GameOutcome> {
        self.outcome.as_ref()
    }

    pub fn insights(&self) -> Option<&Insights> {
        self.insights.as_ref()
    }

    /// Get selected action
    pub fn selected_action(&self) -> ScoreAction {
        self.selected_action
    }

    /// Select next action
    pub fn select_next_action(&mut self) {
        let actions = ScoreAction::all();
        let current_index = actions
            .iter()
            .position(|a| *a == self.selected_action)
            .unwrap_or(0);
        self.selected_action = actions[(current_index + 1) % actions.len()];
    }

    /// Select previous action
    pub fn select_previous_action(&mut self) {
        let actions = ScoreAction::all();
        let current_index = actions
            .iter()
            .position(|a| *a == self.selected_action)
            .unwrap_or(0);
        let prev_index = if current_index == 0 {
            actions.len() - 1
        } else {
            current_index - 1
        };
        self.selected_action = actions[prev_index];
    }

    /// Render the score screen
    pub fn render(&self, f: &mut Frame) {
        let size = f.size();

        let Some(outcome) = self.outcome.as_ref() else {
            self.render_no_outcome(f, size);
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // Total and tier
                Constraint::Min(12),   // Breakdown and insights
                Constraint::Length(3), // Actions
                Constraint::Length(3), // Help text
            ])
            .split(size);

        self.render_summary(f, chunks[0], outcome);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[1]);

        self.render_breakdown(f, body[0], outcome);
        self.render_insights(f, body[1]);
        self.render_actions(f, chunks[2]);
        self.render_help(f, chunks[3]);
    }

    fn render_no_outcome(&self, f: &mut Frame, area: Rect) {
        let text = vec![
            Line::from(""),
            Line::from("No finished game yet"),
            Line::from(""),
            Line::from(Span::styled(
                "Press Esc to go back",
                Style::default().fg(Color::Yellow),
            )),
        ];

        let paragraph = Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .title("Score")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

        f.render_widget(paragraph, area);
    }

    fn render_summary(&self, f: &mut Frame, area: Rect, outcome: &GameOutcome) {
        let tier = outcome.tier;
        let text = vec![
            Line::from(vec![
                Span::raw(format!("{} ", tier.emoji())),
                Span::styled(
                    tier.label(),
                    Style::default().fg(tier.color()).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::raw("Total "),
                Span::styled(
                    outcome.total_score.to_string(),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" points  "),
                Span::styled(
                    outcome
                        .completed_at
                        .format("%Y-%m-%d %H:%M:%S UTC")
                        .to_string(),
                    Style::default().fg(Color::DarkGray),
                ),
            ]),
        ];

        let summary = Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .title("Your Score")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(tier.color())),
        );

        f.render_widget(summary, area);
    }

    fn render_breakdown(&self, f: &mut Frame, area: Rect, outcome: &GameOutcome) {
        let rows: Vec<Row> = outcome
            .results
            .iter()
            .map(|result| {
                let band = PointsBand::for_points(result.points);
                Row::new(vec![
                    format!("{} {}", result.flag, result.country),
                    format!("{} {}", result.category.icon(), result.category.label()),
                    format!("#{}", result.display_rank()),
                    format!("+{}", result.points),
                ])
                .style(Style::default().fg(band.color()))
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Min(16),
                Constraint::Length(14),
                Constraint::Length(6),
                Constraint::Length(6),
            ],
        )
        .header(
            Row::new(vec!["Country", "Category", "Rank", "Pts"]).style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        )
        .block(
            Block::default()
                .title("Breakdown")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White)),
        );

        f.render_widget(table, area);
    }

    fn render_insights(&self, f: &mut Frame, area: Rect) {
        let mut lines = Vec::new();
        if let Some(insights) = &self.insights {
            lines.push(Line::from(Span::styled(
                "💡 Did You Know?",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(insights.fact.clone()));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Tips",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.extend(
                insights
                    .tips
                    .iter()
                    .map(|tip| Line::from(format!("• {}", tip))),
            );
        }

        let panel = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::default()
                .title("Insights")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White)),
        );

        f.render_widget(panel, area);
    }

    fn render_actions(&self, f: &mut Frame, area: Rect) {
        let mut spans = Vec::new();
        for action in ScoreAction::all() {
            let style = if action == self.selected_action {
                Style::default().bg(Color::Cyan).fg(Color::Black)
            } else {
                Style::default().fg(Color::White)
            };
            spans.push(Span::styled(format!(" {} ", action.display_text()), style));
            spans.push(Span::raw("   "));
        }

        let actions = Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));

        f.render_widget(actions, area);
    }

    fn render_help(&self, f: &mut Frame, area: Rect) {
        let key = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let help_text = vec![Line::from(vec![
            Span::styled("←→", key),
            Span::raw(" Choose  "),
            Span::styled("Enter", key),
            Span::raw(" Confirm  "),
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

impl Default for ScoreScreen {
    fn default() -> Self {
        Self::new()
    }
}
