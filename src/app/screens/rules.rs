//! Rules screen implementation

use crate::game::Tier;
use crate::models::Category;
use crate::ROUNDS_PER_SESSION;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const STRATEGY_TIPS: &[&str] = &[
    "Think about what each country is famous for",
    "Consider both obvious and surprising strengths",
    "Smaller numbers = better global rankings",
];

const EXAMPLES: &[&str] = &[
    "🇧🇷 Brazil: Coffee #1, FIFA #5",
    "🇺🇸 USA: GDP #1, Gas production #1",
    "🇸🇬 Singapore: Very safe (Crime #2)",
];

/// Actions offered at the bottom of the rules screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RulesAction {
    BackToStart,
    StartPlaying,
}

impl RulesAction {
    pub fn display_text(&self) -> &'static str {
        match self {
            Self::BackToStart => "← Back to Start",
            Self::StartPlaying => "▶ Start Playing",
        }
    }
}

/// Rules screen component
#[derive(Debug)]
pub struct RulesScreen {
    selected_action: RulesAction,
}

impl RulesScreen {
    pub fn new() -> Self {
        Self {
            selected_action: RulesAction::StartPlaying,
        }
    }

    pub fn selected_action(&self) -> RulesAction {
        self.selected_action
    }

    /// Flip between the two actions
    pub fn toggle_action(&mut self) {
        self.selected_action = match self.selected_action {
            RulesAction::BackToStart => RulesAction::StartPlaying,
            RulesAction::StartPlaying => RulesAction::BackToStart,
        };
    }

    /// Render the rules screen
    pub fn render(&self, f: &mut Frame) {
        let size = f.size();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(14),   // Body
                Constraint::Length(3), // Actions
            ])
            .split(size);

        let title = Paragraph::new("📖 How to Play")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            );
        f.render_widget(title, chunks[0]);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(chunks[1]);

        self.render_steps(f, body[0]);
        self.render_reference(f, body[1]);
        self.render_actions(f, chunks[2]);
    }

    fn render_steps(&self, f: &mut Frame, area: Rect) {
        let heading = Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD);

        let mut lines = vec![
            Line::from(Span::styled("1. Choose Your Country", heading)),
            Line::from(format!(
                "   A flag is revealed after a short shuffle, {} flags in total.",
                ROUNDS_PER_SESSION
            )),
            Line::from(""),
            Line::from(Span::styled("2. Select Categories", heading)),
            Line::from("   Place each flag in a category where it ranks well."),
            Line::from("   Every category can be used only once."),
            Line::from(""),
            Line::from(Span::styled("3. Score Calculation", heading)),
            Line::from("   Each placement scores the country's world rank."),
            Line::from(Span::styled(
                "   Lower scores are better!",
                Style::default().fg(Color::Green),
            )),
            Line::from(""),
            Line::from(Span::styled("Categories", heading)),
        ];

        lines.extend(Category::ALL.iter().map(|category| {
            Line::from(format!(
                "   {} {:<12} ranks 1-{}",
                category.icon(),
                category.label(),
                category.rank_ceiling()
            ))
        }));

        let steps = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Rules")
                .border_style(Style::default().fg(Color::White)),
        );

        f.render_widget(steps, area);
    }

    fn render_reference(&self, f: &mut Frame, area: Rect) {
        let heading = Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD);

        let mut lines = vec![Line::from(Span::styled("Performance Levels", heading))];
        lines.extend(Tier::all().iter().map(|tier| {
            Line::from(vec![
                Span::raw(format!("{} ", tier.emoji())),
                Span::styled(format!("{:<14}", tier.label()), Style::default().fg(tier.color())),
                Span::raw(tier.range_text()),
            ])
        }));

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Strategy Tips", heading)));
        lines.extend(STRATEGY_TIPS.iter().map(|tip| Line::from(format!("• {}", tip))));

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Examples", heading)));
        lines.extend(EXAMPLES.iter().map(|example| Line::from(*example)));

        let reference = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Reference")
                .border_style(Style::default().fg(Color::White)),
        );

        f.render_widget(reference, area);
    }

    fn render_actions(&self, f: &mut Frame, area: Rect) {
        let mut spans = Vec::new();
        for action in [RulesAction::BackToStart, RulesAction::StartPlaying] {
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
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            );

        f.render_widget(actions, area);
    }
}

impl Default for RulesScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_action_starts_playing() {
        assert_eq!(RulesScreen::new().selected_action(), RulesAction::StartPlaying);
    }

    #[test]
    fn test_toggle_action() {
        let mut screen = RulesScreen::new();
        screen.toggle_action();
        assert_eq!(screen.selected_action(), RulesAction::BackToStart);
        screen.toggle_action();
        assert_eq!(screen.selected_action(), RulesAction::StartPlaying);
    }
}
