//! Start screen implementation
//!
//! Title screen with Start Game, How to Play and Quit entries.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Entries of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    StartGame,
    HowToPlay,
    Quit,
}

impl MenuItem {
    /// Get all menu entries in display order
    pub fn all() -> Vec<Self> {
        vec![Self::StartGame, Self::HowToPlay, Self::Quit]
    }

    /// Get display text for the entry
    pub fn display_text(&self) -> &'static str {
        match self {
            Self::StartGame => "▶  Start Game",
            Self::HowToPlay => "?  How to Play",
            Self::Quit => "✕  Quit",
        }
    }
}

/// Start screen component with the main menu
#[derive(Debug)]
pub struct StartScreen {
    items: Vec<MenuItem>,
    selected_index: usize,
    list_state: ListState,
}

impl StartScreen {
    /// Create a new start screen
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));

        Self {
            items: MenuItem::all(),
            selected_index: 0,
            list_state,
        }
    }

    /// Get the currently selected entry
    pub fn selected_item(&self) -> MenuItem {
        self.items[self.selected_index]
    }

    /// Move selection up
    pub fn select_previous(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        } else {
            self.selected_index = self.items.len() - 1;
        }
        self.list_state.select(Some(self.selected_index));
    }

    /// Move selection down
    pub fn select_next(&mut self) {
        if self.selected_index < self.items.len() - 1 {
            self.selected_index += 1;
        } else {
            self.selected_index = 0;
        }
        self.list_state.select(Some(self.selected_index));
    }

    /// Render the start screen
    pub fn render(&mut self, f: &mut Frame) {
        let size = f.size();

        // Create main layout
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(6), // Title and subtitle
                Constraint::Min(7),    // Menu
                Constraint::Length(3), // Help text
            ])
            .split(size);

        self.render_title(f, chunks[0]);
        self.render_menu(f, chunks[1]);
        self.render_help(f, chunks[2]);
    }

    /// Render the title section
    fn render_title(&self, f: &mut Frame, area: Rect) {
        let title_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Main title
                Constraint::Length(3), // Subtitle
            ])
            .split(area);

        let title = Paragraph::new("🌍 GEO HUNTER")
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
        f.render_widget(title, title_chunks[0]);

        let subtitle = Paragraph::new(vec![
            Line::from("Rank 8 flags across 8 categories."),
            Line::from(Span::styled(
                "Lowest total wins.",
                Style::default().fg(Color::Green),
            )),
        ])
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center);
        f.render_widget(subtitle, title_chunks[1]);
    }

    /// Render the main menu
    fn render_menu(&mut self, f: &mut Frame, area: Rect) {
        let menu_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(30),
                Constraint::Min(0),
            ])
            .split(area)[1];

        let items: Vec<ListItem> = self
            .items
            .iter()
            .map(|item| ListItem::new(item.display_text()))
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Menu"))
            .highlight_style(Style::default().bg(Color::Cyan).fg(Color::Black))
            .highlight_symbol(">> ");

        f.render_stateful_widget(list, menu_area, &mut self.list_state);
    }

    /// Render the help text
    fn render_help(&self, f: &mut Frame, area: Rect) {
        let key = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let help_text = vec![Line::from(vec![
            Span::styled("↑↓", key),
            Span::raw(" Navigate  "),
            Span::styled("Enter", key),
            Span::raw(" Select  "),
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

impl Default for StartScreen {
    fn default() -> Self {
        Self::new()
    }
}
