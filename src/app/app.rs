//! Main application controller
//!
//! `AppState` holds everything the screens need and turns navigation
//! actions and clock ticks into state changes. `App` wraps it with the
//! terminal and runs the draw / poll / input loop.

use crate::{
    app::{
        screens::{GameScreen, MenuItem, RulesAction, RulesScreen, ScoreAction, ScoreScreen, StartScreen},
        state::{NavigationAction, Screen, ScreenController, ScreenSwap},
        tui::Tui,
    },
    config::GameConfig,
    data::provider_from_config,
    game::{GameOutcome, GameRng, GameSession, Insights, SessionEvent},
    GeoHunterError, Result,
};
use log::{error, info, warn};
use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::time::Instant;

/// Screen state and game logic, independent of the terminal
pub struct AppState {
    config: GameConfig,
    controller: ScreenController,
    start_screen: StartScreen,
    game_screen: GameScreen,
    score_screen: ScoreScreen,
    rules_screen: RulesScreen,
    session: Option<GameSession>,
    rng: GameRng,
    sessions_started: u64,
}

impl AppState {
    /// Build the state for a configuration.
    ///
    /// The country source is opened once up front so a bad data file is
    /// reported before the terminal is taken over.
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        provider_from_config(&config)?;

        Ok(Self {
            controller: ScreenController::new(&config.timing),
            start_screen: StartScreen::new(),
            game_screen: GameScreen::new(config.difficulty),
            score_screen: ScoreScreen::new(),
            rules_screen: RulesScreen::new(),
            session: None,
            rng: GameRng::from_seed_option(config.seed),
            sessions_started: 0,
            config,
        })
    }

    pub fn current_screen(&self) -> Screen {
        self.controller.current_screen()
    }

    pub fn is_transitioning(&self) -> bool {
        self.controller.is_transitioning()
    }

    pub fn should_quit(&self) -> bool {
        self.controller.should_quit()
    }

    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    pub fn game_screen(&self) -> &GameScreen {
        &self.game_screen
    }

    pub fn score_screen(&self) -> &ScoreScreen {
        &self.score_screen
    }

    /// Earliest instant at which `tick` has work to do
    pub fn next_deadline(&self) -> Option<Instant> {
        let session = self.session.as_ref().and_then(GameSession::next_deadline);
        match (self.controller.next_deadline(), session) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Fire due screen and round timers
    pub fn tick(&mut self, now: Instant) -> Result<()> {
        if let Some(swap) = self.controller.poll(now) {
            self.on_swap(swap, now)?;
        }

        match self.session.as_mut().and_then(|s| s.poll(now)) {
            Some(SessionEvent::Completed(results)) => {
                let outcome = GameOutcome::from_results(results);
                info!(
                    "Session finished with {} points ({})",
                    outcome.total_score,
                    outcome.tier.label()
                );
                let insights = Insights::draw(&mut self.rng);
                self.score_screen.set_outcome(outcome, insights);
                if !self.controller.navigate(Screen::Score, now) {
                    warn!("Score screen navigation dropped, a transition was in flight");
                }
            }
            Some(SessionEvent::Aborted(reason)) => {
                error!("Session aborted: {}", reason);
                self.controller.navigate(Screen::Start, now);
            }
            None => {}
        }

        Ok(())
    }

    fn on_swap(&mut self, swap: ScreenSwap, now: Instant) -> Result<()> {
        if swap.from == Screen::Game {
            self.session = None;
        }

        if swap.to == Screen::Game {
            self.session = Some(self.new_session(now)?);
            self.game_screen.reset_cursor();
        }

        Ok(())
    }

    fn new_session(&mut self, now: Instant) -> Result<GameSession> {
        let provider = provider_from_config(&self.config)?;
        let rng = match self.config.seed {
            Some(seed) => GameRng::seeded(seed.wrapping_add(self.sessions_started)),
            None => GameRng::from_entropy(),
        };
        self.sessions_started += 1;
        GameSession::new(provider, rng, self.config.timing.clone(), now)
    }

    /// Apply a navigation action to the current screen
    pub fn handle_action(&mut self, action: NavigationAction, now: Instant) -> Result<()> {
        if action == NavigationAction::Quit {
            self.controller.quit();
            return Ok(());
        }

        // screens are frozen while fading
        if self.controller.is_transitioning() {
            return Ok(());
        }

        match self.controller.current_screen() {
            Screen::Start => self.handle_start_action(action, now),
            Screen::Game => self.handle_game_action(action, now)?,
            Screen::Score => self.handle_score_action(action, now),
            Screen::Rules => self.handle_rules_action(action, now),
        }

        Ok(())
    }

    fn handle_start_action(&mut self, action: NavigationAction, now: Instant) {
        match action {
            NavigationAction::Up | NavigationAction::Previous => self.start_screen.select_previous(),
            NavigationAction::Down | NavigationAction::Next => self.start_screen.select_next(),
            NavigationAction::Select => match self.start_screen.selected_item() {
                MenuItem::StartGame => {
                    self.controller.navigate(Screen::Game, now);
                }
                MenuItem::HowToPlay => {
                    self.controller.navigate(Screen::Rules, now);
                }
                MenuItem::Quit => self.controller.quit(),
            },
            NavigationAction::Back => self.controller.quit(),
            _ => {}
        }
    }

    fn handle_game_action(&mut self, action: NavigationAction, now: Instant) -> Result<()> {
        match action {
            NavigationAction::Left => self.game_screen.move_left(),
            NavigationAction::Right => self.game_screen.move_right(),
            NavigationAction::Up | NavigationAction::Down => self.game_screen.move_vertical(),
            NavigationAction::Next => {
                if let Some(session) = &self.session {
                    self.game_screen.move_to_next_open(session);
                }
            }
            NavigationAction::Choose(index) => {
                self.game_screen.point_at(index);
                self.place_flag(now);
            }
            NavigationAction::Select => self.place_flag(now),
            NavigationAction::ToggleDifficulty => {
                self.game_screen.toggle_difficulty();
                info!("Difficulty set to {}", self.game_screen.difficulty().label());
            }
            NavigationAction::Restart => {
                if let Some(session) = self.session.as_mut() {
                    session.reset(now)?;
                    self.game_screen.reset_cursor();
                }
            }
            NavigationAction::Back => {
                self.controller.navigate(Screen::Start, now);
            }
            _ => {}
        }
        Ok(())
    }

    fn place_flag(&mut self, now: Instant) {
        let category = self.game_screen.selected_category();
        let Some(session) = self.session.as_mut() else {
            return;
        };

        if session.select_category(category, now).is_some() {
            self.game_screen.move_to_next_open(session);
        }
    }

    fn handle_score_action(&mut self, action: NavigationAction, now: Instant) {
        match action {
            NavigationAction::Left | NavigationAction::Previous => {
                self.score_screen.select_previous_action()
            }
            NavigationAction::Right | NavigationAction::Next => {
                self.score_screen.select_next_action()
            }
            NavigationAction::Select => {
                let target = match self.score_screen.selected_action() {
                    ScoreAction::PlayAgain => Screen::Game,
                    ScoreAction::BackToMenu => Screen::Start,
                };
                self.controller.navigate(target, now);
            }
            NavigationAction::Back => {
                self.controller.navigate(Screen::Start, now);
            }
            _ => {}
        }
    }

    fn handle_rules_action(&mut self, action: NavigationAction, now: Instant) {
        match action {
            NavigationAction::Left
            | NavigationAction::Right
            | NavigationAction::Next
            | NavigationAction::Previous => self.rules_screen.toggle_action(),
            NavigationAction::Select => {
                let target = match self.rules_screen.selected_action() {
                    RulesAction::BackToStart => Screen::Start,
                    RulesAction::StartPlaying => Screen::Game,
                };
                self.controller.navigate(target, now);
            }
            NavigationAction::Back => {
                self.controller.navigate(Screen::Start, now);
            }
            _ => {}
        }
    }

    /// Render the current screen, dimmed while a fade is running
    pub fn render(&mut self, f: &mut Frame) {
        match self.controller.current_screen() {
            Screen::Start => self.start_screen.render(f),
            Screen::Game => match &self.session {
                Some(session) => self.game_screen.render(f, session),
                None => {
                    let waiting = Paragraph::new("Preparing flags...")
                        .alignment(Alignment::Center)
                        .block(Block::default().borders(Borders::ALL));
                    f.render_widget(waiting, f.size());
                }
            },
            Screen::Score => self.score_screen.render(f),
            Screen::Rules => self.rules_screen.render(f),
        }

        if self.controller.is_transitioning() {
            let area = f.size();
            f.buffer_mut()
                .set_style(area, Style::default().add_modifier(Modifier::DIM));
        }
    }
}

/// TUI application controller
pub struct App {
    /// Terminal UI handler
    tui: Tui,
    /// Screens and game state
    state: AppState,
}

impl App {
    /// Create a new application from the on-disk configuration
    pub fn new() -> Result<Self> {
        let config = GameConfig::load()?;
        Self::with_config(config)
    }

    pub fn with_config(config: GameConfig) -> Result<Self> {
        let frame_rate = config.timing.frame_rate;
        let state = AppState::new(config)?;
        Ok(Self {
            tui: Tui::new(frame_rate)?,
            state,
        })
    }

    /// Initialize the terminal
    pub fn init(&mut self) -> Result<()> {
        if !self.tui.is_size_adequate()? {
            return Err(GeoHunterError::TuiError(
                "Terminal too small, at least 80x24 is required".to_string(),
            ));
        }
        self.tui.init()?;
        Ok(())
    }

    /// Run the main application loop
    pub async fn run(&mut self) -> Result<()> {
        let outcome = self.run_loop();
        if let Err(e) = &outcome {
            error!("Main loop stopped: {}", e);
        }
        self.tui.restore()?;
        outcome
    }

    fn run_loop(&mut self) -> Result<()> {
        while !self.state.should_quit() {
            self.state.tick(Instant::now())?;

            let state = &mut self.state;
            self.tui.draw(|f| state.render(f))?;

            if let Some(key) = self.tui.next_key(self.state.next_deadline())? {
                let action = ScreenController::key_to_navigation(key);
                self.state.handle_action(action, Instant::now())?;
            }
        }
        info!("Quit requested");
        Ok(())
    }
}
