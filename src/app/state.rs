//! Application state management
//!
//! Handles screen transitions, the cross-fade between screens, and keyboard
//! event processing for the TUI application.

use crate::config::TimingConfig;
use crate::game::timer::TimerQueue;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::{debug, info};
use std::time::{Duration, Instant};

/// Application screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Title screen with Start Game / How to Play
    Start,
    /// Eight rounds of flag placement
    Game,
    /// Final score with the per-round breakdown
    Score,
    /// How to play
    Rules,
}

impl Default for Screen {
    fn default() -> Self {
        Self::Start
    }
}

/// Navigation actions that can be triggered by keyboard input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationAction {
    /// Move selection up (arrow up, k)
    Up,
    /// Move selection down (arrow down, j)
    Down,
    /// Move selection left (arrow left, h)
    Left,
    /// Move selection right (arrow right, l)
    Right,
    /// Confirm selection (Enter, Space)
    Select,
    /// Go back/cancel (Esc, Backspace)
    Back,
    /// Next item (Tab)
    Next,
    /// Previous item (Shift+Tab)
    Previous,
    /// Pick an item directly by its zero-based position (digits 1-8)
    Choose(usize),
    /// Restart the current game (r)
    Restart,
    /// Switch between easy and hard mode (d)
    ToggleDifficulty,
    /// Quit application (q, Q, Ctrl+C)
    Quit,
    /// No action
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Transition {
    FadingOut { target: Screen },
    Settling,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FadeStep {
    Swap,
    FadeIn,
}

/// Reported when the active screen changes mid-transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenSwap {
    pub from: Screen,
    pub to: Screen,
}

/// Screen controller with a fade-out, swap, settle transition
#[derive(Debug)]
pub struct ScreenController {
    current: Screen,
    transition: Option<Transition>,
    timers: TimerQueue<FadeStep>,
    fade_out: Duration,
    fade_settle: Duration,
    should_quit: bool,
}

impl ScreenController {
    /// Create a controller starting at the start screen
    pub fn new(timing: &TimingConfig) -> Self {
        Self {
            current: Screen::Start,
            transition: None,
            timers: TimerQueue::new(),
            fade_out: timing.fade_out,
            fade_settle: timing.fade_settle,
            should_quit: false,
        }
    }

    /// Get the current screen
    pub fn current_screen(&self) -> Screen {
        self.current
    }

    /// Whether a transition is in flight
    pub fn is_transitioning(&self) -> bool {
        self.transition.is_some()
    }

    /// Screen being faded towards, while fading out
    pub fn pending_target(&self) -> Option<Screen> {
        match self.transition {
            Some(Transition::FadingOut { target }) => Some(target),
            _ => None,
        }
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Set the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Request a screen change.
    ///
    /// Ignored when `target` is already showing or another transition is in
    /// flight. Returns whether the request started a transition.
    pub fn navigate(&mut self, target: Screen, now: Instant) -> bool {
        if target == self.current || self.transition.is_some() {
            debug!("Ignoring navigation to {:?}", target);
            return false;
        }

        self.transition = Some(Transition::FadingOut { target });
        self.timers.schedule(now, self.fade_out, FadeStep::Swap);
        true
    }

    /// Advance the transition; returns the swap when it happens
    pub fn poll(&mut self, now: Instant) -> Option<ScreenSwap> {
        let mut swap = None;
        while let Some((due, step)) = self.timers.pop_due(now) {
            match (step, self.transition) {
                (FadeStep::Swap, Some(Transition::FadingOut { target })) => {
                    let from = self.current;
                    self.current = target;
                    self.transition = Some(Transition::Settling);
                    self.timers.schedule(due, self.fade_settle, FadeStep::FadeIn);
                    info!("Screen {:?} -> {:?}", from, target);
                    swap = Some(ScreenSwap { from, to: target });
                }
                (FadeStep::FadeIn, Some(Transition::Settling)) => {
                    self.transition = None;
                }
                _ => {}
            }
        }
        swap
    }

    /// Earliest pending fade deadline
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_due()
    }

    /// Convert keyboard event to navigation action
    pub fn key_to_navigation(key: KeyEvent) -> NavigationAction {
        if key.kind == KeyEventKind::Release {
            return NavigationAction::None;
        }

        match key.code {
            // Quit keys
            KeyCode::Char('q') | KeyCode::Char('Q') => NavigationAction::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                NavigationAction::Quit
            }

            // Navigation keys
            KeyCode::Up | KeyCode::Char('k') => NavigationAction::Up,
            KeyCode::Down | KeyCode::Char('j') => NavigationAction::Down,
            KeyCode::Left | KeyCode::Char('h') => NavigationAction::Left,
            KeyCode::Right | KeyCode::Char('l') => NavigationAction::Right,

            // Selection and confirmation
            KeyCode::Enter | KeyCode::Char(' ') => NavigationAction::Select,
            KeyCode::Char(c @ '1'..='8') => NavigationAction::Choose(c as usize - '1' as usize),

            // Game shortcuts
            KeyCode::Char('r') | KeyCode::Char('R') => NavigationAction::Restart,
            KeyCode::Char('d') | KeyCode::Char('D') => NavigationAction::ToggleDifficulty,

            // Back/cancel
            KeyCode::Esc | KeyCode::Backspace => NavigationAction::Back,

            // Tab navigation
            KeyCode::Tab => {
                if key.modifiers.contains(KeyModifiers::SHIFT) {
                    NavigationAction::Previous
                } else {
                    NavigationAction::Next
                }
            }
            KeyCode::BackTab => NavigationAction::Previous,

            _ => NavigationAction::None,
        }
    }
}

impl Default for ScreenController {
    fn default() -> Self {
        Self::new(&TimingConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_controller_creation() {
        let controller = ScreenController::default();
        assert_eq!(controller.current_screen(), Screen::Start);
        assert!(!controller.should_quit());
        assert!(!controller.is_transitioning());
    }

    #[test]
    fn test_fade_then_swap_then_settle() {
        let now = Instant::now();
        let mut controller = ScreenController::default();

        assert!(controller.navigate(Screen::Game, now));
        assert!(controller.is_transitioning());
        assert_eq!(controller.pending_target(), Some(Screen::Game));

        // still fading out
        assert_eq!(controller.poll(now + ms(199)), None);
        assert_eq!(controller.current_screen(), Screen::Start);

        let swap = controller.poll(now + ms(200));
        assert_eq!(
            swap,
            Some(ScreenSwap {
                from: Screen::Start,
                to: Screen::Game
            })
        );
        assert_eq!(controller.current_screen(), Screen::Game);
        assert!(controller.is_transitioning());

        assert_eq!(controller.poll(now + ms(250)), None);
        assert!(!controller.is_transitioning());
    }

    #[test]
    fn test_same_screen_ignored() {
        let now = Instant::now();
        let mut controller = ScreenController::default();
        assert!(!controller.navigate(Screen::Start, now));
        assert!(!controller.is_transitioning());
        assert_eq!(controller.next_deadline(), None);
    }

    #[test]
    fn test_navigation_during_transition_ignored() {
        let now = Instant::now();
        let mut controller = ScreenController::default();
        assert!(controller.navigate(Screen::Rules, now));
        assert!(!controller.navigate(Screen::Game, now + ms(100)));

        controller.poll(now + ms(200));
        assert_eq!(controller.current_screen(), Screen::Rules);
        // settling still counts as in flight
        assert!(!controller.navigate(Screen::Game, now + ms(220)));

        controller.poll(now + ms(250));
        assert!(controller.navigate(Screen::Game, now + ms(260)));
    }

    #[test]
    fn test_late_poll_completes_whole_transition() {
        let now = Instant::now();
        let mut controller = ScreenController::default();
        controller.navigate(Screen::Score, now);
        let swap = controller.poll(now + Duration::from_secs(1));
        assert_eq!(swap.map(|s| s.to), Some(Screen::Score));
        assert!(!controller.is_transitioning());
    }

    #[test]
    fn test_quit_handling() {
        let mut controller = ScreenController::default();
        controller.quit();
        assert!(controller.should_quit());
    }

    #[test]
    fn test_key_to_navigation() {
        // Test quit keys
        assert_eq!(
            ScreenController::key_to_navigation(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)),
            NavigationAction::Quit
        );
        assert_eq!(
            ScreenController::key_to_navigation(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            NavigationAction::Quit
        );

        // Test navigation keys
        assert_eq!(
            ScreenController::key_to_navigation(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE)),
            NavigationAction::Up
        );
        assert_eq!(
            ScreenController::key_to_navigation(KeyEvent::new(KeyCode::Char('l'), KeyModifiers::NONE)),
            NavigationAction::Right
        );

        // Test selection keys
        assert_eq!(
            ScreenController::key_to_navigation(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
            NavigationAction::Select
        );
        assert_eq!(
            ScreenController::key_to_navigation(KeyEvent::new(KeyCode::Char('1'), KeyModifiers::NONE)),
            NavigationAction::Choose(0)
        );
        assert_eq!(
            ScreenController::key_to_navigation(KeyEvent::new(KeyCode::Char('8'), KeyModifiers::NONE)),
            NavigationAction::Choose(7)
        );
        assert_eq!(
            ScreenController::key_to_navigation(KeyEvent::new(KeyCode::Char('9'), KeyModifiers::NONE)),
            NavigationAction::None
        );

        // Test game shortcuts
        assert_eq!(
            ScreenController::key_to_navigation(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE)),
            NavigationAction::Restart
        );
        assert_eq!(
            ScreenController::key_to_navigation(KeyEvent::new(KeyCode::Char('d'), KeyModifiers::NONE)),
            NavigationAction::ToggleDifficulty
        );

        // Test back keys
        assert_eq!(
            ScreenController::key_to_navigation(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)),
            NavigationAction::Back
        );

        // Test tab navigation
        assert_eq!(
            ScreenController::key_to_navigation(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE)),
            NavigationAction::Next
        );
        assert_eq!(
            ScreenController::key_to_navigation(KeyEvent::new(KeyCode::Tab, KeyModifiers::SHIFT)),
            NavigationAction::Previous
        );
    }
}
