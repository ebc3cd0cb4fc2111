use crate::config::AppConfig;
use crate::error::GameError;
use crate::game::{GameState, Outcome, RejectReason};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;

pub struct App {
    config: AppConfig,
    game_state: GameState,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self, GameError> {
        let game_state = config.new_game()?;
        let selected_column = game_state.width() / 2; // Start in middle
        Ok(App {
            config,
            game_state,
            selected_column,
            should_quit: false,
            message: None,
        })
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(Into::<io::Error>::into)?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < self.game_state.width() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                self.restart();
            }
            _ => {}
        }
    }

    /// Start over with the same players and board size
    fn restart(&mut self) {
        // The config was validated when the app was built.
        if let Ok(game_state) = self.config.new_game() {
            self.game_state = game_state;
            self.selected_column = self.game_state.width() / 2;
            self.message = Some("New game started!".to_string());
        }
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        let column = self.selected_column as isize;
        self.message = match self.game_state.drop_piece(column) {
            Outcome::Continue => None,
            Outcome::Win(player) => Some(format!("Player {} won!", player.number())),
            Outcome::Tie => Some("Tie!".to_string()),
            Outcome::Rejected(RejectReason::GameOver) => {
                Some("Game over! Press 'r' to restart.".to_string())
            }
            Outcome::Rejected(RejectReason::ColumnFull) => Some("Column is full!".to_string()),
            Outcome::Rejected(RejectReason::OutOfRange) => Some("Invalid column!".to_string()),
        };
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.game_state,
            self.selected_column,
            self.message.as_deref(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, PlayerNumber};

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::from(code));
    }

    #[test]
    fn test_starts_in_middle_column() {
        let app = App::new(AppConfig::default()).unwrap();
        assert_eq!(app.selected_column, 3);
        assert_eq!(app.message(), None);
    }

    #[test]
    fn test_invalid_config_fails() {
        let mut config = AppConfig::default();
        config.board.width = 0;
        assert!(App::new(config).is_err());
    }

    #[test]
    fn test_selection_stays_on_board() {
        let mut app = App::new(AppConfig::default()).unwrap();
        for _ in 0..10 {
            press(&mut app, KeyCode::Left);
        }
        assert_eq!(app.selected_column, 0);
        for _ in 0..10 {
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.selected_column, 6);
    }

    #[test]
    fn test_enter_drops_piece() {
        let mut app = App::new(AppConfig::default()).unwrap();
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.game_state().board().get(5, 3), Cell::PlayerOne);
        assert_eq!(app.game_state().current_player().number(), PlayerNumber::Two);
    }

    #[test]
    fn test_full_column_message() {
        let mut app = App::new(AppConfig::default()).unwrap();
        for _ in 0..6 {
            press(&mut app, KeyCode::Char(' '));
        }
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.message(), Some("Column is full!"));
        assert_eq!(app.game_state().moves_played(), 6);
    }

    #[test]
    fn test_message_cleared_on_next_key() {
        let mut app = App::new(AppConfig::default()).unwrap();
        for _ in 0..7 {
            press(&mut app, KeyCode::Enter);
        }
        assert_eq!(app.message(), Some("Column is full!"));

        press(&mut app, KeyCode::Left);
        assert_eq!(app.message(), None);
        assert_eq!(app.selected_column, 2);
    }

    #[test]
    fn test_win_then_ignored_then_restart() {
        let mut app = App::new(AppConfig::default()).unwrap();
        // Player one builds columns 0..=3 on the bottom row, player two
        // stacks on top of each.
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Left);
        for col in 0..4 {
            press(&mut app, KeyCode::Enter);
            if col < 3 {
                press(&mut app, KeyCode::Enter);
                press(&mut app, KeyCode::Right);
            }
        }
        assert_eq!(app.message(), Some("Player 1 won!"));
        assert!(app.game_state().is_game_over());

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.message(), Some("Game over! Press 'r' to restart."));

        press(&mut app, KeyCode::Char('r'));
        assert!(!app.game_state().is_game_over());
        assert_eq!(app.game_state().moves_played(), 0);
        assert_eq!(app.message(), Some("New game started!"));
    }

    #[test]
    fn test_quit() {
        let mut app = App::new(AppConfig::default()).unwrap();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
