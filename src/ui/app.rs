use crate::config::AppConfig;
use crate::game::{DropResult, Game, GameStatus, Player, RejectReason};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;

pub struct App {
    game: Game,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    /// Build the roster from `config` and start the first game.
    pub fn new(config: &AppConfig) -> Self {
        let roster = config.players.roster(&mut config.players.rng());
        Self::with_roster(config.board.height, config.board.width, roster)
    }

    pub fn with_roster(height: usize, width: usize, roster: Vec<Player>) -> Self {
        App {
            game: Game::new(height, width, roster),
            selected_column: width / 2, // Start in middle
            should_quit: false,
            message: None,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
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
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

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
                if self.selected_column + 1 < self.game.board().width() {
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

    /// New game on the same board with the same players.
    fn restart(&mut self) {
        let board = self.game.board();
        let (height, width) = (board.height(), board.width());
        self.game = Game::new(height, width, self.game.players().to_vec());
        self.selected_column = width / 2;
        self.message = Some("New game started!".to_string());
        log::info!("new {height}x{width} game started");
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        match self.game.drop_piece(self.selected_column) {
            DropResult::Placed { status, .. } => match status {
                GameStatus::InProgress => {}
                GameStatus::Won(id) => {
                    let name = self
                        .game
                        .player(id)
                        .map_or_else(|| format!("Player {id}"), Player::name);
                    self.message = Some(format!("{name} wins! Press 'r' to play again."));
                }
                GameStatus::Tied => {
                    self.message = Some("It's a tie! Press 'r' to play again.".to_string());
                }
            },
            DropResult::Rejected(RejectReason::ColumnFull) => {
                self.message = Some("Column is full!".to_string());
            }
            DropResult::Rejected(RejectReason::GameOver) => {
                self.message = Some("Game over! Press 'r' to restart.".to_string());
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.game, self.selected_column, &self.message);
    }
}
