use super::board::Board;
use super::player::{Player, PlayerId};
use super::win;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(PlayerId),
    Tied,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Why a drop was turned away. The game is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    ColumnFull,
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropResult {
    Placed {
        row: usize,
        column: usize,
        player: PlayerId,
        status: GameStatus,
    },
    Rejected(RejectReason),
}

/// A single game: the board, the fixed turn order and the current status.
///
/// The board is only reachable read-only from outside; every piece goes
/// through [`Game::drop_piece`].
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    players: Vec<Player>,
    current: usize,
    status: GameStatus,
    moves_played: usize,
}

impl Game {
    /// Start a game on an empty `height` x `width` board.
    ///
    /// # Panics
    ///
    /// If a dimension is zero, the roster is empty, or two players share an
    /// id.
    pub fn new(height: usize, width: usize, players: Vec<Player>) -> Self {
        assert!(!players.is_empty(), "a game needs at least one player");
        for (i, player) in players.iter().enumerate() {
            assert!(
                players[..i].iter().all(|p| p.id() != player.id()),
                "duplicate player id {}",
                player.id()
            );
        }
        Game {
            board: Board::new(height, width),
            players,
            current: 0,
            status: GameStatus::InProgress,
            moves_played: 0,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == id)
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Number of pieces placed so far.
    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    /// Drop the current player's piece into `column`.
    ///
    /// A win is checked before a full board, so a winning last piece is
    /// reported as a win and not a tie.
    ///
    /// # Panics
    ///
    /// If `column` is not in `0..width`.
    #[doc(alias = "drop")]
    pub fn drop_piece(&mut self, column: usize) -> DropResult {
        if self.is_terminal() {
            return DropResult::Rejected(RejectReason::GameOver);
        }

        let Some(row) = self.board.landing_row(column) else {
            log::debug!("column {column} is full, drop rejected");
            return DropResult::Rejected(RejectReason::ColumnFull);
        };

        let player = self.current_player().id();
        self.board.place(row, column, player);
        self.moves_played += 1;
        log::debug!("player {player} placed at ({row}, {column})");

        if let Some(axis) = win::winning_axis(&self.board, row, column, player) {
            log::info!(
                "player {player} wins on the {} through ({row}, {column})",
                axis.name()
            );
            self.status = GameStatus::Won(player);
        } else if self.board.is_full() {
            log::info!("board full after {} moves, game tied", self.moves_played);
            self.status = GameStatus::Tied;
        } else {
            self.current = (self.current + 1) % self.players.len();
        }

        DropResult::Placed {
            row,
            column,
            player,
            status: self.status,
        }
    }
}
