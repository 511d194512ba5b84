//! Core game logic: board and drop rule, win detection, players, and the
//! game state machine that sequences turns.

mod board;
mod player;
mod state;
mod win;

pub use board::{Board, Cell};
pub use player::{Player, PlayerId};
pub use state::{DropResult, Game, GameStatus, RejectReason};
pub use win::{check_win, winning_axis, Axis, CONNECT_LENGTH};
