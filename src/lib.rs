// English draughts engine: rules, turn state machine and alpha-beta opponent
pub mod board;
pub mod console;
pub mod game;
pub mod perft;
pub mod search;
pub mod selfplay;

pub use board::movegen::{Move, PieceMove};
pub use board::{Board, Color, Piece, Rank, Square};
pub use game::{GameState, Phase};
pub use search::strategy::{AiPlayer, Difficulty};
