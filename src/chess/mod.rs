pub(crate) mod board;
pub mod direction;
pub(crate) mod notation;
pub mod piece;
pub mod pos;

pub use board::{Board, Destinations, GameState, Pieces};
pub use direction::Direction;
pub use notation::MoveString;
pub use piece::{PieceKind, Player};
pub use pos::Pos;
