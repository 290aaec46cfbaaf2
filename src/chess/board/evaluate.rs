use crate::prelude::*;

impl Board
{
    /// Returns the material balance of the position: white's piece values minus black's.
    ///
    /// Positive scores favour white, negative scores favour black.
    pub fn score(&self) -> i32
    {
        material(self.pieces(Player::White)) - material(self.pieces(Player::Black))
    }
}

/// Sums the values of a player's pieces.
fn material(pieces: &Pieces) -> i32
{
    pieces.values().map(PieceKind::value).sum()
}
