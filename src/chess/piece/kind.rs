use crate::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// The kinds of pieces on the board.
///
/// Pawns are split by colour so that a pawn's direction of travel follows from its kind alone.
pub enum PieceKind
{
    King,
    Queen,
    WhitePawn,
    BlackPawn,
    Rook,
    Bishop,
    Knight,
}

impl PieceKind
{
    /// The material value of this kind.
    ///
    /// The king is worth more than everything else combined, so losing it dominates any evaluation.
    pub const fn value(&self) -> i32
    {
        match self
        {
            | Self::King => 10000,
            | Self::Queen => 9,
            | Self::Rook => 5,
            | Self::Bishop | Self::Knight => 3,
            | Self::WhitePawn | Self::BlackPawn => 1,
        }
    }

    /// Whether this is a pawn of either colour.
    pub const fn is_pawn(&self) -> bool
    {
        matches!(self, Self::WhitePawn | Self::BlackPawn)
    }

    /// Returns the pawn kind belonging to the given player.
    pub const fn pawn(player: Player) -> PieceKind
    {
        match player
        {
            | Player::White => Self::WhitePawn,
            | Player::Black => Self::BlackPawn,
        }
    }

    /// The single-letter symbol for this kind, upper case.
    pub fn symbol(&self) -> char
    {
        match self
        {
            | Self::King => 'K',
            | Self::Queen => 'Q',
            | Self::WhitePawn | Self::BlackPawn => 'P',
            | Self::Rook => 'R',
            | Self::Bishop => 'B',
            | Self::Knight => 'N',
        }
    }

    pub fn long(&self) -> &'static str
    {
        match self
        {
            | Self::King => "King",
            | Self::Queen => "Queen",
            | Self::WhitePawn => "White Pawn",
            | Self::BlackPawn => "Black Pawn",
            | Self::Rook => "Rook",
            | Self::Bishop => "Bishop",
            | Self::Knight => "Knight",
        }
    }
}

impl std::fmt::Display for PieceKind
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{}", self.long())
    }
}
