use crate::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The players in a game of chess.
pub enum Player
{
    White,
    Black,
}

impl Player
{
    /// Gets the next player.
    pub fn flip(&self) -> Self
    {
        match self
        {
            | Self::White => Self::Black,
            | Self::Black => Self::White,
        }
    }

    /// The rank this player's pawns start on, and from which they may advance two squares.
    pub const fn pawn_rank(&self) -> i32
    {
        match self
        {
            | Self::White => 7,
            | Self::Black => 2,
        }
    }

    /// The rank this player's pieces start on.
    pub const fn back_rank(&self) -> i32
    {
        match self
        {
            | Self::White => 8,
            | Self::Black => 1,
        }
    }

    /// The rank step taken by this player's pawns; white advances towards rank 1.
    pub const fn forward(&self) -> i32
    {
        match self
        {
            | Self::White => -1,
            | Self::Black => 1,
        }
    }
}

impl std::fmt::Display for Player
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let name = match self
        {
            | Self::White => "White",
            | Self::Black => "Black",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Player
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        match s
        {
            | "White" | "w" => Ok(Self::White),
            | "Black" | "b" => Ok(Self::Black),
            | _ => Err(Error::for_parse::<Self>(s.into())),
        }
    }
}
