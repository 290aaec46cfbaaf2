use crate::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// A move chosen by the search, along with the score it leads to.
///
/// `from` and `to` are only meaningful once a move was actually found; until then they hold [`Pos::SENTINEL`].
pub struct Move
{
    pub from:  Pos,
    pub to:    Pos,
    pub score: i32,
}

impl Default for Move
{
    fn default() -> Self
    {
        Move {
            from:  Pos::SENTINEL,
            to:    Pos::SENTINEL,
            score: 0,
        }
    }
}

impl Move
{
    /// A move with no squares, carrying only a score.
    pub fn scored(score: i32) -> Move
    {
        Move { score, ..Move::default() }
    }

    /// Whether this move has real squares.
    pub fn is_some(&self) -> bool
    {
        !self.from.is_sentinel() && !self.to.is_sentinel()
    }
}

impl std::fmt::Display for Move
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        match self.is_some()
        {
            | true => write!(f, "{} ({:+})", MoveString::from((self.from, self.to)), self.score),
            | false => write!(f, "none ({:+})", self.score),
        }
    }
}
