/// Values that bound the playing area.
pub mod consts
{
    /// The number of files and ranks on the board.
    pub const SIDE: i32 = 8;

    /// The lowest valid file or rank.
    pub const FIRST: i32 = 1;

    /// The highest valid file or rank.
    pub const LAST: i32 = FIRST + SIDE - 1;
}

use consts::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// A square on the board, as a (file, rank) pair.
///
/// Squares order lexicographically on file, then rank, which is the order the search enumerates pieces in.
/// The type itself does not enforce that the square is on the board; see [`Pos::on_board`].
pub struct Pos
{
    pub x: i32,
    pub y: i32,
}

impl Pos
{
    /// The "no position" square, used by moves that were never found.
    pub const SENTINEL: Pos = Pos::new(-1, -1);

    /// Creates a square from a file and a rank.
    pub const fn new(x: i32, y: i32) -> Pos
    {
        Pos { x, y }
    }

    /// Returns the square `dx` files and `dy` ranks away from this one.
    pub const fn offset(&self, dx: i32, dy: i32) -> Pos
    {
        Pos::new(self.x + dx, self.y + dy)
    }

    /// Whether both the file and the rank lie on the board.
    pub const fn on_board(&self) -> bool
    {
        FIRST <= self.x && self.x <= LAST && FIRST <= self.y && self.y <= LAST
    }

    /// Whether this is the sentinel square.
    pub fn is_sentinel(&self) -> bool
    {
        *self == Self::SENTINEL
    }

    /// Whether a pawn landing here reaches the far end of the board.
    pub const fn on_last_rank(&self) -> bool
    {
        self.y == FIRST || self.y == LAST
    }
}

impl Default for Pos
{
    fn default() -> Self
    {
        Pos::SENTINEL
    }
}

impl std::fmt::Display for Pos
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "({},{})", self.x, self.y)
    }
}
