use lazy_static::lazy_static;
use regex::Regex;

use crate::prelude::*;

lazy_static! {
    static ref MOVE_STRING: Regex = Regex::new(r"^(?<x1>[0-9])(?<y1>[0-9])(?<x2>[0-9])(?<y2>[0-9])$").unwrap();
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Represents a syntactically-valid move string.
///
/// A move string is four digits: the file and rank of the origin, then the file and rank of the destination. For
/// example, `1715` moves the piece on file 1, rank 7 to file 1, rank 5. Whether the move is legal is up to the board.
pub struct MoveString
{
    pub from: Pos,
    pub to:   Pos,
}

impl FromStr for MoveString
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        let Some(caps) = MOVE_STRING.captures(s)
        else
        {
            let err = Error::new(Kind::ParseError, "Expected four digits, as in '1715'.".into());
            return Err(err.chain_parse::<Self>(s.into()));
        };

        let digit = |name: &str| caps[name].bytes().next().map_or(-1, |b| (b - b'0') as i32);

        Ok(MoveString {
            from: Pos::new(digit("x1"), digit("y1")),
            to:   Pos::new(digit("x2"), digit("y2")),
        })
    }
}

impl From<(Pos, Pos)> for MoveString
{
    fn from((from, to): (Pos, Pos)) -> Self
    {
        MoveString { from, to }
    }
}

impl std::fmt::Display for MoveString
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{}{}{}{}", self.from.x, self.from.y, self.to.x, self.to.y)
    }
}
