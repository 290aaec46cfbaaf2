#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// One of the eight compass directions a ray can travel in.
///
/// North is towards increasing rank, east towards increasing file.
pub enum Direction
{
    North,
    South,
    East,
    West,
    Northeast,
    Southeast,
    Northwest,
    Southwest,
}

impl Direction
{
    #[inline]
    /// The rook's rays, in the order they are walked.
    pub const fn orthogonal() -> [Direction; 4]
    {
        [Self::North, Self::South, Self::East, Self::West]
    }

    #[inline]
    /// The bishop's rays, in the order they are walked.
    pub const fn diagonal() -> [Direction; 4]
    {
        [Self::Northeast, Self::Southeast, Self::Northwest, Self::Southwest]
    }

    #[inline]
    /// The queen's rays: orthogonal first, then diagonal.
    pub const fn all() -> [Direction; 8]
    {
        [
            Self::North,
            Self::South,
            Self::East,
            Self::West,
            Self::Northeast,
            Self::Southeast,
            Self::Northwest,
            Self::Southwest,
        ]
    }

    /// Returns the (file, rank) step for one square in this direction.
    pub const fn delta(&self) -> (i32, i32)
    {
        match self
        {
            | Self::North => (0, 1),
            | Self::South => (0, -1),
            | Self::East => (1, 0),
            | Self::West => (-1, 0),
            | Self::Northeast => (1, 1),
            | Self::Southeast => (1, -1),
            | Self::Northwest => (-1, 1),
            | Self::Southwest => (-1, -1),
        }
    }

    /// Returns the (file, rank) offset for `n` squares in this direction.
    pub const fn scaled(&self, n: i32) -> (i32, i32)
    {
        let (dx, dy) = self.delta();
        (dx * n, dy * n)
    }
}
