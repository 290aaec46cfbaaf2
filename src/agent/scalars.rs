/// A search depth, in plies.
pub type Depth = u8;

pub mod consts
{
    use super::Depth;

    /// The depth the computer searches to: a single ply.
    pub const DEFAULT_DEPTH: Depth = 1;

    /// The starting score for a maximizing search. It is worse than any material balance, so the first real
    /// candidate always replaces it.
    pub const WORST_SCORE: i32 = -1_000_000;

    /// The starting score for a minimizing search.
    pub const BEST_SCORE: i32 = 1_000_000;
}

pub use consts::*;
