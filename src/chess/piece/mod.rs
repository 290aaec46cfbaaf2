mod kind;
mod player;

pub use kind::PieceKind;
pub use player::Player;

pub mod consts
{
    /// The number of pieces each player starts with.
    pub const PER_PLAYER: usize = 16;

    /// The most destinations any single piece can have (a centralized queen).
    pub const MAX_DESTINATIONS: usize = 27;
}
