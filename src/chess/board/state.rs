use crate::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Represents the current state of the game.
///
/// A game only ends when a king is captured.
pub enum GameState
{
    InProgress,
    WhiteWins,
    BlackWins,
}

impl GameState
{
    /// The winner, if there is one.
    pub fn winner(&self) -> Option<Player>
    {
        match self
        {
            | Self::InProgress => None,
            | Self::WhiteWins => Some(Player::White),
            | Self::BlackWins => Some(Player::Black),
        }
    }
}

impl Board
{
    /// Gets the state of the game.
    ///
    /// Only the player to move can be missing a king, because kings are only ever lost to the opponent's move.
    pub fn state(&self) -> GameState
    {
        if self.has_king()
        {
            return GameState::InProgress;
        }

        match self.to_move()
        {
            | Player::White => GameState::BlackWins,
            | Player::Black => GameState::WhiteWins,
        }
    }
}
