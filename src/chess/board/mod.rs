use std::collections::BTreeMap;

use crate::prelude::*;

mod evaluate;
mod generate;
mod printers;
mod state;

pub use generate::Destinations;
pub use state::GameState;

/// The pieces of one player, keyed by the square they stand on.
///
/// An ordered map, so that iteration visits squares in ascending (file, rank) order.
pub type Pieces = BTreeMap<Pos, PieceKind>;

#[derive(Clone, PartialEq, Eq)]
/// A chess board: where each player's pieces stand, and whose turn it is.
///
/// Cloning a board is a full value copy; the search relies on this to explore branches without undoing moves.
pub struct Board
{
    /// White's pieces. A square never appears in both maps at once.
    white: Pieces,

    /// Black's pieces.
    black: Pieces,

    /// The player to make the next move.
    turn: Player,
}

impl Default for Board
{
    fn default() -> Self
    {
        Board::new()
    }
}

impl std::fmt::Debug for Board
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        self.debug(f)
    }
}

impl std::fmt::Display for Board
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let coordinates = f.alternate();
        self.pretty(f, coordinates)
    }
}

impl Board
{
    /// Creates a board with no pieces on it and the given player to move.
    pub fn empty(turn: Player) -> Board
    {
        Board {
            white: Pieces::new(),
            black: Pieces::new(),
            turn,
        }
    }

    /// Flips the player to move, and nothing else.
    pub fn flip_turn(&mut self)
    {
        self.turn = self.turn.flip();
    }

    /// Whether the player to move still has a king.
    ///
    /// A player without a king has lost; nothing else ends the game.
    pub fn has_king(&self) -> bool
    {
        self.pieces(self.turn).values().any(|kind| *kind == PieceKind::King)
    }

    /// Attempts to play the move from one square to the other for the player to move.
    ///
    /// A move is accepted only if `to` is one of the [`Board::possible_moves`] of `from`. On acceptance, any opposing
    /// piece on `to` is captured, a pawn reaching either end of the board becomes a queen, and the turn passes.
    /// On rejection, the board is left untouched.
    pub fn make_move(&mut self, from: Pos, to: Pos) -> bool
    {
        if !self.possible_moves(from).contains(&to)
        {
            log::trace!("rejected {} -> {} for {}", from, to, self.turn);
            return false;
        }

        let Some(kind) = self.mover_pieces().remove(&from)
        else
        {
            // Unreachable: possible_moves() is empty for a square without a mover piece.
            return false;
        };

        self.opponent_pieces().remove(&to);

        let kind = if kind.is_pawn() && to.on_last_rank() { PieceKind::Queen } else { kind };
        self.mover_pieces().insert(to, kind);

        self.flip_turn();
        true
    }

    /// Returns the pieces of the player to move.
    pub fn mover_pieces(&mut self) -> &mut Pieces
    {
        self.pieces_of_mut(self.turn)
    }

    /// Creates a board set up for a new game.
    pub fn new() -> Board
    {
        let mut board = Board::empty(Player::White);
        board.reset();
        board
    }

    /// Returns the pieces of the player not to move.
    pub fn opponent_pieces(&mut self) -> &mut Pieces
    {
        self.pieces_of_mut(self.turn.flip())
    }

    /// Gets the player and kind of the piece on the given square, if any.
    pub fn piece_at(&self, pos: Pos) -> Option<(Player, PieceKind)>
    {
        [Player::White, Player::Black]
            .into_iter()
            .find_map(|player| self.pieces(player).get(&pos).map(|kind| (player, *kind)))
    }

    /// Returns the pieces of the given player.
    pub fn pieces(&self, player: Player) -> &Pieces
    {
        match player
        {
            | Player::White => &self.white,
            | Player::Black => &self.black,
        }
    }

    /// Puts a piece on the board for the given player, replacing whatever stood there.
    ///
    /// This bypasses the rules entirely and exists to set up positions. Squares off the board are ignored.
    pub fn put(&mut self, player: Player, pos: Pos, kind: PieceKind)
    {
        if !pos.on_board()
        {
            log::warn!("not putting {} {} on {}, which is off the board", player, kind, pos);
            return;
        }

        self.pieces_of_mut(player.flip()).remove(&pos);
        self.pieces_of_mut(player).insert(pos, kind);
    }

    /// Clears the board and sets up the starting position, with white to move.
    pub fn reset(&mut self)
    {
        self.turn = Player::White;
        self.white.clear();
        self.black.clear();

        for player in [Player::White, Player::Black]
        {
            let pawns = player.pawn_rank();
            let back = player.back_rank();
            let pieces = self.pieces_of_mut(player);

            for x in 1..=8
            {
                pieces.insert(Pos::new(x, pawns), PieceKind::pawn(player));
            }

            for (n, kind) in (1..).zip([PieceKind::Rook, PieceKind::Knight, PieceKind::Bishop, PieceKind::King])
            {
                pieces.insert(Pos::new(n, back), kind);
                pieces.insert(Pos::new(9 - n, back), kind);
            }

            // The king is mirrored onto the fourth file as well; the queen takes that square.
            pieces.insert(Pos::new(4, back), PieceKind::Queen);
        }
    }

    /// Gets the player to move.
    pub fn to_move(&self) -> Player
    {
        self.turn
    }
}

/// Private implementation for this board.
impl Board
{
    /// Selects the pieces belonging to the given player.
    fn pieces_of_mut(&mut self, player: Player) -> &mut Pieces
    {
        match player
        {
            | Player::White => &mut self.white,
            | Player::Black => &mut self.black,
        }
    }
}
