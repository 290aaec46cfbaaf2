use arrayvec::ArrayVec;

use crate::prelude::*;

/// The squares a single piece can move to, in the order they were generated.
pub type Destinations = ArrayVec<Pos, { piece::consts::MAX_DESTINATIONS }>;

/// Knight jumps, in generation order.
const KNIGHT_JUMPS: [(i32, i32); 8] = [(-2, -1), (-2, 1), (2, -1), (2, 1), (-1, -2), (-1, 2), (1, -2), (1, 2)];

impl Board
{
    /// Generates the squares the piece on `from` can move to, for the player to move.
    ///
    /// Moves follow each piece's movement pattern only: nothing stops a king from walking into an attack, and there
    /// is no castling or en passant. If the player to move has no piece on `from`, there are no moves.
    pub fn possible_moves(&self, from: Pos) -> Destinations
    {
        let mut moves = Destinations::new();

        let Some(kind) = self.pieces(self.turn).get(&from).copied()
        else
        {
            return moves;
        };

        match kind
        {
            | PieceKind::WhitePawn => self.pawn_moves_into(from, Player::White, &mut moves),
            | PieceKind::BlackPawn => self.pawn_moves_into(from, Player::Black, &mut moves),
            | PieceKind::Knight =>
            {
                for (dx, dy) in KNIGHT_JUMPS
                {
                    self.add_move(from.offset(dx, dy), &mut moves);
                }
            }
            | PieceKind::King =>
            {
                for (dx, dy) in itertools::iproduct!(-1..=1, -1..=1).filter(|step| *step != (0, 0))
                {
                    self.add_move(from.offset(dx, dy), &mut moves);
                }
            }
            | PieceKind::Rook => self.slide_into(from, &Direction::orthogonal(), &mut moves),
            | PieceKind::Bishop => self.slide_into(from, &Direction::diagonal(), &mut moves),
            | PieceKind::Queen => self.slide_into(from, &Direction::all(), &mut moves),
        };

        moves
    }
}

impl Board
{
    /// Adds the square if it is empty or holds an opposing piece, returning whether it was added.
    fn add_move(&self, to: Pos, moves: &mut Destinations) -> bool
    {
        if self.is_free(to) || self.is_opponent(to)
        {
            moves.push(to);
            true
        }
        else
        {
            false
        }
    }

    /// Whether the square is on the board and empty.
    fn is_free(&self, pos: Pos) -> bool
    {
        pos.on_board() && !self.is_own(pos) && !self.is_opponent(pos)
    }

    /// Whether the square holds an opposing piece.
    fn is_opponent(&self, pos: Pos) -> bool
    {
        self.pieces(self.turn.flip()).contains_key(&pos)
    }

    /// Whether the square holds a piece of the player to move.
    fn is_own(&self, pos: Pos) -> bool
    {
        self.pieces(self.turn).contains_key(&pos)
    }

    /// Generates pawn pushes and captures, where `owner` decides which way the pawn walks.
    fn pawn_moves_into(&self, from: Pos, owner: Player, moves: &mut Destinations)
    {
        let dy = owner.forward();
        let one = from.offset(0, dy);
        let two = from.offset(0, 2 * dy);

        if self.is_free(one)
        {
            self.add_move(one, moves);

            if self.is_free(two) && from.y == owner.pawn_rank()
            {
                self.add_move(two, moves);
            }
        }

        // Pawns only ever move diagonally to capture.
        for dx in [-1, 1]
        {
            let diagonal = from.offset(dx, dy);
            if self.is_opponent(diagonal)
            {
                self.add_move(diagonal, moves);
            }
        }
    }

    /// Walks each ray outwards, stopping at the board edge, before a friendly piece, or on a capture.
    fn slide_into(&self, from: Pos, directions: &[Direction], moves: &mut Destinations)
    {
        for direction in directions
        {
            for n in 1..=pos::consts::SIDE
            {
                let (dx, dy) = direction.scaled(n);
                let to = from.offset(dx, dy);

                if !self.add_move(to, moves) || self.is_opponent(to)
                {
                    break;
                }
            }
        }
    }
}
