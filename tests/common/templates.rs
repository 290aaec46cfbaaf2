use std::collections::BTreeSet;

use kingslayer::prelude::*;

/// Builds a board from a list of (player, (file, rank), kind) placements.
pub fn board_with(turn: Player, placements: &[(Player, (i32, i32), PieceKind)]) -> Board
{
    let mut board = Board::empty(turn);
    for (player, (x, y), kind) in placements
    {
        board.put(*player, Pos::new(*x, *y), *kind);
    }
    board
}

/// The destinations of the piece on the given square, as a set.
pub fn destinations(board: &Board, x: i32, y: i32) -> BTreeSet<Pos>
{
    board.possible_moves(Pos::new(x, y)).into_iter().collect()
}

/// Builds a set of squares.
pub fn squares(coords: &[(i32, i32)]) -> BTreeSet<Pos>
{
    coords.iter().map(|(x, y)| Pos::new(*x, *y)).collect()
}

/// Tries every one-ply move by brute force and returns the first move reaching the best score for the side.
pub fn best_by_enumeration(board: &Board, minimize: bool) -> Option<Move>
{
    let mut best: Option<Move> = None;
    for &from in board.pieces(board.to_move()).keys()
    {
        for to in board.possible_moves(from)
        {
            let mut branch = board.clone();
            assert!(branch.make_move(from, to), "generated move {from} -> {to} was rejected");

            let score = branch.score();
            let better = match best
            {
                | None => true,
                | Some(mv) if minimize => score < mv.score,
                | Some(mv) => score > mv.score,
            };

            if better
            {
                best = Some(Move { from, to, score });
            }
        }
    }
    best
}

/// Plays a sequence of moves from the starting position, panicking on any rejection.
pub fn play_from_start(moves: &[&'static str]) -> Board
{
    let mut board = Board::new();
    for movestr in moves
    {
        let mv = movestr.parse::<MoveString>().unwrap();
        assert!(board.make_move(mv.from, mv.to), "move {movestr} was rejected");
    }
    board
}
