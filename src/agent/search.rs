use std::time::Instant;

use crate::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Counts of the nodes visited by a search.
pub struct SearchStats
{
    /// Nodes that expanded their moves.
    pub stems:  u64,
    /// Nodes that were evaluated.
    pub leaves: u64,
}

impl Board
{
    /// Plays the computer's move for the player to move, searching a single ply.
    ///
    /// If the player to move has no moves at all, the board is left as it is.
    pub fn ai_move(&mut self) -> Move
    {
        self.ai_move_at(DEFAULT_DEPTH)
    }

    /// Plays the computer's move for the player to move, searching to the given depth.
    ///
    /// White maximizes the score and black minimizes it. A depth of 0 never finds a move.
    pub fn ai_move_at(&mut self, depth: Depth) -> Move
    {
        let minimize = self.to_move() == Player::Black;

        let start = Instant::now();
        let mut stats = SearchStats::default();
        let best = search(self, depth, minimize, &mut stats);
        let time_elapsed = start.elapsed();

        log::debug!("found {} for {} at depth {}", best, self.to_move(), depth);
        log::debug!("visited {} stems and {} leaves in {:.3}s", stats.stems, stats.leaves, time_elapsed.as_secs_f64());

        // The sentinel move is rejected here, so a player without moves simply passes.
        if !self.make_move(best.from, best.to)
        {
            log::debug!("{} has no moves to play", self.to_move());
        }

        best
    }

    /// Finds the best move for the player to move by exhaustive minimax search over material.
    ///
    /// At depth 0, returns the score of this position and no move. Otherwise every move of every piece is tried, in
    /// ascending square order and then generation order, and the first move reaching the best score wins ties.
    /// If there are no moves, the result has no squares and the initial worst score for this side.
    pub fn minimax(&self, depth: Depth, minimize: bool) -> Move
    {
        search(self, depth, minimize, &mut SearchStats::default())
    }

    /// Like [`Board::minimax`], but also reports how many nodes were visited.
    pub fn minimax_with_stats(&self, depth: Depth, minimize: bool) -> (Move, SearchStats)
    {
        let mut stats = SearchStats::default();
        let best = search(self, depth, minimize, &mut stats);
        (best, stats)
    }
}

/// The recursive step of the search. Every branch is explored on its own copy of the board.
fn search(board: &Board, depth: Depth, minimize: bool, stats: &mut SearchStats) -> Move
{
    if depth == 0
    {
        stats.leaves += 1;
        return Move::scored(board.score());
    }

    stats.stems += 1;
    let mut best = Move::scored(if minimize { BEST_SCORE } else { WORST_SCORE });

    for &from in board.pieces(board.to_move()).keys()
    {
        for to in board.possible_moves(from)
        {
            let mut branch = board.clone();
            branch.make_move(from, to);

            let option = search(&branch, depth - 1, !minimize, stats);
            let improves = if minimize { option.score < best.score } else { option.score > best.score };

            if improves
            {
                best = Move {
                    from,
                    to,
                    score: option.score,
                };
            }
        }
    }

    log::trace!("depth {}: best {}", depth, best);
    best
}
