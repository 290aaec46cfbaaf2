mod common;
use common::*;

#[cfg(test)]
mod move_generation
{
    use super::*;
    use kingslayer::prelude::*;

    #[test]
    fn empty_and_opposing_squares_have_no_moves()
    {
        let _setup = setup::setup();
        let board = Board::new();

        for x in 1..=8
        {
            for y in 1..=6
            {
                assert!(board.possible_moves(Pos::new(x, y)).is_empty(), "({x},{y}) should have no moves");
            }
        }
        assert!(board.possible_moves(Pos::new(0, 0)).is_empty());
        assert!(board.possible_moves(Pos::SENTINEL).is_empty());
    }

    #[test]
    fn opening_moves()
    {
        let _setup = setup::setup();
        let board = Board::new();

        let total: usize = board.pieces(Player::White).keys().map(|pos| board.possible_moves(*pos).len()).sum();
        assert_eq!(total, 20);

        assert_eq!(templates::destinations(&board, 2, 8), templates::squares(&[(1, 6), (3, 6)]));
        assert!(templates::destinations(&board, 1, 8).is_empty());
        assert!(templates::destinations(&board, 4, 8).is_empty());
        assert!(templates::destinations(&board, 5, 8).is_empty());
    }

    #[test]
    fn pawn_double_step_from_home_only()
    {
        let _setup = setup::setup();
        let mut board = Board::new();
        assert_eq!(templates::destinations(&board, 1, 7), templates::squares(&[(1, 6), (1, 5)]));

        assert!(board.make_move(Pos::new(1, 7), Pos::new(1, 6)));
        assert!(board.make_move(Pos::new(8, 2), Pos::new(8, 3)));
        assert_eq!(templates::destinations(&board, 1, 6), templates::squares(&[(1, 5)]));
    }

    #[test]
    fn pawn_double_step_needs_both_squares()
    {
        let _setup = setup::setup();
        let board = templates::board_with(
            Player::White,
            &[
                (Player::White, (4, 7), PieceKind::WhitePawn),
                (Player::Black, (4, 5), PieceKind::Knight),
                (Player::White, (6, 7), PieceKind::WhitePawn),
                (Player::Black, (6, 6), PieceKind::Knight),
            ],
        );

        assert_eq!(templates::destinations(&board, 4, 7), templates::squares(&[(4, 6)]));
        assert!(templates::destinations(&board, 6, 7).is_empty());
    }

    #[test]
    fn pawn_diagonals_only_capture()
    {
        let _setup = setup::setup();
        let board = templates::board_with(
            Player::White,
            &[
                (Player::White, (4, 7), PieceKind::WhitePawn),
                (Player::Black, (3, 6), PieceKind::Bishop),
                (Player::White, (5, 6), PieceKind::Knight),
            ],
        );

        assert_eq!(templates::destinations(&board, 4, 7), templates::squares(&[(4, 6), (4, 5), (3, 6)]));
    }

    #[test]
    fn black_pawn_mirrors_white()
    {
        let _setup = setup::setup();
        let board = templates::board_with(
            Player::Black,
            &[
                (Player::Black, (4, 2), PieceKind::BlackPawn),
                (Player::Black, (7, 3), PieceKind::BlackPawn),
                (Player::White, (8, 4), PieceKind::Rook),
                (Player::White, (6, 4), PieceKind::WhitePawn),
            ],
        );

        assert_eq!(templates::destinations(&board, 4, 2), templates::squares(&[(4, 3), (4, 4)]));
        assert_eq!(templates::destinations(&board, 7, 3), templates::squares(&[(7, 4), (6, 4), (8, 4)]));
    }

    #[test]
    fn knight_jumps()
    {
        let _setup = setup::setup();
        let board = templates::board_with(
            Player::White,
            &[
                (Player::White, (4, 4), PieceKind::Knight),
                (Player::White, (2, 3), PieceKind::Rook),
                (Player::Black, (6, 5), PieceKind::Rook),
                (Player::White, (1, 1), PieceKind::Knight),
            ],
        );

        assert_eq!(
            templates::destinations(&board, 4, 4),
            templates::squares(&[(2, 5), (6, 3), (6, 5), (3, 2), (3, 6), (5, 2), (5, 6)])
        );
        assert_eq!(templates::destinations(&board, 1, 1), templates::squares(&[(3, 2)]));
    }

    #[test]
    fn king_steps_without_safety_checks()
    {
        let _setup = setup::setup();
        let board = templates::board_with(
            Player::White,
            &[
                (Player::White, (4, 4), PieceKind::King),
                (Player::White, (3, 3), PieceKind::WhitePawn),
                (Player::Black, (5, 5), PieceKind::Knight),
                (Player::Black, (5, 8), PieceKind::Rook),
            ],
        );

        assert_eq!(
            templates::destinations(&board, 4, 4),
            templates::squares(&[(3, 4), (3, 5), (4, 3), (4, 5), (5, 3), (5, 4), (5, 5)])
        );

        let corner = templates::board_with(Player::White, &[(Player::White, (1, 1), PieceKind::King)]);
        assert_eq!(templates::destinations(&corner, 1, 1), templates::squares(&[(1, 2), (2, 1), (2, 2)]));
    }

    #[test]
    fn rook_stops_at_first_capture()
    {
        let _setup = setup::setup();
        let board = templates::board_with(
            Player::White,
            &[(Player::White, (1, 1), PieceKind::Rook), (Player::Black, (1, 4), PieceKind::BlackPawn)],
        );

        let moves = templates::destinations(&board, 1, 1);
        let mut expected = templates::squares(&[(1, 2), (1, 3), (1, 4)]);
        expected.extend((2..=8).map(|x| Pos::new(x, 1)));
        assert_eq!(moves, expected);
        assert!(!moves.contains(&Pos::new(1, 5)));
    }

    #[test]
    fn rook_stops_before_friendly_piece()
    {
        let _setup = setup::setup();
        let board = templates::board_with(
            Player::White,
            &[
                (Player::White, (1, 1), PieceKind::Rook),
                (Player::White, (1, 3), PieceKind::WhitePawn),
                (Player::White, (3, 1), PieceKind::Knight),
            ],
        );

        assert_eq!(templates::destinations(&board, 1, 1), templates::squares(&[(1, 2), (2, 1)]));
    }

    #[test]
    fn bishop_rays()
    {
        let _setup = setup::setup();
        let board = templates::board_with(
            Player::White,
            &[
                (Player::White, (4, 4), PieceKind::Bishop),
                (Player::Black, (6, 6), PieceKind::Queen),
                (Player::White, (2, 2), PieceKind::King),
            ],
        );

        assert_eq!(
            templates::destinations(&board, 4, 4),
            templates::squares(&[(5, 5), (6, 6), (5, 3), (6, 2), (7, 1), (3, 5), (2, 6), (1, 7), (3, 3)])
        );
    }

    #[test]
    fn queen_combines_rook_and_bishop()
    {
        let _setup = setup::setup();
        let queen = templates::board_with(Player::White, &[(Player::White, (4, 4), PieceKind::Queen)]);
        let rook = templates::board_with(Player::White, &[(Player::White, (4, 4), PieceKind::Rook)]);
        let bishop = templates::board_with(Player::White, &[(Player::White, (4, 4), PieceKind::Bishop)]);

        let moves = templates::destinations(&queen, 4, 4);
        assert_eq!(moves.len(), piece::consts::MAX_DESTINATIONS);

        let mut union = templates::destinations(&rook, 4, 4);
        union.extend(templates::destinations(&bishop, 4, 4));
        assert_eq!(moves, union);
    }

    #[test]
    fn queen_emits_orthogonal_rays_first()
    {
        let _setup = setup::setup();
        let board = templates::board_with(Player::Black, &[(Player::Black, (1, 1), PieceKind::Queen)]);

        let moves = board.possible_moves(Pos::new(1, 1));
        assert_eq!(moves[0], Pos::new(1, 2));
        assert_eq!(moves[7], Pos::new(2, 1));
        assert_eq!(moves[14], Pos::new(2, 2));
        assert_eq!(moves.len(), 21);
    }
}
