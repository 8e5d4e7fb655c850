use game::bots::bot::{legal_moves, Bot, BotKind};
use game::constants::DRAW_MOVE_LIMIT;
use game::moves::move_gen::jump_moves;
use game::representations::{
    board::{Board, Coord},
    moves::{find_root, MoveTree},
    piece::{Color, Piece},
    state::{ChainCompletion, Checkers},
};

fn position(size: u16, pieces: &[((u16, u16), Piece)]) -> Checkers {
    let mut board = Board::empty(size).unwrap();
    for &(c, p) in pieces {
        board.set_piece(Coord::from(c), p);
    }
    Checkers::from_position(board)
}

/// Checks every path of `tree`: one new capture per jump, never the same
/// cell twice, never more captures than `opponents`.
fn check_chain(tree: &MoveTree, depth: usize, opponents: usize) {
    if tree.is_jump() {
        assert_eq!(tree.dead_squares.len(), depth);
    }
    assert!(tree.dead_squares.len() <= opponents);

    for child in &tree.children {
        if child.is_jump() {
            assert!(child.dead_squares.is_superset(&tree.dead_squares));
        }
        check_chain(child, depth + 1, opponents);
    }
}

#[test]
fn opening_piece_counts() {
    for size in [1u16, 2, 3, 4, 7, 12, 31] {
        let board = Board::new(size).unwrap();
        let per_side = u32::from(size) * u32::from(board.dim() / 2);

        assert_eq!(board.count_pieces(Color::Red), per_side);
        assert_eq!(board.count_pieces(Color::Black), per_side);
        assert_eq!(board.count_kings(Color::Red), 0);

        let shared = board.color_board(Color::Red)
            .count_common(board.color_board(Color::Black));
        assert_eq!(shared, 0);
    }

    assert!(Board::new(0).is_err());
    assert!(Board::new(32).is_err());
}

#[test]
fn smallest_board_walkthrough() {
    let mut game = Checkers::with_seed(1, 7).unwrap();
    let board = game.board();

    assert_eq!(board.occupied(Color::Black), vec![Coord::new(0, 1), Coord::new(0, 3)]);
    assert_eq!(board.occupied(Color::Red), vec![Coord::new(3, 0), Coord::new(3, 2)]);

    let root = game.piece_valid_moves(Coord::new(0, 1), Color::Black).unwrap();
    let targets: Vec<Coord> = root.children.iter().map(|c| c.location).collect();
    assert_eq!(targets, vec![Coord::new(1, 2), Coord::new(1, 0)]);

    game.execute_single_move(&root, 0).unwrap();

    let red = game.valid_moves(Color::Red);
    let from_left = find_root(&red, Coord::new(3, 0)).unwrap();
    let from_right = find_root(&red, Coord::new(3, 2)).unwrap();
    assert_eq!(from_left.to_string(), "[3,0][2,1]");
    assert_eq!(from_right.to_string(), "[3,2][2,1][2,3]");
    assert_eq!(game.consecutive_non_jump_moves(), 1);
}

#[test]
fn forced_capture_holds_through_random_games() {
    for seed in 0..8 {
        let mut game = Checkers::with_seed(3, seed).unwrap();
        let mut side = Color::Red;

        for _ in 0..300 {
            if game.is_done(side) {
                break;
            }

            let (jumps, can_jump) = jump_moves(game.board(), side);
            let valid = game.valid_moves(side);
            if can_jump {
                assert_eq!(valid, jumps);
            }

            let opponents = game.board().count_pieces(side.opposite()) as usize;
            for root in &valid {
                check_chain(root, 0, opponents);
            }

            assert!(game.make_random_move(side).unwrap());
            side = side.opposite();
        }
    }
}

#[test]
fn crowning_on_the_far_row() {
    let mut game = position(2, &[
        ((1, 2), Piece::man(Color::Red)),
        ((4, 1), Piece::man(Color::Black)),
    ]);

    let red = game.piece_valid_moves(Coord::new(1, 2), Color::Red).unwrap();
    game.execute_single_move(&red, 1).unwrap();
    assert_eq!(game.board().piece_at(Coord::new(0, 3)), Some(Piece::king(Color::Red)));

    let black = game.piece_valid_moves(Coord::new(4, 1), Color::Black).unwrap();
    game.execute_single_move(&black, 0).unwrap();
    assert_eq!(game.board().piece_at(Coord::new(5, 2)), Some(Piece::king(Color::Black)));
    assert_eq!(game.board().count_kings(Color::Black), 1);
}

#[test]
fn draw_after_eighty_quiet_plies() {
    let mut game = position(3, &[
        ((6, 1), Piece::king(Color::Red)),
        ((1, 6), Piece::king(Color::Black)),
    ]);

    let shuttle = [
        (Color::Red, Coord::new(6, 1), Coord::new(5, 0)),
        (Color::Black, Coord::new(1, 6), Coord::new(2, 7)),
    ];

    for ply in 0..DRAW_MOVE_LIMIT {
        let (color, home, away) = shuttle[(ply % 2) as usize];
        assert!(!game.is_done(color));

        let (from, to) = if (ply / 2) % 2 == 0 { (home, away) } else { (away, home) };
        let root = game.piece_valid_moves(from, color).unwrap();
        let child = root.children.iter().position(|c| c.location == to).unwrap();
        game.execute_single_move(&root, child).unwrap();
    }

    assert_eq!(game.consecutive_non_jump_moves(), DRAW_MOVE_LIMIT);
    assert!(game.is_done(Color::Red));
    assert!(game.is_done(Color::Black));
    assert_eq!(game.winner(), None);
}

#[test]
fn stuck_side_loses() {
    // Black's only man is boxed in on the far edge.
    let mut game = position(2, &[
        ((4, 1), Piece::man(Color::Black)),
        ((5, 0), Piece::man(Color::Red)),
        ((5, 2), Piece::man(Color::Red)),
        ((2, 3), Piece::man(Color::Red)),
    ]);

    assert!(legal_moves(&game, Color::Black).is_empty());
    assert!(game.is_done(Color::Black));
    assert_eq!(game.winner(), Some(Color::Red));

    // Asking again does not overwrite the result.
    assert!(game.is_done(Color::Black));
    assert_eq!(game.winner(), Some(Color::Red));
}

#[test]
fn first_continuation_replays_identically() {
    let setup = [
        ((7, 2), Piece::man(Color::Red)),
        ((6, 3), Piece::man(Color::Black)),
        ((4, 3), Piece::man(Color::Black)),
        ((4, 5), Piece::man(Color::Black)),
    ];

    let mut a = position(3, &setup).with_chain_completion(ChainCompletion::First);
    let mut b = position(3, &setup).with_chain_completion(ChainCompletion::First);

    let root = a.piece_valid_moves(Coord::new(7, 2), Color::Red).unwrap();
    a.execute_single_move_rand(&root, 0).unwrap();
    b.execute_single_move_rand(&root, 0).unwrap();

    assert_eq!(a.board(), b.board());
    assert!(a.board().has_color(Coord::new(3, 2), Color::Red));
    assert_eq!(a.board().count_pieces(Color::Black), 1);
}

#[test]
fn bots_only_suggest_legal_pairs() {
    let kinds = [BotKind::Random, BotKind::Heuristic, BotKind::Smart(1)];

    for (i, kind) in kinds.into_iter().enumerate() {
        let mut game = Checkers::with_seed(2, i as u64).unwrap();
        let mut bots: Vec<Box<dyn Bot>> = vec![
            kind.build(Color::Red, 1),
            kind.build(Color::Black, 2),
        ];

        for ply in 0..60 {
            let bot = &mut bots[ply % 2];
            let color = bot.color();
            if game.is_done(color) {
                break;
            }

            let pick = bot.suggest_move(&game).unwrap();
            let legal = legal_moves(&game, color);
            let root = find_root(&legal, pick.origin()).unwrap();
            assert_eq!(root, pick.root());
            assert!(pick.child() < root.children.len());

            game.execute_single_move_rand(pick.root(), pick.child()).unwrap();
        }
    }
}
