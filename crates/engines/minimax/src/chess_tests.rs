use super::*;
use crate::eval::evaluate_board;
use crate::score::Score;

#[test]
fn test_snapshot_orientation() {
    let game = Game::new();
    let grid = RulesEngine::snapshot_board(&game);
    // Row 0 is rank 8: Black's back rank, a-file first.
    assert_eq!(
        grid[0][0],
        Some(SnapshotPiece::new(PieceType::Rook, Side::Black))
    );
    assert_eq!(
        grid[0][4],
        Some(SnapshotPiece::new(PieceType::King, Side::Black))
    );
    assert_eq!(
        grid[6][3],
        Some(SnapshotPiece::new(PieceType::Pawn, Side::White))
    );
    assert_eq!(
        grid[7][3],
        Some(SnapshotPiece::new(PieceType::Queen, Side::White))
    );
    assert!(grid[2..6].iter().all(|row| row.iter().all(Option::is_none)));
}

#[test]
fn test_start_position_is_balanced() {
    let game = Game::new();
    assert_eq!(evaluate_board(&RulesEngine::snapshot_board(&game)), Score::ZERO);
}

#[test]
fn test_material_edge_is_white_positive() {
    // White is a queen up.
    let game = Game::from_fen("4k3/8/8/8/8/8/8/3QK3 b - - 0 1").unwrap();
    assert_eq!(evaluate_board(&RulesEngine::snapshot_board(&game)), Score(90));
    assert_eq!(RulesEngine::side_to_move(&game), Side::Black);
}

#[test]
fn test_apply_and_undo_round_trip() {
    let mut game = Game::new();
    let before = game.clone();
    let moves = RulesEngine::legal_moves(&mut game);
    for mv in &moves {
        game.apply_move(mv);
        RulesEngine::undo_move(&mut game);
        assert_eq!(game, before);
    }
}

#[test]
fn test_terminal_includes_rule_draws() {
    let mut fifty = Game::from_fen("8/8/8/4k3/8/3K4/R7/8 w - - 100 60").unwrap();
    assert!(!RulesEngine::legal_moves(&mut fifty).is_empty());
    assert!(fifty.is_terminal());

    let mut mated =
        Game::from_fen("r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 1")
            .unwrap();
    assert!(mated.is_terminal());
}

#[test]
#[should_panic(expected = "no move left to take back")]
fn test_unpaired_undo_is_fatal() {
    let mut game = Game::new();
    RulesEngine::undo_move(&mut game);
}
