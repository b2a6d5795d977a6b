use super::*;

#[test]
fn test_startpos_moves() {
    let pos = Position::startpos();
    let moves = legal_moves(&pos);
    // Starting position has 20 legal moves
    assert_eq!(moves.len(), 20);
}

#[test]
fn test_kiwipete_moves() {
    // Kiwipete position - complex with many move types
    let pos =
        Position::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -")
            .unwrap();
    let moves = legal_moves(&pos);
    assert_eq!(moves.len(), 48);
}

#[test]
fn test_enumeration_order_starts_with_queenside_knight() {
    let moves = legal_moves(&Position::startpos());
    assert_eq!(moves[0], Move::new(1, 18)); // b1c3
    assert_eq!(moves[1], Move::new(1, 16)); // b1a3
}

#[test]
fn test_legal_moves_into_restores_position() {
    let mut pos =
        Position::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -")
            .unwrap();
    let before = pos.clone();
    let mut buf = Vec::new();
    legal_moves_into(&mut pos, &mut buf);
    assert_eq!(pos, before);
}

#[test]
fn test_promotions_generate_four_moves() {
    let pos = Position::from_fen("8/P6k/8/8/8/8/8/K7 w - - 0 1").unwrap();
    let promos: Vec<_> = legal_moves(&pos)
        .into_iter()
        .filter(|m| m.promo.is_some())
        .collect();
    assert_eq!(promos.len(), 4);
}

#[test]
fn test_no_moves_when_checkmated() {
    let mut pos =
        Position::from_fen("r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 1")
            .unwrap();
    assert!(!has_legal_move(&mut pos));
    assert!(pos.in_check(Color::Black));
}
