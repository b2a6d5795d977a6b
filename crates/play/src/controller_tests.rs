use super::*;
use crate::config::PlaySide;

fn config(mode: Mode) -> PlayConfig {
    PlayConfig {
        mode,
        move_delay_ms: 0,
        ..Default::default()
    }
}

fn from_fen(mode: Mode, fen: &str) -> GameController {
    GameController::new(PlayConfig {
        start_fen: Some(fen.to_string()),
        ..config(mode)
    })
    .unwrap()
}

#[test]
fn test_command_parsing() {
    assert_eq!(Command::parse("  "), None);
    assert_eq!(Command::parse("undo"), Some(Command::Undo));
    assert_eq!(Command::parse("MOVES"), Some(Command::Moves));
    assert_eq!(Command::parse("quit\n"), Some(Command::Quit));
    assert_eq!(Command::parse("E2E4"), Some(Command::Move("e2e4".into())));
}

#[test]
fn test_status_wording() {
    let start = GameController::new(config(Mode::Human)).unwrap();
    assert_eq!(start.status_text(), "White to move");

    let check = from_fen(Mode::Human, "4k3/8/8/8/8/8/8/4R1K1 b - - 0 1");
    assert_eq!(check.status_text(), "Black to move, Black is in check");

    let mate = from_fen(
        Mode::Human,
        "r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 1",
    );
    assert_eq!(mate.status_text(), "Game over, Black is in checkmate.");

    let stalemate = from_fen(Mode::Human, "k7/2K5/1Q6/8/8/8/8/8 b - - 0 1");
    assert_eq!(stalemate.status_text(), "Game over, drawn position.");
}

#[test]
fn test_bad_start_fen_is_rejected() {
    let result = GameController::new(PlayConfig {
        start_fen: Some("not a fen".into()),
        ..config(Mode::Human)
    });
    assert!(result.is_err());
}

#[test]
fn test_human_game_alternates_and_undoes_one_move() {
    let mut ctl = GameController::new(config(Mode::Human)).unwrap();
    assert_eq!(ctl.computer_color(), None);
    ctl.human_move("e2e4").unwrap();
    ctl.human_move("e7e5").unwrap();
    assert!(!ctl.is_computer_turn());
    assert_eq!(ctl.computer_move(), None);

    let undone = ctl.undo().unwrap();
    assert_eq!(undone.len(), 1);
    assert_eq!(ctl.game().history_len(), 1);
    assert_eq!(ctl.status_text(), "Black to move");
}

#[test]
fn test_illegal_and_garbled_input() {
    let mut ctl = GameController::new(config(Mode::Human)).unwrap();
    assert_eq!(
        ctl.human_move("e2e5"),
        Err(PlayError::Move(MoveError::Illegal("e2e5".into())))
    );
    assert!(matches!(
        ctl.human_move("hello"),
        Err(PlayError::Move(MoveError::Unparsable(_)))
    ));
    assert_eq!(ctl.game().history_len(), 0);
}

#[test]
fn test_computer_replies_and_undo_takes_back_both() {
    let mut ctl = GameController::new(config(Mode::Computer)).unwrap();
    assert_eq!(ctl.computer_color(), Some(Color::Black));
    assert!(!ctl.is_computer_turn());

    ctl.human_move("e2e4").unwrap();
    assert!(ctl.is_computer_turn());
    let reply = ctl.computer_move().expect("engine has a reply");
    let moved = ctl.game().position().piece_at(reply.to).unwrap();
    assert_eq!(moved.color, Color::Black);
    assert_eq!(ctl.game().history_len(), 2);
    assert_eq!(ctl.status_text(), "White to move");

    let undone = ctl.undo().unwrap();
    assert_eq!(undone.len(), 2);
    assert_eq!(ctl.game(), &Game::new());
}

#[test]
fn test_human_cannot_move_for_the_computer() {
    let mut ctl = GameController::new(PlayConfig {
        computer_side: PlaySide::White,
        ..config(Mode::Computer)
    })
    .unwrap();
    assert_eq!(
        ctl.human_move("e2e4"),
        Err(PlayError::ComputerSide(Color::White))
    );
    assert!(ctl.computer_move().is_some());
    assert!(ctl.human_move("e7e5").is_ok());
}

#[test]
fn test_no_moves_after_game_over() {
    let mut ctl = from_fen(
        Mode::Computer,
        "r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 1",
    );
    assert!(!ctl.is_computer_turn());
    assert_eq!(ctl.computer_move(), None);
    assert_eq!(ctl.human_move("a7a6"), Err(PlayError::Move(MoveError::GameOver)));
}

#[test]
fn test_undo_with_empty_history() {
    let mut ctl = GameController::new(config(Mode::Computer)).unwrap();
    assert_eq!(ctl.undo(), Err(PlayError::Move(MoveError::NothingToUndo)));
}

#[test]
fn test_undo_after_mating_the_computer_keeps_human_turn() {
    // White mates with Qxf7; only that move is taken back.
    let mut ctl = from_fen(
        Mode::Computer,
        "r1bqkbnr/pppp1ppp/2n5/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 0 1",
    );
    ctl.human_move("h5f7").unwrap();
    assert_eq!(ctl.status_text(), "Game over, Black is in checkmate.");
    assert_eq!(ctl.undo().unwrap().len(), 1);
    assert_eq!(ctl.status_text(), "White to move");
}

#[test]
fn test_legal_moves_text() {
    let ctl = from_fen(Mode::Human, "7k/8/8/8/8/8/8/K7 w - - 0 1");
    let text = ctl.legal_moves_text();
    let mut listed: Vec<&str> = text.split(' ').collect();
    listed.sort_unstable();
    assert_eq!(listed, ["a1a2", "a1b1", "a1b2"]);
}

#[test]
fn test_scripted_session() {
    let mut ctl = GameController::new(config(Mode::Computer)).unwrap();
    let input = "e2e4\n\nmoves\nundo\nzzz\nquit\ne2e4\n".as_bytes();
    let mut out = Vec::new();
    ctl.run(input, &mut out).unwrap();
    let out = String::from_utf8(out).unwrap();

    assert!(out.contains("Computer plays "));
    assert!(out.contains("Took back "));
    assert!(out.contains("cannot read 'zzz' as a move"));
    assert!(out.contains("8 r n b q k b n r"));
    // Input after `quit` is never read.
    assert_eq!(ctl.game().history_len(), 0);
}

#[test]
fn test_computer_opens_as_white() {
    let mut ctl = GameController::new(PlayConfig {
        computer_side: PlaySide::White,
        ..config(Mode::Computer)
    })
    .unwrap();
    let mut out = Vec::new();
    ctl.run("quit\n".as_bytes(), &mut out).unwrap();
    let out = String::from_utf8(out).unwrap();
    assert!(out.starts_with("Computer plays b1c3"));
    assert_eq!(ctl.status_text(), "Black to move");
}
