use super::*;

#[test]
fn test_player_opponent() {
    assert_eq!(Player::Black.opponent(), Player::White);
    assert_eq!(Player::White.opponent(), Player::Black);
    assert_eq!(Player::Black.stone(), Stone::Black);
    assert_eq!(Stone::White.player(), Some(Player::White));
    assert_eq!(Stone::Empty.player(), None);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(3, 4);
    assert_eq!(pos.to_index(), 28);

    let pos2 = Pos::from_index(28);
    assert_eq!(pos2, pos);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(7, 7));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(8, 0));
    assert!(!Pos::is_valid(0, 8));

    assert_eq!(Pos::try_new(2, 3), Some(Pos::new(2, 3)));
    assert_eq!(Pos::try_new(8, 3), None);
    assert_eq!(Pos::try_new(-1, -1), None);
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 8);
    assert_eq!(TOTAL_CELLS, 64);
    assert_eq!(Pos::all().count(), 64);
}

#[test]
fn test_pos_ordering() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(0, 1);
    let pos3 = Pos::new(1, 0);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
}

#[test]
fn test_pos_step_and_rotation() {
    assert_eq!(Pos::new(0, 0).step(-1, 0), None);
    assert_eq!(Pos::new(0, 0).step(1, 1), Some(Pos::new(1, 1)));
    assert_eq!(Pos::new(0, 0).rotated_180(), Pos::new(7, 7));
    assert_eq!(Pos::new(2, 3).rotated_180(), Pos::new(5, 4));
    assert_eq!(Pos::new(2, 3).label(), "d3");
}

#[test]
fn test_initial_board() {
    let board = Board::new();
    assert_eq!(board.get(Pos::new(3, 3)), Stone::White);
    assert_eq!(board.get(Pos::new(3, 4)), Stone::Black);
    assert_eq!(board.get(Pos::new(4, 3)), Stone::Black);
    assert_eq!(board.get(Pos::new(4, 4)), Stone::White);
    assert_eq!(board.count(Player::Black), 2);
    assert_eq!(board.count(Player::White), 2);
    assert_eq!(board.stone_count(), 4);
}

#[test]
fn test_initial_board_is_rotation_symmetric() {
    let board = Board::new();
    assert_eq!(board.rotated_180(), board);
    assert_ne!(board.swapped_colours(), board);
    assert_eq!(board.swapped_colours().rotated_180(), board.swapped_colours());
}

#[test]
fn test_board_consistency() {
    assert!(Board::new().is_consistent());
    assert!(Board::empty().is_consistent());

    let mut board = Board::new();
    board.black.set(Pos::new(3, 3));
    assert!(!board.is_consistent());
}

#[test]
fn test_place_stone_replaces_colour() {
    let mut board = Board::new();
    board.place_stone(Pos::new(3, 3), Stone::Black);
    assert_eq!(board.get(Pos::new(3, 3)), Stone::Black);
    assert!(!board.white.get(Pos::new(3, 3)));
    assert_eq!(board.stone_count(), 4);
}

#[test]
fn test_board_text_round_trip() {
    let text = "\
        ........
        ........
        ........
        ...WB...
        ...BW...
        ........
        ........
        ........";
    let board: Board = text.parse().unwrap();
    assert_eq!(board, Board::new());
    assert_eq!(board.to_string().parse::<Board>().unwrap(), board);
}

#[test]
fn test_board_parse_alternate_characters() {
    let text = "\
        - - - - - - - -
        --------

        --------
        ---oX---
        ---xw---
        --------
        --------
        --------";
    assert_eq!(text.parse::<Board>(), Ok(Board::new()));
}

#[test]
fn test_board_parse_errors() {
    assert_eq!(
        "........".parse::<Board>(),
        Err(ParseBoardError::RowCount { expected: 8, found: 1 })
    );

    let short = "........\n".repeat(7) + ".......";
    assert_eq!(
        short.parse::<Board>(),
        Err(ParseBoardError::RowLength { row: 7, expected: 8, found: 7 })
    );

    let bad = "........\n".repeat(7) + "...?....";
    assert_eq!(
        bad.parse::<Board>(),
        Err(ParseBoardError::UnknownCell { row: 7, ch: '?' })
    );
}
