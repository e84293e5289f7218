use crate::core::Tile::*;
use crate::level::{LevelError, load_level, load_level_file, parse_level};

#[test]
fn parses_every_symbol() {
    let rows = parse_level("#@o .*+").unwrap();
    assert_eq!(rows, vec![vec![Wall, Man, Crate, Floor, Storage, CrateOnStorage, ManOnStorage]]);
}

#[test]
fn blank_lines_and_carriage_returns_are_skipped() {
    let rows = parse_level("\n\n###\r\n#@#\r\n\n###\n\n").unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[1], vec![Wall, Man, Wall]);
}

#[test]
fn unknown_symbols_are_rejected_with_position() {
    let err = parse_level("\n####\n#@$.\n####").unwrap_err();
    match err {
        LevelError::UnknownSymbol { symbol, line, column } => {
            assert_eq!(symbol, '$');
            assert_eq!(line, 3);
            assert_eq!(column, 3);
        }
        other => panic!("expected an unknown symbol error, got {:?}", other),
    }
}

#[test]
fn board_errors_pass_through_loading() {
    let err = load_level("####\n#@o.").unwrap_err();
    assert_eq!(err.to_string(), "invalid board: too few rows");
}

#[test]
fn missing_file_is_an_io_error() {
    let path = std::env::temp_dir().join("sokoban_quiz_missing_level_file.txt");
    let err = load_level_file(&path).unwrap_err();
    assert!(matches!(err, LevelError::Io(_)), "unexpected error {:?}", err);
}

#[test]
fn level_file_is_loaded() {
    let path = std::env::temp_dir().join(format!("sokoban_quiz_level_{}.txt", std::process::id()));
    std::fs::write(&path, "####\n#@o.\n####\n").unwrap();
    let board = load_level_file(&path);
    std::fs::remove_file(&path).unwrap();

    let board = board.unwrap();
    assert_eq!(board.to_string(), "####\n#@o.\n####");
    assert!(!board.is_complete());
}
