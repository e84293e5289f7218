//! Reading levels from text.
//!
//! A level is one row of tile symbols per line. Blank lines are skipped, so
//! levels can be embedded in raw strings with surrounding newlines.

use std::path::Path;

use derive_more::{Display, Error, From};
use tracing::{debug, instrument};

use crate::core::{Board, BoardError, Tile};

#[derive(Debug, Display, Error, From)]
pub enum LevelError {
    #[display("could not read level: {_0}")]
    #[from]
    Io(std::io::Error),

    #[display("unknown tile symbol {symbol:?} at line {line}, column {column}")]
    UnknownSymbol {
        symbol: char,
        line: usize,
        column: usize,
    },

    #[display("{_0}")]
    #[from]
    Board(BoardError),
}

/// Turns level text into rows of tiles. Line and column numbers in errors
/// are 1-based and count blank lines.
pub fn parse_level(s: &str) -> Result<Vec<Vec<Tile>>, LevelError> {
    let mut rows = Vec::new();
    for (line_index, line) in s.lines().enumerate() {
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }

        let row = line
            .chars()
            .enumerate()
            .map(|(column_index, symbol)| {
                Tile::from_symbol(symbol).ok_or(LevelError::UnknownSymbol {
                    symbol,
                    line: line_index + 1,
                    column: column_index + 1,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        rows.push(row);
    }
    Ok(rows)
}

pub fn load_level(s: &str) -> Result<Board, LevelError> {
    let rows = parse_level(s)?;
    Ok(Board::create(rows)?)
}

#[instrument]
pub fn load_level_file(path: &Path) -> Result<Board, LevelError> {
    let contents = std::fs::read_to_string(path)?;
    let board = load_level(&contents)?;
    debug!(rows = board.height(), "level file parsed");
    Ok(board)
}
