//! Reads and writes the plain-text level format.
//!
//! A level file starts with the height and width as whitespace separated
//! integers, followed by `height * width` tile symbols in row-major order.
//! Whitespace between symbols is optional. `@` marks the player spawn and
//! `G` an enemy spawn; both are stored as floor.

use std::fmt::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;
use crate::core::{Cell, Direction, Enemy, Grid, LevelState, Vec2};

pub const PLAYER_MARKER: char = '@';
pub const ENEMY_MARKER: char = 'G';

#[derive(Debug, Error)]
pub enum LevelError {
    #[error("could not read level file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("level is missing its {0}")]
    MissingDimension(&'static str),
    #[error("level {name} `{value}` is not a positive integer")]
    InvalidDimension { name: &'static str, value: String },
    #[error("level declares {expected} tiles but contains {found}")]
    TileCountMismatch { expected: usize, found: usize },
    #[error("unknown tile `{symbol}` at index {index}")]
    UnknownTile { index: usize, symbol: char },
    #[error("level has no player spawn `@`")]
    MissingPlayer,
    #[error("level has a second player spawn at index {index}")]
    MultiplePlayers { index: usize },
}

pub fn load_level(path: &Path) -> Result<LevelState, LevelError> {
    let text = std::fs::read_to_string(path).map_err(|source| LevelError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let level = parse_level(&text)?;
    info!(
        path = %path.display(),
        height = level.height(),
        width = level.width(),
        player = ?level.player,
        enemies = level.enemies.len(),
        "level loaded"
    );
    Ok(level)
}

pub fn parse_level(s: &str) -> Result<LevelState, LevelError> {
    let (height, rest) = next_dimension(s, "height")?;
    let (width, rest) = next_dimension(rest, "width")?;

    let expected = height as usize * width as usize;
    let symbols: Vec<char> = rest.chars().filter(|c| !c.is_whitespace()).collect();
    if symbols.len() != expected {
        return Err(LevelError::TileCountMismatch { expected, found: symbols.len() });
    }

    let mut cells = Vec::with_capacity(expected);
    let mut player = None;
    let mut enemies = Vec::new();
    for (index, &symbol) in symbols.iter().enumerate() {
        let position = Vec2 {
            x: (index % width as usize) as i32,
            y: (index / width as usize) as i32,
        };
        let cell = match symbol {
            PLAYER_MARKER => {
                if player.replace(position).is_some() {
                    return Err(LevelError::MultiplePlayers { index });
                }
                Cell::Floor
            }
            ENEMY_MARKER => {
                enemies.push(Enemy { position, facing: Direction::Down });
                Cell::Floor
            }
            _ => Cell::from_symbol(symbol).ok_or(LevelError::UnknownTile { index, symbol })?,
        };
        cells.push(cell);
    }

    let player = player.ok_or(LevelError::MissingPlayer)?;
    Ok(LevelState {
        grid: Grid::from_cells(width, height, cells),
        player,
        player_facing: Direction::Down,
        enemies,
    })
}

fn next_dimension<'a>(s: &'a str, name: &'static str) -> Result<(i32, &'a str), LevelError> {
    let s = s.trim_start();
    if s.is_empty() {
        return Err(LevelError::MissingDimension(name));
    }
    let end = s.find(char::is_whitespace).unwrap_or(s.len());
    let (token, rest) = s.split_at(end);
    match token.parse::<i32>() {
        Ok(value) if value > 0 => Ok((value, rest)),
        _ => Err(LevelError::InvalidDimension { name, value: token.to_string() }),
    }
}

/// Writes the level back out, markers placed at the actors' current cells.
/// The player marker wins when an enemy shares its cell.
pub fn serialize_level(level: &LevelState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} {}", level.height(), level.width());
    for y in 0..level.height() {
        let row: Vec<String> = (0..level.width())
            .map(|x| {
                let pos = Vec2 { x, y };
                let symbol = if pos == level.player {
                    PLAYER_MARKER
                } else if level.has_enemy_at(&pos) {
                    ENEMY_MARKER
                } else {
                    level.grid.tile_at(&pos).symbol()
                };
                symbol.to_string()
            })
            .collect();
        let _ = writeln!(out, "{}", row.join(" "));
    }
    out
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_spaced_and_compact_layouts_the_same() {
        let spaced = parse_level("2 3\n# @ A\nG a 1\n").unwrap();
        let compact = parse_level("2 3 #@AGa1").unwrap();
        assert_eq!(spaced, compact);
    }

    #[test]
    fn markers_become_floor_and_spawn_actors() {
        let level = parse_level("2 3 # @ A G a 1").unwrap();

        assert_eq!(level.player, Vec2 { x: 1, y: 0 });
        assert_eq!(level.enemies, vec![Enemy { position: Vec2 { x: 0, y: 1 }, facing: Direction::Down }]);
        assert_eq!(level.grid.tile_at(&Vec2 { x: 1, y: 0 }), Cell::Floor);
        assert_eq!(level.grid.tile_at(&Vec2 { x: 0, y: 1 }), Cell::Floor);
        assert_eq!(level.grid.tile_at(&Vec2 { x: 2, y: 0 }), Cell::BoxOnFloor);
        assert_eq!(level.grid.tile_at(&Vec2 { x: 2, y: 1 }), Cell::BoxOnTarget);
    }

    #[test]
    fn rejects_malformed_levels() {
        assert!(matches!(parse_level(""), Err(LevelError::MissingDimension("height"))));
        assert!(matches!(parse_level("3"), Err(LevelError::MissingDimension("width"))));
        assert!(matches!(parse_level("x 3 @"), Err(LevelError::InvalidDimension { name: "height", .. })));
        assert!(matches!(parse_level("1 0"), Err(LevelError::InvalidDimension { name: "width", .. })));
        assert!(matches!(
            parse_level("1 3 @ ."),
            Err(LevelError::TileCountMismatch { expected: 3, found: 2 })
        ));
        assert!(matches!(
            parse_level("1 3 @ . ?"),
            Err(LevelError::UnknownTile { index: 2, symbol: '?' })
        ));
        assert!(matches!(parse_level("1 3 . . ."), Err(LevelError::MissingPlayer)));
        assert!(matches!(parse_level("1 3 @ . @"), Err(LevelError::MultiplePlayers { index: 2 })));
    }

    #[test]
    fn serialize_then_parse_restores_level() {
        let text = "3 4\n# # # #\n# @ A a\nG . 1 #\n";
        let level = parse_level(text).unwrap();
        let written = serialize_level(&level);

        assert_eq!(written, text);
        assert_eq!(parse_level(&written).unwrap(), level);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_level(Path::new("does/not/exist.txt")).unwrap_err();
        assert!(matches!(err, LevelError::Io { .. }));
    }
}
