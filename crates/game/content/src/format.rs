//! Plain-text map format.
//!
//! One line per row (`y`), terrain ids separated by single spaces per column
//! (`x`). A final newline is optional; any other whitespace is rejected, as
//! are ragged rows and ids outside the terrain catalogue.

use game_core::{GridMap, MapDimensions, TerrainKind};

/// Why a map text was rejected. Lines and columns are 1-based; a column
/// counts tokens, not characters.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MapFormatError {
    #[error("map is empty")]
    Empty,

    #[error("line {line} is empty")]
    EmptyRow { line: usize },

    #[error("line {line}, column {column}: stray whitespace")]
    StrayWhitespace { line: usize, column: usize },

    #[error("line {line}, column {column}: `{token}` is not a terrain id")]
    InvalidToken {
        line: usize,
        column: usize,
        token: String,
    },

    #[error("line {line}, column {column}: unknown terrain id {id} (max {max})", max = TerrainKind::MAX_ID)]
    UnknownTerrain { line: usize, column: usize, id: u8 },

    #[error("line {line} has {found} columns, expected {expected}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },
}

impl game_core::GameError for MapFormatError {
    fn severity(&self) -> game_core::ErrorSeverity {
        game_core::ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            MapFormatError::Empty => "MAP_EMPTY",
            MapFormatError::EmptyRow { .. } => "MAP_EMPTY_ROW",
            MapFormatError::StrayWhitespace { .. } => "MAP_STRAY_WHITESPACE",
            MapFormatError::InvalidToken { .. } => "MAP_INVALID_TOKEN",
            MapFormatError::UnknownTerrain { .. } => "MAP_UNKNOWN_TERRAIN",
            MapFormatError::RaggedRow { .. } => "MAP_RAGGED_ROW",
        }
    }
}

/// Canonical decimal id: ASCII digits only, no sign and no leading zero.
fn parse_id(token: &str) -> Option<u8> {
    let canonical = token.bytes().all(|b| b.is_ascii_digit())
        && !(token.len() > 1 && token.starts_with('0'));
    canonical.then(|| token.parse().ok()).flatten()
}

/// Parses map text into a grid whose dimensions come from the text.
pub fn parse_map(text: &str) -> Result<GridMap, MapFormatError> {
    let body = text.strip_suffix('\n').unwrap_or(text);
    if body.is_empty() {
        return Err(MapFormatError::Empty);
    }

    let mut width = None;
    let mut height = 0usize;
    let mut terrain = Vec::new();
    for (row, line) in body.split('\n').enumerate() {
        let line_number = row + 1;
        if line.is_empty() {
            return Err(MapFormatError::EmptyRow { line: line_number });
        }

        let mut columns = 0usize;
        for (index, token) in line.split(' ').enumerate() {
            let column = index + 1;
            if token.is_empty() || token.contains(char::is_whitespace) {
                return Err(MapFormatError::StrayWhitespace {
                    line: line_number,
                    column,
                });
            }
            let id = parse_id(token).ok_or_else(|| MapFormatError::InvalidToken {
                line: line_number,
                column,
                token: token.to_owned(),
            })?;
            let kind = TerrainKind::from_id(id).ok_or(MapFormatError::UnknownTerrain {
                line: line_number,
                column,
                id,
            })?;
            terrain.push(kind);
            columns += 1;
        }

        match width {
            None => width = Some(columns),
            Some(expected) if expected != columns => {
                return Err(MapFormatError::RaggedRow {
                    line: line_number,
                    expected,
                    found: columns,
                });
            }
            Some(_) => {}
        }
        height += 1;
    }

    let dimensions = MapDimensions::new(width.unwrap_or(0) as u32, height as u32);
    // Row lengths were checked above, so the sizes always agree.
    GridMap::from_terrain(dimensions, terrain).map_err(|_| MapFormatError::Empty)
}

/// Writes the terrain of `map` in the text format, without a final newline.
pub fn render_map(map: &GridMap) -> String {
    map.rows()
        .map(|row| {
            row.iter()
                .map(|tile| tile.terrain().id().to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
