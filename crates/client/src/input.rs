//! Input processing for the terminal client.
//!
//! This module owns the line-to-command mapping so the rest of the
//! application stays agnostic about concrete key bindings.

use game_core::{CardinalDirection, PlayerCommand, Position, TerrainKind};

/// High-level outcome of processing one input line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputAction {
    /// Exit the application.
    Quit,
    /// Hand the command to the engine.
    Submit(PlayerCommand),
    /// Replace the terrain of one tile.
    SetTerrain {
        position: Position,
        terrain: TerrainKind,
    },
    /// Write the current terrain to a map file; `None` keeps the loaded name.
    Save(Option<String>),
    Help,
    /// Blank line.
    None,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("unknown command `{0}` (try `help`)")]
    UnknownCommand(String),

    #[error("`{command}` needs {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("`{0}` is not a number")]
    InvalidNumber(String),

    #[error("unknown terrain id {0}")]
    UnknownTerrain(u8),
}

pub const HELP: &str = "\
w/a/s/d      step north/west/south/east
e            end turn
c <x> <y>    click a tile: attack an adjacent creature or walk there
t <x> <y> <id>  set the terrain of a tile (0-7)
save [name]  write the map
q            quit";

/// Converts a raw input line into a higher-level command.
pub fn parse_line(line: &str) -> Result<InputAction, InputError> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(InputAction::None);
    };

    let action = match head.to_ascii_lowercase().as_str() {
        "q" | "quit" => InputAction::Quit,
        "?" | "help" => InputAction::Help,
        "w" | "k" => movement(CardinalDirection::North),
        "a" | "h" => movement(CardinalDirection::West),
        "s" | "j" => movement(CardinalDirection::South),
        "d" | "l" => movement(CardinalDirection::East),
        "e" | "end" => InputAction::Submit(PlayerCommand::EndTurn),
        "c" | "click" => {
            let position = position(&mut words, "click")?;
            InputAction::Submit(PlayerCommand::Click(position))
        }
        "t" | "terrain" => {
            let position = position(&mut words, "terrain")?;
            let id: u8 = number(words.next(), "terrain", "a terrain id")?;
            let terrain = TerrainKind::from_id(id).ok_or(InputError::UnknownTerrain(id))?;
            InputAction::SetTerrain { position, terrain }
        }
        "save" => InputAction::Save(words.next().map(str::to_owned)),
        other => return Err(InputError::UnknownCommand(other.to_owned())),
    };
    Ok(action)
}

fn movement(direction: CardinalDirection) -> InputAction {
    InputAction::Submit(PlayerCommand::Step(direction))
}

fn position<'a>(
    words: &mut impl Iterator<Item = &'a str>,
    command: &'static str,
) -> Result<Position, InputError> {
    let x = number(words.next(), command, "x and y")?;
    let y = number(words.next(), command, "x and y")?;
    Ok(Position::new(x, y))
}

fn number<T: std::str::FromStr>(
    word: Option<&str>,
    command: &'static str,
    expected: &'static str,
) -> Result<T, InputError> {
    let word = word.ok_or(InputError::MissingArgument { command, expected })?;
    word.parse()
        .map_err(|_| InputError::InvalidNumber(word.to_owned()))
}
