use std::fmt;

/// Unique identifier for any actor tracked in the state.
///
/// Identifiers are handed out sequentially by [`super::EntitiesState`] and are
/// never reused within a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Discrete grid position expressed in tile coordinates.
///
/// `x` grows to the right and `y` grows downwards, matching the row-major
/// layout of the text map format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    pub fn manhattan_distance(self, other: Position) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the four grid directions, numbered like the movement keys
/// (`w`, `a`, `s`, `d` map to 0, 1, 2, 3).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CardinalDirection {
    /// Towards smaller `y`.
    North,
    /// Towards smaller `x`.
    West,
    /// Towards larger `y`.
    #[default]
    South,
    /// Towards larger `x`.
    East,
}

impl CardinalDirection {
    pub const ALL: [CardinalDirection; 4] = [
        CardinalDirection::North,
        CardinalDirection::West,
        CardinalDirection::South,
        CardinalDirection::East,
    ];

    pub const fn delta(self) -> (i32, i32) {
        match self {
            CardinalDirection::North => (0, -1),
            CardinalDirection::West => (-1, 0),
            CardinalDirection::South => (0, 1),
            CardinalDirection::East => (1, 0),
        }
    }

    pub const fn index(self) -> u8 {
        match self {
            CardinalDirection::North => 0,
            CardinalDirection::West => 1,
            CardinalDirection::South => 2,
            CardinalDirection::East => 3,
        }
    }

    /// Neighbour of `origin` in this direction.
    pub const fn step_from(self, origin: Position) -> Position {
        let (dx, dy) = self.delta();
        origin.offset(dx, dy)
    }
}

/// Rejected numeric direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DirectionError {
    #[error("direction {0} is outside 0..=3")]
    OutOfRange(u8),
}

impl crate::error::GameError for DirectionError {
    fn severity(&self) -> crate::error::ErrorSeverity {
        crate::error::ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        "DIRECTION_OUT_OF_RANGE"
    }
}

impl TryFrom<u8> for CardinalDirection {
    type Error = DirectionError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(CardinalDirection::North),
            1 => Ok(CardinalDirection::West),
            2 => Ok(CardinalDirection::South),
            3 => Ok(CardinalDirection::East),
            other => Err(DirectionError::OutOfRange(other)),
        }
    }
}

/// Integer resource meter (e.g., health) tracked per actor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ResourceMeter {
    pub current: u32,
    pub maximum: u32,
}

impl ResourceMeter {
    pub fn new(current: u32, maximum: u32) -> Self {
        Self { current, maximum }
    }

    /// Meter filled to its maximum.
    pub fn full(maximum: u32) -> Self {
        Self::new(maximum, maximum)
    }

    pub fn is_empty(&self) -> bool {
        self.current == 0
    }

    /// Removes up to `amount` from the meter, clamping at zero.
    ///
    /// Returns the amount actually removed.
    pub fn deplete(&mut self, amount: u32) -> u32 {
        let removed = amount.min(self.current);
        self.current -= removed;
        removed
    }
}
