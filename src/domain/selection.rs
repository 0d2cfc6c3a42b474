use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the two columns of a split diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn other(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Side::Left => "left",
            Side::Right => "right",
        };
        write!(f, "{s}")
    }
}

impl FromStr for Side {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "left" | "l" => Ok(Side::Left),
            "right" | "r" => Ok(Side::Right),
            _ => Err(format!("Invalid side: {s}")),
        }
    }
}

/// Which column may currently be text-selected. Exactly one side is enabled
/// at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
    LeftEnabled,
    #[default]
    RightEnabled,
}

impl SelectionMode {
    pub fn for_side(side: Side) -> Self {
        match side {
            Side::Left => SelectionMode::LeftEnabled,
            Side::Right => SelectionMode::RightEnabled,
        }
    }

    pub fn enabled(self) -> Side {
        match self {
            SelectionMode::LeftEnabled => Side::Left,
            SelectionMode::RightEnabled => Side::Right,
        }
    }

    pub fn allows(self, side: Side) -> bool {
        self.enabled() == side
    }
}
