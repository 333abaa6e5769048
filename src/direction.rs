use std::fmt;

/// One of the four spatial movement directions.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        write!(f, "{}", s)
    }
}

/// A logical command produced by the keymap. Movement commands trigger a
/// directional search; `Enter` activates the focused element and never moves
/// focus.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Enter,
}
