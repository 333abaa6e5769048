use crate::{Direction, Error, Result};

/// A single direction override: either suppress movement entirely, or
/// redirect it to a named target. Targets are selector-like references and
/// are only resolved when the override is exercised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Override {
    /// Movement in this direction is suppressed.
    Skip,
    /// Movement in this direction goes directly to the referenced element.
    Target(String),
}

/// The per-element direction override mapping, parsed once at registration
/// time from the override attribute.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Overrides {
    up: Option<Override>,
    right: Option<Override>,
    down: Option<Override>,
    left: Option<Override>,
}

/// The literal token meaning "no override for this direction".
const NONE_TOKEN: &str = "null";

/// The literal token meaning "suppress movement in this direction".
const SKIP_TOKEN: &str = "skip";

impl Overrides {
    /// Parse an override attribute value. The attribute holds four
    /// space-separated tokens for up, right, down and left, in that fixed
    /// order. Each token is either `null` (no override), `skip`
    /// (suppression), or a target reference.
    pub fn parse(attr: &str) -> Result<Self> {
        let tokens: Vec<&str> = attr.split_whitespace().collect();
        if tokens.len() != 4 {
            return Err(Error::Parse(format!(
                "override attribute needs 4 tokens, got {}: {:?}",
                tokens.len(),
                attr
            )));
        }
        Ok(Overrides {
            up: Self::token(tokens[0]),
            right: Self::token(tokens[1]),
            down: Self::token(tokens[2]),
            left: Self::token(tokens[3]),
        })
    }

    fn token(t: &str) -> Option<Override> {
        match t {
            NONE_TOKEN => None,
            SKIP_TOKEN => Some(Override::Skip),
            target => Some(Override::Target(target.to_string())),
        }
    }

    /// The override recorded for a direction, if any.
    pub fn get(&self, d: Direction) -> Option<&Override> {
        match d {
            Direction::Up => self.up.as_ref(),
            Direction::Right => self.right.as_ref(),
            Direction::Down => self.down.as_ref(),
            Direction::Left => self.left.as_ref(),
        }
    }

    /// True if no direction has an override.
    pub fn is_empty(&self) -> bool {
        self.up.is_none() && self.right.is_none() && self.down.is_none() && self.left.is_none()
    }
}
