//! Dice rolling for attribute generation.
//!
//! Supports the `XdY`, `XdY+Z`, and `XdY-Z` notations that appear in
//! attribute definitions (e.g. `3d6`).

use rand::Rng;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error type for dice parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiceError {
    #[error("invalid dice notation: {0}")]
    InvalidNotation(String),
    #[error("dice count must be at least 1 (in {0})")]
    ZeroCount(String),
    #[error("die must have at least one side (in {0})")]
    ZeroSides(String),
}

/// A parsed dice expression: `count` dice of `sides` sides plus a flat
/// modifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiceExpression {
    pub count: u32,
    pub sides: u32,
    pub modifier: i32,
    notation: String,
}

impl DiceExpression {
    /// Parse a dice notation string.
    pub fn parse(notation: &str) -> Result<Self, DiceError> {
        let invalid = || DiceError::InvalidNotation(notation.to_string());

        let trimmed = notation.trim().to_lowercase();
        let d_pos = trimmed.find('d').ok_or_else(invalid)?;

        let count_str = &trimmed[..d_pos];
        let count: u32 = if count_str.is_empty() {
            1
        } else {
            count_str.parse().map_err(|_| invalid())?
        };

        let rest = &trimmed[d_pos + 1..];
        let (sides_str, modifier) = match rest.find(['+', '-']) {
            Some(pos) => {
                let modifier: i32 = rest[pos..].parse().map_err(|_| invalid())?;
                (&rest[..pos], modifier)
            }
            None => (rest, 0),
        };
        let sides: u32 = sides_str.parse().map_err(|_| invalid())?;

        if count == 0 {
            return Err(DiceError::ZeroCount(notation.to_string()));
        }
        if sides == 0 {
            return Err(DiceError::ZeroSides(notation.to_string()));
        }

        Ok(Self {
            count,
            sides,
            modifier,
            notation: trimmed,
        })
    }

    /// Roll the expression with the thread-local RNG.
    pub fn roll(&self) -> i32 {
        self.roll_with_rng(&mut rand::thread_rng())
    }

    /// Roll with a specific RNG (useful for deterministic tests).
    pub fn roll_with_rng<R: Rng>(&self, rng: &mut R) -> i32 {
        let dice: i32 = (0..self.count)
            .map(|_| rng.gen_range(1..=self.sides) as i32)
            .sum();
        dice + self.modifier
    }

    /// Smallest possible roll.
    pub fn minimum(&self) -> i32 {
        self.count as i32 + self.modifier
    }

    /// Largest possible roll.
    pub fn maximum(&self) -> i32 {
        (self.count * self.sides) as i32 + self.modifier
    }
}

impl FromStr for DiceExpression {
    type Err = DiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for DiceExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.notation)
    }
}
