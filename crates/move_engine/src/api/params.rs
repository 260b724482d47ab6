//! Coercion of loosely-typed caller input
//!
//! Search depth arrives from JSON clients as whatever they chose to send:
//! `3`, `3.0`, `"3"` or nothing at all. Everything is normalised here so the
//! search itself only ever sees a positive `u32`.

use crate::constants::DEFAULT_DEPTH;
use crate::error::{EngineError, EngineResult};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

fn invalid_depth(reason: impl Into<String>) -> EngineError {
    EngineError::InvalidParameter {
        name: "depth",
        reason: reason.into(),
    }
}

fn positive_depth(depth: i128) -> EngineResult<u32> {
    if depth <= 0 {
        return Err(invalid_depth(format!("must be positive, got {depth}")));
    }
    u32::try_from(depth).map_err(|_| invalid_depth(format!("{depth} is too large")))
}

/// Coerce a JSON value into a search depth
///
/// Accepts integers, finite floats (truncated toward zero) and strings holding
/// an integer. `null` yields `default`.
///
/// # Errors
///
/// Returns [`EngineError::InvalidParameter`] for any other JSON type, for
/// strings that are not integers, and for values that are not positive after
/// coercion.
///
/// # Examples
///
/// ```rust
/// use move_engine::api::parse_depth;
/// use serde_json::json;
///
/// assert_eq!(parse_depth(&json!(4), 3).unwrap(), 4);
/// assert_eq!(parse_depth(&json!("2"), 3).unwrap(), 2);
/// assert_eq!(parse_depth(&json!(null), 3).unwrap(), 3);
/// assert!(parse_depth(&json!(0), 3).is_err());
/// ```
pub fn parse_depth(value: &Value, default: u32) -> EngineResult<u32> {
    match value {
        Value::Null => Ok(default),
        Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                positive_depth(int.into())
            } else if let Some(int) = number.as_u64() {
                positive_depth(int.into())
            } else {
                let float = number
                    .as_f64()
                    .filter(|f| f.is_finite())
                    .ok_or_else(|| invalid_depth(format!("{number} is not a finite number")))?;
                let truncated = float.trunc();
                if truncated > u32::MAX as f64 {
                    return Err(invalid_depth(format!("{number} is too large")));
                }
                positive_depth(truncated as i128)
            }
        }
        Value::String(text) => {
            let int: i128 = text
                .trim()
                .parse()
                .map_err(|_| invalid_depth(format!("'{text}' is not an integer")))?;
            positive_depth(int)
        }
        other => Err(invalid_depth(format!("unsupported value {other}"))),
    }
}

/// [`parse_depth`] for an optional value, with the standard default depth
pub fn depth_or_default(value: Option<&Value>) -> EngineResult<u32> {
    value.map_or(Ok(DEFAULT_DEPTH), |v| parse_depth(v, DEFAULT_DEPTH))
}

/// Named strength levels offered to players
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Search depth used for this level
    pub fn depth(self) -> u32 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 3,
            Difficulty::Hard => 5,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        f.write_str(name)
    }
}

impl FromStr for Difficulty {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(EngineError::InvalidParameter {
                name: "level",
                reason: format!("unknown level '{s}', expected easy, medium or hard"),
            }),
        }
    }
}
