use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::FactorialError;

/// How results that do not fit in a `u64` are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverflowMode {
    /// Multiply modulo 2^64 and report whatever comes out.
    #[default]
    Wrapping,
    /// Refuse inputs whose factorial exceeds `u64::MAX`.
    Checked,
}

impl FromStr for OverflowMode {
    type Err = FactorialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "wrapping" => Ok(OverflowMode::Wrapping),
            "checked" => Ok(OverflowMode::Checked),
            other => Err(FactorialError::InvalidInput(format!(
                "unknown overflow mode '{}' (expected wrapping or checked)",
                other
            ))),
        }
    }
}

impl std::fmt::Display for OverflowMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OverflowMode::Wrapping => write!(f, "wrapping"),
            OverflowMode::Checked => write!(f, "checked"),
        }
    }
}

/// One computed factorial, printed as the program's result line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub n: i32,
    pub value: u64,
    /// True when `value` is the wrapped remainder rather than the exact `n!`.
    pub wrapped: bool,
}

impl std::fmt::Display for Evaluation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Factorial of {} = {}", self.n, self.value)
    }
}
