use crate::common::error::{FactorialError, Result};
use crate::common::types::{Evaluation, OverflowMode};

/// Largest `n` whose factorial is exactly representable in a `u64`.
pub const MAX_EXACT_INPUT: i32 = 20;

/// 66! is divisible by 2^64, so every wrapped factorial from here on is 0.
const WRAPS_TO_ZERO_FROM: i32 = 66;

/// Computes `n!` recursively, wrapping silently modulo 2^64 for `n > 20`.
///
/// # Panics
///
/// Panics if `n` is negative. Use [`evaluate`] or [`checked_factorial`] to
/// get an error instead.
pub fn factorial(n: i32) -> u64 {
    assert!(n >= 0, "factorial is undefined for negative n ({})", n);

    if n >= WRAPS_TO_ZERO_FROM {
        return 0;
    }
    if n == 0 {
        1
    } else {
        (n as u64).wrapping_mul(factorial(n - 1))
    }
}

/// Computes `n!`, failing instead of wrapping when it exceeds `u64::MAX`.
pub fn checked_factorial(n: i32) -> Result<u64> {
    if n < 0 {
        return Err(FactorialError::NegativeInput(n));
    }
    if n > MAX_EXACT_INPUT {
        return Err(FactorialError::Overflow(n));
    }
    if n == 0 {
        Ok(1)
    } else {
        Ok(n as u64 * checked_factorial(n - 1)?)
    }
}

pub fn evaluate(n: i32, mode: OverflowMode) -> Result<Evaluation> {
    if n < 0 {
        return Err(FactorialError::NegativeInput(n));
    }

    let evaluation = match mode {
        OverflowMode::Wrapping => Evaluation {
            n,
            value: factorial(n),
            wrapped: n > MAX_EXACT_INPUT,
        },
        OverflowMode::Checked => Evaluation {
            n,
            value: checked_factorial(n)?,
            wrapped: false,
        },
    };

    if evaluation.wrapped {
        tracing::warn!(n, value = evaluation.value, "result wrapped modulo 2^64");
    } else {
        tracing::debug!(n, value = evaluation.value, %mode, "computed factorial");
    }

    Ok(evaluation)
}
