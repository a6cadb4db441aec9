use std::io::{BufRead, Write};
use std::num::IntErrorKind;

use crate::common::error::{FactorialError, Result};
use crate::common::{Config, Evaluation};
use crate::math;

/// Parses the first whitespace-separated token of `line` as the requested `n`.
pub fn parse_input(line: &str) -> Result<i32> {
    let token = line
        .split_whitespace()
        .next()
        .ok_or_else(|| FactorialError::InvalidInput("no integer entered".to_string()))?;

    token.parse::<i32>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            FactorialError::OutOfRange(token.to_string())
        }
        _ => FactorialError::InvalidInput(format!("'{}' is not an integer", token)),
    })
}

/// Prompts once, reads one integer and prints its factorial.
pub fn run_prompt<R, W>(input: &mut R, output: &mut W, config: &Config) -> Result<Evaluation>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{}", config.prompt.text)?;
    output.flush()?;

    // Blank lines are skipped like any other leading whitespace
    let mut line = String::new();
    while line.trim().is_empty() {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(FactorialError::InvalidInput("no integer entered".to_string()));
        }
    }

    let n = parse_input(&line)?;
    let evaluation = math::evaluate(n, config.compute.overflow)?;
    writeln!(output, "{}", evaluation)?;

    Ok(evaluation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::OverflowMode;
    use std::io::Cursor;

    fn run(input: &str, config: &Config) -> (Result<Evaluation>, String) {
        let mut reader = Cursor::new(input.as_bytes().to_vec());
        let mut output = Vec::new();
        let result = run_prompt(&mut reader, &mut output, config);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_prompt_prints_result_line() {
        let (result, output) = run("5\n", &Config::default());
        assert_eq!(result.unwrap().value, 120);
        assert_eq!(output, "Enter a positive integer: Factorial of 5 = 120\n");
    }

    #[test]
    fn test_prompt_accepts_surrounding_whitespace() {
        let (result, output) = run("   10   \n", &Config::default());
        assert_eq!(result.unwrap().value, 3_628_800);
        assert!(output.ends_with("Factorial of 10 = 3628800\n"));
    }

    #[test]
    fn test_prompt_skips_blank_lines() {
        let (result, output) = run("\n  \n\t\n7\n", &Config::default());
        assert_eq!(result.unwrap().value, 5040);
        assert_eq!(output, "Enter a positive integer: Factorial of 7 = 5040\n");
    }

    #[test]
    fn test_prompt_blank_lines_then_eof() {
        let (result, _) = run("\n\n", &Config::default());
        assert!(matches!(result, Err(FactorialError::InvalidInput(_))));
    }

    #[test]
    fn test_prompt_uses_configured_text() {
        let mut config = Config::default();
        config.prompt.text = "n = ".to_string();
        let (_, output) = run("0", &config);
        assert_eq!(output, "n = Factorial of 0 = 1\n");
    }

    #[test]
    fn test_prompt_rejects_garbage() {
        let (result, output) = run("abc\n", &Config::default());
        assert!(matches!(result, Err(FactorialError::InvalidInput(_))));
        assert_eq!(output, "Enter a positive integer: ");
    }

    #[test]
    fn test_prompt_rejects_empty_input() {
        let (result, _) = run("", &Config::default());
        assert!(matches!(result, Err(FactorialError::InvalidInput(_))));
    }

    #[test]
    fn test_prompt_rejects_negative() {
        let (result, _) = run("-4\n", &Config::default());
        assert!(matches!(result, Err(FactorialError::NegativeInput(-4))));
    }

    #[test]
    fn test_prompt_checked_mode() {
        let mut config = Config::default();
        config.compute.overflow = OverflowMode::Checked;
        let (result, _) = run("21\n", &config);
        assert!(matches!(result, Err(FactorialError::Overflow(21))));
    }

    #[test]
    fn test_parse_input_out_of_range() {
        assert!(matches!(parse_input("99999999999"), Err(FactorialError::OutOfRange(_))));
        assert_eq!(parse_input("7 8 9").unwrap(), 7);
        assert_eq!(parse_input("+3").unwrap(), 3);
    }
}
