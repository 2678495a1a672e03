//! Line-oriented parsing helpers that attach line numbers to errors

use std::str::FromStr;
use std::sync::LazyLock;

use anyhow::anyhow;
use aoc_solver::ParseError;
use regex::Regex;

static INTEGER: LazyLock<Result<Regex, regex::Error>> = LazyLock::new(|| Regex::new(r"-?\d+"));

/// Convert an `anyhow` error from a day's parser into the framework's type
pub fn invalid(err: anyhow::Error) -> ParseError {
    ParseError::InvalidFormat(format!("{err:#}"))
}

/// Parse every non-empty line with `f`, prefixing errors with `(line N)`.
pub fn parse_lines<'a, T>(
    input: &'a str,
    mut f: impl FnMut(&'a str) -> anyhow::Result<T>,
) -> Result<Vec<T>, ParseError> {
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| f(line.trim_end()).map_err(|e| anyhow!("(line {}) {:#}", idx + 1, e)))
        .collect::<anyhow::Result<Vec<_>>>()
        .map_err(invalid)
}

/// Every integer in `s`, in order; a `-` directly before digits is a sign.
///
/// ```
/// use aoc_solutions::utils::input::numbers;
///
/// assert_eq!(numbers::<i64>("p=0,4 v=3,-3").unwrap(), vec![0, 4, 3, -3]);
/// ```
pub fn numbers<T>(s: &str) -> anyhow::Result<Vec<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let pattern = INTEGER.as_ref().map_err(|e| anyhow!("{e}"))?;
    pattern
        .find_iter(s)
        .map(|m| {
            let token = m.as_str();
            token.parse().map_err(|e| anyhow!("bad number {token:?}: {e}"))
        })
        .collect()
}

/// Split on the first blank line
pub fn sections(input: &str) -> anyhow::Result<(&str, &str)> {
    let input = input.trim_start();
    input
        .split_once("\n\n")
        .or_else(|| input.split_once("\r\n\r\n"))
        .ok_or_else(|| anyhow!("expected two sections separated by a blank line"))
}
