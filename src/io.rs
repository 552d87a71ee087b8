//! Instance parsing and solution formatting.
//!
//! Wire format, unchanged from the original batch tool:
//! - input: a header line `N C`, then N lines of `value weight`;
//! - output: `"{value} {optimal}"` on the first line, then one `0 `/`1 `
//!   per item — each flag followed by a space, the last included — on the
//!   second.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::{Error, Result};
use crate::instance::{Instance, Item};
use crate::solver::Solution;

/// The exact algorithm always produces an optimal result, so the indicator
/// field of the output is a constant. It stays in the format for
/// compatibility with consumers of the original tool.
const OPTIMALITY_INDICATOR: u8 = 1;

/// Parse an instance from its textual form.
///
/// Tokens are read as one whitespace-separated stream, so line breaks and
/// spaces are interchangeable, as they were for the original reader. The
/// stream must contain exactly `2 + 2N` base-10 `u64` tokens; anything
/// else — non-integers, negatives, missing tokens, trailing data — is
/// rejected as [`Error::MalformedInput`] before the solver ever runs.
pub fn parse_instance(input: &str) -> Result<Instance> {
    let tokens: Vec<&str> = input.split_whitespace().collect();

    let parse_at = |index: usize, what: &str| -> Result<u64> {
        let token = *tokens.get(index).ok_or_else(|| Error::MalformedInput {
            token_index: index,
            reason: format!("missing {what}"),
        })?;
        token.parse::<u64>().map_err(|_| Error::MalformedInput {
            token_index: index,
            reason: format!("invalid {what} '{token}'"),
        })
    };

    let count = parse_at(0, "item count")?;
    let capacity = parse_at(1, "capacity")?;
    let count = usize::try_from(count).map_err(|_| Error::MalformedInput {
        token_index: 0,
        reason: format!("item count {count} is not addressable"),
    })?;

    let mut items = Vec::with_capacity(count.min(tokens.len() / 2));
    for i in 0..count {
        let value = parse_at(2 + 2 * i, "item value")?;
        let weight = parse_at(3 + 2 * i, "item weight")?;
        items.push(Item::new(value, weight));
    }

    let expected = 2 + 2 * count;
    if tokens.len() > expected {
        return Err(Error::MalformedInput {
            token_index: expected,
            reason: format!("trailing data '{}' after the item list", tokens[expected]),
        });
    }

    Ok(Instance::new(items, capacity))
}

/// Read and parse an instance from a file.
pub fn read_instance(path: &Path) -> Result<Instance> {
    let input = fs::read_to_string(path).map_err(|source| Error::InputUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    parse_instance(&input)
}

/// Write `solution` in the two-line output format.
pub fn write_solution<W: Write>(out: &mut W, solution: &Solution) -> std::io::Result<()> {
    writeln!(out, "{} {}", solution.value, OPTIMALITY_INDICATOR)?;
    for &taken in &solution.selected {
        write!(out, "{} ", u8::from(taken))?;
    }
    writeln!(out)
}

/// Format `solution` as a `String` in the two-line output format.
pub fn format_solution(solution: &Solution) -> String {
    let mut buf = Vec::new();
    write_solution(&mut buf, solution).expect("writes to a Vec are infallible");
    String::from_utf8(buf).expect("solution output is ASCII")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_documented_example() {
        let instance = parse_instance("4 5\n1 2\n2 3\n5 4\n6 5\n").unwrap();
        assert_eq!(instance.len(), 4);
        assert_eq!(instance.capacity(), 5);
        assert_eq!(instance.items()[2], Item::new(5, 4));
    }

    #[test]
    fn line_breaks_and_spaces_are_interchangeable() {
        let a = parse_instance("2 10\n3 4\n5 6\n").unwrap();
        let b = parse_instance("2 10 3 4 5 6").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn parses_an_empty_item_list() {
        let instance = parse_instance("0 7").unwrap();
        assert!(instance.is_empty());
        assert_eq!(instance.capacity(), 7);
    }

    #[test]
    fn rejects_negative_numbers() {
        let err = parse_instance("1 10\n-3 4\n").unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedInput { token_index: 2, .. }
        ));
    }

    #[test]
    fn rejects_non_numeric_tokens() {
        let err = parse_instance("one 10").unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedInput { token_index: 0, .. }
        ));
    }

    #[test]
    fn rejects_truncated_item_list() {
        let err = parse_instance("2 10\n3 4\n").unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedInput { token_index: 4, .. }
        ));
    }

    #[test]
    fn rejects_trailing_data() {
        let err = parse_instance("1 10\n3 4\n9\n").unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedInput { token_index: 4, .. }
        ));
    }

    #[test]
    fn rejects_empty_input() {
        assert!(parse_instance("").is_err());
        assert!(parse_instance("   \n  ").is_err());
    }

    #[test]
    fn formats_flags_with_trailing_space() {
        let solution = Solution {
            value: 6,
            selected: vec![false, false, false, true],
        };
        assert_eq!(format_solution(&solution), "6 1\n0 0 0 1 \n");
    }

    #[test]
    fn formats_an_empty_selection_as_a_bare_line() {
        let solution = Solution {
            value: 0,
            selected: Vec::new(),
        };
        assert_eq!(format_solution(&solution), "0 1\n\n");
    }
}
