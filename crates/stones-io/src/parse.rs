//! Parsing stone values.

use std::fs;
use std::path::Path;

use stones_core::Value;
use stones_engine::Histogram;

use crate::error::InputError;

/// Parse whitespace-delimited stone values.
///
/// Tokens must be plain ASCII digits that fit in a [`Value`]. A minus sign
/// is accepted only on zero (`-0` reads as `0`).
/// Any amount of whitespace, including newlines, separates tokens. Empty
/// input yields no values.
pub fn parse_values(source: &str) -> Result<Vec<Value>, InputError> {
    let mut values = Vec::new();
    for (idx, line) in source.lines().enumerate() {
        for token in line.split_ascii_whitespace() {
            values.push(parse_token(token, idx + 1)?);
        }
    }
    tracing::debug!(count = values.len(), "parsed stone values");
    Ok(values)
}

fn parse_token(token: &str, line: usize) -> Result<Value, InputError> {
    let is_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());

    if is_digits(token) {
        return token.parse().map_err(|_| InputError::Malformed {
            line,
            token: token.to_string(),
        });
    }
    match token.strip_prefix('-') {
        Some(rest) if is_digits(rest) && rest.bytes().all(|b| b == b'0') => Ok(0),
        Some(rest) if is_digits(rest) => Err(InputError::Negative {
            line,
            token: token.to_string(),
        }),
        _ => Err(InputError::Malformed {
            line,
            token: token.to_string(),
        }),
    }
}

/// Read and parse stone values from a file.
pub fn read_values(path: impl AsRef<Path>) -> Result<Vec<Value>, InputError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|e| InputError::Io {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_values(&source)
}

/// Count occurrences of each value.
pub fn tally(values: impl IntoIterator<Item = Value>) -> Histogram {
    values.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use stones_test_utils::fixtures::{SAMPLE_STONES, SAMPLE_TEXT};

    #[test]
    fn parses_sample() {
        assert_eq!(parse_values(SAMPLE_TEXT).unwrap(), SAMPLE_STONES.to_vec());
    }

    #[test]
    fn empty_input_is_empty() {
        assert_eq!(parse_values("").unwrap(), Vec::<Value>::new());
        assert_eq!(parse_values(" \n\t\n").unwrap(), Vec::<Value>::new());
    }

    #[test]
    fn any_whitespace_separates() {
        assert_eq!(parse_values("1\t2\n\n  3 \r\n4").unwrap(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn negative_reports_line() {
        assert_eq!(
            parse_values("1 2\n3 -4"),
            Err(InputError::Negative {
                line: 2,
                token: "-4".into()
            })
        );
    }

    #[test]
    fn negative_zero_reads_as_zero() {
        assert_eq!(parse_values("-0 -000 5").unwrap(), vec![0, 0, 5]);
        assert_eq!(
            parse_values("-01"),
            Err(InputError::Negative {
                line: 1,
                token: "-01".into()
            })
        );
    }

    #[test]
    fn malformed_tokens_are_rejected() {
        for bad in ["12a", "+5", "1.5", "-", "--3", "18446744073709551616"] {
            assert_eq!(
                parse_values(bad),
                Err(InputError::Malformed {
                    line: 1,
                    token: bad.into()
                }),
                "{bad}"
            );
        }
    }

    #[test]
    fn max_value_parses() {
        assert_eq!(parse_values("18446744073709551615").unwrap(), vec![u64::MAX]);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = read_values("/nonexistent/stones/input.txt").unwrap_err();
        assert!(matches!(err, InputError::Io { .. }), "{err}");
    }

    #[test]
    fn tally_merges_duplicates() {
        let h = tally(parse_values("7 7 7 0").unwrap());
        assert_eq!(h.get(7), 3);
        assert_eq!(h.get(0), 1);
        assert_eq!(h.total(), Ok(4));
    }
}
