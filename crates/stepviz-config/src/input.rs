//! The input contract: validated problem instances for the sorting
//! family.
//!
//! User-typed text is parsed and validated here; the instrumentation
//! adapters only ever receive integer arrays of length 1..=16.

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Hard cap on problem size. Larger arrays don't animate legibly.
pub const MAX_ELEMENTS: usize = 16;

/// Smallest and largest generated values, inclusive.
const VALUE_RANGE: std::ops::RangeInclusive<i32> = 1..=20;

/// Rejected user input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    /// No values supplied.
    #[error("no values supplied")]
    Empty,

    /// A token failed to parse as an integer.
    #[error("bad input: {token:?} is not an integer")]
    BadToken { token: String },

    /// More values than the visualizer can animate.
    #[error("too many elements: {len} exceeds the maximum of {max}")]
    TooManyElements { len: usize, max: usize },
}

/// A problem instance for the sorting family: either a randomly
/// generated array of a given size, or user-supplied values.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ArraySpec {
    Random { size: usize },
    Custom { values: Vec<i32> },
}

impl ArraySpec {
    /// Number of elements the spec will produce.
    pub fn len(&self) -> usize {
        match self {
            ArraySpec::Random { size } => *size,
            ArraySpec::Custom { values } => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Enforces the 1..=[`MAX_ELEMENTS`] size contract.
    pub fn validate(&self) -> Result<(), InputError> {
        let len = self.len();
        if len == 0 {
            return Err(InputError::Empty);
        }
        if len > MAX_ELEMENTS {
            return Err(InputError::TooManyElements {
                len,
                max: MAX_ELEMENTS,
            });
        }
        Ok(())
    }
}

/// Parses a comma-separated custom array, e.g. `"3,1,2"`.
///
/// # Errors
///
/// Returns [`InputError`] for empty input, non-integer tokens, or more
/// than [`MAX_ELEMENTS`] values. Whitespace around tokens is accepted.
pub fn parse_custom_array(text: &str) -> Result<Vec<i32>, InputError> {
    if text.trim().is_empty() {
        return Err(InputError::Empty);
    }

    let tokens: Vec<&str> = text.split(',').collect();
    if tokens.len() > MAX_ELEMENTS {
        return Err(InputError::TooManyElements {
            len: tokens.len(),
            max: MAX_ELEMENTS,
        });
    }

    tokens
        .into_iter()
        .map(|token| {
            token.trim().parse::<i32>().map_err(|_| InputError::BadToken {
                token: token.trim().to_owned(),
            })
        })
        .collect()
}

/// Produces the concrete value array for a validated spec.
///
/// Random values are drawn uniformly from 1..=20.
pub fn materialize(spec: &ArraySpec, rng: &mut impl Rng) -> Result<Vec<i32>, InputError> {
    spec.validate()?;
    Ok(match spec {
        ArraySpec::Random { size } => (0..*size).map(|_| rng.random_range(VALUE_RANGE)).collect(),
        ArraySpec::Custom { values } => values.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn parses_plain_and_padded_tokens() {
        assert_eq!(parse_custom_array("3,1,2").unwrap(), vec![3, 1, 2]);
        assert_eq!(parse_custom_array(" 3 , -1 , 2 ").unwrap(), vec![3, -1, 2]);
    }

    #[test]
    fn rejects_bad_tokens() {
        assert_eq!(
            parse_custom_array("3,x,2"),
            Err(InputError::BadToken {
                token: "x".to_owned()
            })
        );
        assert!(parse_custom_array("3,,2").is_err());
    }

    #[test]
    fn rejects_empty_and_oversized_input() {
        assert_eq!(parse_custom_array("   "), Err(InputError::Empty));

        let too_long = (0..17).map(|i| i.to_string()).collect::<Vec<_>>().join(",");
        assert_eq!(
            parse_custom_array(&too_long),
            Err(InputError::TooManyElements { len: 17, max: 16 })
        );
    }

    #[test]
    fn validate_enforces_the_size_contract() {
        assert!(ArraySpec::Random { size: 1 }.validate().is_ok());
        assert!(ArraySpec::Random { size: 16 }.validate().is_ok());
        assert_eq!(
            ArraySpec::Random { size: 0 }.validate(),
            Err(InputError::Empty)
        );
        assert_eq!(
            ArraySpec::Random { size: 17 }.validate(),
            Err(InputError::TooManyElements { len: 17, max: 16 })
        );
    }

    #[test]
    fn materialize_random_respects_size_and_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let values = materialize(&ArraySpec::Random { size: 16 }, &mut rng).unwrap();
        assert_eq!(values.len(), 16);
        assert!(values.iter().all(|v| (1..=20).contains(v)));
    }

    #[test]
    fn materialize_is_reproducible_per_seed() {
        let spec = ArraySpec::Random { size: 8 };
        let a = materialize(&spec, &mut ChaCha8Rng::seed_from_u64(42)).unwrap();
        let b = materialize(&spec, &mut ChaCha8Rng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn materialize_custom_passes_values_through() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let spec = ArraySpec::Custom {
            values: vec![3, 1, 2],
        };
        assert_eq!(materialize(&spec, &mut rng).unwrap(), vec![3, 1, 2]);
    }
}
