use crate::core::utils::identifiers::sequence_ordinal;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceIdError {
    #[error("Sequence identifier is empty")]
    Empty,
    #[error("Invalid residue number '{0}'")]
    InvalidNumber(String),
}

/// A residue sequence identifier: the residue number plus an optional insertion code.
///
/// Two identifiers are equal only when both the number and the insertion code match,
/// which is what residue grouping relies on. Range tests go through [`ordinal`](Self::ordinal)
/// instead, so that `10A` falls between `10` and `11`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SequenceId {
    pub number: i32,
    pub insertion_code: Option<char>,
}

impl SequenceId {
    pub fn new(number: i32, insertion_code: Option<char>) -> Self {
        Self {
            number,
            insertion_code,
        }
    }

    /// Builds an identifier from the separate number and insertion-code columns of a
    /// record. Both inputs are trimmed; a blank insertion code means none.
    pub fn from_fields(number: &str, insertion_code: &str) -> Result<Self, SequenceIdError> {
        let number = number.trim();
        if number.is_empty() {
            return Err(SequenceIdError::Empty);
        }
        let parsed = number
            .parse()
            .map_err(|_| SequenceIdError::InvalidNumber(number.to_string()))?;
        Ok(Self::new(parsed, insertion_code.trim().chars().next()))
    }

    pub fn has_insertion_code(&self) -> bool {
        self.insertion_code.is_some()
    }

    pub fn ordinal(&self) -> f64 {
        sequence_ordinal(self.number, self.insertion_code)
    }
}

impl fmt::Display for SequenceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number)?;
        if let Some(code) = self.insertion_code {
            write!(f, "{}", code)?;
        }
        Ok(())
    }
}

impl FromStr for SequenceId {
    type Err = SequenceIdError;

    /// Parses the combined text form, e.g. `"42"` or `"42A"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.chars().next_back() {
            None => Err(SequenceIdError::Empty),
            Some(last) if last.is_ascii_digit() => Self::from_fields(s, ""),
            Some(last) => {
                let number = &s[..s.len() - last.len_utf8()];
                Self::from_fields(number, &s[s.len() - last.len_utf8()..])
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_str_parses_plain_numbers() {
        assert_eq!("42".parse(), Ok(SequenceId::new(42, None)));
        assert_eq!(" -7 ".parse(), Ok(SequenceId::new(-7, None)));
    }

    #[test]
    fn from_str_splits_off_trailing_insertion_code() {
        assert_eq!("42A".parse(), Ok(SequenceId::new(42, Some('A'))));
        assert_eq!("100X".parse(), Ok(SequenceId::new(100, Some('X'))));
    }

    #[test]
    fn from_str_rejects_empty_and_malformed_input() {
        assert_eq!("".parse::<SequenceId>(), Err(SequenceIdError::Empty));
        assert_eq!("   ".parse::<SequenceId>(), Err(SequenceIdError::Empty));
        assert_eq!("A".parse::<SequenceId>(), Err(SequenceIdError::Empty));
        assert_eq!(
            "1AB".parse::<SequenceId>(),
            Err(SequenceIdError::InvalidNumber("1A".to_string()))
        );
    }

    #[test]
    fn from_fields_trims_and_ignores_blank_insertion_code() {
        assert_eq!(
            SequenceId::from_fields("  12", " "),
            Ok(SequenceId::new(12, None))
        );
        assert_eq!(
            SequenceId::from_fields("  12", "B"),
            Ok(SequenceId::new(12, Some('B')))
        );
        assert_eq!(
            SequenceId::from_fields(" 1x2", ""),
            Err(SequenceIdError::InvalidNumber("1x2".to_string()))
        );
    }

    #[test]
    fn display_round_trips_the_text_form() {
        assert_eq!(SequenceId::new(5, None).to_string(), "5");
        assert_eq!(SequenceId::new(27, Some('C')).to_string(), "27C");
    }

    #[test]
    fn ordinal_orders_insertions_between_integers() {
        let ids: Vec<SequenceId> = ["10", "10A", "10B", "11"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        for pair in ids.windows(2) {
            assert!(pair[0].ordinal() < pair[1].ordinal());
        }
    }

    #[test]
    fn equality_distinguishes_insertion_codes() {
        assert_ne!(SequenceId::new(10, None), SequenceId::new(10, Some('A')));
        assert!(SequenceId::new(10, Some('A')).has_insertion_code());
        assert!(!SequenceId::new(10, None).has_insertion_code());
    }
}
