use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error as ThisError;

/// Group-stage label, a single letter from `A` to `L`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GroupLabel(char);

#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
#[error("'{0}' is not a valid group label (expected a letter from A to L)")]
pub struct InvalidGroupLabel(pub String);

impl GroupLabel {
    pub const FIRST: char = 'A';
    pub const LAST: char = 'L';

    /// All twelve group labels in order
    pub fn all() -> impl Iterator<Item = GroupLabel> {
        (Self::FIRST..=Self::LAST).map(GroupLabel)
    }

    pub fn as_char(&self) -> char {
        self.0
    }
}

impl FromStr for GroupLabel {
    type Err = InvalidGroupLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                let upper = c.to_ascii_uppercase();
                if (Self::FIRST..=Self::LAST).contains(&upper) {
                    Ok(GroupLabel(upper))
                } else {
                    Err(InvalidGroupLabel(s.to_string()))
                }
            }
            _ => Err(InvalidGroupLabel(s.to_string())),
        }
    }
}

impl TryFrom<String> for GroupLabel {
    type Error = InvalidGroupLabel;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<GroupLabel> for String {
    fn from(label: GroupLabel) -> Self {
        label.0.to_string()
    }
}

impl fmt::Display for GroupLabel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_a_to_l_in_any_case() {
        assert_eq!("A".parse::<GroupLabel>().unwrap().as_char(), 'A');
        assert_eq!("l".parse::<GroupLabel>().unwrap().as_char(), 'L');
        assert_eq!(GroupLabel::all().count(), 12);
    }

    #[test]
    fn test_parse_rejects_everything_else() {
        for input in ["", "M", "AB", "1", "É", " "] {
            assert!(input.parse::<GroupLabel>().is_err(), "{:?} should be rejected", input);
        }
    }

    #[test]
    fn test_serde_uses_plain_letter() {
        let label: GroupLabel = serde_json::from_str("\"c\"").unwrap();
        assert_eq!(serde_json::to_string(&label).unwrap(), "\"C\"");
        assert!(serde_json::from_str::<GroupLabel>("\"Z\"").is_err());
    }
}
