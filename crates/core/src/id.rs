//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::guard::ensure_not_blank;

/// Identifier of a stock-keeping unit.
///
/// Keeps the spelling it was created with, but compares case-insensitively:
/// `"12bk5"` and `"12BK5"` name the same item.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemNumber(String);

impl ItemNumber {
    /// Create an item number, rejecting blank input.
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        ensure_not_blank(&value, "Item number can not be empty.")?;
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison against raw input.
    pub fn matches(&self, other: &str) -> bool {
        fold(&self.0).eq(fold(other))
    }
}

fn fold(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(char::to_lowercase)
}

impl PartialEq for ItemNumber {
    fn eq(&self, other: &Self) -> bool {
        self.matches(&other.0)
    }
}

impl Eq for ItemNumber {}

impl core::hash::Hash for ItemNumber {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        for c in fold(&self.0) {
            c.hash(state);
        }
    }
}

impl core::fmt::Display for ItemNumber {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ItemNumber {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ItemNumber {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ItemNumber> for String {
    fn from(value: ItemNumber) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn blank_item_number_is_rejected() {
        assert!(ItemNumber::new("").is_err());
        assert!("  ".parse::<ItemNumber>().is_err());
    }

    #[test]
    fn comparison_ignores_case_but_display_keeps_spelling() {
        let a = ItemNumber::new("12bk5").unwrap();
        let b = ItemNumber::new("12BK5").unwrap();
        assert_eq!(a, b);
        assert!(a.matches("12Bk5"));
        assert!(!a.matches("12BK6"));
        assert_eq!(a.to_string(), "12bk5");
    }

    #[test]
    fn equal_numbers_hash_alike() {
        let mut set = HashSet::new();
        set.insert(ItemNumber::new("fiat7865").unwrap());
        assert!(set.contains(&ItemNumber::new("FIAT7865").unwrap()));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn case_changes_never_break_equality(raw in "[A-Za-z0-9]{1,16}") {
                let lower = ItemNumber::new(raw.to_lowercase()).unwrap();
                let upper = ItemNumber::new(raw.to_uppercase()).unwrap();
                prop_assert_eq!(lower, upper);
            }
        }
    }
}
