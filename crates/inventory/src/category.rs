use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult};

/// Product classification, fixed at item creation.
///
/// Users select a category by its 1-based ordinal, which follows the order of
/// [`ItemCategory::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemCategory {
    FloorLaminate,
    Windows,
    Doors,
    Lumber,
}

impl ItemCategory {
    /// Every category in selection order.
    pub const ALL: [ItemCategory; 4] = [
        ItemCategory::FloorLaminate,
        ItemCategory::Windows,
        ItemCategory::Doors,
        ItemCategory::Lumber,
    ];

    pub fn count() -> usize {
        Self::ALL.len()
    }

    /// 1-based selector shown to users.
    pub fn ordinal(self) -> usize {
        match self {
            ItemCategory::FloorLaminate => 1,
            ItemCategory::Windows => 2,
            ItemCategory::Doors => 3,
            ItemCategory::Lumber => 4,
        }
    }

    /// Resolve a 1-based selector.
    pub fn from_ordinal(ordinal: i64) -> DomainResult<Self> {
        usize::try_from(ordinal)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|idx| Self::ALL.get(idx).copied())
            .ok_or_else(|| {
                DomainError::invalid_argument(format!(
                    "Please enter a number between 1 and {}.",
                    Self::count()
                ))
            })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ItemCategory::FloorLaminate => "FLOOR_LAMINATE",
            ItemCategory::Windows => "WINDOWS",
            ItemCategory::Doors => "DOORS",
            ItemCategory::Lumber => "LUMBER",
        }
    }
}

impl core::fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
