//! Canned sample items for demos and tests.

use stockroom_core::{DomainError, DomainResult};

use crate::item::Item;
use crate::register::ItemRegister;

const SAMPLE_ITEMS: &str = include_str!("../data/sample_items.json");

/// Parse the bundled sample items. Each one is validated on the way in.
pub fn sample_items() -> DomainResult<Vec<Item>> {
    serde_json::from_str(SAMPLE_ITEMS)
        .map_err(|e| DomainError::invalid_argument(format!("invalid sample data: {e}")))
}

/// Add every sample item whose number is not yet registered.
///
/// Returns how many items were added; existing numbers are skipped.
pub fn add_sample_items(register: &mut ItemRegister) -> DomainResult<usize> {
    let mut added = 0;
    for item in sample_items()? {
        if register.item_not_exists(item.item_number().as_str()) {
            register.add_item(item)?;
            added += 1;
        }
    }
    tracing::info!(added, total = register.number_of_items(), "sample items loaded");
    Ok(added)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::ItemCategory;

    #[test]
    fn sample_items_parse() {
        let items = sample_items().unwrap();
        assert_eq!(items.len(), 5);
        assert_eq!(items[0].item_number().as_str(), "12BK5");
        assert_eq!(items[0].stock(), 100);
        assert_eq!(items[3].category(), ItemCategory::FloorLaminate);
    }

    #[test]
    fn loading_twice_skips_existing() {
        let mut register = ItemRegister::new();
        assert_eq!(add_sample_items(&mut register).unwrap(), 5);
        assert_eq!(add_sample_items(&mut register).unwrap(), 0);
        assert_eq!(register.number_of_items(), 5);
    }

    #[test]
    fn loading_keeps_pre_existing_items() {
        let mut register = ItemRegister::new();
        add_sample_items(&mut register).unwrap();
        register.delete_item("9898ABC").unwrap();
        register.change_price("12BK5", 1).unwrap();

        assert_eq!(add_sample_items(&mut register).unwrap(), 1);
        assert_eq!(register.number_of_items(), 5);
        assert_eq!(register.item_by_number("12BK5").unwrap().unwrap().price(), 1);
    }
}
