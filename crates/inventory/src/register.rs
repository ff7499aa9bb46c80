use stockroom_core::guard::{ensure_not_blank, is_blank};
use stockroom_core::{DomainError, DomainResult};

use crate::category::ItemCategory;
use crate::item::Item;

/// Owning, ordered collection of items.
///
/// - At most one item per case-insensitive item number.
/// - Items keep insertion order for iteration and rendering.
/// - Lookups hand out shared borrows; every mutation goes through a register
///   method so item rules are re-checked.
#[derive(Debug, Default, PartialEq)]
pub struct ItemRegister {
    items: Vec<Item>,
}

impl ItemRegister {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deep copy: every item is rebuilt through [`Item::try_clone`].
    pub fn try_clone(&self) -> DomainResult<Self> {
        let items = self
            .items
            .iter()
            .map(Item::try_clone)
            .collect::<DomainResult<Vec<_>>>()?;
        Ok(Self { items })
    }

    pub fn number_of_items(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// Append `item` unless its number is already taken.
    pub fn add_item(&mut self, item: Item) -> DomainResult<()> {
        if self.position(item.item_number().as_str()).is_some() {
            tracing::debug!(item_number = %item.item_number(), "rejected duplicate item");
            return Err(DomainError::invalid_argument(format!(
                "Item with item number {} already exists.",
                item.item_number()
            )));
        }
        tracing::info!(item_number = %item.item_number(), category = %item.category(), "item added");
        self.items.push(item);
        Ok(())
    }

    pub fn delete_item(&mut self, item_number: &str) -> DomainResult<()> {
        let idx = self.require_position(item_number)?;
        let removed = self.items.remove(idx);
        tracing::info!(item_number = %removed.item_number(), "item deleted");
        Ok(())
    }

    /// Find an item by number (case-insensitive).
    ///
    /// Absence is `Ok(None)`; only a blank number is an error.
    pub fn item_by_number(&self, item_number: &str) -> DomainResult<Option<&Item>> {
        ensure_not_blank(item_number, "Item number can not be empty.")?;
        Ok(self.position(item_number).map(|idx| &self.items[idx]))
    }

    /// `true` when no item has this number.
    ///
    /// Unlike [`ItemRegister::item_by_number`], a blank number is not an
    /// error here: it is reported as not existing, since no blank number can
    /// ever be registered.
    pub fn item_not_exists(&self, item_number: &str) -> bool {
        is_blank(item_number) || self.position(item_number).is_none()
    }

    /// Items whose description contains `text`, ignoring case.
    pub fn items_by_description(&self, text: &str) -> DomainResult<Vec<&Item>> {
        ensure_not_blank(text, "Item description can not be empty.")?;
        let needle = text.to_lowercase();
        Ok(self
            .items
            .iter()
            .filter(|item| item.description().to_lowercase().contains(&needle))
            .collect())
    }

    /// The item with `item_number` if there is one, otherwise every item
    /// matching `text` by description.
    ///
    /// The criteria are a fallback chain, not a combination: when the number
    /// matches, the description is ignored.
    pub fn items_by_number_or_description(
        &self,
        item_number: &str,
        text: &str,
    ) -> DomainResult<Vec<&Item>> {
        match self.item_by_number(item_number)? {
            Some(item) => Ok(vec![item]),
            None => self.items_by_description(text),
        }
    }

    pub fn items_by_category(&self, category: ItemCategory) -> Vec<&Item> {
        self.items
            .iter()
            .filter(|item| item.category() == category)
            .collect()
    }

    pub fn increase_number_of_items_in_stock(
        &mut self,
        item_number: &str,
        amount: i64,
    ) -> DomainResult<()> {
        ensure_positive_amount(amount)?;
        let item = self.require_mut(item_number)?;
        let stock = item
            .stock()
            .checked_add(amount)
            .ok_or_else(|| DomainError::invalid_argument("Number of items in stock is too large."))?;
        item.set_stock(stock)?;
        tracing::debug!(item_number = %item.item_number(), amount, stock, "stock increased");
        Ok(())
    }

    pub fn decrease_number_of_items_in_stock(
        &mut self,
        item_number: &str,
        amount: i64,
    ) -> DomainResult<()> {
        ensure_positive_amount(amount)?;
        let item = self.require_mut(item_number)?;
        if amount > item.stock() {
            return Err(DomainError::invalid_argument(
                "The number of items removed can not be greater than the number in stock.",
            ));
        }
        let stock = item.stock() - amount;
        item.set_stock(stock)?;
        tracing::debug!(item_number = %item.item_number(), amount, stock, "stock decreased");
        Ok(())
    }

    pub fn change_price(&mut self, item_number: &str, price: i64) -> DomainResult<()> {
        if price < 0 {
            return Err(DomainError::invalid_argument("Price must be at least 0."));
        }
        let item = self.require_mut(item_number)?;
        item.set_price(price)?;
        tracing::debug!(item_number = %item.item_number(), price, "price changed");
        Ok(())
    }

    /// Reduce the price by `percent`, truncating toward zero.
    ///
    /// `percent` must lie strictly between 0 and 100. The result never
    /// exceeds the current price, even where `f64` cannot represent the
    /// price exactly (above 2^53).
    pub fn discount_price(&mut self, item_number: &str, percent: f64) -> DomainResult<()> {
        if !(percent > 0.0 && percent < 100.0) {
            return Err(DomainError::invalid_argument(
                "Discount percentage must be greater than 0 and less than 100.",
            ));
        }
        let item = self.require_mut(item_number)?;
        let current = item.price();
        let price = (((1.0 - percent / 100.0) * current as f64) as i64).min(current);
        item.set_price(price)?;
        tracing::debug!(item_number = %item.item_number(), percent, price, "price discounted");
        Ok(())
    }

    pub fn change_description(&mut self, item_number: &str, description: &str) -> DomainResult<()> {
        ensure_not_blank(description, "Item description can not be empty.")?;
        let item = self.require_mut(item_number)?;
        item.set_description(description)?;
        tracing::debug!(item_number = %item.item_number(), "description changed");
        Ok(())
    }

    /// Full view of every item, in register order.
    pub fn render_items(&self) -> String {
        self.items
            .iter()
            .map(|item| format!("{item}\n"))
            .collect()
    }

    /// Short view of every item, in register order.
    pub fn render_items_short(&self) -> String {
        self.items.iter().map(Item::short_view).collect()
    }

    fn position(&self, item_number: &str) -> Option<usize> {
        self.items
            .iter()
            .position(|item| item.item_number().matches(item_number))
    }

    fn require_position(&self, item_number: &str) -> DomainResult<usize> {
        ensure_not_blank(item_number, "Item number can not be empty.")?;
        self.position(item_number).ok_or_else(|| {
            DomainError::invalid_argument(format!(
                "Item with item number {item_number} does not exist."
            ))
        })
    }

    fn require_mut(&mut self, item_number: &str) -> DomainResult<&mut Item> {
        let idx = self.require_position(item_number)?;
        Ok(&mut self.items[idx])
    }
}

fn ensure_positive_amount(amount: i64) -> DomainResult<()> {
    if amount <= 0 {
        return Err(DomainError::invalid_argument(
            "Number of items must be greater than 0.",
        ));
    }
    Ok(())
}
