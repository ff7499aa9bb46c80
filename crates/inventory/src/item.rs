use serde::{Deserialize, Serialize};

use stockroom_core::guard::{ensure_non_negative, ensure_not_blank, ensure_positive};
use stockroom_core::{DomainResult, ItemNumber};

use crate::category::ItemCategory;

/// Input for creating an [`Item`].
///
/// Plain data; nothing is checked until [`Item::create`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewItem {
    pub item_number: String,
    pub name: String,
    pub description: String,
    /// Whole currency units.
    pub price: i64,
    pub brand: String,
    /// Kilograms.
    pub weight: f64,
    /// Meters.
    pub length: f64,
    /// Meters.
    pub height: f64,
    pub colour: String,
    pub stock: i64,
    pub category: ItemCategory,
}

/// One stock-keeping unit.
///
/// Every instance satisfies the field rules checked in [`Item::create`]. Only
/// price, description and stock can change afterwards, each through a setter
/// that re-checks its own rule.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "NewItem")]
pub struct Item {
    item_number: ItemNumber,
    name: String,
    description: String,
    price: i64,
    brand: String,
    weight: f64,
    length: f64,
    height: f64,
    colour: String,
    stock: i64,
    category: ItemCategory,
}

impl Item {
    /// Validate `new` and build the item.
    ///
    /// Reports the first rule broken, checked in field order.
    pub fn create(new: NewItem) -> DomainResult<Self> {
        let item_number = ItemNumber::new(new.item_number)?;
        ensure_not_blank(&new.name, "Item name can not be empty.")?;
        ensure_not_blank(&new.description, "Item description can not be empty.")?;
        ensure_non_negative(new.price, "Price must be at least 0.")?;
        ensure_not_blank(&new.brand, "Brand name can not be empty.")?;
        ensure_positive(new.weight, "Weight must be greater than 0 kilograms.")?;
        ensure_positive(new.length, "Length must be greater than 0 meters.")?;
        ensure_positive(new.height, "Height must be greater than 0 meters.")?;
        ensure_not_blank(&new.colour, "Colour can not be empty.")?;
        ensure_non_negative(new.stock, "Number of items in stock must be at least 0.")?;

        Ok(Self {
            item_number,
            name: new.name,
            description: new.description,
            price: new.price,
            brand: new.brand,
            weight: new.weight,
            length: new.length,
            height: new.height,
            colour: new.colour,
            stock: new.stock,
            category: new.category,
        })
    }

    /// Deep copy through the validating constructor.
    ///
    /// The copy owns its own storage and can be mutated independently.
    pub fn try_clone(&self) -> DomainResult<Self> {
        Self::create(self.to_new_item())
    }

    /// The field values of this item as creation input.
    pub fn to_new_item(&self) -> NewItem {
        NewItem {
            item_number: self.item_number.as_str().to_owned(),
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price,
            brand: self.brand.clone(),
            weight: self.weight,
            length: self.length,
            height: self.height,
            colour: self.colour.clone(),
            stock: self.stock,
            category: self.category,
        }
    }

    pub fn item_number(&self) -> &ItemNumber {
        &self.item_number
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> i64 {
        self.price
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn colour(&self) -> &str {
        &self.colour
    }

    pub fn stock(&self) -> i64 {
        self.stock
    }

    pub fn category(&self) -> ItemCategory {
        self.category
    }

    pub fn set_price(&mut self, price: i64) -> DomainResult<()> {
        ensure_non_negative(price, "Price must be at least 0.")?;
        self.price = price;
        Ok(())
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> DomainResult<()> {
        let description = description.into();
        ensure_not_blank(&description, "Item description can not be empty.")?;
        self.description = description;
        Ok(())
    }

    pub fn set_stock(&mut self, stock: i64) -> DomainResult<()> {
        ensure_non_negative(stock, "Number of items in stock must be at least 0.")?;
        self.stock = stock;
        Ok(())
    }

    /// Compact view: number, name, price, brand, stock and category.
    pub fn short_view(&self) -> String {
        format!(
            "\nItem\n--------------------\n\
             Item number: {}\n\
             Item name: {}\n\
             Price: {}\n\
             Brand name: {}\n\
             Number of items in stock: {}\n\
             Category: {}\n",
            self.item_number, self.name, self.price, self.brand, self.stock, self.category,
        )
    }
}

impl TryFrom<NewItem> for Item {
    type Error = stockroom_core::DomainError;

    fn try_from(value: NewItem) -> Result<Self, Self::Error> {
        Self::create(value)
    }
}

/// Full view with every field labeled.
impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "\nItem\n--------------------\n\
             Item number: {}\n\
             Item name: {}\n\
             Item description: {}\n\
             Price: {}\n\
             Brand name: {}\n\
             Weight: {:?}\n\
             Length: {:?}\n\
             Height: {:?}\n\
             Colour: {}\n\
             Number of items in stock: {}\n\
             Category: {}\n",
            self.item_number,
            self.name,
            self.description,
            self.price,
            self.brand,
            self.weight,
            self.length,
            self.height,
            self.colour,
            self.stock,
            self.category,
        )
    }
}
