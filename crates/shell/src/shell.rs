//! The menu loop.

use std::io::{BufRead, Write};

use stockroom_core::DomainResult;
use stockroom_inventory::{Item, ItemRegister, NewItem, add_sample_items};

use crate::prompt::{InputClosed, Prompt};

const MAIN_MENU: &str = "\n---- Item register ----\n\
    1. Item overview\n\
    2. Add sample data\n\
    3. Register item\n\
    4. Search items\n\
    5. Change item\n\
    6. Delete item\n\
    7. Exit\n\
    Choose an option:";

const OVERVIEW_MENU: &str = "\nItem overview\n---------\n\
    1. Number of items\n\
    2. All items\n\
    3. All items, short\n\
    4. Back";

const SEARCH_MENU: &str = "\nSearch items\n---------\n\
    1. By item number\n\
    2. By description\n\
    3. By item number or description\n\
    4. By category\n\
    5. Back";

const CHANGE_MENU: &str = "\nChange item\n---------\n\
    1. Increase stock\n\
    2. Decrease stock\n\
    3. Change price\n\
    4. Discount price\n\
    5. Change description\n\
    6. Back";

/// Interactive session owning one register.
pub struct Shell<R, W> {
    register: ItemRegister,
    prompt: Prompt<R, W>,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(prompt: Prompt<R, W>) -> Self {
        Self {
            register: ItemRegister::new(),
            prompt,
        }
    }

    pub fn register(&self) -> &ItemRegister {
        &self.register
    }

    pub fn into_parts(self) -> (ItemRegister, W) {
        (self.register, self.prompt.into_output())
    }

    /// Run until the user exits or input ends.
    pub fn run(&mut self) -> anyhow::Result<()> {
        match self.menu_loop() {
            Err(err) if err.is::<InputClosed>() => {
                tracing::debug!("input closed; leaving shell");
                Ok(())
            }
            other => other,
        }
    }

    pub fn load_sample_items(&mut self) -> anyhow::Result<()> {
        match add_sample_items(&mut self.register) {
            Ok(added) => self.prompt.say(format!("Sample data added ({added} new items).")),
            Err(err) => self.prompt.say(err.reason()),
        }
    }

    fn menu_loop(&mut self) -> anyhow::Result<()> {
        loop {
            match self.prompt.read_choice(MAIN_MENU, 7)? {
                1 => self.overview()?,
                2 => self.load_sample_items()?,
                3 => self.register_item()?,
                4 => self.search()?,
                5 => self.change_item()?,
                6 => self.delete_item()?,
                _ => {
                    self.prompt.say("Exiting item register.")?;
                    return Ok(());
                }
            }
        }
    }

    fn overview(&mut self) -> anyhow::Result<()> {
        let choice = self.prompt.read_choice(OVERVIEW_MENU, 4)?;
        if choice == 1 {
            let count = self.register.number_of_items();
            return self.prompt.say(format!("There are {count} items in the register."));
        }
        if choice == 4 {
            return Ok(());
        }
        if self.register.is_empty() {
            return self.prompt.say("There are no items registered.");
        }
        let text = if choice == 2 {
            self.register.render_items()
        } else {
            self.register.render_items_short()
        };
        self.prompt.say(text)
    }

    fn register_item(&mut self) -> anyhow::Result<()> {
        let new = NewItem {
            item_number: self.prompt.read_text("Item number:")?,
            name: self.prompt.read_text("Item name:")?,
            description: self.prompt.read_text("Item description:")?,
            price: self.prompt.read_int("Price:")?,
            brand: self.prompt.read_text("Brand name:")?,
            weight: self.prompt.read_float("Weight (kg):")?,
            length: self.prompt.read_float("Length (m):")?,
            height: self.prompt.read_float("Height (m):")?,
            colour: self.prompt.read_text("Colour:")?,
            stock: self.prompt.read_int("Number of items in stock:")?,
            category: self.prompt.read_category()?,
        };
        let number = new.item_number.clone();

        let outcome = Item::create(new).and_then(|item| self.register.add_item(item));
        self.report(outcome, &format!("Item {number} is registered."))
    }

    fn search(&mut self) -> anyhow::Result<()> {
        let found: DomainResult<Vec<&Item>> = match self.prompt.read_choice(SEARCH_MENU, 5)? {
            1 => {
                let number = self.prompt.read_text("Item number:")?;
                self.register
                    .item_by_number(&number)
                    .map(|item| item.into_iter().collect())
            }
            2 => {
                let text = self.prompt.read_text("Description contains:")?;
                self.register.items_by_description(&text)
            }
            3 => {
                let number = self.prompt.read_text("Item number:")?;
                let text = self.prompt.read_text("Description contains:")?;
                self.register.items_by_number_or_description(&number, &text)
            }
            4 => {
                let category = self.prompt.read_category()?;
                Ok(self.register.items_by_category(category))
            }
            _ => return Ok(()),
        };

        let text = match found {
            Ok(items) if items.is_empty() => "No matching items were found.".to_string(),
            Ok(items) => items.iter().map(|item| item.to_string()).collect(),
            Err(err) => err.reason().to_string(),
        };
        self.prompt.say(text)
    }

    fn change_item(&mut self) -> anyhow::Result<()> {
        let choice = self.prompt.read_choice(CHANGE_MENU, 6)?;
        if choice == 6 {
            return Ok(());
        }
        let number = self.prompt.read_text("Item number:")?;

        let outcome = match choice {
            1 => {
                let amount = self.prompt.read_int("Number of items to add:")?;
                self.register.increase_number_of_items_in_stock(&number, amount)
            }
            2 => {
                let amount = self.prompt.read_int("Number of items to remove:")?;
                self.register.decrease_number_of_items_in_stock(&number, amount)
            }
            3 => {
                let price = self.prompt.read_int("New price:")?;
                self.register.change_price(&number, price)
            }
            4 => {
                let percent = self.prompt.read_float("Discount in percent:")?;
                self.register.discount_price(&number, percent)
            }
            _ => {
                let description = self.prompt.read_text("New description:")?;
                self.register.change_description(&number, &description)
            }
        };
        self.report(outcome, &format!("Item {number} is updated."))
    }

    fn delete_item(&mut self) -> anyhow::Result<()> {
        let number = self.prompt.read_text("Item number to delete:")?;
        let outcome = self.register.delete_item(&number);
        self.report(outcome, &format!("Item {number} is deleted."))
    }

    fn report(&mut self, outcome: DomainResult<()>, success: &str) -> anyhow::Result<()> {
        match outcome {
            Ok(()) => self.prompt.say(success),
            Err(err) => self.prompt.say(err.reason()),
        }
    }
}
