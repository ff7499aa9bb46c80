//! Inventory domain module.
//!
//! This crate contains the item catalog: the validated `Item` record and the
//! `ItemRegister` that owns, queries and mutates items. Pure domain logic
//! (no IO, no storage).

pub mod category;
pub mod item;
pub mod register;
pub mod seed;

pub use category::ItemCategory;
pub use item::{Item, NewItem};
pub use register::ItemRegister;
pub use seed::add_sample_items;
