use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::ops::Deref;
use serde::{Deserialize, Serialize};

use crate::*;

/// Built-in items used whenever the item resource is unavailable or too short.
pub const FALLBACK_ITEMS: [&str; 40] = [
    "Dog on a leash",
    "Red car",
    "Bicycle",
    "Mailbox",
    "Bird on a wire",
    "Fire hydrant",
    "Someone jogging",
    "Bus stop",
    "Flower bed",
    "Stop sign",
    "Cat in a window",
    "Puddle",
    "Bench",
    "Street lamp",
    "Squirrel",
    "Delivery van",
    "Stroller",
    "Graffiti",
    "Recycling bin",
    "Oak tree",
    "Crosswalk",
    "Pigeon",
    "Manhole cover",
    "Parked scooter",
    "Garden gnome",
    "Flag",
    "Someone on the phone",
    "Construction cone",
    "Mural",
    "Playground",
    "Fence",
    "Street musician",
    "Coffee cup",
    "Skateboard",
    "Bridge",
    "Church bell",
    "Hedge",
    "Taxi",
    "Umbrella",
    "Street sign with a number",
];

/// Candidate texts for card cells, guaranteed to hold at least [`REQUIRED_ITEMS`] entries.
///
/// Duplicates are kept as they come, so the same text may land on a card twice.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ItemPool {
    items: Vec<String>,
}

impl ItemPool {
    pub fn new(items: Vec<String>) -> Result<Self> {
        if items.len() < REQUIRED_ITEMS {
            return Err(BingoError::InsufficientItems {
                found: items.len(),
                required: REQUIRED_ITEMS,
            });
        }
        Ok(Self { items })
    }

    /// Parses a newline-delimited resource, trimming each line and skipping blank ones.
    pub fn parse(text: &str) -> Result<Self> {
        let items = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(ToString::to_string)
            .collect();
        Self::new(items)
    }

    pub fn fallback() -> Self {
        Self {
            items: FALLBACK_ITEMS.iter().map(ToString::to_string).collect(),
        }
    }

    pub fn parse_or_fallback(text: &str) -> Self {
        Self::parse(text).unwrap_or_else(|err| {
            log::warn!("{}, using the built-in items", err);
            Self::fallback()
        })
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }
}

impl Deref for ItemPool {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
