#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use generator::*;
pub use items::*;
pub use lines::*;
pub use status::*;
pub use types::*;

mod engine;
mod error;
mod generator;
mod items;
mod lines;
mod status;
mod types;

/// Text shown in the reserved center cell.
pub const FREE_CELL_TEXT: &str = "FREE";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardCell {
    Item(String),
    Free,
}

impl CardCell {
    pub const fn is_free(&self) -> bool {
        matches!(self, Self::Free)
    }

    pub fn text(&self) -> &str {
        match self {
            Self::Item(text) => text,
            Self::Free => FREE_CELL_TEXT,
        }
    }
}

impl fmt::Display for CardCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// A 5x5 bingo card, row-major, with the free cell always at [`FREE_CELL_INDEX`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    cells: Array2<CardCell>,
}

impl Card {
    /// Lays out exactly [`REQUIRED_ITEMS`] items around the free cell.
    ///
    /// The first half fills indices `0..12`, the second half fills `13..25`.
    pub fn from_items(items: Vec<String>) -> Result<Self> {
        if items.len() != REQUIRED_ITEMS {
            return Err(BingoError::InvalidItemCount {
                found: items.len(),
                expected: REQUIRED_ITEMS,
            });
        }

        let mut cells: Vec<CardCell> = items.into_iter().map(CardCell::Item).collect();
        cells.insert(FREE_CELL_INDEX.into(), CardCell::Free);

        let side = usize::from(GRID_SIZE);
        let cells = Array2::from_shape_vec((side, side), cells)
            .map_err(|_| BingoError::InvalidCardShape)?;
        Ok(Self { cells })
    }

    pub fn validate_index(&self, index: CellIndex) -> Result<CellIndex> {
        if index < CELL_COUNT {
            Ok(index)
        } else {
            Err(BingoError::InvalidCell(index))
        }
    }

    /// # Panics
    ///
    /// If `index` is not below [`CELL_COUNT`], see [`Card::validate_index`].
    pub fn cell_at(&self, index: CellIndex) -> &CardCell {
        &self[index]
    }

    /// Iterates over all cells in index order.
    pub fn iter(&self) -> impl Iterator<Item = (CellIndex, &CardCell)> {
        (0..CELL_COUNT).map(|index| (index, &self[index]))
    }

    /// Item texts in index order, the free cell excluded.
    pub fn items(&self) -> impl Iterator<Item = &str> {
        self.cells
            .iter()
            .filter(|cell| !cell.is_free())
            .map(CardCell::text)
    }
}

impl Index<CellIndex> for Card {
    type Output = CardCell;

    fn index(&self, index: CellIndex) -> &Self::Output {
        &self.cells[index.to_nd_index()]
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    NoChange,
    Changed,
}

impl ActionOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}
