use thiserror::Error;

use crate::CellIndex;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum BingoError {
    #[error("Invalid cell index {0}")]
    InvalidCell(CellIndex),
    #[error("Item pool has {found} usable items, at least {required} are needed")]
    InsufficientItems { found: usize, required: usize },
    #[error("Card needs exactly {expected} items, got {found}")]
    InvalidItemCount { found: usize, expected: usize },
    #[error("Card cells do not form a square grid")]
    InvalidCardShape,
}

pub type Result<T> = core::result::Result<T, BingoError>;
