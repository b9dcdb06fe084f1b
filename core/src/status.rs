use core::fmt;
use serde::{Deserialize, Serialize};

/// Human readable progress line shown under the card.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusMessage {
    Ready,
    Walking,
    Bingo(usize),
}

impl StatusMessage {
    pub const fn new(started: bool, line_count: usize) -> Self {
        match (started, line_count) {
            (false, _) => Self::Ready,
            (true, 0) => Self::Walking,
            (true, count) => Self::Bingo(count),
        }
    }

    pub const fn is_bingo(self) -> bool {
        matches!(self, Self::Bingo(_))
    }
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use StatusMessage::*;
        match self {
            Ready => {
                f.write_str("Reroll for a different card, or press Start to begin your walk.")
            }
            Walking => f.write_str("Tap an item when you spot it on your walk."),
            Bingo(1) => f.write_str("BINGO! 1 line complete."),
            Bingo(count) => write!(f, "BINGO! {} lines complete.", count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn message_follows_phase_and_count() {
        assert_eq!(StatusMessage::new(false, 3), StatusMessage::Ready);
        assert_eq!(StatusMessage::new(true, 0), StatusMessage::Walking);
        assert_eq!(StatusMessage::new(true, 2), StatusMessage::Bingo(2));
    }

    #[test]
    fn bingo_text_pluralizes() {
        assert_eq!(StatusMessage::Bingo(1).to_string(), "BINGO! 1 line complete.");
        assert_eq!(StatusMessage::Bingo(4).to_string(), "BINGO! 4 lines complete.");
    }
}
