use alloc::string::String;
use alloc::vec::Vec;
use rand::prelude::*;
use rand::rngs::SmallRng;

use super::*;

/// Purely random card layout, reproducible from its seed.
#[derive(Clone, Debug)]
pub struct RandomCardGenerator {
    rng: SmallRng,
}

impl RandomCardGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Fisher-Yates, walking from the last index down to 1.
    fn shuffle(&mut self, items: &mut [String]) {
        for i in (1..items.len()).rev() {
            let j = self.rng.random_range(0..=i);
            items.swap(i, j);
        }
    }
}

impl CardGenerator for RandomCardGenerator {
    fn generate(&mut self, pool: &ItemPool) -> Result<Card> {
        if pool.len() < REQUIRED_ITEMS {
            return Err(BingoError::InsufficientItems {
                found: pool.len(),
                required: REQUIRED_ITEMS,
            });
        }

        let mut items: Vec<String> = pool.to_vec();
        self.shuffle(&mut items);
        items.truncate(REQUIRED_ITEMS);

        log::trace!("generated card from a pool of {}", pool.len());
        Card::from_items(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    fn pool(count: usize) -> ItemPool {
        ItemPool::new((0..count).map(|i| format!("item {i}")).collect()).unwrap()
    }

    /// Removes each card item from `remaining`, failing if any was not available.
    fn assert_drawn_from(card: &Card, mut remaining: Vec<String>) {
        for item in card.items() {
            let pos = remaining
                .iter()
                .position(|candidate| candidate == item)
                .unwrap_or_else(|| panic!("{item:?} was not available in the pool"));
            remaining.swap_remove(pos);
        }
    }

    #[test]
    fn exact_pool_uses_every_item() {
        let pool = pool(REQUIRED_ITEMS);

        let card = RandomCardGenerator::new(7).generate(&pool).unwrap();

        assert_eq!(card.iter().count(), usize::from(CELL_COUNT));
        assert_eq!(card[FREE_CELL_INDEX], CardCell::Free);
        assert_eq!(card.items().count(), REQUIRED_ITEMS);
        for item in pool.iter() {
            assert!(card.items().any(|cell| cell == item.as_str()), "{item:?} missing");
        }
    }

    #[test]
    fn items_are_drawn_without_replacement() {
        let pool = pool(40);
        let mut generator = RandomCardGenerator::new(1234);

        for _ in 0..50 {
            let card = generator.generate(&pool).unwrap();
            assert_eq!(card[FREE_CELL_INDEX], CardCell::Free);
            assert_drawn_from(&card, pool.to_vec());
        }
    }

    #[test]
    fn duplicate_pool_entries_may_repeat_on_a_card() {
        let items = (0..REQUIRED_ITEMS).map(|_| String::from("same")).collect();
        let pool = ItemPool::new(items).unwrap();

        let card = RandomCardGenerator::new(0).generate(&pool).unwrap();

        assert!(card.items().all(|item| item == "same"));
    }

    #[test]
    fn generation_leaves_pool_untouched() {
        let pool = pool(30);
        let before = pool.clone();

        RandomCardGenerator::new(99).generate(&pool).unwrap();

        assert_eq!(pool, before);
    }

    #[test]
    fn same_seed_gives_same_card() {
        let pool = pool(40);

        let a = RandomCardGenerator::new(42).generate(&pool).unwrap();
        let b = RandomCardGenerator::new(42).generate(&pool).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn consecutive_cards_differ() {
        let pool = pool(40);
        let mut generator = RandomCardGenerator::new(5);

        let first = generator.generate(&pool).unwrap();
        let changed = (0..10).any(|_| generator.generate(&pool).unwrap() != first);

        assert!(changed);
    }
}
