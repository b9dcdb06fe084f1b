use crate::*;
pub use random::*;

mod random;

pub trait CardGenerator {
    fn generate(&mut self, pool: &ItemPool) -> Result<Card>;
}
