/// Seed for the card generator, drawn from JavaScript's Math.random
pub(crate) fn js_random_seed() -> u64 {
    use js_sys::Math::random;
    u64::from_be_bytes(core::array::from_fn(|_| (256. * random()) as u8))
}

/// Stagger for the shuffle animation so cells settle one after another.
pub(crate) const fn shuffle_delay_ms(index: u8) -> u32 {
    index as u32 * 20
}
