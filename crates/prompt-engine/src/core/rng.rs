//! Seedable pseudo-random source used for board shuffles.

/// Anything that can hand out bounded random integers.
/// Shuffles take this instead of a concrete generator so tests can script the order.
pub trait RandomSource {
    /// A value in `[0, upper_bound)`. `upper_bound` is never zero.
    fn next_int(&mut self, upper_bound: u32) -> u32;
}

/// xorshift64 generator. Same seed, same board order.
#[derive(Debug, Clone)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        let mut rng = Rng { state: 1 };
        rng.reseed(seed);
        rng
    }

    /// Restart the sequence. The seed is scrambled first so nearby seeds
    /// (such as consecutive page-load timestamps) diverge immediately.
    pub fn reseed(&mut self, seed: u64) {
        let mut z = seed.wrapping_add(0x9E37_79B9_7F4A_7C15);
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^= z >> 31;
        // xorshift never leaves zero
        self.state = if z == 0 { 1 } else { z };
    }

    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }
}

impl RandomSource for Rng {
    fn next_int(&mut self, upper_bound: u32) -> u32 {
        (self.next_u64() % upper_bound as u64) as u32
    }
}

/// Fisher-Yates over a fresh copy; `items` is left untouched.
pub fn shuffled<T: Clone>(items: &[T], rng: &mut dyn RandomSource) -> Vec<T> {
    let mut out = items.to_vec();
    for i in (1..out.len()).rev() {
        let j = rng.next_int(i as u32 + 1) as usize;
        out.swap(i, j);
    }
    out
}
