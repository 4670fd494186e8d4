use std::time::{SystemTime, UNIX_EPOCH};

pub const MESSAGES: [&str; 8] = [
    "Let\u{2019}s change your financial future, one dollar at a time.",
    "The best time to invest was yesterday. The next best time is today.",
    "Start small. Stay consistent. Let compounding do the heavy lifting.",
    "Your future self will thank you for the steps you take today.",
    "Big dreams start with small, consistent contributions.",
    "Wealth isn't built overnight. It's built with purpose, patience, and persistence.",
    "No amount is too small to begin. Just begin.",
    "Turn time into your greatest asset. Start investing today.",
];

/// Picks a call-to-action line. A fixed seed always yields the same line;
/// without one the wall clock seeds the draw.
pub fn pick_message(seed: Option<u64>) -> &'static str {
    let seed = seed.unwrap_or_else(clock_seed);
    let mut rng = Rng::new(splitmix64(seed));
    MESSAGES[rng.next_index(MESSAGES.len())]
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E3779B97F4A7C15);
    let mut z = x;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}

struct Rng {
    state: u64,
}

impl Rng {
    fn new(seed: u64) -> Self {
        // xorshift never leaves the all-zero state
        let state = if seed == 0 {
            0xA5A5_A5A5_A5A5_A5A5
        } else {
            seed
        };
        Self { state }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    fn next_index(&mut self, len: usize) -> usize {
        (self.next_u64() % len as u64) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn same_seed_picks_same_message() {
        for seed in [0, 1, 42, u64::MAX] {
            assert_eq!(pick_message(Some(seed)), pick_message(Some(seed)));
        }
    }

    #[test]
    fn seeds_spread_across_all_messages() {
        let seen: HashSet<&str> = (0..512).map(|seed| pick_message(Some(seed))).collect();
        assert_eq!(seen.len(), MESSAGES.len());
    }

    #[test]
    fn unseeded_pick_is_one_of_the_messages() {
        assert!(MESSAGES.contains(&pick_message(None)));
    }
}
