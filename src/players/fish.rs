use super::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Computer player that throws uniformly at random.
/// Ignores the human entirely, so there's nothing to exploit.
#[derive(Debug)]
pub struct Fish<R = SmallRng>(R);

impl Fish<SmallRng> {
    /// Seeded from OS entropy.
    pub fn new() -> Self {
        Self(SmallRng::from_os_rng())
    }
    /// Reproducible sequence of throws.
    pub fn seeded(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
}

impl Default for Fish<SmallRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> From<R> for Fish<R>
where
    R: Rng,
{
    fn from(rng: R) -> Self {
        Self(rng)
    }
}

impl<R> Opponent for Fish<R>
where
    R: Rng,
{
    fn throw(&mut self) -> Choice {
        let throw = Choice::sample(&mut self.0);
        log::trace!("[fish] throws {}", throw.label());
        throw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn same_seed_same_throws() {
        let ref mut a = Fish::seeded(7);
        let ref mut b = Fish::seeded(7);
        for _ in 0..64 {
            assert_eq!(a.throw(), b.throw());
        }
    }

    #[test]
    fn throws_everything_evenly() {
        const N: usize = 9_000;
        let ref mut fish = Fish::seeded(42);
        let mut counts = HashMap::new();
        for _ in 0..N {
            *counts.entry(fish.throw()).or_insert(0usize) += 1;
        }
        assert_eq!(counts.len(), 3);
        for (choice, count) in counts {
            let expected = N / 3;
            assert!(count.abs_diff(expected) < N / 30, "{choice:?} thrown {count} times");
        }
    }

    #[test]
    fn wraps_any_rng() {
        let ref mut fish = Fish::from(rand::rngs::StdRng::seed_from_u64(1));
        assert!(Choice::all().contains(&fish.throw()));
    }
}
