use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::Catalog;

/// Return a uniformly shuffled copy of `catalog` (Fisher-Yates).
///
/// The input is left untouched.
pub fn shuffled<R: Rng + ?Sized>(catalog: &Catalog, rng: &mut R) -> Catalog {
    let mut snippets = catalog.to_vec();
    snippets.shuffle(rng);
    Catalog::from_unique(snippets)
}

/// Deterministic shuffle source carried inside the session state.
///
/// Each call derives an `StdRng` from the current seed and stores the next
/// seed, so replaying the same messages reproduces the same orderings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShuffleSeed(u64);

impl ShuffleSeed {
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    pub fn from_entropy() -> Self {
        Self(rand::random())
    }

    pub fn value(self) -> u64 {
        self.0
    }

    pub fn shuffle(&mut self, catalog: &Catalog) -> Catalog {
        let mut rng = StdRng::seed_from_u64(self.0);
        let next = shuffled(catalog, &mut rng);
        self.0 = rng.random();
        next
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::{shuffled, ShuffleSeed};
    use crate::test_support::catalog_of;
    use crate::Catalog;

    fn sorted_ids(catalog: &Catalog) -> Vec<String> {
        let mut ids: Vec<String> = catalog.iter().map(|s| s.id.clone()).collect();
        ids.sort();
        ids
    }

    #[test]
    fn shuffle_is_a_permutation_for_all_sizes() {
        let mut rng = StdRng::seed_from_u64(7);
        for size in [0, 1, 2, 25] {
            let catalog = catalog_of(size);
            let out = shuffled(&catalog, &mut rng);
            assert_eq!(out.len(), size);
            assert_eq!(sorted_ids(&out), sorted_ids(&catalog));
        }
    }

    #[test]
    fn shuffle_does_not_touch_input() {
        let catalog = catalog_of(10);
        let before = catalog.ids().iter().map(|id| id.to_string()).collect::<Vec<_>>();
        let mut seed = ShuffleSeed::new(3);
        let out = seed.shuffle(&catalog);
        assert!(!out.same_ordering(&catalog));
        assert_eq!(catalog.ids(), before);
    }

    #[test]
    fn seed_advances_and_is_reproducible() {
        let catalog = catalog_of(10);
        let mut a = ShuffleSeed::new(42);
        let mut b = ShuffleSeed::new(42);
        assert_eq!(a.shuffle(&catalog), b.shuffle(&catalog));
        assert_eq!(a, b);
        assert_ne!(a.value(), 42);
    }

    #[test]
    fn every_element_reaches_every_position() {
        // 3 elements, 6 permutations: each should show up with roughly equal
        // frequency; a rotation-only shuffle would produce just 3.
        let catalog = catalog_of(3);
        let mut rng = StdRng::seed_from_u64(11);
        let mut counts: HashMap<Vec<String>, usize> = HashMap::new();
        let rounds = 6_000;
        for _ in 0..rounds {
            let out = shuffled(&catalog, &mut rng);
            *counts
                .entry(out.iter().map(|s| s.id.clone()).collect())
                .or_default() += 1;
        }
        assert_eq!(counts.len(), 6);
        for count in counts.values() {
            assert!((700..1300).contains(count), "skewed count {count}");
        }
    }
}
