use rand::seq::SliceRandom;
use rand::Rng;

pub const MIN_SAMPLE: usize = 5;
pub const MAX_SAMPLE: usize = 15;

/// Случайная выборка для витрины каталога: от 5 до 15 элементов, но не
/// больше, чем есть. Источник случайности передаётся явно.
pub fn sample<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    if items.is_empty() {
        return Vec::new();
    }
    let size = rng.gen_range(MIN_SAMPLE..=MAX_SAMPLE).min(items.len());
    items.choose_multiple(rng, size).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_sample_size_is_bounded() {
        let items: Vec<u32> = (0..100).collect();
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let picked = sample(&items, &mut rng);
            assert!((MIN_SAMPLE..=MAX_SAMPLE).contains(&picked.len()));

            let unique: HashSet<u32> = picked.iter().copied().collect();
            assert_eq!(unique.len(), picked.len());
        }
    }

    #[test]
    fn test_small_catalog_returns_everything() {
        let items = vec!["a", "b", "c"];
        let mut rng = StdRng::seed_from_u64(7);
        let mut picked = sample(&items, &mut rng);
        picked.sort();
        assert_eq!(picked, items);
    }

    #[test]
    fn test_same_seed_same_sample() {
        let items: Vec<u32> = (0..40).collect();
        let first = sample(&items, &mut StdRng::seed_from_u64(42));
        let second = sample(&items, &mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_catalog() {
        let items: Vec<u32> = Vec::new();
        assert!(sample(&items, &mut StdRng::seed_from_u64(1)).is_empty());
    }
}
