//! Key-comparison capability injected by the storage engine.
//!
//! All overlap computations in this crate route through a [`KeyComparator`]
//! rather than raw byte ordering, so engines with custom key encodings
//! (composite keys, version suffixes, collations) keep their own order.

use std::cmp::Ordering;

/// Total order over opaque keys, supplied by the engine's configuration.
pub trait KeyComparator<K: ?Sized> {
    /// Compare two keys under the engine's order.
    fn compare(&self, a: &K, b: &K) -> Ordering;
}

/// Comparator delegating to the key type's own [`Ord`] instance.
#[derive(Clone, Copy, Debug, Default)]
pub struct OrdComparator;

impl<K: Ord + ?Sized> KeyComparator<K> for OrdComparator {
    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }
}

impl<K: ?Sized, F> KeyComparator<K> for F
where
    F: Fn(&K, &K) -> Ordering,
{
    fn compare(&self, a: &K, b: &K) -> Ordering {
        self(a, b)
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use super::{KeyComparator, OrdComparator};

    #[test]
    fn ord_comparator_follows_key_order() {
        assert_eq!(OrdComparator.compare(&1u64, &2u64), Ordering::Less);
        assert_eq!(OrdComparator.compare(&2u64, &2u64), Ordering::Equal);
        assert_eq!(OrdComparator.compare("b", "a"), Ordering::Greater);
    }

    #[test]
    fn closure_comparator_can_invert_order() {
        let reversed = |a: &u64, b: &u64| b.cmp(a);
        assert_eq!(reversed.compare(&1, &2), Ordering::Greater);
    }

    #[test]
    fn numeric_string_comparator_ignores_lexicographic_order() {
        // Mirrors engines whose keys are not byte-ordered.
        let numeric = |a: &str, b: &str| {
            let a: u64 = a.parse().unwrap();
            let b: u64 = b.parse().unwrap();
            a.cmp(&b)
        };
        assert_eq!(numeric.compare("9", "11"), Ordering::Less);
        assert!("9" > "11");
    }
}
