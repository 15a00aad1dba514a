//! Deterministic Fisher–Yates shuffle.

use crate::generator::Draw;

/// Permutes `items` in place.
///
/// Walks `i` from the last index down to 1, swapping with `draw(i + 1)`.
/// Slices shorter than two elements consume no draws.
pub fn shuffle<T, D: Draw>(items: &mut [T], rng: &mut D) {
    for i in (1..items.len()).rev() {
        let j = rng.draw(i + 1);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{ScriptedDraw, Xorshift32};

    #[test]
    fn test_known_permutation() {
        let mut rng = Xorshift32::new(42);
        let mut items: Vec<u32> = (0..8).collect();

        shuffle(&mut items, &mut rng);

        assert_eq!(items, vec![4, 6, 5, 7, 1, 3, 2, 0]);
    }

    #[test]
    fn test_draw_bounds_descend() {
        let mut rng = ScriptedDraw::new(vec![0, 0, 0]);
        let mut items = [b'a', b'b', b'c', b'd'];

        shuffle(&mut items, &mut rng);

        assert_eq!(rng.bounds, vec![4, 3, 2]);
        // Swaps (3,0), (2,0), (1,0) on "abcd".
        assert_eq!(&items, b"bcda");
    }

    #[test]
    fn test_short_slices_untouched() {
        let mut rng = ScriptedDraw::new(vec![]);

        let mut empty: [u8; 0] = [];
        shuffle(&mut empty, &mut rng);

        let mut single = [b'x'];
        shuffle(&mut single, &mut rng);

        assert_eq!(single, [b'x']);
        assert!(rng.bounds.is_empty());
    }

    #[test]
    fn test_is_permutation() {
        let mut rng = Xorshift32::new(0xfeed);
        let mut items: Vec<u16> = (0..100).collect();

        shuffle(&mut items, &mut rng);

        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..100).collect::<Vec<u16>>());
        assert_ne!(items, sorted);
    }
}
