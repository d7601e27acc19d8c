//! Ordered-sequence helpers shared by the field and roadmap stages.

use im::Vector;

/// Move the element at `from` to `to`, shifting the elements between.
///
/// Returns `false` and leaves the sequence untouched when either index is
/// out of range.
///
/// ```
/// use im::vector;
/// use lifedeck::core::ordering::array_move;
///
/// let mut v = vector!['a', 'b', 'c', 'd'];
/// assert!(array_move(&mut v, 0, 2));
/// assert_eq!(v, vector!['b', 'c', 'a', 'd']);
///
/// assert!(!array_move(&mut v, 0, 4));
/// ```
pub fn array_move<T: Clone>(items: &mut Vector<T>, from: usize, to: usize) -> bool {
    let len = items.len();
    if from >= len || to >= len {
        return false;
    }
    if from != to {
        let item = items.remove(from);
        items.insert(to, item);
    }
    true
}

/// Insert at `index`, clamped to the end of the sequence.
pub fn insert_clamped<T: Clone>(items: &mut Vector<T>, index: usize, item: T) {
    let idx = index.min(items.len());
    items.insert(idx, item);
}

#[cfg(test)]
mod tests {
    use super::*;
    use im::vector;

    #[test]
    fn test_move_forward() {
        let mut v = vector![1, 2, 3, 4];
        assert!(array_move(&mut v, 1, 3));
        assert_eq!(v, vector![1, 3, 4, 2]);
    }

    #[test]
    fn test_move_backward() {
        let mut v = vector![1, 2, 3, 4];
        assert!(array_move(&mut v, 3, 0));
        assert_eq!(v, vector![4, 1, 2, 3]);
    }

    #[test]
    fn test_move_same_index() {
        let mut v = vector![1, 2, 3];
        assert!(array_move(&mut v, 1, 1));
        assert_eq!(v, vector![1, 2, 3]);
    }

    #[test]
    fn test_move_out_of_range() {
        let mut v = vector![1, 2, 3];
        assert!(!array_move(&mut v, 3, 0));
        assert!(!array_move(&mut v, 0, 7));
        assert_eq!(v, vector![1, 2, 3]);

        let mut empty: Vector<i32> = Vector::new();
        assert!(!array_move(&mut empty, 0, 0));
    }

    #[test]
    fn test_insert_clamped() {
        let mut v = vector![1, 2];
        insert_clamped(&mut v, 1, 9);
        assert_eq!(v, vector![1, 9, 2]);

        insert_clamped(&mut v, 100, 7);
        assert_eq!(v, vector![1, 9, 2, 7]);
    }
}
