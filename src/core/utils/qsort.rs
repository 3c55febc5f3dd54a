//! Generic ascending sort primitives used for feature preparation.
//!
//! Three variants share one partition-exchange core: an in-place sort, an
//! index-producing sort returning the permutation that orders the input, and
//! a paired co-sort that reorders a second array by the permutation sorting
//! a driving key array. All three run over an explicit stack of index ranges
//! instead of recursion, so memory stays O(n) even on adversarial inputs.
//!
//! None of the variants is stable: equal keys may be reordered. Every call
//! site in this crate needs only a total ascending order, never a specific
//! tie-break.

/// Single-pivot Lomuto partition driven by an explicit range stack.
///
/// `co` is invoked with the same index pairs that get swapped in `arr`, so a
/// caller can mirror the permutation into a parallel array.
fn quicksort_by<T, F>(arr: &mut [T], mut co: F)
where
    T: PartialOrd + Copy,
    F: FnMut(usize, usize),
{
    if arr.len() < 2 {
        return;
    }
    let mut stack: Vec<(usize, usize)> = vec![(0, arr.len() - 1)];
    while let Some((lo, hi)) = stack.pop() {
        // Last element as pivot.
        let pivot = arr[hi];
        let mut i = lo;
        for j in lo..hi {
            if arr[j] < pivot {
                arr.swap(i, j);
                co(i, j);
                i += 1;
            }
        }
        arr.swap(i, hi);
        co(i, hi);
        if i > lo + 1 {
            stack.push((lo, i - 1));
        }
        if i + 1 < hi {
            stack.push((i + 1, hi));
        }
    }
}

/// Sort `arr` ascending in place.
pub fn sort<T: PartialOrd + Copy>(arr: &mut [T]) {
    quicksort_by(arr, |_, _| {});
}

/// Return the permutation that sorts `arr` ascending, without mutating it.
///
/// The result `idx` satisfies `arr[idx[0]] <= arr[idx[1]] <= ...` and is a
/// bijection on `0..arr.len()`.
pub fn argsort<T: PartialOrd + Copy>(arr: &[T]) -> Vec<u32> {
    let mut keys = arr.to_vec();
    let mut idx: Vec<u32> = (0..arr.len() as u32).collect();
    quicksort_by(&mut keys, |i, j| idx.swap(i, j));
    idx
}

/// Return a copy of `ext` reordered by the permutation that sorts `keys`
/// ascending. Neither input is mutated.
///
/// # Panics
///
/// Panics if the two slices differ in length.
pub fn cosort<T, U>(keys: &[T], ext: &[U]) -> Vec<U>
where
    T: PartialOrd + Copy,
    U: Copy,
{
    assert_eq!(
        keys.len(),
        ext.len(),
        "cosort requires equal-length key and external arrays"
    );
    let mut keys = keys.to_vec();
    let mut out = ext.to_vec();
    quicksort_by(&mut keys, |i, j| out.swap(i, j));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_in_place() {
        let mut arr = vec![3.0_f32, 1.0, 4.0, 1.5, 5.0, 9.0, 2.6];
        sort(&mut arr);
        assert_eq!(arr, vec![1.0, 1.5, 2.6, 3.0, 4.0, 5.0, 9.0]);
    }

    #[test]
    fn test_sort_trivial_inputs() {
        let mut empty: Vec<f32> = vec![];
        sort(&mut empty);
        assert!(empty.is_empty());

        let mut one = vec![7.0_f32];
        sort(&mut one);
        assert_eq!(one, vec![7.0]);
    }

    #[test]
    fn test_sort_adversarial_descending() {
        // Worst case for last-element pivot; must still finish and be correct.
        let mut arr: Vec<f32> = (0..256).rev().map(|v| v as f32).collect();
        sort(&mut arr);
        for i in 1..arr.len() {
            assert!(arr[i - 1] <= arr[i]);
        }
    }

    #[test]
    fn test_argsort_does_not_mutate_and_orders() {
        let arr = vec![0.4_f32, 0.1, 0.9, 0.4];
        let idx = argsort(&arr);
        assert_eq!(arr, vec![0.4, 0.1, 0.9, 0.4]);
        for k in 1..idx.len() {
            assert!(arr[idx[k - 1] as usize] <= arr[idx[k] as usize]);
        }
        // Bijection on 0..n.
        let mut seen = idx.clone();
        seen.sort_unstable();
        assert_eq!(seen, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_argsort_matches_in_place_sort() {
        let arr = vec![5.5_f32, -1.0, 3.25, 0.0, 3.25, 8.0];
        let idx = argsort(&arr);
        let permuted: Vec<f32> = idx.iter().map(|&i| arr[i as usize]).collect();
        let mut sorted = arr.clone();
        sort(&mut sorted);
        assert_eq!(permuted, sorted);
    }

    #[test]
    fn test_cosort_reorders_external_array() {
        let keys = vec![2.0_f32, 0.5, 1.0];
        let ext = vec![20_u32, 5, 10];
        let out = cosort(&keys, &ext);
        assert_eq!(out, vec![5, 10, 20]);
        assert_eq!(keys, vec![2.0, 0.5, 1.0]);
        assert_eq!(ext, vec![20, 5, 10]);
    }

    #[test]
    fn test_cosort_tracks_every_index() {
        // The external array must follow the exact permutation applied to
        // the key array, index for index.
        let keys = vec![9.0_f32, 3.0, 7.0, 1.0, 5.0];
        let ext: Vec<usize> = (0..keys.len()).collect();
        let out = cosort(&keys, &ext);
        let mut sorted_keys = keys.clone();
        sort(&mut sorted_keys);
        for (pos, &orig) in out.iter().enumerate() {
            assert_eq!(keys[orig], sorted_keys[pos]);
        }
    }

    #[test]
    #[should_panic(expected = "equal-length")]
    fn test_cosort_length_mismatch_panics() {
        let _ = cosort(&[1.0_f32, 2.0], &[1_u32]);
    }
}
