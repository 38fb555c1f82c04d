/// Sorts a slice into a new vector.
///
/// Merge sort: split at the midpoint, sort both halves, merge them back
/// together. Stable, non-destructive, O(n log n) time.
///
/// ```
/// use textbook::algorithms::merge_sort::merge_sort;
///
/// assert_eq!(merge_sort(&[9, 1, 8, 2]), vec![1, 2, 8, 9]);
/// ```
#[must_use]
pub fn merge_sort<T>(items: &[T]) -> Vec<T>
where
    T: Ord + Clone,
{
    if items.len() <= 1 {
        return items.to_vec();
    }

    let (left, right) = items.split_at(items.len() / 2);
    merge(&merge_sort(left), &merge_sort(right))
}

/// Merges two sorted slices into one sorted vector.
///
/// Equal elements are taken from `left` first, which is what keeps the sort
/// stable.
#[must_use]
pub fn merge<T>(left: &[T], right: &[T]) -> Vec<T>
where
    T: Ord + Clone,
{
    debug_assert!(left.is_sorted());
    debug_assert!(right.is_sorted());

    let mut merged = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);

    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            merged.push(left[i].clone());
            i += 1;
        } else {
            merged.push(right[j].clone());
            j += 1;
        }
    }

    // At most one of the two runs still has elements.
    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);

    merged
}
