use std::cmp::Ordering;

/// Looks up `target` in a sorted slice.
///
/// Returns the index of an occurrence of `target`, or `None` if it is
/// absent. Which index comes back when `target` occurs more than once is
/// unspecified.
///
/// The slice must be sorted ascending. That is a precondition, not a
/// checked invariant; an unsorted slice yields an arbitrary result.
///
/// ```
/// use textbook::algorithms::binary_search::binary_search;
///
/// let items = [1, 3, 5, 7, 9];
/// assert_eq!(binary_search(&items, &7), Some(3));
/// assert_eq!(binary_search(&items, &4), None);
/// ```
#[must_use]
pub fn binary_search<T>(items: &[T], target: &T) -> Option<usize>
where
    T: Ord,
{
    let mut lo = 0;
    let mut hi = items.len();

    // Candidates live in the half-open range [lo, hi).
    while lo < hi {
        let mid = lo + (hi - lo) / 2;

        match items[mid].cmp(target) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid,
        }
    }

    None
}
