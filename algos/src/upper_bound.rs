#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UpperBound {
    /// Loop iterations the search took.
    pub iterations: usize,
    /// Smallest element >= target, None if every element is smaller.
    pub upper: Option<f64>,
}

/// Binary search over an ascending slice, reporting the iteration count and
/// the upper bound of `target`.
///
/// An exact hit returns immediately with the hit itself as the bound, so the
/// iteration count stops there rather than continuing to the leftmost equal
/// element.
pub fn upper_bound_search(sorted: &[f64], target: f64) -> UpperBound {
    let mut left = 0usize;
    let mut right = sorted.len();
    let mut iterations = 0;

    // `right` is one past the inclusive upper index; the midpoint is taken
    // over the inclusive range [left, right - 1].
    while left < right {
        iterations += 1;
        let mid = left + (right - 1 - left) / 2;
        let value = sorted[mid];

        if value == target {
            return UpperBound {
                iterations,
                upper: Some(value),
            };
        } else if value < target {
            left = mid + 1;
        } else {
            right = mid;
        }
    }

    UpperBound {
        iterations,
        upper: sorted.get(left).copied(),
    }
}
