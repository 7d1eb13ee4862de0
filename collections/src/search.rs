/// Binary search for the upper bound of `target` in a sorted slice.
///
/// Returns the number of bisection steps taken together with the smallest
/// element `>= target`, or `None` when every element is smaller. The slice
/// must be sorted in non-decreasing order.
pub fn upper_bound<'a, T: PartialOrd>(sorted: &'a [T], target: &T) -> (usize, Option<&'a T>) {
    let mut left = 0;
    let mut right = sorted.len();
    let mut iterations = 0;

    while left < right {
        iterations += 1;
        let mid = (left + right) / 2;
        if sorted[mid] < *target {
            left = mid + 1;
        } else {
            right = mid;
        }
    }

    (iterations, sorted.get(left))
}
