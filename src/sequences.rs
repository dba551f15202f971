// Small pipelines over literal values: integer sorting, ranges and bounded iteration

pub fn sorted_ints(values: &[i32]) -> Vec<i32> {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    sorted
}

/// Half-open range `[start, end)`; empty when `start >= end`.
pub fn range(start: i32, end: i32) -> Vec<i32> {
    (start..end).collect()
}

/// The first `limit` values of `seed, step(seed), step(step(seed)), ...`
/// `step` runs only for values that are returned.
pub fn iterate<T, F>(seed: T, step: F, limit: usize) -> Vec<T>
where
    F: Fn(&T) -> T,
{
    let mut values = Vec::with_capacity(limit);
    let mut current = seed;
    for _ in 1..limit {
        let next = step(&current);
        values.push(std::mem::replace(&mut current, next));
    }
    if limit > 0 {
        values.push(current);
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_sorted_ints() {
        let input = [1, 3, 2, 5, 4];
        assert_eq!(sorted_ints(&input), vec![1, 2, 3, 4, 5]);
        assert_eq!(input, [1, 3, 2, 5, 4]);
    }

    #[test_case(1, 10, 9; "one to ten")]
    #[test_case(5, 5, 0; "empty when bounds meet")]
    #[test_case(7, 3, 0; "empty when reversed")]
    fn test_range_length(start: i32, end: i32, expected_len: usize) {
        assert_eq!(range(start, end).len(), expected_len);
    }

    #[test]
    fn test_range_excludes_end() {
        assert_eq!(range(1, 4), vec![1, 2, 3]);
    }

    #[test]
    fn test_iterate_counts_from_seed() {
        assert_eq!(iterate(0, |n| n + 1, 10), (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_iterate_with_zero_limit() {
        assert!(iterate(1, |n| n * 2, 0).is_empty());
    }

    #[test]
    fn test_iterate_stops_stepping_at_limit() {
        assert_eq!(iterate(i32::MAX, |n| n + 1, 1), vec![i32::MAX]);
        assert_eq!(iterate(i32::MAX - 1, |n| n + 1, 2), vec![i32::MAX - 1, i32::MAX]);
    }

    #[test]
    fn test_iterate_doubling() {
        assert_eq!(iterate(1u64, |n| n * 2, 5), vec![1, 2, 4, 8, 16]);
    }
}
