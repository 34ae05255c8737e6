//! Selection sort over a queue, driven by a caller-supplied comparator.

use std::cmp::Ordering;
use std::collections::VecDeque;

/// Byte-wise lexicographic order, the default ordering for terms.
///
/// Compares UTF-8 bytes, which is code point order. This differs from UTF-16
/// code unit order only between U+E000..=U+FFFF and characters above U+FFFF.
pub fn lexicographic<S: AsRef<str>>(a: &S, b: &S) -> Ordering {
    a.as_ref().cmp(b.as_ref())
}

/// Removes and returns the minimum element of `queue` under `order`.
///
/// When several elements compare equal to the minimum, the earliest one is
/// removed. Every other element keeps its relative position. Returns `None`
/// for an empty queue.
pub fn remove_minimum<T, F>(queue: &mut VecDeque<T>, mut order: F) -> Option<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut min_idx = 0;
    for idx in 1..queue.len() {
        if order(&queue[idx], &queue[min_idx]) == Ordering::Less {
            min_idx = idx;
        }
    }
    queue.remove(min_idx)
}

/// Sorts `queue` in place so that no adjacent pair compares `Greater`.
///
/// `order` must define a total preorder. Quadratic in the queue length.
pub fn sort_by<T, F>(queue: &mut VecDeque<T>, mut order: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut sorted = VecDeque::with_capacity(queue.len());
    while let Some(min) = remove_minimum(queue, &mut order) {
        sorted.push_back(min);
    }
    *queue = sorted;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn queue(items: &[&str]) -> VecDeque<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn is_sorted<F>(items: &VecDeque<String>, mut order: F) -> bool
    where
        F: FnMut(&String, &String) -> Ordering,
    {
        items
            .iter()
            .zip(items.iter().skip(1))
            .all(|(a, b)| order(a, b) != Ordering::Greater)
    }

    #[test]
    fn remove_minimum_with_duplicates_behind_it() {
        let mut q = queue(&["Apple", "Build", "Build"]);
        assert_eq!(remove_minimum(&mut q, lexicographic).as_deref(), Some("Apple"));
        assert_eq!(q, queue(&["Build", "Build"]));
    }

    #[test]
    fn remove_minimum_keeps_remaining_order() {
        let mut q = queue(&["Compile", "Algorithm", "Binary", "Delta"]);
        assert_eq!(remove_minimum(&mut q, lexicographic).as_deref(), Some("Algorithm"));
        assert_eq!(q, queue(&["Compile", "Binary", "Delta"]));
    }

    #[test]
    fn remove_minimum_single_element() {
        let mut q = queue(&["Science"]);
        assert_eq!(remove_minimum(&mut q, lexicographic).as_deref(), Some("Science"));
        assert!(q.is_empty());
    }

    #[test]
    fn remove_minimum_empty_queue() {
        let mut q: VecDeque<String> = VecDeque::new();
        assert_eq!(remove_minimum(&mut q, lexicographic), None);
    }

    #[test]
    fn remove_minimum_takes_earliest_of_equal_elements() {
        let mut q = queue(&["b", "Apple", "apple", "c"]);
        let removed = remove_minimum(&mut q, |a, b| a.to_lowercase().cmp(&b.to_lowercase()));
        assert_eq!(removed.as_deref(), Some("Apple"));
        assert_eq!(q, queue(&["b", "apple", "c"]));
    }

    #[test]
    fn sorts_lexicographically() {
        let mut q = queue(&["Banana", "Apple", "Cherry"]);
        sort_by(&mut q, lexicographic);
        assert_eq!(q, queue(&["Apple", "Banana", "Cherry"]));
    }

    #[test]
    fn sorting_keeps_duplicates() {
        let mut q = queue(&["Same", "Same"]);
        sort_by(&mut q, lexicographic);
        assert_eq!(q, queue(&["Same", "Same"]));

        let mut q = queue(&["Soccer", "Football", "Football"]);
        sort_by(&mut q, lexicographic);
        assert_eq!(q, queue(&["Football", "Football", "Soccer"]));
    }

    #[test]
    fn sorting_empty_queue_is_a_no_op() {
        let mut q: VecDeque<String> = VecDeque::new();
        sort_by(&mut q, lexicographic);
        assert!(q.is_empty());
    }

    #[test]
    fn uppercase_sorts_before_lowercase() {
        let mut q = queue(&["banana", "Cherry", "apple", "Banana"]);
        sort_by(&mut q, lexicographic);
        assert_eq!(q, queue(&["Banana", "Cherry", "apple", "banana"]));
    }

    #[test]
    fn order_is_by_code_point() {
        assert_eq!(lexicographic(&"\u{FFFD}", &"\u{1F600}"), Ordering::Less);
        assert_eq!(lexicographic(&"é", &"z"), Ordering::Greater);
    }

    #[test]
    fn custom_comparator_reverses_order() {
        let mut q = queue(&["Basketball", "Tennis", "Soccer"]);
        sort_by(&mut q, |a, b| b.cmp(a));
        assert_eq!(q, queue(&["Tennis", "Soccer", "Basketball"]));
    }

    #[test]
    fn result_is_sorted_permutation() {
        let inputs: [&[&str]; 5] = [
            &["delta", "alpha", "charlie", "bravo", "alpha"],
            &["z"],
            &["b", "a"],
            &["same", "same", "same"],
            &["Zeta", "eta", "Theta", "iota", "Kappa", "lambda", "Mu"],
        ];
        for input in inputs {
            let mut q = queue(input);
            sort_by(&mut q, lexicographic);
            assert!(is_sorted(&q, lexicographic));

            let mut expected: Vec<_> = input.iter().map(|s| s.to_string()).collect();
            expected.sort();
            let mut actual: Vec<_> = q.into_iter().collect();
            actual.sort();
            assert_eq!(actual, expected);
        }
    }

    #[test]
    fn sorts_non_string_items() {
        let mut q: VecDeque<(u32, &str)> = VecDeque::from(vec![(3, "c"), (1, "a"), (2, "b")]);
        sort_by(&mut q, |a, b| a.0.cmp(&b.0));
        assert_eq!(q, VecDeque::from(vec![(1, "a"), (2, "b"), (3, "c")]));
    }
}
