//! Eager grouping by key.
//!
//! The whole input is read on the first pull. Groups come out in the order
//! their key first appeared, each holding its elements in input order.
//! Keys are only compared for equality, so output order never depends on
//! hashing.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use sluice_core::pipe::{IterValue, Pipe};
use sluice_core::size_hint::SizeHint;

use crate::trace;

pub struct GroupBy<P: Pipe, F, K> {
    input: Option<P>,
    key_fn: F,
    groups: std::vec::IntoIter<(K, Vec<P::Item>)>,
}

impl<P: Pipe, F, K> GroupBy<P, F, K> {
    pub fn new(input: P, key_fn: F) -> Self {
        Self {
            input: Some(input),
            key_fn,
            groups: Vec::new().into_iter(),
        }
    }
}

impl<P: Pipe + fmt::Debug, F, K> fmt::Debug for GroupBy<P, F, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroupBy")
            .field("input", &self.input)
            .field("groups_left", &self.groups.len())
            .finish()
    }
}

impl<P, F, K> GroupBy<P, F, K>
where
    P: Pipe,
    F: FnMut(&P::Item) -> K,
    K: Hash + Eq + Clone,
{
    fn materialize(&mut self) {
        let Some(mut input) = self.input.take() else {
            return;
        };
        let mut slots: HashMap<K, usize> = HashMap::new();
        let mut groups: Vec<(K, Vec<P::Item>)> = Vec::new();
        let mut elements = 0usize;

        while let Some(item) = input.next() {
            elements += 1;
            let key = (self.key_fn)(&item);
            match slots.get(&key) {
                Some(&slot) => groups[slot].1.push(item),
                None => {
                    slots.insert(key.clone(), groups.len());
                    groups.push((key, vec![item]));
                }
            }
        }

        trace::materialized(
            "group_by",
            &[("elements", elements), ("groups", groups.len())],
        );
        self.groups = groups.into_iter();
    }
}

impl<P, F, K> Pipe for GroupBy<P, F, K>
where
    P: Pipe,
    F: FnMut(&P::Item) -> K,
    K: Hash + Eq + Clone,
{
    type Item = (K, Vec<P::Item>);

    fn next(&mut self) -> IterValue<Self::Item> {
        self.materialize();
        self.groups.next()
    }

    fn size_hint(&self) -> SizeHint {
        match &self.input {
            // n elements form between min(n, 1) and n groups.
            Some(input) => {
                let hint = input.size_hint();
                SizeHint::new(hint.lower.min(1), hint.upper)
            }
            None => SizeHint::exact(self.groups.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sluice_core::source::from_iter;

    #[test]
    fn test_groups_in_first_occurrence_order() {
        let mut g = GroupBy::new(from_iter(1..=6), |x: &i32| x % 2);
        assert_eq!(g.size_hint(), SizeHint::new(1, Some(6)));
        assert_eq!(g.next(), Some((1, vec![1, 3, 5])));
        assert_eq!(g.size_hint(), SizeHint::exact(1));
        assert_eq!(g.next(), Some((0, vec![2, 4, 6])));
        assert_eq!(g.next(), None);
    }

    #[test]
    fn test_empty_input_has_no_groups() {
        let mut g = GroupBy::new(from_iter(Vec::<String>::new()), |s: &String| s.len());
        assert_eq!(g.size_hint(), SizeHint::exact(0));
        assert_eq!(g.next(), None);
    }

    #[test]
    fn test_string_keys() {
        let words = vec!["apple", "bean", "avocado", "beet", "corn"];
        let mut g = GroupBy::new(from_iter(words), |w: &&str| w.chars().next());
        assert_eq!(g.next(), Some((Some('a'), vec!["apple", "avocado"])));
        assert_eq!(g.next(), Some((Some('b'), vec!["bean", "beet"])));
        assert_eq!(g.next(), Some((Some('c'), vec!["corn"])));
    }
}
