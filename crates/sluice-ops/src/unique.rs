//! Deduplication by key, keeping the first occurrence.

use std::collections::HashSet;
use std::hash::Hash;

use sluice_core::pipe::{IterValue, Pipe};
use sluice_core::size_hint::SizeHint;

/// Lazily drops every element whose key was already seen. The seen-set
/// grows with the number of distinct keys.
pub struct Unique<P, F, K> {
    input: P,
    key_fn: F,
    seen: HashSet<K>,
    done: bool,
}

impl<P, F, K> Unique<P, F, K> {
    pub fn new(input: P, key_fn: F) -> Self {
        Self {
            input,
            key_fn,
            seen: HashSet::new(),
            done: false,
        }
    }

    pub fn distinct_seen(&self) -> usize {
        self.seen.len()
    }
}

impl<P, F, K> Pipe for Unique<P, F, K>
where
    P: Pipe,
    F: FnMut(&P::Item) -> K,
    K: Hash + Eq,
{
    type Item = P::Item;

    fn next(&mut self) -> IterValue<P::Item> {
        if self.done {
            return None;
        }
        while let Some(item) = self.input.next() {
            if self.seen.insert((self.key_fn)(&item)) {
                return Some(item);
            }
        }
        self.done = true;
        None
    }

    fn size_hint(&self) -> SizeHint {
        if self.done {
            return SizeHint::exact(0);
        }
        self.input.size_hint().unbounded_below()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sluice_core::source::from_iter;

    #[test]
    fn test_identity_key_keeps_first_occurrences() {
        let mut u = Unique::new(from_iter(vec![1, 2, 3, 2, 1]), |x: &i32| *x);
        assert_eq!(u.size_hint(), SizeHint::new(0, Some(5)));
        let mut out = Vec::new();
        while let Some(x) = u.next() {
            out.push(x);
        }
        assert_eq!(out, vec![1, 2, 3]);
        assert_eq!(u.distinct_seen(), 3);
    }

    #[test]
    fn test_derived_key() {
        let mut u = Unique::new(from_iter(vec!["a", "bb", "cc", "d"]), |s: &&str| s.len());
        assert_eq!(u.next(), Some("a"));
        assert_eq!(u.next(), Some("bb"));
        assert_eq!(u.next(), None);
    }
}
