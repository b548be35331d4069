//! Collection targets for the `collect_*` terminals.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::hash::Hash;

/// A container a pipe can be drained into.
///
/// `with_capacity_hint` receives the upstream size hint already capped by
/// `PipeConfig::max_reserve`; containers without a capacity notion ignore it.
pub trait CollectTarget<T>: Sized {
    fn with_capacity_hint(capacity: usize) -> Self;

    /// Make room for about `additional` more items before an extend.
    fn reserve_hint(&mut self, _additional: usize) {}

    fn insert(&mut self, item: T);
}

impl<T> CollectTarget<T> for Vec<T> {
    fn with_capacity_hint(capacity: usize) -> Self {
        Vec::with_capacity(capacity)
    }

    fn reserve_hint(&mut self, additional: usize) {
        self.reserve(additional);
    }

    fn insert(&mut self, item: T) {
        self.push(item);
    }
}

impl<T> CollectTarget<T> for VecDeque<T> {
    fn with_capacity_hint(capacity: usize) -> Self {
        VecDeque::with_capacity(capacity)
    }

    fn reserve_hint(&mut self, additional: usize) {
        self.reserve(additional);
    }

    fn insert(&mut self, item: T) {
        self.push_back(item);
    }
}

impl CollectTarget<char> for String {
    fn with_capacity_hint(capacity: usize) -> Self {
        String::with_capacity(capacity)
    }

    fn reserve_hint(&mut self, additional: usize) {
        self.reserve(additional);
    }

    fn insert(&mut self, item: char) {
        self.push(item);
    }
}

// Pieces have unknown length, so the hint is not used for string slices.
impl<'a> CollectTarget<&'a str> for String {
    fn with_capacity_hint(_capacity: usize) -> Self {
        String::new()
    }

    fn insert(&mut self, item: &'a str) {
        self.push_str(item);
    }
}

impl CollectTarget<String> for String {
    fn with_capacity_hint(_capacity: usize) -> Self {
        String::new()
    }

    fn insert(&mut self, item: String) {
        self.push_str(&item);
    }
}

impl<T: Hash + Eq> CollectTarget<T> for HashSet<T> {
    fn with_capacity_hint(capacity: usize) -> Self {
        HashSet::with_capacity(capacity)
    }

    fn reserve_hint(&mut self, additional: usize) {
        self.reserve(additional);
    }

    fn insert(&mut self, item: T) {
        HashSet::insert(self, item);
    }
}

impl<T: Ord> CollectTarget<T> for BTreeSet<T> {
    fn with_capacity_hint(_capacity: usize) -> Self {
        BTreeSet::new()
    }

    fn insert(&mut self, item: T) {
        BTreeSet::insert(self, item);
    }
}

/// Later pairs overwrite earlier ones with the same key.
impl<K: Hash + Eq, V> CollectTarget<(K, V)> for HashMap<K, V> {
    fn with_capacity_hint(capacity: usize) -> Self {
        HashMap::with_capacity(capacity)
    }

    fn reserve_hint(&mut self, additional: usize) {
        self.reserve(additional);
    }

    fn insert(&mut self, (key, value): (K, V)) {
        HashMap::insert(self, key, value);
    }
}

impl<K: Ord, V> CollectTarget<(K, V)> for BTreeMap<K, V> {
    fn with_capacity_hint(_capacity: usize) -> Self {
        BTreeMap::new()
    }

    fn insert(&mut self, (key, value): (K, V)) {
        BTreeMap::insert(self, key, value);
    }
}
