//! Terminal operation tests: collection targets and reductions

mod test_data_gen;

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

use sluice::prelude::*;
use test_data_gen::counting;

/// Collection target that remembers the capacity it was created with.
struct Recording {
    capacity: usize,
    items: Vec<i32>,
}

impl CollectTarget<i32> for Recording {
    fn with_capacity_hint(capacity: usize) -> Self {
        Recording {
            capacity,
            items: Vec::new(),
        }
    }

    fn insert(&mut self, item: i32) {
        self.items.push(item);
    }
}

#[test]
fn test_collect_into_std_containers() {
    let v: Vec<i32> = range(0, 3, 1).unwrap().collect_into();
    assert_eq!(v, vec![0, 1, 2]);

    let dq: VecDeque<i32> = range(0, 3, 1).unwrap().collect_into();
    assert_eq!(dq.front(), Some(&0));

    let set: BTreeSet<i32> = from_owned(vec![3, 1, 3, 2]).collect_into();
    assert_eq!(set.into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);

    let hs: HashSet<i32> = from_owned(vec![1, 1, 1]).collect_into();
    assert_eq!(hs.len(), 1);

    let word: String = from_iter("hello".chars()).filter(|c| *c != 'l').collect_into();
    assert_eq!(word, "heo");
}

#[test]
fn test_collect_into_maps_last_value_wins() {
    let pairs = vec![("a", 1), ("b", 2), ("a", 3)];
    let m: BTreeMap<&str, i32> = from_owned(pairs.clone()).collect_into();
    assert_eq!(m.get("a"), Some(&3));
    assert_eq!(m.len(), 2);

    let h: HashMap<&str, i32> = from_owned(pairs).collect_into();
    assert_eq!(h["a"], 3);
}

#[test]
fn test_collect_with_caps_reservation() {
    let cfg = PipeConfig {
        max_reserve: 4,
        ..PipeConfig::default()
    };
    let big: Recording = range(0, 100, 1).unwrap().collect_with(&cfg);
    assert_eq!(big.capacity, 4);
    assert_eq!(big.items.len(), 100);

    let small: Recording = range(0, 3, 1).unwrap().collect_with(&cfg);
    assert_eq!(small.capacity, 3);

    let endless: Recording = repeat(1).take_n(2).collect_with(&cfg);
    assert_eq!(endless.capacity, 2);
    assert_eq!(endless.items, vec![1, 1]);
}

#[test]
fn test_extend_into_appends() {
    let mut out = vec![0];
    range(1, 4, 1).unwrap().extend_into(&mut out);
    assert_eq!(out, vec![0, 1, 2, 3]);
}

#[test]
fn test_unzip_and_string_join() {
    let (nums, chars): (Vec<i32>, Vec<char>) =
        from_owned(vec![(1, 'x'), (2, 'y')]).unzip();
    assert_eq!(nums, vec![1, 2]);
    assert_eq!(chars, vec!['x', 'y']);

    assert_eq!(range(1, 4, 1).unwrap().string_join(", "), "1, 2, 3");
    assert_eq!(empty::<i32>().string_join(", "), "");
}

struct Tag(&'static str);

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{}>", self.0)
    }
}

#[test]
fn test_string_join_uses_display() {
    let tags = from_owned(vec![Tag("a"), Tag("b"), Tag("c")]);
    assert_eq!(tags.string_join(""), "<a><b><c>");
    assert_eq!(from_owned(vec![1.5, -0.25]).string_join(" | "), "1.5 | -0.25");
    assert_eq!(once(Tag("solo")).string_join(", "), "<solo>");
}

#[test]
fn test_counting_terminals() {
    assert_eq!(range(0, 10, 1).unwrap().count(), 10);
    assert_eq!(range(0, 10, 1).unwrap().count_where(|x| x % 4 == 0), 3);
}

#[test]
fn test_search_terminals_stop_early() {
    let (mut pipe, pulls) = counting(100);
    assert_eq!(pipe.find(|x| *x == 5), Some(5));
    assert_eq!(pulls.get(), 6);
    // The pipe is left positioned after the match.
    assert_eq!(pipe.next(), Some(6));

    let data = vec!["a", "b", "c"];
    assert_eq!(from_ref(&data).position_of(&&"c"), Some(2));
    assert_eq!(from_ref(&data).position_of(&&"z"), None);
    assert_eq!(from_ref(&data).find_idx(|s| **s == "b"), Some(1));

    assert!(range(0, 5, 1).unwrap().any(|x| x == 4));
    assert!(!range(0, 5, 1).unwrap().all(|x| x < 4));
    assert!(empty::<i32>().all(|_| false));
}

#[test]
fn test_last_and_nth() {
    assert_eq!(range(0, 5, 1).unwrap().last(), Some(4));
    assert_eq!(empty::<u8>().last(), None);

    let mut r = range(0, 10, 2).unwrap();
    assert_eq!(r.nth(2), Some(4));
    assert_eq!(r.nth(0), Some(6));
    assert_eq!(r.nth(5), None);
}

#[test]
fn test_min_max_tie_breaking() {
    let people = vec![("ann", 30), ("bob", 25), ("cid", 30), ("dee", 25)];
    let youngest = from_ref(&people).min_by_key(|p| p.1).unwrap();
    assert_eq!(youngest.0, "bob");
    let oldest = from_ref(&people).max_by_key(|p| p.1).unwrap();
    assert_eq!(oldest.0, "cid");

    assert_eq!(from_owned(vec![3, 1, 2]).min(), Some(1));
    assert_eq!(from_owned(vec![3, 1, 2]).max(), Some(3));
    assert_eq!(empty::<i32>().min(), None);
}

#[test]
fn test_sum_mean_reduce_fold() {
    assert_eq!(range(1, 5, 1).unwrap().sum(), Some(10));
    assert_eq!(empty::<i32>().sum(), None);

    assert_eq!(from_owned(vec![1u8, 2, 3, 4]).mean(), Some(2.5));
    assert_eq!(empty::<f32>().mean(), None);
}

#[test]
fn test_mean_over_wide_integers() {
    assert_eq!(from_owned(vec![10i64, -20, 40]).mean(), Some(10.0));
    assert_eq!(from_owned(vec![u64::MAX, u64::MAX]).mean(), Some(u64::MAX as f64));
    assert_eq!(range(0usize, 5, 1).unwrap().mean(), Some(2.0));
    assert_eq!(from_owned(vec![-3i128, 4]).mean(), Some(0.5));
    assert_eq!(empty::<isize>().mean(), None);
    assert_eq!(7u128.as_f64(), 7.0);

    assert_eq!(range(1, 5, 1).unwrap().reduce(|a, b| a * b), Some(24));
    let text = range(0, 3, 1)
        .unwrap()
        .fold(String::new(), |mut s, x| {
            s.push_str(&x.to_string());
            s
        });
    assert_eq!(text, "012");
}

#[test]
fn test_try_fold_short_circuits() {
    let (pipe, pulls) = counting(10);
    let total = pipe
        .map(|x| if x < 3 { Ok(x) } else { Err(format!("too big: {}", x)) })
        .try_fold(0, |acc, x| acc + x);
    assert_eq!(total, Err(String::from("too big: 3")));
    assert_eq!(pulls.get(), 4);

    let ok = from_owned(vec![Ok::<usize, String>(1), Ok(2)]).try_fold(0, |a, x| a + x);
    assert_eq!(ok, Ok(3));
}

#[test]
fn test_by_ref_drains_a_prefix() {
    let mut r = range(0, 6, 1).unwrap();
    let head: Vec<i32> = r.by_ref().take_n(2).collect_into();
    let rest: Vec<i32> = r.collect_into();
    assert_eq!(head, vec![0, 1]);
    assert_eq!(rest, vec![2, 3, 4, 5]);
}
