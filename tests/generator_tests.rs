//! Generator bridge tests: values, faults and early abandonment

mod test_data_gen;

use std::cell::Cell;
use std::rc::Rc;

use sluice::prelude::*;
use test_data_gen::assert_stays_exhausted;

/// Yields the Fibonacci numbers below `limit`.
fn fib_below(limit: u64) -> impl Generator<Yield = u64, Error = String> {
    let (mut a, mut b) = (0u64, 1u64);
    gen_fn(move || -> Step<u64, String> {
        if a >= limit {
            return Step::Done;
        }
        let out = a;
        (a, b) = (b, a + b);
        Step::Yield(out)
    })
}

/// Sets a flag when dropped, standing in for a resource the generator holds.
struct Guard(Rc<Cell<bool>>);

impl Drop for Guard {
    fn drop(&mut self) {
        self.0.set(true);
    }
}

struct Lines {
    _guard: Guard,
    remaining: Vec<&'static str>,
}

impl Generator for Lines {
    type Yield = &'static str;
    type Error = String;

    fn resume(&mut self) -> Step<&'static str, String> {
        match self.remaining.pop() {
            Some("") => Step::Fault(String::from("empty line")),
            Some(line) => Step::Yield(line),
            None => Step::Done,
        }
    }

    fn size_hint(&self) -> SizeHint {
        SizeHint::exact(self.remaining.len())
    }
}

fn lines(remaining: Vec<&'static str>) -> (Lines, Rc<Cell<bool>>) {
    let released = Rc::new(Cell::new(false));
    let gen = Lines {
        _guard: Guard(released.clone()),
        remaining,
    };
    (gen, released)
}

#[test]
fn test_generator_values_flow_downstream() {
    let fibs: Vec<u64> = from_generator(fib_below(30)).try_collect().unwrap();
    assert_eq!(fibs, vec![0, 1, 1, 2, 3, 5, 8, 13, 21]);
}

#[test]
fn test_generator_composes_with_adaptors() {
    let evens: std::result::Result<Vec<u64>, String> = from_generator(fib_below(100))
        .filter(|r| matches!(r, Ok(v) if v % 2 == 0))
        .try_collect();
    assert_eq!(evens, Ok(vec![0, 2, 8, 34]));
}

#[test]
fn test_fault_reaches_the_consumer() {
    let (gen, released) = lines(vec!["c", "", "a"]);
    let mut seen = Vec::new();
    let result = from_generator(gen).try_for_each(|line| {
        seen.push(line);
        Ok(())
    });
    assert_eq!(result, Err(String::from("empty line")));
    assert_eq!(seen, vec!["a"]);
    assert!(released.get());
}

#[test]
fn test_bridge_is_exhausted_after_fault() {
    let (gen, released) = lines(vec!["z", "", "y"]);
    let mut pipe = from_generator(gen);
    assert_eq!(pipe.next(), Some(Ok("y")));
    assert_eq!(pipe.next(), Some(Err(String::from("empty line"))));
    assert!(pipe.is_finished());
    assert!(released.get());
    assert_stays_exhausted(&mut pipe);
}

#[test]
fn test_abandoned_generator_releases_its_state() {
    let (gen, released) = lines(vec!["d", "c", "b", "a"]);
    let mut pipe = from_generator(gen);
    assert_eq!(pipe.next(), Some(Ok("a")));
    assert!(!released.get());
    drop(pipe);
    assert!(released.get());
}

#[test]
fn test_take_stops_resuming_the_generator() {
    let resumed = Rc::new(Cell::new(0u32));
    let counter = resumed.clone();
    let gen = gen_fn(move || -> Step<u32, String> {
        counter.set(counter.get() + 1);
        Step::Yield(counter.get())
    });
    let out: Vec<u32> = from_generator(gen).take_n(3).try_collect().unwrap();
    assert_eq!(out, vec![1, 2, 3]);
    assert_eq!(resumed.get(), 3);
}

#[test]
fn test_generate_from_runs_one_generator_per_element() {
    let out: Vec<u32> = from_owned(vec![2u32, 0, 3])
        .generate_from(|n| {
            let mut i = 0;
            gen_fn(move || -> Step<u32, String> {
                i += 1;
                if i > n {
                    Step::Done
                } else {
                    Step::Yield(n * 10 + i)
                }
            })
        })
        .try_collect()
        .unwrap();
    assert_eq!(out, vec![21, 22, 31, 32, 33]);
}

#[test]
fn test_generate_from_stops_after_fault() {
    let (pipe, pulls) = test_data_gen::counting(10);
    let mut stage = pipe.generate_from(|n| {
        let mut fired = false;
        gen_fn(move || -> Step<usize, String> {
            if fired {
                return Step::Done;
            }
            fired = true;
            if n == 2 {
                Step::Fault(format!("bad input {}", n))
            } else {
                Step::Yield(n)
            }
        })
    });
    assert_eq!(stage.next(), Some(Ok(0)));
    assert_eq!(stage.next(), Some(Ok(1)));
    assert_eq!(stage.next(), Some(Err(String::from("bad input 2"))));
    assert_eq!(stage.next(), None);
    assert_eq!(pulls.get(), 3);
}
