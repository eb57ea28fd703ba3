use num::traits::{CheckedAdd, One};
use std::iter::FusedIterator;
use std::mem;

/// Fibonacci terms `1, 2, 3, 5, 8, ...`, seeded with `(1, 2)`.
///
/// The sequence ends (returns `None`) at the first term above the bound, or
/// after the last term representable in `T` when unbounded. Copies are
/// independent, so a cloned `Fib` restarts from wherever it was cloned.
#[derive(Debug, Copy, Clone)]
pub struct Fib<T> {
    /// Number of terms yielded so far.
    pub i: u32,
    curr: Option<T>,
    next: Option<T>,
    bound: Option<T>,
}

impl<T> Fib<T>
where
    T: One + CheckedAdd,
{
    pub fn new() -> Fib<T> {
        Fib {
            i: 0,
            curr: Some(T::one()),
            next: T::one().checked_add(&T::one()),
            bound: None,
        }
    }

    /// Terms up to and including `bound`.
    pub fn up_to(bound: T) -> Fib<T> {
        Fib {
            bound: Some(bound),
            ..Fib::new()
        }
    }
}

impl<T> Default for Fib<T>
where
    T: One + CheckedAdd,
{
    fn default() -> Self {
        Fib::new()
    }
}

impl<T> Iterator for Fib<T>
where
    T: One + CheckedAdd + PartialOrd,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let curr = self.curr.take()?;
        if let Some(bound) = &self.bound {
            if curr > *bound {
                self.next = None;
                return None;
            }
        }

        // None once the sum overflows T; the sequence then drains the last term.
        let following = self.next.as_ref().and_then(|n| n.checked_add(&curr));
        self.curr = mem::replace(&mut self.next, following);
        self.i += 1;

        Some(curr)
    }
}

impl<T> FusedIterator for Fib<T> where T: One + CheckedAdd + PartialOrd {}

/// A fresh sequence of every Fibonacci term `<= bound`.
pub fn fibonacci_up_to(bound: u64) -> Fib<u64> {
    Fib::up_to(bound)
}

#[test]
fn fib_test() {
    let values: Vec<u32> = Fib::new().take(4).collect();
    assert_eq!(values, [1, 2, 3, 5]);
}

#[test]
fn stops_at_inclusive_bound() {
    let values: Vec<u64> = fibonacci_up_to(8).collect();
    assert_eq!(values, [1, 2, 3, 5, 8]);

    let values: Vec<u64> = fibonacci_up_to(12).collect();
    assert_eq!(values, [1, 2, 3, 5, 8]);
}

#[test]
fn empty_below_first_term() {
    assert_eq!(fibonacci_up_to(0).count(), 0);
    assert_eq!(fibonacci_up_to(1).collect::<Vec<_>>(), [1]);
}

#[test]
fn unbounded_ends_before_overflow() {
    let values: Vec<u8> = Fib::new().collect();
    assert_eq!(values, [1, 2, 3, 5, 8, 13, 21, 34, 55, 89, 144, 233]);

    let last = Fib::<u64>::new().last();
    assert_eq!(last, Some(12_200_160_415_121_876_738));
}

#[test]
fn stays_exhausted() {
    let mut fib = fibonacci_up_to(2);
    assert_eq!(fib.next(), Some(1));
    assert_eq!(fib.next(), Some(2));
    assert_eq!(fib.next(), None);
    assert_eq!(fib.next(), None);
    assert_eq!(fib.i, 2);
}

#[test]
fn fresh_sequence_per_call() {
    let mut first = fibonacci_up_to(100);
    first.nth(4);
    let second: Vec<u64> = fibonacci_up_to(100).collect();
    assert_eq!(second[0], 1);

    let resumed = first;
    assert_eq!(resumed.collect::<Vec<_>>(), [8, 13, 21, 34, 55, 89]);
    assert_eq!(first.i, 5);
}

#[test]
fn terms_follow_recurrence() {
    for &bound in &[1u64, 2, 3, 10, 89, 90, 1_000, 4_000_000, u64::max_value()] {
        let terms: Vec<u64> = fibonacci_up_to(bound).collect();
        assert!(terms.iter().all(|&t| t <= bound), "bound {}", bound);
        assert!(terms.windows(2).all(|w| w[0] < w[1]), "bound {}", bound);
        assert!(
            terms.windows(3).all(|w| w[2] == w[0] + w[1]),
            "bound {}",
            bound
        );
    }
}
