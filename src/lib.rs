#![deny(missing_docs)]

//! The **set-selections** crate provides ways to count and enumerate all the
//! ways of selecting `m` elements out of a set of `n` elements.
//!
//! You can use the `combination_count`, `permutation_count` and `factorial`
//! functions to get the number of selections as arbitrary-precision integers,
//! and the `Combination` and `Permutation` structs to enumerate them.
//!
//! A combination is an unordered selection: each `m`-subset of positions is
//! produced exactly once. A permutation is an ordered selection: every
//! arrangement of every `m`-subset is produced.
//!
//! Counts grow factorially, so they are `BigUint`s; the enumeration index passed
//! to handlers is a `BigUint` too.
//!
//! # How to use
//!
//! Build a generator with `Combination::new` or `Permutation::new`, which copy the
//! elements and fail if the set is empty or `m` is not in `1..=n`.
//!
//! Then either:
//! - call `output()` (or `try_output()` to be able to stop early) with a handler
//!   receiving each result, its index, the total count and a context value;
//! - call `iter()` to get a lazy iterator over the results;
//! - call `collect()` to get all the results in a `Vec`, as long as there are
//!   at most `MAX_COLLECT` of them.
//!
//! All three produce the same results in the same order, and every result is
//! an owned `Vec<T>` independent from the others.
//!
//! ```
//! use set_selections::Combination;
//!
//! let mut c = Combination::new(&['A', 'B', 'C'], 2).unwrap();
//! assert_eq!(c.collect().unwrap(), vec![vec!['A', 'B'], vec!['A', 'C'], vec!['B', 'C']]);
//! ```

pub use num_bigint::BigUint;
use num_traits::{One, ToPrimitive, Zero};

/// Module for the Incrementable trait
pub mod traits
{
    use num_traits::One;
    use std::ops::{Add, AddAssign};

    /// Trait for things that can be incremented, like numbers
    pub trait Incrementable
    {
        /// Increment self by mutable reference
        fn increment(&mut self);

        /// Increment self and return it
        fn incremented(mut self) -> Self
            where Self: Sized
        {
            self.increment();
            self
        }
    }

    impl<T> Incrementable for T
        where T: One + Add<T, Output = T> + AddAssign<T>
    {
        fn increment(&mut self) {
            *self += One::one();
        }

        fn incremented(self) -> T {
            self + <T as One>::one()
        }
    }
}

macro_rules! impl_selection {
    ($S:ident, $Iter:ident, $count:path, $kind:expr) => {
        impl<T> $S<T>
            where T: Clone
        {
            /// Create a generator selecting `m` out of a copy of `elements`.
            ///
            /// Returns `Error::InvalidArgument` if `elements` is empty or if `m`
            /// is not in `1..=elements.len()`.
            pub fn new(elements: &[T], m: usize) -> crate::Result<Self> {
                crate::validate(elements.len(), m)?;
                let count = $count(elements.len(), m);
                tracing::debug!(kind = $kind, n = elements.len(), m, %count, "Created selection generator");
                Ok($S {work: elements.to_vec(), m, count})
            }

            /// Returns the elements selected from, in input order
            pub fn elements(&self) -> &[T] {
                &self.work
            }

            /// Returns the size of the set selected from
            pub fn len(&self) -> usize {
                self.work.len()
            }

            /// Returns the number of elements in each result
            pub fn selection(&self) -> usize {
                self.m
            }

            /// Returns the number of results an enumeration produces
            pub fn count(&self) -> &BigUint {
                &self.count
            }

            /// Call `handler` once per result, in enumeration order.
            ///
            /// The handler receives the result, its zero-based index, the total
            /// count and `context`, which is passed through untouched.
            pub fn output<C, F>(&mut self, context: &mut C, mut handler: F)
                where F: FnMut(Vec<T>, &BigUint, &BigUint, &mut C)
            {
                let _ = self.try_output(context, |r, index, total, context| {
                    handler(r, index, total, context);
                    ::std::ops::ControlFlow::Continue(())
                });
            }

            /// Returns all the results in enumeration order.
            ///
            /// Returns `Error::CapacityExceeded`, without enumerating anything,
            /// if there are more than `MAX_COLLECT` results.
            pub fn collect(&mut self) -> crate::Result<Vec<Vec<T>>> {
                let capacity = crate::collect_capacity(&self.count)?;
                tracing::trace!(kind = $kind, count = capacity, "Collecting selections");
                let mut all = Vec::with_capacity(capacity);
                self.output(&mut all, |r, _, _, all: &mut Vec<Vec<T>>| all.push(r));
                Ok(all)
            }

            /// Returns a lazy iterator over the results, in enumeration order
            pub fn iter(&self) -> $Iter<'_, T> {
                $Iter::new(&self.work, self.m)
            }
        }

        impl<T> AsRef<[T]> for $S<T>
            where T: Clone
        {
            fn as_ref(&self) -> &[T] {
                self.elements()
            }
        }

        impl<'a, T> IntoIterator for &'a $S<T>
            where T: Clone
        {
            type Item = Vec<T>;
            type IntoIter = $Iter<'a, T>;

            fn into_iter(self) -> $Iter<'a, T> {
                self.iter()
            }
        }
    }
}

mod combination;
mod error;
mod permutation;

pub use crate::combination::{Combination, Combinations};
pub use crate::error::{Error, Result};
pub use crate::permutation::{Permutation, Permutations};

/// Largest number of results `collect` materializes, the bound of a 32-bit indexed vector.
pub const MAX_COLLECT: usize = i32::MAX as usize;

fn validate(n: usize, m: usize) -> Result<()>
{
    if n == 0 {
        return Err(Error::InvalidArgument("the element set is empty".to_string()));
    }
    if m < 1 || m > n {
        return Err(Error::InvalidArgument(format!("selection size {} is not in 1..={}", m, n)));
    }
    Ok(())
}

fn collect_capacity(count: &BigUint) -> Result<usize>
{
    match count.to_usize() {
        Some(c) if c <= MAX_COLLECT => Ok(c),
        _ => {
            tracing::debug!(%count, max = MAX_COLLECT, "Too many results to collect");
            Err(Error::CapacityExceeded {count: count.clone(), max: MAX_COLLECT})
        }
    }
}

/// Returns `n!`.
pub fn factorial(n: usize) -> BigUint
{
    permutation_count(n, n)
}

/// Number of ordered selections of `m` elements out of `n`, `n! / (n - m)!`.
///
/// Returns zero if `m > n`.
pub fn permutation_count(n: usize, m: usize) -> BigUint
{
    if m > n {
        return BigUint::zero();
    }
    ((n - m + 1)..=n).fold(BigUint::one(), |acc, k| acc * BigUint::from(k))
}

/// Number of unordered selections of `m` elements out of `n`, `n! / (m! (n - m)!)`.
///
/// Returns zero if `m > n`.
pub fn combination_count(n: usize, m: usize) -> BigUint
{
    if m > n {
        return BigUint::zero();
    }
    // C(n, m) == C(n, n - m), take the shorter product
    let m = m.min(n - m);
    permutation_count(n, m) / factorial(m)
}
