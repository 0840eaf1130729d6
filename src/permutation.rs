use num_bigint::BigUint;
use num_traits::Zero;
use std::iter::FusedIterator;
use std::ops::ControlFlow;

use crate::combination::{choose, Combinations};
use crate::traits::Incrementable;

/// Enumerates the ordered selections of `m` elements out of a set.
///
/// When `m == n` the whole set is rearranged in place by swapping: position 0
/// takes each candidate in turn, then position 1 among the remaining ones, and
/// so on, so `[1, 2, 3]` gives `123, 132, 213, 231, 321, 312`.
///
/// When `m < n` every combination (in `Combination` order) is rearranged the
/// same way, so there are `C(n, m) * m!` results.
#[derive(Debug, Clone)]
pub struct Permutation<T>
{
    work: Vec<T>,
    m: usize,
    count: BigUint
}

impl_selection!(Permutation, Permutations, crate::permutation_count, "permutation");

impl<T> Permutation<T>
    where T: Clone
{
    /// Like `output`, but `handler` can return `ControlFlow::Break` to stop.
    ///
    /// Returns `Break` if the enumeration was stopped before the last result.
    pub fn try_output<C, F>(&mut self, context: &mut C, mut handler: F) -> ControlFlow<()>
        where F: FnMut(Vec<T>, &BigUint, &BigUint, &mut C) -> ControlFlow<()>
    {
        let Permutation {ref mut work, m, ref count} = *self;
        let mut index = BigUint::zero();
        let mut emit = |arranged: &[T]| {
            let flow = handler(arranged.to_vec(), &index, count, &mut *context);
            index.increment();
            flow
        };

        let flow = if m == work.len() {
            arrange(work, 0, &mut emit)
        } else {
            choose(work, m, 0, 0, &mut |selected: &[T]| {
                arrange(&mut selected.to_vec(), 0, &mut emit)
            })
        };
        if flow.is_break() {
            tracing::trace!(kind = "permutation", %index, "Enumeration stopped by handler");
        }
        flow
    }
}

/// Calls `emit` with every arrangement of `work` that keeps `work[..ii]` fixed.
///
/// Every swap is undone before returning, also when `emit` breaks.
fn arrange<T, F>(work: &mut [T], ii: usize, emit: &mut F) -> ControlFlow<()>
    where F: FnMut(&[T]) -> ControlFlow<()>
{
    if ii + 1 >= work.len() {
        return emit(&work[..]);
    }

    for k in ii..work.len() {
        work.swap(ii, k);
        let flow = arrange(work, ii + 1, emit);
        work.swap(ii, k);
        if flow.is_break() {
            return flow;
        }
    }
    ControlFlow::Continue(())
}

/// Resumable form of `arrange`, keeping the candidate swapped in at each level.
#[derive(Debug, Clone)]
struct Arrangement<T>
{
    work: Vec<T>,
    levels: Vec<usize>,
    started: bool,
    done: bool
}

impl<T> Arrangement<T>
    where T: Clone
{
    fn new(work: Vec<T>) -> Self {
        // the last position has a single candidate, it needs no level
        let levels = (0..work.len().saturating_sub(1)).collect();
        Arrangement {work, levels, started: false, done: false}
    }

    fn advance(&mut self) -> Option<Vec<T>> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.work.clone());
        }

        let n = self.work.len();
        let mut ii = self.levels.len();
        while ii > 0 {
            ii -= 1;
            self.work.swap(ii, self.levels[ii]);
            self.levels[ii] += 1;
            if self.levels[ii] < n {
                self.work.swap(ii, self.levels[ii]);
                for l in (ii + 1)..self.levels.len() {
                    self.levels[l] = l;
                }
                return Some(self.work.clone());
            }
        }
        self.done = true;
        None
    }
}

/// Lazy iterator over the results of a `Permutation`.
///
/// Yields the same results in the same order as `Permutation::output`.
#[derive(Debug, Clone)]
pub struct Permutations<'a, T>
{
    chosen: Combinations<'a, T>,
    current: Option<Arrangement<T>>
}

impl<'a, T> Permutations<'a, T>
{
    pub(crate) fn new(elements: &'a [T], m: usize) -> Self {
        Permutations {chosen: Combinations::new(elements, m), current: None}
    }
}

impl<'a, T> Iterator for Permutations<'a, T>
    where T: Clone
{
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        loop {
            if let Some(arranged) = self.current.as_mut().and_then(Arrangement::advance) {
                return Some(arranged);
            }
            self.current = Some(Arrangement::new(self.chosen.next()?));
        }
    }
}

impl<'a, T> FusedIterator for Permutations<'a, T>
    where T: Clone
{
}
