use num_bigint::BigUint;
use num_traits::Zero;
use std::iter::FusedIterator;
use std::ops::ControlFlow;

use crate::traits::Incrementable;

/// Enumerates the unordered selections of `m` elements out of a set.
///
/// Each result lists the selected elements in input order, and results come
/// in lexicographic order of the selected positions: for `[A, B, C]` and
/// `m = 2`, `AB`, `AC`, `BC`.
///
/// Enumerating swaps elements of a private working copy in place, so it needs
/// `&mut self`; the copy is back in input order when enumeration returns.
#[derive(Debug, Clone)]
pub struct Combination<T>
{
    work: Vec<T>,
    m: usize,
    count: BigUint
}

impl_selection!(Combination, Combinations, crate::combination_count, "combination");

impl<T> Combination<T>
    where T: Clone
{
    /// Like `output`, but `handler` can return `ControlFlow::Break` to stop.
    ///
    /// Returns `Break` if the enumeration was stopped before the last result.
    pub fn try_output<C, F>(&mut self, context: &mut C, mut handler: F) -> ControlFlow<()>
        where F: FnMut(Vec<T>, &BigUint, &BigUint, &mut C) -> ControlFlow<()>
    {
        let Combination {ref mut work, m, ref count} = *self;
        let mut index = BigUint::zero();
        let flow = choose(work, m, 0, 0, &mut |selected: &[T]| {
            let flow = handler(selected.to_vec(), &index, count, &mut *context);
            index.increment();
            flow
        });
        if flow.is_break() {
            tracing::trace!(kind = "combination", %index, "Enumeration stopped by handler");
        }
        flow
    }
}

/// Fills positions `i..m` of `work` with every increasing choice of source
/// positions starting at `j`, calling `emit` with `work[..m]` once all `m` are filled.
///
/// Every swap is undone before returning, also when `emit` breaks.
pub(crate) fn choose<T, F>(work: &mut [T], m: usize, i: usize, j: usize, emit: &mut F) -> ControlFlow<()>
    where F: FnMut(&[T]) -> ControlFlow<()>
{
    if i == m {
        return emit(&work[..m]);
    }

    // past this, too few candidates remain to fill the other positions
    let last = work.len() - (m - i);
    for j in j..=last {
        work.swap(i, j);
        let flow = choose(work, m, i + 1, j + 1, emit);
        work.swap(i, j);
        if flow.is_break() {
            return flow;
        }
    }
    ControlFlow::Continue(())
}

/// Lazy iterator over the results of a `Combination`.
///
/// Keeps the chosen source positions instead of swapping, and yields the
/// same results in the same order as `Combination::output`.
#[derive(Debug, Clone)]
pub struct Combinations<'a, T>
{
    elements: &'a [T],
    choices: Vec<usize>,
    started: bool,
    done: bool
}

impl<'a, T> Combinations<'a, T>
{
    pub(crate) fn new(elements: &'a [T], m: usize) -> Self {
        Combinations {elements, choices: (0..m).collect(), started: false, done: m > elements.len()}
    }

    /// Move `choices` to the next increasing sequence, returning `false` past the last one
    fn advance(&mut self) -> bool {
        if self.done {
            return false;
        }
        if !self.started {
            self.started = true;
            return true;
        }

        let n = self.elements.len();
        let k = self.choices.len();
        let mut i = k;
        while i > 0 {
            self.choices[i - 1] += 1;
            if self.choices[i - 1] + k - i < n {
                for l in i..k {
                    self.choices[l] = self.choices[l - 1] + 1;
                }
                return true;
            }
            i -= 1;
        }
        self.done = true;
        false
    }
}

impl<'a, T> Iterator for Combinations<'a, T>
    where T: Clone
{
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        if !self.advance() {
            return None;
        }
        Some(self.choices.iter().map(|&c| self.elements[c].clone()).collect())
    }
}

impl<'a, T> FusedIterator for Combinations<'a, T>
    where T: Clone
{
}
