// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Availability of the berths during construction.

use berth_sched_core::prelude::TimePoint;
use berth_sched_model::problem::berth::{BerthIdentifier, iter_berth_ids};
use num_traits::Zero;
use std::{cmp::Reverse, collections::BinaryHeap};

/// Min-heap of berths keyed by `(available_at, berth)`.
///
/// [`BerthAvailability::take_earliest`] yields the berth that frees up first.
/// Among berths free at the same time the lowest index wins, because the
/// berth id is the second component of the key.
#[derive(Debug, Clone)]
pub struct BerthAvailability<T> {
    heap: BinaryHeap<Reverse<(TimePoint<T>, BerthIdentifier)>>,
}

impl<T: Copy + Ord> BerthAvailability<T> {
    /// All `berth_count` berths available at time zero.
    #[inline]
    pub fn new(berth_count: usize) -> Self
    where
        T: Zero,
    {
        let mut heap = BinaryHeap::with_capacity(berth_count);
        for berth in iter_berth_ids(berth_count) {
            heap.push(Reverse((TimePoint::zero(), berth)));
        }
        Self { heap }
    }

    /// Removes the earliest available berth. It must be handed back with
    /// [`BerthAvailability::release`] to be considered again.
    #[inline]
    pub fn take_earliest(&mut self) -> Option<(BerthIdentifier, TimePoint<T>)> {
        self.heap.pop().map(|Reverse((at, berth))| (berth, at))
    }

    /// Makes `berth` available again from `available_at` on. The new time may
    /// lie before the previous one.
    #[inline]
    pub fn release(&mut self, berth: BerthIdentifier, available_at: TimePoint<T>) {
        self.heap.push(Reverse((available_at, berth)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[inline]
    fn tp(v: i64) -> TimePoint<i64> {
        TimePoint::new(v)
    }
    #[inline]
    fn bid(n: usize) -> BerthIdentifier {
        BerthIdentifier::new(n)
    }

    fn drain(a: &mut BerthAvailability<i64>) -> Vec<(BerthIdentifier, TimePoint<i64>)> {
        std::iter::from_fn(|| a.take_earliest()).collect()
    }

    #[test]
    fn test_all_berths_start_at_zero_lowest_index_first() {
        let mut a = BerthAvailability::<i64>::new(3);
        assert_eq!(
            drain(&mut a),
            vec![(bid(0), tp(0)), (bid(1), tp(0)), (bid(2), tp(0))]
        );
        assert_eq!(a.take_earliest(), None);
    }

    #[test]
    fn test_release_reorders_by_time_then_index() {
        let mut a = BerthAvailability::<i64>::new(3);
        let (b0, _) = a.take_earliest().unwrap();
        a.release(b0, tp(10));
        let (b1, _) = a.take_earliest().unwrap();
        a.release(b1, tp(4));
        // berth 2 is still at 0
        let (b2, at) = a.take_earliest().unwrap();
        assert_eq!((b2, at), (bid(2), tp(0)));
        a.release(b2, tp(4));

        assert_eq!(
            drain(&mut a),
            vec![(bid(1), tp(4)), (bid(2), tp(4)), (bid(0), tp(10))]
        );
    }

    #[test]
    fn test_availability_may_move_backwards() {
        let mut a = BerthAvailability::<i64>::new(2);
        let (b0, _) = a.take_earliest().unwrap();
        a.release(b0, tp(-5));
        assert_eq!(a.take_earliest(), Some((bid(0), tp(-5))));
    }

    #[test]
    fn test_no_berths_yields_nothing() {
        let mut a = BerthAvailability::<i64>::new(0);
        assert_eq!(a.take_earliest(), None);
    }
}
