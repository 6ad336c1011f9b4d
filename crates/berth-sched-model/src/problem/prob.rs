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

use crate::problem::{
    berth::{BerthIdentifier, iter_berth_ids},
    err::{InvalidBerthCountError, ProblemError},
    vessel::Vessel,
};
use berth_sched_core::prelude::TimePoint;

/// One allocation instance: the vessels, how many berths serve them and the
/// deadline every vessel has to start before.
///
/// A problem always has at least one berth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem<T> {
    vessels: Vec<Vessel<T>>,
    berth_count: usize,
    planning_horizon: TimePoint<T>,
}

impl<T: Copy + Ord> Problem<T> {
    #[inline]
    pub fn new(
        vessels: Vec<Vessel<T>>,
        berth_count: usize,
        planning_horizon: TimePoint<T>,
    ) -> Result<Self, ProblemError> {
        if berth_count == 0 {
            return Err(InvalidBerthCountError::new(0).into());
        }

        Ok(Self {
            vessels,
            berth_count,
            planning_horizon,
        })
    }

    /// Vessels in the order they were given.
    #[inline]
    pub fn vessels(&self) -> &[Vessel<T>] {
        &self.vessels
    }

    #[inline]
    pub fn iter_vessels(&self) -> impl Iterator<Item = &Vessel<T>> {
        self.vessels.iter()
    }

    #[inline]
    pub fn vessel_count(&self) -> usize {
        self.vessels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vessels.is_empty()
    }

    #[inline]
    pub fn berth_count(&self) -> usize {
        self.berth_count
    }

    #[inline]
    pub fn iter_berth_ids(&self) -> impl DoubleEndedIterator<Item = BerthIdentifier> {
        iter_berth_ids(self.berth_count)
    }

    #[inline]
    pub fn contains_berth(&self, id: BerthIdentifier) -> bool {
        id.index() < self.berth_count
    }

    #[inline]
    pub fn planning_horizon(&self) -> TimePoint<T> {
        self.planning_horizon
    }
}

impl<T: Copy + Ord + std::fmt::Display> std::fmt::Display for Problem<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Problem: {} vessels, {} berths, horizon {}",
            self.vessels.len(),
            self.berth_count,
            self.planning_horizon
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use berth_sched_core::prelude::TimeDelta;

    #[inline]
    fn tp(v: i64) -> TimePoint<i64> {
        TimePoint::new(v)
    }
    #[inline]
    fn td(v: i64) -> TimeDelta<i64> {
        TimeDelta::new(v)
    }

    #[test]
    fn test_zero_berths_rejected() {
        let err = Problem::<i64>::new(vec![], 0, tp(72)).expect_err("zero berths must fail");
        assert_eq!(
            err,
            ProblemError::InvalidBerthCount(InvalidBerthCountError::new(0))
        );
    }

    #[test]
    fn test_accessors_keep_input_order() {
        let vessels = vec![
            Vessel::new("B", tp(5), td(1)),
            Vessel::new("A", tp(0), td(2)),
        ];
        let p = Problem::new(vessels.clone(), 3, tp(72)).unwrap();
        assert_eq!(p.vessels(), vessels.as_slice());
        assert_eq!(p.vessel_count(), 2);
        assert_eq!(p.berth_count(), 3);
        assert_eq!(p.planning_horizon(), tp(72));
        assert_eq!(p.iter_berth_ids().count(), 3);
        assert!(p.contains_berth(BerthIdentifier::new(2)));
        assert!(!p.contains_berth(BerthIdentifier::new(3)));
    }

    #[test]
    fn test_empty_problem() {
        let p = Problem::<i64>::new(vec![], 2, tp(72)).unwrap();
        assert!(p.is_empty());
        assert_eq!(p.to_string(), "Problem: 0 vessels, 2 berths, horizon TimePoint(72)");
    }
}
