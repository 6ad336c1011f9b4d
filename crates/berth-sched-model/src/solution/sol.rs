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

use crate::{
    problem::{berth::BerthIdentifier, vessel::VesselIdentifier},
    solution::asg::Assignment,
};
use berth_sched_core::prelude::TimePoint;
use num_traits::Zero;
use std::collections::HashMap;

/// Assignments keyed by vessel id.
///
/// Iteration follows insertion order. Inserting a second assignment for an id
/// replaces the first one in place, so the id keeps its original position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule<T> {
    assignments: Vec<Assignment<T>>,
    index: HashMap<VesselIdentifier, usize>,
}

impl<T> Default for Schedule<T> {
    fn default() -> Self {
        Self {
            assignments: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T: Copy + Ord> Schedule<T> {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            assignments: Vec::with_capacity(cap),
            index: HashMap::with_capacity(cap),
        }
    }

    /// Inserts `assignment`, returning the one it replaced.
    #[inline]
    pub fn insert(&mut self, assignment: Assignment<T>) -> Option<Assignment<T>> {
        match self.index.get(assignment.vessel_id()) {
            Some(&pos) => Some(std::mem::replace(&mut self.assignments[pos], assignment)),
            None => {
                self.index
                    .insert(assignment.vessel_id().clone(), self.assignments.len());
                self.assignments.push(assignment);
                None
            }
        }
    }

    #[inline]
    pub fn get(&self, id: &VesselIdentifier) -> Option<&Assignment<T>> {
        self.index.get(id).map(|&pos| &self.assignments[pos])
    }

    #[inline]
    pub fn contains_id(&self, id: &VesselIdentifier) -> bool {
        self.index.contains_key(id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Assignment<T>> {
        self.assignments.iter()
    }

    #[inline]
    pub fn iter_on_berth(&self, berth: BerthIdentifier) -> impl Iterator<Item = &Assignment<T>> {
        self.assignments.iter().filter(move |a| a.berth() == berth)
    }

    /// Latest end time over all assignments.
    #[inline]
    pub fn latest_end(&self) -> Option<TimePoint<T>> {
        self.assignments.iter().map(|a| a.end_time()).max()
    }
}

impl<T: Copy + Ord> FromIterator<Assignment<T>> for Schedule<T> {
    fn from_iter<I: IntoIterator<Item = Assignment<T>>>(iter: I) -> Self {
        let mut s = Self::new();
        for a in iter {
            s.insert(a);
        }
        s
    }
}

impl<'a, T> IntoIterator for &'a Schedule<T> {
    type Item = &'a Assignment<T>;
    type IntoIter = std::slice::Iter<'a, Assignment<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.assignments.iter()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution<T> {
    schedule: Schedule<T>,
    makespan: TimePoint<T>,
}

impl<T: Copy + Ord> Solution<T> {
    #[inline]
    pub fn new(schedule: Schedule<T>, makespan: TimePoint<T>) -> Self {
        Self { schedule, makespan }
    }

    /// Derives the makespan from the schedule. An empty schedule has a
    /// makespan of zero.
    #[inline]
    pub fn from_schedule(schedule: Schedule<T>) -> Self
    where
        T: Zero,
    {
        let makespan = schedule.latest_end().unwrap_or_else(TimePoint::zero);
        Self { schedule, makespan }
    }

    #[inline]
    pub fn empty() -> Self
    where
        T: Zero,
    {
        Self::from_schedule(Schedule::new())
    }

    #[inline]
    pub fn schedule(&self) -> &Schedule<T> {
        &self.schedule
    }

    #[inline]
    pub fn makespan(&self) -> TimePoint<T> {
        self.makespan
    }

    #[inline]
    pub fn assignment(&self, id: &VesselIdentifier) -> Option<&Assignment<T>> {
        self.schedule.get(id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.schedule.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.schedule.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::vessel::Vessel;
    use berth_sched_core::prelude::TimeDelta;

    #[inline]
    fn tp(v: i64) -> TimePoint<i64> {
        TimePoint::new(v)
    }
    #[inline]
    fn td(v: i64) -> TimeDelta<i64> {
        TimeDelta::new(v)
    }
    #[inline]
    fn bid(n: usize) -> BerthIdentifier {
        BerthIdentifier::new(n)
    }
    #[inline]
    fn vid(s: &str) -> VesselIdentifier {
        VesselIdentifier::from(s)
    }

    fn asg(id: &str, berth: usize, arrival: i64, pt: i64, start: i64) -> Assignment<i64> {
        Assignment::new(&Vessel::new(id, tp(arrival), td(pt)), bid(berth), tp(start)).unwrap()
    }

    #[test]
    fn test_insert_then_lookup() {
        let mut s = Schedule::new();
        assert!(s.insert(asg("V1", 0, 0, 5, 0)).is_none());
        assert!(s.insert(asg("V2", 1, 3, 7, 3)).is_none());
        assert_eq!(s.len(), 2);
        assert!(s.contains_id(&vid("V1")));
        assert_eq!(s.get(&vid("V2")).map(|a| a.end_time()), Some(tp(10)));
        assert!(s.get(&vid("V3")).is_none());
    }

    #[test]
    fn test_duplicate_id_replaces_in_place() {
        let mut s = Schedule::new();
        s.insert(asg("A", 0, 0, 1, 0));
        s.insert(asg("B", 0, 0, 1, 1));
        let old = s.insert(asg("A", 1, 0, 4, 0)).expect("A was present");
        assert_eq!(old.berth(), bid(0));
        assert_eq!(s.len(), 2);
        let order: Vec<_> = s.iter().map(|a| a.vessel_id().as_str()).collect();
        assert_eq!(order, vec!["A", "B"]);
        assert_eq!(s.get(&vid("A")).map(|a| a.berth()), Some(bid(1)));
    }

    #[test]
    fn test_iter_on_berth_filters() {
        let s: Schedule<i64> = [
            asg("V1", 0, 0, 5, 0),
            asg("V2", 1, 3, 7, 3),
            asg("V3", 0, 8, 4, 8),
        ]
        .into_iter()
        .collect();
        let on_zero: Vec<_> = s.iter_on_berth(bid(0)).map(|a| a.vessel_id().as_str()).collect();
        assert_eq!(on_zero, vec!["V1", "V3"]);
    }

    #[test]
    fn test_makespan_from_schedule() {
        let s: Schedule<i64> = [asg("V1", 0, 0, 5, 0), asg("V2", 1, 3, 7, 3)]
            .into_iter()
            .collect();
        let sol = Solution::from_schedule(s);
        assert_eq!(sol.makespan(), tp(10));
        assert_eq!(sol.len(), 2);
        assert_eq!(sol.assignment(&vid("V1")).map(|a| a.start_time()), Some(tp(0)));
    }

    #[test]
    fn test_empty_solution_has_zero_makespan() {
        let sol = Solution::<i64>::empty();
        assert!(sol.is_empty());
        assert_eq!(sol.makespan(), tp(0));
    }

    #[test]
    fn test_makespan_may_be_negative() {
        let s: Schedule<i64> = [asg("N", 0, -10, -2, -10)].into_iter().collect();
        assert_eq!(Solution::from_schedule(s).makespan(), tp(-12));
    }
}
