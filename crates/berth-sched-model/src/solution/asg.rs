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
    problem::{
        berth::BerthIdentifier,
        vessel::{Vessel, VesselIdentifier},
    },
    solution::err::EndTimeOverflowError,
};
use berth_sched_core::prelude::{TimeDelta, TimeInterval, TimePoint};
use num_traits::CheckedAdd;

/// The berth and time slot granted to one vessel.
///
/// The arrival and processing times are copied from the vessel so a schedule
/// can be read without the problem it came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Assignment<T> {
    vessel_id: VesselIdentifier,
    berth: BerthIdentifier,
    start_time: TimePoint<T>,
    end_time: TimePoint<T>,
    arrival_time: TimePoint<T>,
    processing_time: TimeDelta<T>,
}

impl<T: Copy + Ord> Assignment<T> {
    /// Places `vessel` on `berth` starting at `start_time`. The end time is
    /// `start_time + processing_time`.
    #[inline]
    pub fn new(
        vessel: &Vessel<T>,
        berth: BerthIdentifier,
        start_time: TimePoint<T>,
    ) -> Result<Self, EndTimeOverflowError>
    where
        T: CheckedAdd,
    {
        let end_time = start_time
            .checked_add(vessel.processing_time())
            .ok_or_else(|| EndTimeOverflowError::new(vessel.id().clone()))?;

        Ok(Self {
            vessel_id: vessel.id().clone(),
            berth,
            start_time,
            end_time,
            arrival_time: vessel.arrival_time(),
            processing_time: vessel.processing_time(),
        })
    }

    /// Builds an assignment from raw parts without checking that they agree.
    #[inline]
    pub fn from_parts(
        vessel_id: VesselIdentifier,
        berth: BerthIdentifier,
        start_time: TimePoint<T>,
        end_time: TimePoint<T>,
        arrival_time: TimePoint<T>,
        processing_time: TimeDelta<T>,
    ) -> Self {
        Self {
            vessel_id,
            berth,
            start_time,
            end_time,
            arrival_time,
            processing_time,
        }
    }

    #[inline]
    pub fn vessel_id(&self) -> &VesselIdentifier {
        &self.vessel_id
    }

    #[inline]
    pub fn berth(&self) -> BerthIdentifier {
        self.berth
    }

    #[inline]
    pub fn start_time(&self) -> TimePoint<T> {
        self.start_time
    }

    #[inline]
    pub fn end_time(&self) -> TimePoint<T> {
        self.end_time
    }

    #[inline]
    pub fn arrival_time(&self) -> TimePoint<T> {
        self.arrival_time
    }

    #[inline]
    pub fn processing_time(&self) -> TimeDelta<T> {
        self.processing_time
    }

    #[inline]
    pub fn interval(&self) -> TimeInterval<T> {
        TimeInterval::new(self.start_time, self.end_time)
    }
}

impl<T: std::fmt::Display> std::fmt::Display for Assignment<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Assignment: Vessel {} on {} from {} to {}",
            self.vessel_id, self.berth, self.start_time, self.end_time
        )
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
    fn td(v: i64) -> TimeDelta<i64> {
        TimeDelta::new(v)
    }
    #[inline]
    fn bid(n: usize) -> BerthIdentifier {
        BerthIdentifier::new(n)
    }

    #[test]
    fn test_end_time_is_start_plus_processing() {
        let v = Vessel::new("V3", tp(8), td(4));
        let a = Assignment::new(&v, bid(0), tp(8)).unwrap();
        assert_eq!(a.vessel_id().as_str(), "V3");
        assert_eq!(a.berth(), bid(0));
        assert_eq!(a.start_time(), tp(8));
        assert_eq!(a.end_time(), tp(12));
        assert_eq!(a.arrival_time(), tp(8));
        assert_eq!(a.processing_time(), td(4));
        assert_eq!(a.interval(), TimeInterval::new(tp(8), tp(12)));
    }

    #[test]
    fn test_negative_processing_ends_before_start() {
        let v = Vessel::new("N", tp(0), td(-3));
        let a = Assignment::new(&v, bid(1), tp(2)).unwrap();
        assert_eq!(a.end_time(), tp(-1));
        assert!(a.interval().is_empty());
    }

    #[test]
    fn test_overflow_is_an_error() {
        let v = Vessel::new("big", tp(0), td(1));
        let err = Assignment::new(&v, bid(0), tp(i64::MAX)).unwrap_err();
        assert_eq!(err.vessel_id().as_str(), "big");
    }

    #[test]
    fn test_display() {
        let v = Vessel::new("V1", tp(0), td(5));
        let a = Assignment::new(&v, bid(0), tp(0)).unwrap();
        assert_eq!(
            a.to_string(),
            "Assignment: Vessel VesselId(V1) on BerthId(0) from TimePoint(0) to TimePoint(5)"
        );
    }
}
