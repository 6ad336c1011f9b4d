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

use crate::common::{Identifier, IdentifierMarkerName};
use berth_sched_core::prelude::{TimeDelta, TimePoint};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VesselIdentifierMarker;

impl IdentifierMarkerName for VesselIdentifierMarker {
    const NAME: &'static str = "VesselId";
}

pub type VesselIdentifier = Identifier<String, VesselIdentifierMarker>;

/// A vessel asking for a berth.
///
/// Neither time is checked for sign or magnitude. A negative processing time
/// is carried through the arithmetic unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Vessel<T> {
    id: VesselIdentifier,
    arrival_time: TimePoint<T>,
    processing_time: TimeDelta<T>,
}

impl<T: Copy> Vessel<T> {
    #[inline]
    pub fn new(
        id: impl Into<VesselIdentifier>,
        arrival_time: TimePoint<T>,
        processing_time: TimeDelta<T>,
    ) -> Self {
        Self {
            id: id.into(),
            arrival_time,
            processing_time,
        }
    }

    #[inline]
    pub fn id(&self) -> &VesselIdentifier {
        &self.id
    }

    #[inline]
    pub fn arrival_time(&self) -> TimePoint<T> {
        self.arrival_time
    }

    #[inline]
    pub fn processing_time(&self) -> TimeDelta<T> {
        self.processing_time
    }
}

impl<T: std::fmt::Display> std::fmt::Display for Vessel<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Vessel: Id: {}, Arrival {}, Processing {}",
            self.id, self.arrival_time, self.processing_time
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

    #[test]
    fn test_accessors() {
        let v = Vessel::new("V1", tp(3), td(7));
        assert_eq!(v.id().as_str(), "V1");
        assert_eq!(v.arrival_time(), tp(3));
        assert_eq!(v.processing_time(), td(7));
    }

    #[test]
    fn test_negative_values_are_kept() {
        let v = Vessel::new("V9", tp(-4), td(-2));
        assert_eq!(v.arrival_time().value(), -4);
        assert_eq!(v.processing_time().value(), -2);
    }

    #[test]
    fn test_display() {
        let v = Vessel::new("V2", tp(0), td(5));
        assert_eq!(
            v.to_string(),
            "Vessel: Id: VesselId(V2), Arrival TimePoint(0), Processing TimeDelta(5)"
        );
    }
}
