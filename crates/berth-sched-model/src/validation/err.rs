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

use crate::problem::{berth::BerthIdentifier, vessel::VesselIdentifier};
use berth_sched_core::prelude::{TimeDelta, TimePoint};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DuplicateVesselIdError {
    vessel_id: VesselIdentifier,
}

impl DuplicateVesselIdError {
    #[inline]
    pub fn new(vessel_id: VesselIdentifier) -> Self {
        Self { vessel_id }
    }
    #[inline]
    pub fn vessel_id(&self) -> &VesselIdentifier {
        &self.vessel_id
    }
}

impl std::fmt::Display for DuplicateVesselIdError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Vessel id {} appears more than once", self.vessel_id)
    }
}

impl std::error::Error for DuplicateVesselIdError {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MissingAssignmentError {
    vessel_id: VesselIdentifier,
}

impl MissingAssignmentError {
    #[inline]
    pub fn new(vessel_id: VesselIdentifier) -> Self {
        Self { vessel_id }
    }
    #[inline]
    pub fn vessel_id(&self) -> &VesselIdentifier {
        &self.vessel_id
    }
}

impl std::fmt::Display for MissingAssignmentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Missing assignment for vessel {}", self.vessel_id)
    }
}

impl std::error::Error for MissingAssignmentError {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExtraAssignmentError {
    vessel_id: VesselIdentifier,
}

impl ExtraAssignmentError {
    #[inline]
    pub fn new(vessel_id: VesselIdentifier) -> Self {
        Self { vessel_id }
    }
    #[inline]
    pub fn vessel_id(&self) -> &VesselIdentifier {
        &self.vessel_id
    }
}

impl std::fmt::Display for ExtraAssignmentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Assignment for unknown vessel {} (not in problem)",
            self.vessel_id
        )
    }
}

impl std::error::Error for ExtraAssignmentError {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnknownBerthError {
    vessel_id: VesselIdentifier,
    berth: BerthIdentifier,
}

impl UnknownBerthError {
    #[inline]
    pub fn new(vessel_id: VesselIdentifier, berth: BerthIdentifier) -> Self {
        Self { vessel_id, berth }
    }
    #[inline]
    pub fn vessel_id(&self) -> &VesselIdentifier {
        &self.vessel_id
    }
    #[inline]
    pub fn berth(&self) -> BerthIdentifier {
        self.berth
    }
}

impl std::fmt::Display for UnknownBerthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Vessel {} is assigned to unknown berth {}",
            self.vessel_id, self.berth
        )
    }
}

impl std::error::Error for UnknownBerthError {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StartsBeforeArrivalError<T> {
    vessel_id: VesselIdentifier,
    start_time: TimePoint<T>,
    arrival_time: TimePoint<T>,
}

impl<T: Copy> StartsBeforeArrivalError<T> {
    #[inline]
    pub fn new(
        vessel_id: VesselIdentifier,
        start_time: TimePoint<T>,
        arrival_time: TimePoint<T>,
    ) -> Self {
        Self {
            vessel_id,
            start_time,
            arrival_time,
        }
    }
    #[inline]
    pub fn vessel_id(&self) -> &VesselIdentifier {
        &self.vessel_id
    }
    #[inline]
    pub fn start_time(&self) -> TimePoint<T> {
        self.start_time
    }
    #[inline]
    pub fn arrival_time(&self) -> TimePoint<T> {
        self.arrival_time
    }
}

impl<T: std::fmt::Display> std::fmt::Display for StartsBeforeArrivalError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Vessel {} starts at {} before its arrival at {}",
            self.vessel_id, self.start_time, self.arrival_time
        )
    }
}

impl<T: std::fmt::Debug + std::fmt::Display> std::error::Error for StartsBeforeArrivalError<T> {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EndTimeMismatchError<T> {
    vessel_id: VesselIdentifier,
    start_time: TimePoint<T>,
    processing_time: TimeDelta<T>,
    end_time: TimePoint<T>,
}

impl<T: Copy> EndTimeMismatchError<T> {
    #[inline]
    pub fn new(
        vessel_id: VesselIdentifier,
        start_time: TimePoint<T>,
        processing_time: TimeDelta<T>,
        end_time: TimePoint<T>,
    ) -> Self {
        Self {
            vessel_id,
            start_time,
            processing_time,
            end_time,
        }
    }
    #[inline]
    pub fn vessel_id(&self) -> &VesselIdentifier {
        &self.vessel_id
    }
    #[inline]
    pub fn end_time(&self) -> TimePoint<T> {
        self.end_time
    }
}

impl<T: std::fmt::Display> std::fmt::Display for EndTimeMismatchError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Vessel {} ends at {}, but starts at {} with processing {}",
            self.vessel_id, self.end_time, self.start_time, self.processing_time
        )
    }
}

impl<T: std::fmt::Debug + std::fmt::Display> std::error::Error for EndTimeMismatchError<T> {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StartsAfterHorizonError<T> {
    vessel_id: VesselIdentifier,
    start_time: TimePoint<T>,
    planning_horizon: TimePoint<T>,
}

impl<T: Copy> StartsAfterHorizonError<T> {
    #[inline]
    pub fn new(
        vessel_id: VesselIdentifier,
        start_time: TimePoint<T>,
        planning_horizon: TimePoint<T>,
    ) -> Self {
        Self {
            vessel_id,
            start_time,
            planning_horizon,
        }
    }
    #[inline]
    pub fn vessel_id(&self) -> &VesselIdentifier {
        &self.vessel_id
    }
    #[inline]
    pub fn start_time(&self) -> TimePoint<T> {
        self.start_time
    }
}

impl<T: std::fmt::Display> std::fmt::Display for StartsAfterHorizonError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Vessel {} starts at {}, not before the planning horizon {}",
            self.vessel_id, self.start_time, self.planning_horizon
        )
    }
}

impl<T: std::fmt::Debug + std::fmt::Display> std::error::Error for StartsAfterHorizonError<T> {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssignmentOverlapError {
    berth: BerthIdentifier,
    first: VesselIdentifier,
    second: VesselIdentifier,
}

impl AssignmentOverlapError {
    #[inline]
    pub fn new(berth: BerthIdentifier, first: VesselIdentifier, second: VesselIdentifier) -> Self {
        Self {
            berth,
            first,
            second,
        }
    }
    #[inline]
    pub fn berth(&self) -> BerthIdentifier {
        self.berth
    }
    #[inline]
    pub fn first(&self) -> &VesselIdentifier {
        &self.first
    }
    #[inline]
    pub fn second(&self) -> &VesselIdentifier {
        &self.second
    }
}

impl std::fmt::Display for AssignmentOverlapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Assignments for vessels {} and {} overlap on {}",
            self.first, self.second, self.berth
        )
    }
}

impl std::error::Error for AssignmentOverlapError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MakespanMismatchError<T> {
    expected: TimePoint<T>,
    actual: TimePoint<T>,
}

impl<T: Copy> MakespanMismatchError<T> {
    #[inline]
    pub fn new(expected: TimePoint<T>, actual: TimePoint<T>) -> Self {
        Self { expected, actual }
    }
    #[inline]
    pub fn expected(&self) -> TimePoint<T> {
        self.expected
    }
    #[inline]
    pub fn actual(&self) -> TimePoint<T> {
        self.actual
    }
}

impl<T: std::fmt::Display> std::fmt::Display for MakespanMismatchError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Reported makespan {} differs from the latest end time {}",
            self.actual, self.expected
        )
    }
}

impl<T: std::fmt::Debug + std::fmt::Display> std::error::Error for MakespanMismatchError<T> {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SolutionValidationError<T> {
    DuplicateVesselId(DuplicateVesselIdError),
    Missing(MissingAssignmentError),
    Extra(ExtraAssignmentError),
    UnknownBerth(UnknownBerthError),
    StartsBeforeArrival(StartsBeforeArrivalError<T>),
    EndTimeMismatch(EndTimeMismatchError<T>),
    StartsAfterHorizon(StartsAfterHorizonError<T>),
    Overlap(AssignmentOverlapError),
    MakespanMismatch(MakespanMismatchError<T>),
}

impl<T: std::fmt::Display> std::fmt::Display for SolutionValidationError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use SolutionValidationError::*;
        match self {
            DuplicateVesselId(e) => write!(f, "{}", e),
            Missing(e) => write!(f, "{}", e),
            Extra(e) => write!(f, "{}", e),
            UnknownBerth(e) => write!(f, "{}", e),
            StartsBeforeArrival(e) => write!(f, "{}", e),
            EndTimeMismatch(e) => write!(f, "{}", e),
            StartsAfterHorizon(e) => write!(f, "{}", e),
            Overlap(e) => write!(f, "{}", e),
            MakespanMismatch(e) => write!(f, "{}", e),
        }
    }
}

impl<T: std::fmt::Debug + std::fmt::Display> std::error::Error for SolutionValidationError<T> {}

macro_rules! impl_from {
    ($src:ty => $variant:ident) => {
        impl<T> From<$src> for SolutionValidationError<T> {
            fn from(e: $src) -> Self {
                SolutionValidationError::$variant(e)
            }
        }
    };
}

impl_from!(DuplicateVesselIdError => DuplicateVesselId);
impl_from!(MissingAssignmentError => Missing);
impl_from!(ExtraAssignmentError => Extra);
impl_from!(UnknownBerthError => UnknownBerth);
impl_from!(StartsBeforeArrivalError<T> => StartsBeforeArrival);
impl_from!(EndTimeMismatchError<T> => EndTimeMismatch);
impl_from!(StartsAfterHorizonError<T> => StartsAfterHorizon);
impl_from!(AssignmentOverlapError => Overlap);
impl_from!(MakespanMismatchError<T> => MakespanMismatch);
