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

use berth_sched_core::prelude::TimePoint;
use berth_sched_model::{
    problem::{err::ProblemError, vessel::VesselIdentifier},
    solution::err::EndTimeOverflowError,
};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HorizonViolationError<T> {
    vessel_id: VesselIdentifier,
    start_time: TimePoint<T>,
    planning_horizon: TimePoint<T>,
}

impl<T: Copy> HorizonViolationError<T> {
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

    /// The earliest start the vessel could have been given.
    #[inline]
    pub fn start_time(&self) -> TimePoint<T> {
        self.start_time
    }

    #[inline]
    pub fn planning_horizon(&self) -> TimePoint<T> {
        self.planning_horizon
    }
}

impl<T: std::fmt::Display> std::fmt::Display for HorizonViolationError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Vessel {} cannot be scheduled within planning horizon: earliest start {} is not before {}",
            self.vessel_id, self.start_time, self.planning_horizon
        )
    }
}

impl<T: std::fmt::Debug + std::fmt::Display> std::error::Error for HorizonViolationError<T> {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GreedyError<T> {
    HorizonViolation(HorizonViolationError<T>),
    TimeOverflow(EndTimeOverflowError),
    InvalidConfiguration(ProblemError),
}

impl<T: std::fmt::Display> std::fmt::Display for GreedyError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GreedyError::HorizonViolation(e) => write!(f, "{}", e),
            GreedyError::TimeOverflow(e) => write!(f, "{}", e),
            GreedyError::InvalidConfiguration(e) => write!(f, "Invalid configuration: {}", e),
        }
    }
}

impl<T: std::fmt::Debug + std::fmt::Display> std::error::Error for GreedyError<T> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GreedyError::HorizonViolation(_) => None,
            GreedyError::TimeOverflow(e) => Some(e),
            GreedyError::InvalidConfiguration(e) => Some(e),
        }
    }
}

impl<T> From<HorizonViolationError<T>> for GreedyError<T> {
    fn from(e: HorizonViolationError<T>) -> Self {
        GreedyError::HorizonViolation(e)
    }
}

impl<T> From<EndTimeOverflowError> for GreedyError<T> {
    fn from(e: EndTimeOverflowError) -> Self {
        GreedyError::TimeOverflow(e)
    }
}

impl<T> From<ProblemError> for GreedyError<T> {
    fn from(e: ProblemError) -> Self {
        GreedyError::InvalidConfiguration(e)
    }
}
