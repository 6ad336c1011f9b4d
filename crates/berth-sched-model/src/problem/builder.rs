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
    err::{InvalidBerthCountError, MissingPlanningHorizonError, ProblemError},
    prob::Problem,
    vessel::Vessel,
};
use berth_sched_core::prelude::TimePoint;

#[derive(Debug, Clone)]
pub struct ProblemBuilder<T> {
    vessels: Vec<Vessel<T>>,
    berth_count: usize,
    planning_horizon: Option<TimePoint<T>>,
}

impl<T> Default for ProblemBuilder<T> {
    fn default() -> Self {
        Self {
            vessels: Vec::new(),
            berth_count: 1,
            planning_horizon: None,
        }
    }
}

impl<T: Copy + Ord> ProblemBuilder<T> {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_capacity(vessels: usize) -> Self {
        Self {
            vessels: Vec::with_capacity(vessels),
            ..Self::default()
        }
    }

    #[inline]
    pub fn with_vessels<I>(mut self, vessels: I) -> Self
    where
        I: IntoIterator<Item = Vessel<T>>,
    {
        self.vessels.clear();
        self.vessels.extend(vessels);
        self
    }

    #[inline]
    pub fn with_berth_count(mut self, berth_count: usize) -> Self {
        self.berth_count = berth_count;
        self
    }

    #[inline]
    pub fn with_planning_horizon(mut self, horizon: TimePoint<T>) -> Self {
        self.planning_horizon = Some(horizon);
        self
    }

    #[inline]
    pub fn add_vessel(&mut self, vessel: Vessel<T>) -> &mut Self {
        self.vessels.push(vessel);
        self
    }

    #[inline]
    pub fn extend_vessels<I>(&mut self, vessels: I) -> &mut Self
    where
        I: IntoIterator<Item = Vessel<T>>,
    {
        self.vessels.extend(vessels);
        self
    }

    #[inline]
    pub fn berth_count(&mut self, berth_count: usize) -> &mut Self {
        self.berth_count = berth_count;
        self
    }

    #[inline]
    pub fn planning_horizon(&mut self, horizon: TimePoint<T>) -> &mut Self {
        self.planning_horizon = Some(horizon);
        self
    }

    #[inline]
    pub fn build(self) -> Result<Problem<T>, ProblemError> {
        let horizon = self.planning_horizon.ok_or(MissingPlanningHorizonError)?;
        if self.berth_count == 0 {
            return Err(InvalidBerthCountError::new(0).into());
        }
        Problem::new(self.vessels, self.berth_count, horizon)
    }
}
