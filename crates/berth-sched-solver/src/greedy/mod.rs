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

//! First-come-first-served list scheduling.
//!
//! Vessels are taken in order of arrival and each one is placed on the berth
//! that frees up first. There is no lookahead and no backtracking: the first
//! vessel that cannot start before the planning horizon aborts the run.

pub mod err;

use crate::{
    berth::availability::BerthAvailability,
    greedy::err::{GreedyError, HorizonViolationError},
    traits::ConstructionSolver,
};
use berth_sched_model::{
    problem::{
        err::{InvalidBerthCountError, ProblemError},
        prob::Problem,
        vessel::Vessel,
    },
    solution::{
        asg::Assignment,
        sol::{Schedule, Solution},
    },
};
use num_traits::{CheckedAdd, Zero};

#[derive(Debug, Clone, Copy)]
pub struct GreedySolver<T> {
    _phantom: std::marker::PhantomData<fn() -> T>,
}

impl<T> GreedySolver<T> {
    #[inline]
    pub fn new() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<T> Default for GreedySolver<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ConstructionSolver<T> for GreedySolver<T>
where
    T: Copy + Ord + CheckedAdd + Zero + std::fmt::Debug,
{
    type Error = GreedyError<T>;

    #[inline]
    fn name(&self) -> &str {
        "GreedySolver"
    }

    #[tracing::instrument(
        level = "debug",
        name = "Greedy Construction",
        skip(self, problem),
        fields(vessels = problem.vessel_count(), berths = problem.berth_count())
    )]
    fn construct(&self, problem: &Problem<T>) -> Result<Solution<T>, Self::Error> {
        // `sort_by_key` is stable: equal arrivals keep their input order.
        let mut order: Vec<&Vessel<T>> = problem.iter_vessels().collect();
        order.sort_by_key(|v| v.arrival_time());

        let horizon = problem.planning_horizon();
        let mut berths = BerthAvailability::new(problem.berth_count());
        let mut schedule = Schedule::with_capacity(order.len());

        for vessel in order {
            let Some((berth, available_at)) = berths.take_earliest() else {
                return Err(ProblemError::from(InvalidBerthCountError::new(0)).into());
            };

            let start = vessel.arrival_time().max(available_at);
            if start >= horizon {
                tracing::debug!(
                    vessel = %vessel.id(),
                    start = ?start.value(),
                    horizon = ?horizon.value(),
                    "vessel cannot start before the planning horizon"
                );
                return Err(HorizonViolationError::new(vessel.id().clone(), start, horizon).into());
            }

            let assignment = Assignment::new(vessel, berth, start)?;
            let end = assignment.end_time();
            tracing::trace!(
                vessel = %vessel.id(),
                berth = berth.index(),
                start = ?start.value(),
                end = ?end.value(),
                "assigned vessel"
            );

            berths.release(berth, end);
            schedule.insert(assignment);
        }

        let solution = Solution::from_schedule(schedule);
        tracing::debug!(
            assigned = solution.len(),
            makespan = ?solution.makespan().value(),
            "greedy construction finished"
        );
        Ok(solution)
    }
}
