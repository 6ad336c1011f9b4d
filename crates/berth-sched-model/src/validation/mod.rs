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

pub mod err;

use crate::{
    problem::{
        prob::Problem,
        vessel::{Vessel, VesselIdentifier},
    },
    solution::{asg::Assignment, sol::Solution},
    validation::err::{
        AssignmentOverlapError, DuplicateVesselIdError, EndTimeMismatchError,
        ExtraAssignmentError, MakespanMismatchError, MissingAssignmentError,
        SolutionValidationError, StartsAfterHorizonError, StartsBeforeArrivalError,
        UnknownBerthError,
    },
};
use berth_sched_core::prelude::TimePoint;
use num_traits::{CheckedAdd, Zero};
use std::collections::{HashMap, HashSet};

/// Checks a solution against the problem it claims to solve.
///
/// Each `validate_*` function checks a single property and returns the first
/// violation it finds. [`SolutionValidator::validate`] runs all of them.
/// [`SolutionValidator::validate_schedule`] runs all but the id uniqueness
/// check, for problems where a repeated id is expected to replace the
/// earlier vessel.
#[derive(Debug, Clone, Copy, Default)]
pub struct SolutionValidator;

/// The vessel a schedule entry stands for: the last one carrying the id.
fn vessels_by_id<T>(problem: &Problem<T>) -> HashMap<&VesselIdentifier, &Vessel<T>>
where
    T: Copy + Ord,
{
    problem.iter_vessels().map(|v| (v.id(), v)).collect()
}

impl SolutionValidator {
    #[inline]
    pub fn validate_vessel_ids_unique<T>(problem: &Problem<T>) -> Result<(), DuplicateVesselIdError>
    where
        T: Copy + Ord,
    {
        let mut seen: HashSet<&VesselIdentifier> = HashSet::with_capacity(problem.vessel_count());
        for v in problem.iter_vessels() {
            if !seen.insert(v.id()) {
                return Err(DuplicateVesselIdError::new(v.id().clone()));
            }
        }
        Ok(())
    }

    #[inline]
    pub fn validate_all_vessels_assigned<T>(
        problem: &Problem<T>,
        solution: &Solution<T>,
    ) -> Result<(), MissingAssignmentError>
    where
        T: Copy + Ord,
    {
        for v in problem.iter_vessels() {
            if !solution.schedule().contains_id(v.id()) {
                return Err(MissingAssignmentError::new(v.id().clone()));
            }
        }
        Ok(())
    }

    #[inline]
    pub fn validate_no_extra_assignments<T>(
        problem: &Problem<T>,
        solution: &Solution<T>,
    ) -> Result<(), ExtraAssignmentError>
    where
        T: Copy + Ord,
    {
        let known: HashSet<&VesselIdentifier> = problem.iter_vessels().map(|v| v.id()).collect();
        for a in solution.schedule().iter() {
            if !known.contains(a.vessel_id()) {
                return Err(ExtraAssignmentError::new(a.vessel_id().clone()));
            }
        }
        Ok(())
    }

    #[inline]
    pub fn validate_berths_known<T>(
        problem: &Problem<T>,
        solution: &Solution<T>,
    ) -> Result<(), UnknownBerthError>
    where
        T: Copy + Ord,
    {
        for a in solution.schedule().iter() {
            if !problem.contains_berth(a.berth()) {
                return Err(UnknownBerthError::new(a.vessel_id().clone(), a.berth()));
            }
        }
        Ok(())
    }

    /// Checks start, end and horizon of every assignment against the vessel
    /// data held by the problem. With repeated ids the last vessel counts.
    #[inline]
    pub fn validate_assignment_times<T>(
        problem: &Problem<T>,
        solution: &Solution<T>,
    ) -> Result<(), SolutionValidationError<T>>
    where
        T: Copy + Ord + CheckedAdd,
    {
        let horizon = problem.planning_horizon();
        let vessels = vessels_by_id(problem);
        for a in solution.schedule().iter() {
            let Some(vessel) = vessels.get(a.vessel_id()) else {
                return Err(ExtraAssignmentError::new(a.vessel_id().clone()).into());
            };

            let start = a.start_time();
            if start < vessel.arrival_time() {
                return Err(StartsBeforeArrivalError::new(
                    a.vessel_id().clone(),
                    start,
                    vessel.arrival_time(),
                )
                .into());
            }

            let expected_end = start.checked_add(vessel.processing_time());
            if expected_end != Some(a.end_time()) {
                return Err(EndTimeMismatchError::new(
                    a.vessel_id().clone(),
                    start,
                    vessel.processing_time(),
                    a.end_time(),
                )
                .into());
            }

            if start >= horizon {
                return Err(
                    StartsAfterHorizonError::new(a.vessel_id().clone(), start, horizon).into(),
                );
            }
        }
        Ok(())
    }

    /// Checks that no two assignments occupy the same berth at the same time.
    /// Assignments with an empty interval occupy nothing.
    #[inline]
    pub fn validate_no_overlaps<T>(
        problem: &Problem<T>,
        solution: &Solution<T>,
    ) -> Result<(), AssignmentOverlapError>
    where
        T: Copy + Ord,
    {
        for berth in problem.iter_berth_ids() {
            let mut assignments: Vec<&Assignment<T>> = solution
                .schedule()
                .iter_on_berth(berth)
                .filter(|a| !a.interval().is_empty())
                .collect();
            assignments.sort_by_key(|a| (a.start_time(), a.end_time()));

            let mut iter = assignments.into_iter();
            let Some(mut reach) = iter.next() else {
                continue;
            };
            for a in iter {
                if reach.interval().intersects(&a.interval()) {
                    return Err(AssignmentOverlapError::new(
                        berth,
                        reach.vessel_id().clone(),
                        a.vessel_id().clone(),
                    ));
                }
                if a.end_time() > reach.end_time() {
                    reach = a;
                }
            }
        }
        Ok(())
    }

    #[inline]
    pub fn validate_makespan<T>(solution: &Solution<T>) -> Result<(), MakespanMismatchError<T>>
    where
        T: Copy + Ord + Zero,
    {
        let expected = solution
            .schedule()
            .latest_end()
            .unwrap_or_else(TimePoint::zero);
        if solution.makespan() != expected {
            return Err(MakespanMismatchError::new(expected, solution.makespan()));
        }
        Ok(())
    }

    /// Every check except [`SolutionValidator::validate_vessel_ids_unique`].
    pub fn validate_schedule<T>(
        problem: &Problem<T>,
        solution: &Solution<T>,
    ) -> Result<(), SolutionValidationError<T>>
    where
        T: Copy + Ord + CheckedAdd + Zero,
    {
        Self::validate_all_vessels_assigned(problem, solution)?;
        Self::validate_no_extra_assignments(problem, solution)?;
        Self::validate_berths_known(problem, solution)?;
        Self::validate_assignment_times(problem, solution)?;
        Self::validate_no_overlaps(problem, solution)?;
        Self::validate_makespan(solution)?;
        Ok(())
    }

    pub fn validate<T>(
        problem: &Problem<T>,
        solution: &Solution<T>,
    ) -> Result<(), SolutionValidationError<T>>
    where
        T: Copy + Ord + CheckedAdd + Zero,
    {
        Self::validate_vessel_ids_unique(problem)?;
        Self::validate_schedule(problem, solution)
    }
}
