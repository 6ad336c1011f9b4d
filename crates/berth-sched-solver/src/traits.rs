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

use crate::outcome::SolveOutcome;
use berth_sched_model::{problem::prob::Problem, solution::sol::Solution};
use std::time::Instant;

/// A solver that builds one complete solution in a single pass.
pub trait ConstructionSolver<T: Copy + Ord> {
    type Error;

    #[inline]
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    fn construct(&self, problem: &Problem<T>) -> Result<Solution<T>, Self::Error>;

    /// Runs [`ConstructionSolver::construct`] and records how long it took.
    fn solve(&self, problem: &Problem<T>) -> Result<SolveOutcome<T>, Self::Error> {
        let started = Instant::now();
        let solution = self.construct(problem)?;
        Ok(SolveOutcome::new(solution, started.elapsed()))
    }
}
