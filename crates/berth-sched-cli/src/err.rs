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

use berth_sched_model::prelude::{ProblemLoaderError, SolutionValidationError};
use berth_sched_solver::prelude::GreedyError;

#[derive(Debug)]
pub enum CliError {
    Load(ProblemLoaderError),
    Solve(GreedyError<i64>),
    Validation(SolutionValidationError<i64>),
    Output(std::io::Error),
    Serialize(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Load(e) => write!(f, "Failed to load problem: {}", e),
            CliError::Solve(e) => write!(f, "Failed to solve problem: {}", e),
            CliError::Validation(e) => write!(f, "Solution failed validation: {}", e),
            CliError::Output(e) => write!(f, "Failed to write solution: {}", e),
            CliError::Serialize(e) => write!(f, "Failed to serialize solution: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Load(e) => Some(e),
            CliError::Solve(e) => Some(e),
            CliError::Validation(e) => Some(e),
            CliError::Output(e) => Some(e),
            CliError::Serialize(e) => Some(e),
        }
    }
}

impl From<ProblemLoaderError> for CliError {
    fn from(e: ProblemLoaderError) -> Self {
        CliError::Load(e)
    }
}

impl From<GreedyError<i64>> for CliError {
    fn from(e: GreedyError<i64>) -> Self {
        CliError::Solve(e)
    }
}

impl From<SolutionValidationError<i64>> for CliError {
    fn from(e: SolutionValidationError<i64>) -> Self {
        CliError::Validation(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Output(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialize(e)
    }
}
