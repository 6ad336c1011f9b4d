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

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InvalidBerthCountError {
    requested: i64,
}

impl InvalidBerthCountError {
    #[inline]
    pub fn new(requested: i64) -> Self {
        Self { requested }
    }

    #[inline]
    pub fn requested(&self) -> i64 {
        self.requested
    }
}

impl std::fmt::Display for InvalidBerthCountError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "At least one berth is required, but {} were requested",
            self.requested
        )
    }
}

impl std::error::Error for InvalidBerthCountError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MissingPlanningHorizonError;

impl std::fmt::Display for MissingPlanningHorizonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "No planning horizon was given.")
    }
}

impl std::error::Error for MissingPlanningHorizonError {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ProblemError {
    InvalidBerthCount(InvalidBerthCountError),
    MissingPlanningHorizon(MissingPlanningHorizonError),
}

impl std::fmt::Display for ProblemError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProblemError::InvalidBerthCount(e) => write!(f, "{}", e),
            ProblemError::MissingPlanningHorizon(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ProblemError {}

impl From<InvalidBerthCountError> for ProblemError {
    fn from(err: InvalidBerthCountError) -> Self {
        ProblemError::InvalidBerthCount(err)
    }
}

impl From<MissingPlanningHorizonError> for ProblemError {
    fn from(err: MissingPlanningHorizonError) -> Self {
        ProblemError::MissingPlanningHorizon(err)
    }
}

#[derive(Debug)]
pub enum ProblemLoaderError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Problem(ProblemError),
}

impl From<std::io::Error> for ProblemLoaderError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for ProblemLoaderError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl From<ProblemError> for ProblemLoaderError {
    fn from(e: ProblemError) -> Self {
        Self::Problem(e)
    }
}

impl From<InvalidBerthCountError> for ProblemLoaderError {
    fn from(e: InvalidBerthCountError) -> Self {
        Self::Problem(ProblemError::from(e))
    }
}

impl std::fmt::Display for ProblemLoaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use ProblemLoaderError::*;
        match self {
            Io(e) => write!(f, "I/O error: {e}"),
            Json(e) => write!(f, "invalid problem document: {e}"),
            Problem(e) => write!(f, "problem error: {e}"),
        }
    }
}

impl std::error::Error for ProblemLoaderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProblemLoaderError::Io(e) => Some(e),
            ProblemLoaderError::Json(e) => Some(e),
            ProblemLoaderError::Problem(e) => Some(e),
        }
    }
}
