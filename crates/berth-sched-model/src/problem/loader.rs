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
        DEFAULT_BERTH_COUNT, DEFAULT_PLANNING_HORIZON,
        builder::ProblemBuilder,
        err::{InvalidBerthCountError, ProblemLoaderError},
        prob::Problem,
        vessel::Vessel,
    },
    record::ProblemRecord,
};
use berth_sched_core::prelude::TimePoint;
use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

/// Reads problem documents in the JSON shape of [`ProblemRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProblemLoader {
    default_planning_horizon: i64,
    default_berth_count: i64,
}

impl Default for ProblemLoader {
    fn default() -> Self {
        Self {
            default_planning_horizon: DEFAULT_PLANNING_HORIZON,
            default_berth_count: DEFAULT_BERTH_COUNT,
        }
    }
}

impl ProblemLoader {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn default_planning_horizon(mut self, v: i64) -> Self {
        self.default_planning_horizon = v;
        self
    }

    #[inline]
    pub fn default_berth_count(mut self, v: i64) -> Self {
        self.default_berth_count = v;
        self
    }

    pub fn from_record(&self, record: ProblemRecord) -> Result<Problem<i64>, ProblemLoaderError> {
        let horizon = record
            .planning_horizon
            .unwrap_or(self.default_planning_horizon);
        let requested = record.num_berths.unwrap_or(self.default_berth_count);
        let berth_count = usize::try_from(requested)
            .ok()
            .filter(|&n| n > 0)
            .ok_or(InvalidBerthCountError::new(requested))?;

        let mut builder = ProblemBuilder::with_capacity(record.vessels.len());
        builder
            .berth_count(berth_count)
            .planning_horizon(TimePoint::new(horizon))
            .extend_vessels(record.vessels.into_iter().map(Vessel::from));

        let problem = builder.build()?;
        tracing::debug!(
            vessels = problem.vessel_count(),
            berths = problem.berth_count(),
            horizon,
            "loaded problem"
        );
        Ok(problem)
    }

    #[inline]
    pub fn record_from_reader<R: Read>(&self, r: R) -> Result<ProblemRecord, ProblemLoaderError> {
        Ok(serde_json::from_reader(BufReader::new(r))?)
    }

    #[inline]
    pub fn record_from_path(
        &self,
        path: impl AsRef<Path>,
    ) -> Result<ProblemRecord, ProblemLoaderError> {
        let file = File::open(path).map_err(ProblemLoaderError::Io)?;
        self.record_from_reader(file)
    }

    #[inline]
    pub fn from_slice(&self, bytes: &[u8]) -> Result<Problem<i64>, ProblemLoaderError> {
        self.from_record(serde_json::from_slice(bytes)?)
    }

    #[inline]
    pub fn from_str(&self, s: &str) -> Result<Problem<i64>, ProblemLoaderError> {
        self.from_record(serde_json::from_str(s)?)
    }

    #[inline]
    pub fn from_reader<R: Read>(&self, r: R) -> Result<Problem<i64>, ProblemLoaderError> {
        self.from_record(self.record_from_reader(r)?)
    }

    #[inline]
    pub fn from_path(&self, path: impl AsRef<Path>) -> Result<Problem<i64>, ProblemLoaderError> {
        self.from_record(self.record_from_path(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::err::ProblemError;

    const THREE_VESSELS: &str = r#"
        {
            "vessels": [
                {"vessel_id": "V1", "arrival_time": 0, "processing_time": 5},
                {"vessel_id": "V2", "arrival_time": 3, "processing_time": 7},
                {"vessel_id": "V3", "arrival_time": 8, "processing_time": 4}
            ],
            "planning_horizon": 48,
            "num_berths": 3
        }
    "#;

    #[test]
    fn test_loads_explicit_parameters() {
        let p = ProblemLoader::new().from_str(THREE_VESSELS).unwrap();
        assert_eq!(p.vessel_count(), 3);
        assert_eq!(p.berth_count(), 3);
        assert_eq!(p.planning_horizon(), TimePoint::new(48));
        let ids: Vec<_> = p.iter_vessels().map(|v| v.id().as_str()).collect();
        assert_eq!(ids, vec!["V1", "V2", "V3"]);
    }

    #[test]
    fn test_missing_parameters_use_defaults() {
        let p = ProblemLoader::default()
            .from_str(r#"{"vessels": []}"#)
            .unwrap();
        assert!(p.is_empty());
        assert_eq!(p.berth_count(), 2);
        assert_eq!(p.planning_horizon(), TimePoint::new(72));
    }

    #[test]
    fn test_custom_defaults() {
        let p = ProblemLoader::new()
            .default_planning_horizon(24)
            .default_berth_count(1)
            .from_slice(br#"{"vessels": [], "num_berths": 4}"#)
            .unwrap();
        assert_eq!(p.berth_count(), 4);
        assert_eq!(p.planning_horizon(), TimePoint::new(24));
    }

    #[test]
    fn test_non_positive_berth_count_rejected() {
        for n in [0, -3] {
            let doc = format!(r#"{{"vessels": [], "num_berths": {n}}}"#);
            match ProblemLoader::new().from_str(&doc) {
                Err(ProblemLoaderError::Problem(ProblemError::InvalidBerthCount(e))) => {
                    assert_eq!(e.requested(), n)
                }
                other => panic!("expected InvalidBerthCount, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_malformed_json_is_a_json_error() {
        let err = ProblemLoader::new().from_str("{not json").unwrap_err();
        assert!(matches!(err, ProblemLoaderError::Json(_)));

        let err = ProblemLoader::new()
            .from_str(r#"{"vessels": [{"vessel_id": "V1"}]}"#)
            .unwrap_err();
        assert!(matches!(err, ProblemLoaderError::Json(_)));
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let p = ProblemLoader::new()
            .from_str(r#"{"vessels": [], "comment": "ignored"}"#)
            .unwrap();
        assert!(p.is_empty());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = ProblemLoader::new()
            .from_path("/definitely/not/here.json")
            .unwrap_err();
        assert!(matches!(err, ProblemLoaderError::Io(_)));
    }

    #[test]
    fn test_from_reader() {
        let p = ProblemLoader::new()
            .from_reader(THREE_VESSELS.as_bytes())
            .unwrap();
        assert_eq!(p.vessel_count(), 3);
    }
}
