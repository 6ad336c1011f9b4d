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

//! Wire records.
//!
//! Plain serde shapes for the JSON documents that enter and leave the
//! system. The typed model never derives serde itself; every conversion
//! between the two goes through the `From` impls in this module.

use crate::{
    problem::{prob::Problem, vessel::Vessel},
    solution::{asg::Assignment, sol::Solution},
};
use berth_sched_core::prelude::{TimeDelta, TimePoint};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VesselRecord {
    pub vessel_id: String,
    pub arrival_time: i64,
    pub processing_time: i64,
}

impl From<&Vessel<i64>> for VesselRecord {
    fn from(v: &Vessel<i64>) -> Self {
        Self {
            vessel_id: v.id().as_str().to_owned(),
            arrival_time: v.arrival_time().value(),
            processing_time: v.processing_time().value(),
        }
    }
}

impl From<VesselRecord> for Vessel<i64> {
    fn from(r: VesselRecord) -> Self {
        Vessel::new(
            r.vessel_id,
            TimePoint::new(r.arrival_time),
            TimeDelta::new(r.processing_time),
        )
    }
}

/// A problem document. Missing `planning_horizon` and `num_berths` are filled
/// in by the loader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemRecord {
    pub vessels: Vec<VesselRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planning_horizon: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_berths: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentRecord {
    pub berth: usize,
    pub start_time: i64,
    pub end_time: i64,
    pub arrival_time: i64,
    pub processing_time: i64,
}

impl From<&Assignment<i64>> for AssignmentRecord {
    fn from(a: &Assignment<i64>) -> Self {
        Self {
            berth: a.berth().index(),
            start_time: a.start_time().value(),
            end_time: a.end_time().value(),
            arrival_time: a.arrival_time().value(),
            processing_time: a.processing_time().value(),
        }
    }
}

/// Everything a store would keep about one solve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolutionRecord {
    pub problem_id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub vessels: Vec<VesselRecord>,
    #[serde(with = "ordered_map")]
    pub schedule: Vec<(String, AssignmentRecord)>,
    pub makespan: i64,
    /// Seconds.
    pub solving_time: f64,
    pub num_vessels: usize,
}

impl SolutionRecord {
    pub fn new(
        problem_id: Uuid,
        timestamp: DateTime<Utc>,
        problem: &Problem<i64>,
        solution: &Solution<i64>,
        solving_time: Duration,
    ) -> Self {
        Self {
            problem_id,
            timestamp,
            vessels: problem.iter_vessels().map(VesselRecord::from).collect(),
            schedule: solution
                .schedule()
                .iter()
                .map(|a| (a.vessel_id().as_str().to_owned(), AssignmentRecord::from(a)))
                .collect(),
            makespan: solution.makespan().value(),
            solving_time: solving_time.as_secs_f64(),
            num_vessels: problem.vessel_count(),
        }
    }

    #[inline]
    pub fn assignment(&self, vessel_id: &str) -> Option<&AssignmentRecord> {
        self.schedule
            .iter()
            .find(|(id, _)| id == vessel_id)
            .map(|(_, a)| a)
    }
}

// A JSON object whose key order is the vector order.
mod ordered_map {
    use super::AssignmentRecord;
    use serde::{
        Deserializer, Serializer,
        de::{MapAccess, Visitor},
        ser::SerializeMap,
    };

    pub fn serialize<S>(entries: &[(String, AssignmentRecord)], s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = s.serialize_map(Some(entries.len()))?;
        for (k, v) in entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }

    pub fn deserialize<'de, D>(d: D) -> Result<Vec<(String, AssignmentRecord)>, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = Vec<(String, AssignmentRecord)>;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "a map from vessel id to assignment")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut out = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some(entry) = access.next_entry::<String, AssignmentRecord>()? {
                    out.push(entry);
                }
                Ok(out)
            }
        }

        d.deserialize_map(EntriesVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        problem::berth::BerthIdentifier,
        solution::sol::{Schedule, Solution},
    };

    #[inline]
    fn tp(v: i64) -> TimePoint<i64> {
        TimePoint::new(v)
    }
    #[inline]
    fn td(v: i64) -> TimeDelta<i64> {
        TimeDelta::new(v)
    }

    fn sample() -> (Problem<i64>, Solution<i64>) {
        let vessels = vec![
            Vessel::new("V2", tp(3), td(7)),
            Vessel::new("V1", tp(0), td(5)),
        ];
        let problem = Problem::new(vessels.clone(), 2, tp(72)).unwrap();
        let schedule: Schedule<i64> = [
            Assignment::new(&vessels[1], BerthIdentifier::new(0), tp(0)).unwrap(),
            Assignment::new(&vessels[0], BerthIdentifier::new(1), tp(3)).unwrap(),
        ]
        .into_iter()
        .collect();
        (problem, Solution::from_schedule(schedule))
    }

    #[test]
    fn test_problem_record_defaults_are_optional() {
        let rec: ProblemRecord = serde_json::from_str(
            r#"{"vessels":[{"vessel_id":"V1","arrival_time":0,"processing_time":5}]}"#,
        )
        .unwrap();
        assert_eq!(rec.vessels.len(), 1);
        assert_eq!(rec.planning_horizon, None);
        assert_eq!(rec.num_berths, None);
    }

    #[test]
    fn test_vessel_record_into_vessel() {
        let v: Vessel<i64> = VesselRecord {
            vessel_id: "X".into(),
            arrival_time: -1,
            processing_time: 0,
        }
        .into();
        assert_eq!(v.id().as_str(), "X");
        assert_eq!(v.arrival_time(), tp(-1));
        assert_eq!(v.processing_time(), td(0));
    }

    #[test]
    fn test_solution_record_shape() {
        let (problem, solution) = sample();
        let id = Uuid::nil();
        let ts = DateTime::<Utc>::from_timestamp(0, 0).unwrap();
        let rec = SolutionRecord::new(id, ts, &problem, &solution, Duration::from_millis(1500));

        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["problem_id"], "00000000-0000-0000-0000-000000000000");
        assert_eq!(json["makespan"], 10);
        assert_eq!(json["num_vessels"], 2);
        assert_eq!(json["solving_time"], 1.5);
        assert_eq!(json["vessels"][0]["vessel_id"], "V2");
        assert_eq!(json["schedule"]["V1"]["berth"], 0);
        assert_eq!(json["schedule"]["V2"]["start_time"], 3);
        assert_eq!(json["schedule"]["V2"]["end_time"], 10);
        assert_eq!(json["schedule"]["V2"]["processing_time"], 7);
    }

    #[test]
    fn test_schedule_keeps_processing_order_in_text() {
        let (problem, solution) = sample();
        let rec = SolutionRecord::new(
            Uuid::nil(),
            DateTime::<Utc>::from_timestamp(0, 0).unwrap(),
            &problem,
            &solution,
            Duration::ZERO,
        );
        let text = serde_json::to_string(&rec).unwrap();
        let v1 = text.find("\"V1\":").unwrap();
        let v2 = text.find("\"V2\":").unwrap();
        assert!(v1 < v2);

        let back: SolutionRecord = serde_json::from_str(&text).unwrap();
        assert_eq!(back, rec);
        assert_eq!(back.assignment("V2").map(|a| a.berth), Some(1));
    }
}
