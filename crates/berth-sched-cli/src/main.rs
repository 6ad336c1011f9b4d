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

mod err;

use crate::err::CliError;
use berth_sched_model::prelude::{
    Problem, ProblemLoader, Solution, SolutionRecord, SolutionValidator,
};
use berth_sched_solver::prelude::{ConstructionSolver, GreedySolver};
use chrono::Utc;
use clap::Parser;
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};
use uuid::Uuid;

/// Assign arriving vessels to berths first come, first served.
#[derive(Debug, Parser)]
#[command(name = "berth-sched", version)]
struct Cli {
    /// JSON problem file.
    problem: PathBuf,

    /// Write the solution here instead of stdout.
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Override the planning horizon of the problem file.
    #[arg(long, allow_negative_numbers = true)]
    horizon: Option<i64>,

    /// Override the number of berths of the problem file.
    #[arg(long, allow_negative_numbers = true)]
    berths: Option<i64>,

    #[arg(long)]
    pretty: bool,
}

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr)
        .init();
}

fn solve_file(cli: &Cli) -> Result<SolutionRecord, CliError> {
    let loader = ProblemLoader::default();
    let mut record = loader.record_from_path(&cli.problem)?;
    if let Some(h) = cli.horizon {
        record.planning_horizon = Some(h);
    }
    if let Some(n) = cli.berths {
        record.num_berths = Some(n);
    }
    let problem = loader.from_record(record)?;

    tracing::info!(
        "Solving {} with {} berths and {} vessels",
        cli.problem.display(),
        problem.berth_count(),
        problem.vessel_count()
    );

    let solver = GreedySolver::new();
    let outcome = solver.solve(&problem)?;

    validate(&problem, outcome.solution())?;

    tracing::info!(
        "{} finished: makespan {}, {} vessels in {:?}",
        solver.name(),
        outcome.solution().makespan().value(),
        outcome.solution().len(),
        outcome.solving_time()
    );

    Ok(SolutionRecord::new(
        Uuid::new_v4(),
        Utc::now(),
        &problem,
        outcome.solution(),
        outcome.solving_time(),
    ))
}

/// Repeated vessel ids are accepted: the later vessel replaces the earlier
/// one in the schedule. They are reported and the rest is still checked.
fn validate(problem: &Problem<i64>, solution: &Solution<i64>) -> Result<(), CliError> {
    if let Err(e) = SolutionValidator::validate_vessel_ids_unique(problem) {
        tracing::warn!("{}", e);
    }
    SolutionValidator::validate_schedule(problem, solution)?;
    Ok(())
}

fn write_record(record: &SolutionRecord, out: Option<&Path>, pretty: bool) -> Result<(), CliError> {
    let json = if pretty {
        serde_json::to_string_pretty(record)?
    } else {
        serde_json::to_string(record)?
    };

    match out {
        Some(path) => {
            let mut w = BufWriter::new(File::create(path)?);
            writeln!(w, "{json}")?;
            w.flush()?;
            tracing::info!("Wrote solution to {}", path.display());
        }
        None => {
            let mut w = std::io::stdout().lock();
            writeln!(w, "{json}")?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    enable_tracing();

    match solve_file(&cli).and_then(|r| write_record(&r, cli.out.as_deref(), cli.pretty)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use berth_sched_model::prelude::SolutionValidationError;
    use berth_sched_solver::prelude::GreedyError;

    fn write_problem(json: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("berth-sched-{}.json", Uuid::new_v4()));
        std::fs::write(&path, json).expect("write temp problem");
        path
    }

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("berth-sched").chain(args.iter().copied()))
            .expect("valid arguments")
    }

    const PROBLEM: &str = r#"{
        "vessels": [
            {"vessel_id": "V1", "arrival_time": 0, "processing_time": 5},
            {"vessel_id": "V2", "arrival_time": 3, "processing_time": 7},
            {"vessel_id": "V3", "arrival_time": 8, "processing_time": 4}
        ]
    }"#;

    #[test]
    fn test_parses_flags() {
        let c = cli(&["p.json", "--out", "s.json", "--horizon", "10", "--berths", "-1", "--pretty"]);
        assert_eq!(c.problem, PathBuf::from("p.json"));
        assert_eq!(c.out, Some(PathBuf::from("s.json")));
        assert_eq!(c.horizon, Some(10));
        assert_eq!(c.berths, Some(-1));
        assert!(c.pretty);
    }

    #[test]
    fn test_problem_path_is_required() {
        assert!(Cli::try_parse_from(["berth-sched"]).is_err());
    }

    #[test]
    fn test_solves_file_with_defaults() {
        let path = write_problem(PROBLEM);
        let record = solve_file(&cli(&[path.to_str().unwrap()])).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(record.num_vessels, 3);
        assert_eq!(record.makespan, 12);
        let keys: Vec<&str> = record.schedule.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["V1", "V2", "V3"]);
        assert_eq!(record.assignment("V2").unwrap().berth, 1);
    }

    #[test]
    fn test_flags_override_file_settings() {
        let path = write_problem(PROBLEM);
        let record = solve_file(&cli(&[path.to_str().unwrap(), "--berths", "1"])).unwrap();
        assert_eq!(record.makespan, 16);

        let err = solve_file(&cli(&[path.to_str().unwrap(), "--horizon", "8"])).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, CliError::Solve(GreedyError::HorizonViolation(_))));
    }

    #[test]
    fn test_rejects_non_positive_berth_override() {
        let path = write_problem(PROBLEM);
        let err = solve_file(&cli(&[path.to_str().unwrap(), "--berths", "0"])).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, CliError::Load(_)));
    }

    #[test]
    fn test_missing_file_is_a_load_error() {
        let missing = std::env::temp_dir().join(format!("missing-{}.json", Uuid::new_v4()));
        let err = solve_file(&cli(&[missing.to_str().unwrap()])).unwrap_err();
        assert!(matches!(err, CliError::Load(_)));
    }

    #[test]
    fn test_repeated_ids_are_solved_and_checked() {
        let path = write_problem(
            r#"{"vessels": [
                {"vessel_id": "D", "arrival_time": 0, "processing_time": 2},
                {"vessel_id": "X", "arrival_time": 1, "processing_time": 1},
                {"vessel_id": "D", "arrival_time": 3, "processing_time": 4}
            ], "num_berths": 1}"#,
        );
        let record = solve_file(&cli(&[path.to_str().unwrap()])).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(record.num_vessels, 3);
        assert_eq!(record.schedule.len(), 2);
        assert_eq!(record.assignment("D").unwrap().start_time, 3);
        assert_eq!(record.makespan, 7);
    }

    #[test]
    fn test_validation_reports_broken_schedule_despite_repeated_ids() {
        let problem = ProblemLoader::default()
            .from_str(
                r#"{"vessels": [
                    {"vessel_id": "D", "arrival_time": 0, "processing_time": 2},
                    {"vessel_id": "D", "arrival_time": 3, "processing_time": 4}
                ], "num_berths": 1}"#,
            )
            .unwrap();
        let ok = GreedySolver::new().construct(&problem).unwrap();
        assert!(validate(&problem, &ok).is_ok());

        // Claim the makespan is D's start rather than its end.
        let start = ok.schedule().iter().next().unwrap().start_time();
        let wrong = Solution::new(ok.schedule().clone(), start);
        assert!(matches!(
            validate(&problem, &wrong),
            Err(CliError::Validation(SolutionValidationError::MakespanMismatch(_)))
        ));
    }

    #[test]
    fn test_writes_record_to_file() {
        let path = write_problem(PROBLEM);
        let record = solve_file(&cli(&[path.to_str().unwrap()])).unwrap();
        std::fs::remove_file(&path).ok();

        let out = std::env::temp_dir().join(format!("solution-{}.json", Uuid::new_v4()));
        write_record(&record, Some(&out), true).unwrap();
        let written = std::fs::read_to_string(&out).unwrap();
        std::fs::remove_file(&out).ok();

        let back: SolutionRecord = serde_json::from_str(&written).unwrap();
        assert_eq!(back.problem_id, record.problem_id);
        assert_eq!(back.timestamp, record.timestamp);
        assert_eq!(back.schedule, record.schedule);
        assert_eq!(back.vessels, record.vessels);
        assert_eq!(back.makespan, 12);
    }
}
