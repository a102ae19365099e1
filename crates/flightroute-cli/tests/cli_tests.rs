//! Integration tests for the CLI: route comparison output, single-algorithm
//! and JSON modes, direct-flight lookup, airport inspection, and failure
//! exit codes.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const SAMPLE_DATA: &str = "\
Airline,Airline_ID,Source,Source_ID,Dest,Dest_ID,Codeshare,Stops,Equipment,Est_Time_Hr
AA,24,JFK,3797,LAX,3484,N,0,738,5.50
AA,24,LAX,3484,JFK,3797,N,0,738,5.50
DL,19,JFK,3797,ORD,3830,N,0,752,2.10
DL,19,ORD,3830,LAX,3484,N,0,752,4.00
";

struct TestEnv {
    _temp_dir: TempDir,
    data_path: PathBuf,
}

impl TestEnv {
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("create temp dir");
        let data_path = temp_dir.path().join("routes.csv");
        fs::write(&data_path, SAMPLE_DATA).expect("write fixture");
        Self {
            _temp_dir: temp_dir,
            data_path,
        }
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("flightroute-cli").expect("binary exists");
        cmd.arg("--data").arg(&self.data_path);
        cmd
    }
}

#[test]
fn route_compares_both_algorithms() {
    let env = TestEnv::new();
    env.cmd()
        .args(["route", "--from", "jfk", "--to", "lax"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Path found: JFK -> LAX"))
        .stdout(predicate::str::contains("Total time: 5.50 hours"))
        .stdout(predicate::str::contains(
            "Both algorithms found routes with 5.50 hours total time.",
        ));
}

#[test]
fn route_runs_a_single_algorithm_on_request() {
    let env = TestEnv::new();
    env.cmd()
        .args([
            "route",
            "--from",
            "ORD",
            "--to",
            "JFK",
            "--algorithm",
            "bellman-ford",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Running bellman-ford..."))
        .stdout(predicate::str::contains("Path found: ORD -> LAX -> JFK"))
        .stdout(predicate::str::contains("Both algorithms").not());
}

#[test]
fn route_emits_json_plans() {
    let env = TestEnv::new();
    env.cmd()
        .args(["route", "--from", "JFK", "--to", "LAX", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"algorithm\": \"dijkstra\""))
        .stdout(predicate::str::contains("\"algorithm\": \"bellman-ford\""))
        .stdout(predicate::str::contains("\"total_hours\": 5.5"));
}

#[test]
fn route_fails_for_unknown_airport() {
    let env = TestEnv::new();
    env.cmd()
        .args(["route", "--from", "ZZZ", "--to", "LAX"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown airport code: ZZZ"));
}

#[test]
fn direct_reports_the_fastest_nonstop() {
    let env = TestEnv::new();
    env.cmd()
        .args(["direct", "--from", "JFK", "--to", "LAX"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Fastest direct JFK -> LAX: 5.50 hours",
        ));
}

#[test]
fn direct_fails_when_only_multi_hop_routes_exist() {
    let env = TestEnv::new();
    env.cmd()
        .args(["direct", "--from", "ORD", "--to", "JFK"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no direct route"));
}

#[test]
fn inspect_lists_outgoing_routes() {
    let env = TestEnv::new();
    env.cmd()
        .args(["inspect", "jfk"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Airport JFK external_id=3797"))
        .stdout(predicate::str::contains("-> LAX"))
        .stdout(predicate::str::contains("-> ORD"));
}

#[test]
fn inspect_respects_the_limit() {
    let env = TestEnv::new();
    env.cmd()
        .args(["inspect", "JFK", "--limit", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("outgoing_edges=2"))
        .stdout(predicate::str::contains("-> ORD").not());
}

#[test]
fn load_failure_exits_nonzero() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let missing = temp_dir.path().join("missing.csv");

    Command::cargo_bin("flightroute-cli")
        .expect("binary exists")
        .arg("--data")
        .arg(&missing)
        .args(["route", "--from", "JFK", "--to", "LAX"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load routes dataset"));
}

#[test]
fn empty_dataset_is_a_load_error() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let data_path = temp_dir.path().join("routes.csv");
    fs::write(&data_path, "").expect("write fixture");

    Command::cargo_bin("flightroute-cli")
        .expect("binary exists")
        .arg("--data")
        .arg(&data_path)
        .args(["route", "--from", "JFK", "--to", "LAX"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("dataset is empty"));
}
