use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn write_dataset(dir: &Path) {
    fs::write(
        dir.join("nodes.csv"),
        "node_id,node_name,region\n1,Velia,Balenos\n2,Bartali Farm,Balenos\n",
    )
    .unwrap();
    fs::write(
        dir.join("node_master.csv"),
        "node_id,node_type,connected,cp_cost,yield_1,yield_2\n\
         1,City,true,0,,\n\
         2,Connection,false,5,Wheat,\n",
    )
    .unwrap();
    fs::write(dir.join("connections.csv"), "node_id,connected_node_id\n2,1\n").unwrap();
    fs::write(
        dir.join("lodging.csv"),
        "node_id,lodging_name,total_cp_cost,available\n1,Inn,10,true\n",
    )
    .unwrap();
}

fn nodecp() -> Command {
    Command::cargo_bin("nodecp").unwrap()
}

#[test]
fn test_console_report_totals() {
    let dir = tempfile::tempdir().unwrap();
    write_dataset(dir.path());

    nodecp()
        .args(["--data-dir"])
        .arg(dir.path())
        .args(["--yields", "wheat"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Node Processing Results for Yield: Wheat",
        ))
        .stdout(predicate::str::contains("Total CP: 15"))
        .stdout(predicate::str::contains("Lodging: Inn (10 CP)"));
}

#[test]
fn test_missing_yield_warns_and_still_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    write_dataset(dir.path());

    nodecp()
        .args(["--data-dir"])
        .arg(dir.path())
        .args(["--yields", "Rice, wheat"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Yield: Wheat"))
        .stdout(predicate::str::contains("Rice").not())
        .stderr(predicate::str::contains("Yield 'Rice' not found"));
}

#[test]
fn test_json_output() {
    let dir = tempfile::tempdir().unwrap();
    write_dataset(dir.path());

    let output = nodecp()
        .args(["--data-dir"])
        .arg(dir.path())
        .args(["--yields", "wheat", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["yields"][0]["yield_label"], "Wheat");
    assert_eq!(parsed["yields"][0]["nodes"][0]["total_cp"], 15);
}

#[test]
fn test_html_report_is_written() {
    let dir = tempfile::tempdir().unwrap();
    write_dataset(dir.path());
    let html_path = dir.path().join("out").join("report.html");

    nodecp()
        .args(["--data-dir"])
        .arg(dir.path())
        .args(["--yields", "wheat", "--html"])
        .arg(&html_path)
        .assert()
        .success();

    let html = fs::read_to_string(&html_path).unwrap();
    assert!(html.contains("<html>"));
    assert!(html.contains("Wheat"));
}

#[test]
fn test_invalid_dataset_fails() {
    let dir = tempfile::tempdir().unwrap();
    write_dataset(dir.path());
    // Point an edge at a node that does not exist.
    fs::write(
        dir.path().join("connections.csv"),
        "node_id,connected_node_id\n2,99\n",
    )
    .unwrap();

    nodecp()
        .args(["--data-dir"])
        .arg(dir.path())
        .args(["--yields", "wheat"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown node ID 99"));
}
