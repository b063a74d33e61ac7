use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn appointments(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("appointments").unwrap();
    cmd.current_dir(dir);
    cmd
}

fn add(dir: &Path, name: &str, reason: &str, date: &str, time: &str) {
    appointments(dir)
        .arg("add")
        .write_stdin(format!("{}\n{}\n{}\n{}\n", name, reason, date, time))
        .assert()
        .success()
        .stdout(predicate::str::contains("Appointment added."));
}

#[test]
fn test_missing_command_exits_with_usage() {
    let dir = TempDir::new().unwrap();

    appointments(dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Usage: appointments [view_all | add | delete | search]",
        ))
        .stderr(predicate::str::contains("no command given"));
}

#[test]
fn test_unknown_command_still_exits_zero() {
    let dir = TempDir::new().unwrap();

    appointments(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown command: list"))
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_view_all_without_file() {
    let dir = TempDir::new().unwrap();

    appointments(dir.path())
        .arg("view_all")
        .assert()
        .success()
        .stdout("No appointments found.\n");

    assert!(!dir.path().join("appointments.txt").exists());
}

#[test]
fn test_add_writes_file_layout() {
    let dir = TempDir::new().unwrap();

    add(dir.path(), "John Smith", "Checkup", "12/05/2024", "09:30");
    add(dir.path(), "Jane Doe", "", "29/02/2024", "23:59");

    let content = fs::read_to_string(dir.path().join("appointments.txt")).unwrap();
    assert_eq!(
        content,
        "2\n1\nJohn Smith\nCheckup\n12/05/2024 09:30\n2\nJane Doe\n\n29/02/2024 23:59\n"
    );
}

#[test]
fn test_add_reprompts_on_invalid_input() {
    let dir = TempDir::new().unwrap();

    appointments(dir.path())
        .arg("add")
        .write_stdin("J0hn\nJohn\nFlu\n29/02/1900\n28/02/1900\n7:15\n07:15\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid name. Use letters and spaces only."))
        .stdout(predicate::str::contains("Invalid date format."))
        .stdout(predicate::str::contains("Invalid time format."))
        .stdout(predicate::str::contains("Patient No: 1"));
}

#[test]
fn test_add_fails_when_input_ends() {
    let dir = TempDir::new().unwrap();

    appointments(dir.path())
        .arg("add")
        .write_stdin("John\nFlu\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input ended"));

    assert!(!dir.path().join("appointments.txt").exists());
}

#[test]
fn test_view_all_after_delete() {
    let dir = TempDir::new().unwrap();
    add(dir.path(), "Ada Lovelace", "Headache", "01/03/2025", "09:00");
    add(dir.path(), "Alan Turing", "Broken arm", "02/03/2025", "10:30");
    add(dir.path(), "Grace Hopper", "Checkup", "03/03/2025", "16:45");

    appointments(dir.path())
        .arg("delete")
        .write_stdin("2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Appointment deleted."));

    appointments(dir.path())
        .arg("view_all")
        .assert()
        .success()
        .stdout(predicate::str::contains("Name: Ada Lovelace"))
        .stdout(predicate::str::contains("Name: Grace Hopper"))
        .stdout(predicate::str::contains("Alan Turing").not())
        .stdout(predicate::str::contains("Patient No: 2").not());
}

#[test]
fn test_delete_absent_number() {
    let dir = TempDir::new().unwrap();
    add(dir.path(), "Ada Lovelace", "Headache", "01/03/2025", "09:00");
    let before = fs::read_to_string(dir.path().join("appointments.txt")).unwrap();

    appointments(dir.path())
        .arg("delete")
        .write_stdin("999\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Appointment not found."));

    let after = fs::read_to_string(dir.path().join("appointments.txt")).unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_search() {
    let dir = TempDir::new().unwrap();
    add(dir.path(), "Ada Lovelace", "Headache", "01/03/2025", "09:00");
    add(dir.path(), "Alan Turing", "Broken arm", "02/03/2025", "10:30");

    appointments(dir.path())
        .arg("search")
        .write_stdin("2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Patient No: 2\nName: Alan Turing\nReason: Broken arm\nDate: 02/03/2025\nTime: 10:30\n",
        ));

    let before = fs::read_to_string(dir.path().join("appointments.txt")).unwrap();
    appointments(dir.path())
        .arg("search")
        .write_stdin("999\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Appointment not found."));
    let after = fs::read_to_string(dir.path().join("appointments.txt")).unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_malformed_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("appointments.txt");
    fs::write(&path, "3\n1\nOnly One\n").unwrap();

    appointments(dir.path())
        .arg("add")
        .write_stdin("John\nFlu\n01/01/2025\n10:00\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed appointment file"));

    assert_eq!(fs::read_to_string(&path).unwrap(), "3\n1\nOnly One\n");
}

#[test]
fn test_data_file_directory_is_rejected() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("appointments.txt")).unwrap();

    appointments(dir.path())
        .arg("view_all")
        .assert()
        .failure()
        .stderr(predicate::str::contains("is a directory"));
}

#[test]
fn test_zero_patient_number_is_not_found() {
    let dir = TempDir::new().unwrap();
    add(dir.path(), "Ada Lovelace", "Headache", "01/03/2025", "09:00");

    for command in ["search", "delete"] {
        appointments(dir.path())
            .arg(command)
            .write_stdin("0\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("Appointment not found."))
            .stdout(predicate::str::contains("Invalid patient number").not());
    }

    appointments(dir.path())
        .arg("view_all")
        .assert()
        .success()
        .stdout(predicate::str::contains("Name: Ada Lovelace"));
}

#[test]
fn test_usage_does_not_depend_on_data_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("appointments.txt"), "garbage\n").unwrap();

    appointments(dir.path())
        .arg("bogus")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown command: bogus"))
        .stdout(predicate::str::contains("Usage:"));

    appointments(dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage:"))
        .stderr(predicate::str::contains("no command given"))
        .stderr(predicate::str::contains("Malformed").not());
}

#[test]
fn test_carriage_return_in_reason_is_stored() {
    let dir = TempDir::new().unwrap();

    appointments(dir.path())
        .arg("add")
        .write_stdin("Ada\nfoo\rbar\n01/01/2025\n10:00\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Appointment added."));

    let content = fs::read_to_string(dir.path().join("appointments.txt")).unwrap();
    assert_eq!(content, "1\n1\nAda\nfoo bar\n01/01/2025 10:00\n");
}
