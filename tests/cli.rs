use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn tracker(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("fitness-tracker").unwrap();
    cmd.arg("--db").arg(dir.path().join("tracker.db")).arg("--no-color");
    cmd
}

#[test]
fn quits_from_menu() {
    let dir = TempDir::new().unwrap();
    tracker(&dir)
        .write_stdin("10\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Fitness Tracker Menu:"))
        .stdout(predicate::str::contains("Exiting program."));
    assert!(dir.path().join("tracker.db").exists());
}

#[test]
fn seeded_cardio_is_listed() {
    let dir = TempDir::new().unwrap();
    tracker(&dir)
        .write_stdin("6\nCardio\n10\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("- Running\n- Cycling\n- Jump Rope\n"));
}

#[test]
fn data_survives_restart_and_seeds_stay_single() {
    let dir = TempDir::new().unwrap();
    tracker(&dir)
        .write_stdin("4\nHIIT\nBurpees\nFull Body\n12\n4\n10\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Exercise added successfully."));

    tracker(&dir)
        .write_stdin("6\nHIIT\n6\nCore\n10\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("- Burpees"))
        .stdout(predicate::str::contains("- Plank\n- Crunches\n"));
}

#[test]
fn goal_progress_end_to_end() {
    let dir = TempDir::new().unwrap();
    tracker(&dir)
        .write_stdin("8\nCore\n100\n5\n9\nCore\n10\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("based on reps: 80.00%"))
        .stdout(predicate::str::contains("based on sets: 80.00%"));
}

#[test]
fn unusable_store_location_fails() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("file");
    std::fs::write(&blocker, b"x").unwrap();

    Command::cargo_bin("fitness-tracker")
        .unwrap()
        .arg("--db")
        .arg(blocker.join("tracker.db"))
        .write_stdin("10\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Database connection failed"));
}
