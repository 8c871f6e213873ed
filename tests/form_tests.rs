use predicates::str::contains;

mod common;
use common::{rts, setup_test_config};

#[test]
fn test_form_session_over_stdin() {
    let cfg = setup_test_config("form_session");

    rts(&cfg)
        .arg("form")
        .write_stdin("time 0130\nratio 1 1\nratio 2 2\nratio 3 0\ncalc\nquit\n")
        .assert()
        .success()
        .stdout(contains("Working time: 0130 (90 min)"))
        .stdout(contains("All times:\n00:30\n01:00\n00:00\n"));
}

#[test]
fn test_form_auto_calculates_on_four_digits() {
    let cfg = setup_test_config("form_auto");

    // default ratios 50,30,20
    rts(&cfg)
        .arg("form")
        .write_stdin("time 0100\nquit\n")
        .assert()
        .success()
        .stdout(contains("All times:\n00:30\n00:18\n00:12\n"));
}

#[test]
fn test_form_minutes_mode_add_ratio() {
    let cfg = setup_test_config("form_minutes");

    rts(&cfg)
        .args(["form", "--minutes"])
        .write_stdin("time 120\nratio 1 1\nratio 2 1\nratio 3 1\nadd\nratio 4 1\ncalc\n")
        .assert()
        .success()
        .stdout(contains("Working time (minutes)"))
        .stdout(contains("Added ratio 4"))
        .stdout(contains("All times:\n00:30\n00:30\n00:30\n00:30\n"));
}

#[test]
fn test_form_unknown_command_is_a_warning() {
    let cfg = setup_test_config("form_unknown");

    rts(&cfg)
        .arg("form")
        .write_stdin("dance\nquit\n")
        .assert()
        .success()
        .stdout(contains("Unknown command: dance"));
}
