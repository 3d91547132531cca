//! CLI contract tests.

use assert_cmd::Command;
use predicates::prelude::*;

fn lectio() -> Command {
    Command::cargo_bin("lectio").unwrap()
}

#[test]
fn season_prints_liturgical_info() {
    lectio()
        .args(["season", "2024-03-10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"season\": \"Lent\""))
        .stdout(predicate::str::contains("#7030A0"));
}

#[test]
fn season_in_midsummer_is_ordinary_time() {
    lectio()
        .args(["season", "2024-07-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ordinary Time"))
        .stdout(predicate::str::contains("#008000"));
}

#[test]
fn invalid_date_is_rejected_with_the_expected_message() {
    lectio()
        .args(["season", "03/10/2024"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid date format '03/10/2024'. Use YYYY-MM-DD"));
}

#[test]
fn unknown_mass_type_fails_before_any_fetch() {
    // base-url points at a closed port; the type name is validated first.
    lectio()
        .args(["mass", "2024-03-10", "--mass-type", "midnight", "--base-url", "http://127.0.0.1:1"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unknown mass type 'midnight'"));
}

#[test]
fn invalid_base_url_is_reported() {
    lectio()
        .args(["types", "2024-03-10", "--base-url", "not a url"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid base URL"));
}
