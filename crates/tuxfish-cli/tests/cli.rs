// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! End-to-end runs of the `tuxfish` binary against a scratch config dir.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

fn tuxfish(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tuxfish").expect("binary builds");
    cmd.arg("--config-dir").arg(dir.path());
    cmd
}

fn json(cmd: &mut Command) -> Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).expect("stdout is JSON")
}

#[test]
fn matrices_match_the_lens_and_persist_defaults() {
    let dir = TempDir::new().unwrap();
    let report = json(tuxfish(&dir).args(["matrices", "--json", "--width", "800", "--height", "600"]));

    assert_eq!(report["width"], 800);
    let m11 = report["projection"]["m"][1][1].as_f64().unwrap();
    assert!((m11 - 1.0 / 15f64.to_radians().tan()).abs() < 1e-4, "{m11}");
    let m00 = report["projection"]["m"][0][0].as_f64().unwrap();
    assert!((m00 - m11 * 600.0 / 800.0).abs() < 1e-4);
    assert_eq!(report["view"]["m"][3][3], 1.0);

    assert!(dir.path().join("game.json").exists());
}

#[test]
fn matrices_text_dump_has_four_rows_per_matrix() {
    let dir = TempDir::new().unwrap();
    tuxfish(&dir)
        .arg("matrices")
        .assert()
        .success()
        .stdout(predicate::str::contains("projection (1024x768").and(predicate::str::contains("---")));
}

#[test]
fn rust_log_controls_the_matrix_dumps() {
    let dir = TempDir::new().unwrap();
    tuxfish(&dir)
        .env("RUST_LOG", "debug")
        .arg("matrices")
        .assert()
        .success()
        .stderr(predicate::str::contains("projection:").and(predicate::str::contains("view:")));

    tuxfish(&dir)
        .env_remove("RUST_LOG")
        .arg("matrices")
        .assert()
        .success()
        .stderr(predicate::str::contains("projection:").not());
}

#[test]
fn run_reports_every_frame() {
    let dir = TempDir::new().unwrap();
    let summary = json(tuxfish(&dir).args(["run", "--frames", "600", "--fps", "60", "--seed", "7", "--json"]));
    assert_eq!(summary["seed"], 7);
    assert_eq!(summary["frames"], 600);
    assert!((summary["seconds"].as_f64().unwrap() - 10.0).abs() < 1e-3);
    assert!(summary["draws"].as_u64().unwrap() >= 600 * 5);
    assert_eq!(summary["caught"], 0);
    assert_eq!(summary["title"], "Tux Fishing");
}

#[test]
fn autocast_catches_fish() {
    let dir = TempDir::new().unwrap();
    let summary = json(tuxfish(&dir).args([
        "run",
        "--frames",
        "9000",
        "--fps",
        "30",
        "--seed",
        "74235",
        "--autocast",
        "--json",
    ]));
    assert!(summary["caught"].as_u64().unwrap() >= 1, "{summary}");
    assert!(!summary["species"].as_array().unwrap().is_empty());
}

#[test]
fn saved_preferences_apply_and_flags_override_them() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("game.json"),
        r#"{ "seed": 42, "render": { "msaa": 4 } }"#,
    )
    .unwrap();

    let saved = json(tuxfish(&dir).args(["run", "--frames", "10", "--json"]));
    assert_eq!(saved["seed"], 42);
    assert_eq!(saved["msaa"], 4);

    let overridden = json(tuxfish(&dir).args(["run", "--frames", "10", "--seed", "-5", "--msaa", "0", "--json"]));
    assert_eq!(overridden["seed"], -5);
    assert_eq!(overridden["msaa"], 0);
}

#[test]
fn out_of_range_msaa_is_rejected() {
    let dir = TempDir::new().unwrap();
    tuxfish(&dir)
        .args(["run", "--frames", "1", "--msaa", "17"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("render.msaa"));
}

#[test]
fn non_positive_fps_is_rejected() {
    let dir = TempDir::new().unwrap();
    tuxfish(&dir)
        .args(["run", "--fps", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--fps"));
}
