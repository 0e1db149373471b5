#![cfg(unix)]

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

const FAKE_SCORER: &str = "words=$(wc -w | tr -d ' ')\n\
    echo \"BLEU = 31.25, 60.0/40.0/20.0/10.0 (BP=0.900, ratio=0.950, hyp_len=$words, ref_len=$#)\"\n";

#[test]
fn test_cli_prints_one_line_per_candidate() {
    let dir = tempfile::tempdir().unwrap();
    let script = dir.path().join("fake-bleu.sh");
    let reference = dir.path().join("ref.txt");
    let candidate = dir.path().join("sys.txt");
    fs::write(&script, FAKE_SCORER).unwrap();
    fs::write(&reference, "the cat sat on the mat\n").unwrap();
    fs::write(&candidate, "the cat sat\n").unwrap();

    Command::cargo_bin("textmetrics-bleu")
        .unwrap()
        .env("BLEU_INTERPRETER", "sh")
        .env("BLEU_SCRIPT", &script)
        .arg("-r")
        .arg(&reference)
        .arg("-c")
        .arg(&candidate)
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "{}\tBLEU = 31.25, 60.0/40.0/20.0/10.0 (BP=0.900, ratio=0.950, hyp_len=3, ref_len=1)",
            candidate.display()
        )));
}

#[test]
fn test_cli_json_output() {
    let dir = tempfile::tempdir().unwrap();
    let script = dir.path().join("fake-bleu.sh");
    let reference = dir.path().join("ref.txt");
    let candidate = dir.path().join("sys.txt");
    fs::write(&script, FAKE_SCORER).unwrap();
    fs::write(&reference, "a b\n").unwrap();
    fs::write(&candidate, "a b c d\n").unwrap();

    let output = Command::cargo_bin("textmetrics-bleu")
        .unwrap()
        .args(["--interpreter", "sh", "--json"])
        .arg("--script")
        .arg(&script)
        .arg("--reference")
        .arg(&reference)
        .arg("--candidate")
        .arg(&candidate)
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entry = &parsed[candidate.display().to_string()];
    assert_eq!(entry["overall"], 31.25);
    assert_eq!(entry["candidate_length"], 4);
    assert_eq!(entry["reference_length"], 1);
}

#[test]
fn test_cli_missing_candidate_file() {
    let dir = tempfile::tempdir().unwrap();
    let reference = dir.path().join("ref.txt");
    fs::write(&reference, "a b\n").unwrap();

    Command::cargo_bin("textmetrics-bleu")
        .unwrap()
        .arg("-r")
        .arg(&reference)
        .arg("-c")
        .arg(dir.path().join("missing.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("reading"));
}

#[test]
fn test_cli_requires_references() {
    Command::cargo_bin("textmetrics-bleu")
        .unwrap()
        .args(["-c", "whatever.txt"])
        .assert()
        .failure();
}

#[test]
fn test_cli_rejects_repeated_reference() {
    let dir = tempfile::tempdir().unwrap();
    let reference = dir.path().join("ref.txt");
    let candidate = dir.path().join("sys.txt");
    fs::write(&reference, "a b\n").unwrap();
    fs::write(&candidate, "a b\n").unwrap();

    Command::cargo_bin("textmetrics-bleu")
        .unwrap()
        .env("BLEU_INTERPRETER", "sh")
        .env("BLEU_SCRIPT", dir.path().join("unused.sh"))
        .arg("-r")
        .arg(&reference)
        .arg("-r")
        .arg(&reference)
        .arg("-c")
        .arg(&candidate)
        .assert()
        .failure()
        .stderr(predicate::str::contains("given more than once"));
}
