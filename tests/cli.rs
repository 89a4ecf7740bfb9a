use assert_cmd::Command;
use predicates::prelude::*;

const VECTOR: &str = "$argon2id$v=19$m=65536,t=4,p=4$isto+IIDInnOpcTfYI+TKQ$SNF1eocm0AqLkkTXdXtLxA4ErUhty33uZM+bO0+Vp/c";

fn bin() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("argon2phc"));
    cmd.env_remove("ARGON2PHC_PASSWORD");
    cmd
}

fn hash(password: &str) -> String {
    let out = bin()
        .env("ARGON2PHC_PASSWORD", password)
        .args(["hash", "--mem", "32", "--time", "1", "--parallelism", "1"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    String::from_utf8(out).unwrap().trim_end().to_string()
}

#[test]
fn hash_prints_phc_string() {
    bin()
        .env("ARGON2PHC_PASSWORD", "pw")
        .args(["hash", "--mem", "32", "--time", "1", "--parallelism", "1"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("$argon2id$v=19$m=32,t=1,p=1$"));
}

#[test]
fn hash_and_verify_roundtrip() {
    let record = hash("pw");

    bin()
        .env("ARGON2PHC_PASSWORD", "pw")
        .arg("verify")
        .arg(&record)
        .assert()
        .success()
        .stdout(predicate::eq("match\n"));
}

#[test]
fn wrong_password_does_not_match() {
    let record = hash("pw");

    bin()
        .env("ARGON2PHC_PASSWORD", "wrong_pw")
        .arg("verify")
        .arg(&record)
        .assert()
        .failure()
        .stdout(predicate::eq("no match\n"));
}

#[test]
fn password_can_be_piped() {
    let record = hash("piped pw");

    bin()
        .arg("verify")
        .arg(&record)
        .write_stdin("piped pw\n")
        .assert()
        .success()
        .stdout(predicate::eq("match\n"));
}

#[test]
fn missing_password_fails() {
    bin()
        .args(["hash", "--mem", "32", "--time", "1", "--parallelism", "1"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No password provided"));
}

#[test]
fn empty_piped_password_fails() {
    bin()
        .args(["hash", "--mem", "32", "--time", "1", "--parallelism", "1"])
        .write_stdin("\n")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("piped password is empty"));
}

#[test]
fn empty_env_password_fails() {
    bin()
        .env("ARGON2PHC_PASSWORD", "")
        .args(["hash", "--mem", "32", "--time", "1", "--parallelism", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ARGON2PHC_PASSWORD is set but empty"));
}

#[test]
fn unsupported_algorithm_fails() {
    bin()
        .env("ARGON2PHC_PASSWORD", "pw")
        .args(["hash", "--algorithm", "bcrypt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported algorithm 'bcrypt'"));
}

#[test]
fn malformed_record_is_an_error() {
    bin()
        .env("ARGON2PHC_PASSWORD", "pw")
        .arg("verify")
        .arg("$argon2id$v=19$m=32,t=1,p=1$AAAA")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("malformed hash record"));
}

#[test]
fn incompatible_version_is_an_error() {
    bin()
        .arg("inspect")
        .arg(VECTOR.replacen("v=19", "v=16", 1))
        .assert()
        .failure()
        .stderr(predicate::str::contains("incompatible version"));
}

#[test]
fn tuning_parameters_from_env() {
    let out = bin()
        .env("ARGON2PHC_PASSWORD", "pw")
        .env("ARGON2PHC_MEM", "64")
        .env("ARGON2PHC_TIME", "2")
        .env("ARGON2PHC_PARALLELISM", "2")
        .env("ARGON2PHC_SALT_LEN", "8")
        .env("ARGON2PHC_KEY_LEN", "16")
        .arg("hash")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let record = String::from_utf8(out).unwrap();
    let segments: Vec<&str> = record.trim_end().split('$').collect();
    assert_eq!(segments[3], "m=64,t=2,p=2");
    assert_eq!(segments[4].len(), 11);
    assert_eq!(segments[5].len(), 22);
}

#[test]
fn inspect_shows_parameters() {
    bin()
        .arg("inspect")
        .arg(VECTOR)
        .assert()
        .success()
        .stdout(predicate::str::contains("memory (KiB) 65536"))
        .stdout(predicate::str::contains("salt length  16"))
        .stdout(predicate::str::contains("key length   32"));
}

#[test]
fn inspect_json() {
    let out = bin()
        .args(["inspect", "--json", VECTOR])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(json["algorithm"], "argon2id");
    assert_eq!(json["version"], 19);
    assert_eq!(json["params"]["mem_cost_kib"], 65536);
    assert_eq!(json["params"]["time_cost"], 4);
    assert_eq!(json["params"]["parallelism"], 4);
    assert_eq!(json["salt_len"], 16);
    assert_eq!(json["key_len"], 32);
}
