//! CLI smoke tests.

use assert_cmd::Command;

#[test]
fn help_lists_the_generate_command() {
    let assert = Command::cargo_bin("storytypes")
        .unwrap()
        .arg("--help")
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert!(stdout.contains("generate"));
}

#[test]
fn generate_without_credentials_fails_fast() {
    let assert = Command::cargo_bin("storytypes")
        .unwrap()
        .args(["generate", "--space", "12345"])
        .env_remove("STORYBLOK_OAUTH_TOKEN")
        .assert()
        .failure();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    assert!(stderr.contains("required"));
}

#[test]
fn space_argument_is_mandatory() {
    Command::cargo_bin("storytypes")
        .unwrap()
        .arg("generate")
        .assert()
        .failure();
}
