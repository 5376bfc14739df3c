use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("navigator").unwrap();
    cmd.env_remove("NAVIGATOR_LOG")
        .env_remove("NAVIGATOR_LOG_FORMAT")
        .env_remove("NAVIGATOR_OUTPUT");
    cmd
}

#[test]
fn ask_school_question() {
    cmd()
        .args(["ask", "Tips", "for", "school", "mornings"])
        .assert()
        .success()
        .stdout(contains("Navigator [Evidence-Based]"))
        .stdout(contains("Partnering with teachers"));
}

#[test]
fn ask_json_refusal() {
    cmd()
        .args(["--json", "ask", "Is there a cure?"])
        .assert()
        .success()
        .stdout(contains("\"scopeLimited\":true"))
        .stdout(contains("\"badge\":\"Knowledge-Bound Safe Response\""));
}

#[test]
fn demo_is_scope_limited() {
    cmd()
        .arg("demo")
        .assert()
        .success()
        .stdout(contains("(scope-limited)"))
        .stdout(contains("CDC: Autism Overview"))
        .stdout(contains("Peer-reviewed research").not());
}

#[test]
fn chat_skips_blank_lines() {
    let output = cmd()
        .args(["--json", "chat"])
        .write_stdin("I'm scared about behavior\n\n   \nTell me about the weather\n")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("{\"text\":\"Many parents feel this way"));
    assert!(lines[1].contains("\"badge\":\"Evidence-Based\""));
}

#[test]
fn cards_listed() {
    cmd()
        .arg("cards")
        .assert()
        .success()
        .stdout(contains("1. Understanding my child’s diagnosis"))
        .stdout(contains("5. What this assistant can and can’t do"));
}

#[test]
fn cards_json_lists_prompts_only() {
    cmd()
        .args(["--json", "cards"])
        .assert()
        .success()
        .stdout(contains("\"number\":2"))
        .stdout(contains("\"prompt\":\"What should I know about supporting my child at school"))
        .stdout(contains("\"topic\"").not());
}

#[test]
fn card_out_of_range_fails() {
    cmd().args(["card", "9"]).assert().failure().stderr(contains("no topic card 9"));
    cmd().args(["card", "0"]).assert().failure();
}

#[test]
fn card_guardrails_prompt() {
    cmd()
        .args(["card", "5"])
        .assert()
        .success()
        .stdout(contains("Navigator [Knowledge-Bound]"));
}

#[test]
fn welcome_message() {
    cmd()
        .arg("welcome")
        .assert()
        .success()
        .stdout(contains("Navigator [Knowledge-Bound Response]"));
}

#[test]
fn bad_log_format_rejected() {
    cmd()
        .env("NAVIGATOR_LOG_FORMAT", "xml")
        .arg("welcome")
        .assert()
        .failure()
        .stderr(contains("failed to load configuration"));
}
