use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const META: &str = r#"{"timestamp":"2024-01-01T00:00:01Z","type":"session_meta","payload":{"id":"s1","timestamp":"2024-01-01T00:00:00Z","cwd":"/work"}}"#;
const HELLO: &str = r#"{"timestamp":"2024-01-01T00:00:05Z","type":"event_msg","payload":{"type":"user_message","message":"Hello"}}"#;
const BLANK: &str = r#"{"timestamp":"2024-01-01T00:00:06Z","type":"event_msg","payload":{"type":"user_message","message":"  "}}"#;

fn write_session(dir: &Path, name: &str, lines: &[&str]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, lines.join("\n")).unwrap();
    path
}

fn specslides() -> Command {
    let mut cmd = Command::cargo_bin("specslides").unwrap();
    cmd.env_remove("SPECSLIDES_SERVER_URL");
    for var in [
        "HTTP_PROXY",
        "http_proxy",
        "HTTPS_PROXY",
        "https_proxy",
        "ALL_PROXY",
        "all_proxy",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn dry_run_prints_extract_json() {
    let tmp = TempDir::new().unwrap();
    let path = write_session(tmp.path(), "rollout.jsonl", &[META, "not json", HELLO, BLANK]);

    let output = specslides()
        .args(["generate", "--dry-run", "--input"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["schemaVersion"], "1.0");
    assert_eq!(json["source"], "codex");
    assert_eq!(json["session"]["id"], "s1");
    assert_eq!(json["session"]["createdAt"], "2024-01-01T00:00:00Z");
    assert_eq!(json["session"]["workspaceRoot"], "/work");
    assert_eq!(json["prompts"].as_array().unwrap().len(), 1);
    assert_eq!(json["prompts"][0]["id"], "p_1");
    assert_eq!(json["prompts"][0]["text"], "Hello");
}

#[test]
fn dry_run_markdown_format() {
    let tmp = TempDir::new().unwrap();
    write_session(tmp.path(), "rollout.jsonl", &[META, HELLO]);

    specslides()
        .args(["generate", "--dry-run", "--format", "markdown", "--input"])
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<!-- Generated by Specslides -->"))
        .stdout(predicate::str::contains("# Hello"))
        .stdout(predicate::str::contains("_**User (2024-01-01T00:00:05Z)**_"));
}

#[test]
fn empty_directory_fails() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("notes.md"), "hi").unwrap();

    specslides()
        .args(["generate", "--dry-run", "--input"])
        .arg(tmp.path())
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "no .jsonl session files found in input directory",
        ));
}

#[test]
fn wrong_extension_fails() {
    let tmp = TempDir::new().unwrap();
    let path = write_session(tmp.path(), "session.json", &[META, HELLO]);

    specslides()
        .args(["generate", "--dry-run", "--input"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected a Codex session .jsonl file"));
}

#[test]
fn missing_session_meta_fails() {
    let tmp = TempDir::new().unwrap();
    let path = write_session(tmp.path(), "rollout.jsonl", &[HELLO]);

    specslides()
        .args(["generate", "--dry-run", "--input"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("session_meta record not found"));
}

#[test]
fn no_prompts_fails() {
    let tmp = TempDir::new().unwrap();
    let path = write_session(tmp.path(), "rollout.jsonl", &[META, BLANK]);

    specslides()
        .args(["generate", "--dry-run", "--input"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no user prompts found in session"));
}

#[test]
fn input_is_required() {
    specslides().arg("generate").assert().failure();
}

#[test]
fn upload_prints_story_url() {
    let tmp = TempDir::new().unwrap();
    let path = write_session(tmp.path(), "rollout.jsonl", &[META, HELLO]);

    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let server = std::thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());
        let mut request_line = String::new();
        reader.read_line(&mut request_line).unwrap();
        let mut content_length = 0usize;
        loop {
            let mut line = String::new();
            reader.read_line(&mut line).unwrap();
            if line == "\r\n" {
                break;
            }
            if let Some((name, value)) = line.split_once(':') {
                if name.eq_ignore_ascii_case("content-length") {
                    content_length = value.trim().parse().unwrap();
                }
            }
        }
        let mut body = vec![0u8; content_length];
        reader.read_exact(&mut body).unwrap();

        let reply = r#"{"slug":"abc","url":"http://slides.test/s/abc"}"#;
        let mut stream = stream;
        write!(
            stream,
            "HTTP/1.1 201 Created\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{reply}",
            reply.len()
        )
        .unwrap();
        stream.flush().unwrap();

        (request_line, body)
    });

    specslides()
        .args(["generate", "--server", &format!("http://{addr}"), "--input"])
        .arg(&path)
        .assert()
        .success()
        .stdout("Session: s1\nPrompts: 1\nhttp://slides.test/s/abc\n");

    let (request_line, body) = server.join().unwrap();
    assert!(request_line.starts_with("POST /api/stories HTTP/1.1"));
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["story"]["source"], "codex");
    assert_eq!(body["story"]["source_path"], path.to_string_lossy().as_ref());
    assert!(body["story"]["markdown"]
        .as_str()
        .unwrap()
        .starts_with("<!-- Generated by Specslides -->\n\n# Hello"));
}
