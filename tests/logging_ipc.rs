use serde_json::json;
use std::io::{BufRead, BufReader, Write};
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};

/// Spawns with stderr piped; `rust_log: None` clears any inherited filter.
fn spawn_sidecar_logged(rust_log: Option<&str>) -> (Child, ChildStdin, BufReader<ChildStdout>) {
    let exe = env!("CARGO_BIN_EXE_studentd");
    let mut cmd = Command::new(exe);
    match rust_log {
        Some(filter) => cmd.env("RUST_LOG", filter),
        None => cmd.env_remove("RUST_LOG"),
    };
    let mut child = cmd
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn studentd");
    let stdin = child.stdin.take().expect("child stdin");
    let stdout = child.stdout.take().expect("child stdout");
    (child, stdin, BufReader::new(stdout))
}

fn request_ok(
    stdin: &mut ChildStdin,
    reader: &mut BufReader<ChildStdout>,
    id: &str,
    method: &str,
    params: serde_json::Value,
) -> serde_json::Value {
    let payload = json!({
        "id": id,
        "method": method,
        "params": params,
    });
    writeln!(stdin, "{}", payload).expect("write request");
    stdin.flush().expect("flush request");

    let mut line = String::new();
    reader.read_line(&mut line).expect("read response line");
    let value: serde_json::Value = serde_json::from_str(line.trim()).expect("parse response json");
    assert_eq!(value.get("id").and_then(|v| v.as_str()), Some(id));
    assert!(
        value.get("ok").and_then(|v| v.as_bool()).unwrap_or(false),
        "{} failed: {}",
        method,
        value
    );
    value.get("result").cloned().unwrap_or_else(|| json!({}))
}

/// Closes stdin so the sidecar exits, then returns everything it logged.
fn finish(child: Child, stdin: ChildStdin) -> String {
    drop(stdin);
    let out = child.wait_with_output().expect("wait for studentd");
    String::from_utf8_lossy(&out.stderr).into_owned()
}

fn run_enrollment_session(rust_log: Option<&str>) -> String {
    let (child, mut stdin, mut reader) = spawn_sidecar_logged(rust_log);

    let _ = request_ok(
        &mut stdin,
        &mut reader,
        "1",
        "record.update",
        json!({ "patch": { "name": "Ada Lovelace" } }),
    );
    let _ = request_ok(&mut stdin, &mut reader, "2", "enrollment.unenroll", json!({}));
    let _ = request_ok(&mut stdin, &mut reader, "3", "enrollment.enroll", json!({}));
    let _ = request_ok(&mut stdin, &mut reader, "4", "enrollment.toggle", json!({}));
    let _ = request_ok(&mut stdin, &mut reader, "5", "enrollment.toggle", json!({}));

    finish(child, stdin)
}

#[test]
fn enroll_and_unenroll_log_the_student_name_and_toggle_is_silent() {
    let logs = run_enrollment_session(None);

    assert_eq!(logs.matches("Ada Lovelace has been unenrolled!").count(), 1, "{logs}");
    assert_eq!(logs.matches("Ada Lovelace has been enrolled!").count(), 1, "{logs}");
    // Two toggles ran after the explicit calls and added nothing.
    assert_eq!(logs.matches("has been").count(), 2, "{logs}");
    assert!(!logs.contains("John Doe"), "{logs}");
}

#[test]
fn default_filter_is_info() {
    let logs = run_enrollment_session(None);
    assert!(logs.contains("studentd v"), "{logs}");
    assert!(!logs.contains("dispatch"), "{logs}");
}

#[test]
fn rust_log_debug_shows_dispatch_events() {
    let logs = run_enrollment_session(Some("debug"));
    assert!(logs.contains("dispatch"), "{logs}");
    assert!(logs.contains("enrollment.toggle"), "{logs}");
    assert!(logs.contains("Ada Lovelace has been enrolled!"), "{logs}");
}

#[test]
fn rust_log_warn_hides_enrollment_notices() {
    let logs = run_enrollment_session(Some("warn"));
    assert!(!logs.contains("has been"), "{logs}");
    assert!(!logs.contains("studentd v"), "{logs}");
}
