use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const DUMP: &str = r#"{
  "1001": [
    {"sender": "agent", "content": "Hello!", "timestamp": "2024-01-01T00:00:01Z"},
    {"sender": "user", "content": "<text>Hi</text>", "timestamp": "2024-01-01T00:00:00Z"}
  ],
  "1002": {"detail": "expired"}
}"#;

#[allow(deprecated)]
fn chatsheet(config_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("chatsheet").unwrap();
    cmd.env("CHATSHEET_CONFIG", config_dir.join("config.toml"))
        .env_remove("CHATSHEET_BASE_URL")
        .env_remove("CHATSHEET_API_KEY")
        .env_remove("RUST_LOG");
    cmd
}

fn write_dump(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("dump.json");
    fs::write(&path, DUMP).unwrap();
    path
}

#[test]
fn convert_writes_csv_to_stdout() {
    let dir = TempDir::new().unwrap();
    let dump = write_dump(&dir);

    let output = chatsheet(dir.path())
        .arg("convert")
        .arg(&dump)
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "Session,,,,,,Message\n\
         1001,,,,,,User: Hi\n\
         ,,,,,,Agent: Hello!\n\
         1002,,,,,,\"{\"\"detail\"\":\"\"expired\"\"}\"\n"
    );
}

#[test]
fn convert_writes_json_to_file() {
    let dir = TempDir::new().unwrap();
    let dump = write_dump(&dir);
    let out = dir.path().join("out.json");

    chatsheet(dir.path())
        .args(["convert", "--format", "json", "--output"])
        .arg(&out)
        .arg(&dump)
        .assert()
        .success();

    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(
        written,
        json!({
            "1001": [{"user": "Hi"}, {"agent": "Hello!"}],
            "1002": {"detail": "expired"}
        })
    );
}

#[test]
fn convert_writes_xlsx_workbook() {
    let dir = TempDir::new().unwrap();
    let dump = write_dump(&dir);
    let out = dir.path().join("out.xlsx");

    chatsheet(dir.path())
        .args(["convert", "--format", "xlsx", "-o"])
        .arg(&out)
        .arg(&dump)
        .assert()
        .success();

    let mut archive = zip::ZipArchive::new(fs::File::open(&out).unwrap()).unwrap();
    let mut sheet = String::new();
    archive
        .by_name("xl/worksheets/sheet1.xml")
        .unwrap()
        .read_to_string(&mut sheet)
        .unwrap();
    let mut shared = String::new();
    archive
        .by_name("xl/sharedStrings.xml")
        .unwrap()
        .read_to_string(&mut shared)
        .unwrap();

    let cells: Vec<String> = regex::Regex::new(r#"<c r="([A-Z]+[0-9]+)""#)
        .unwrap()
        .captures_iter(&sheet)
        .map(|c| c[1].to_string())
        .collect();
    assert_eq!(cells, vec!["A1", "G1", "A2", "G2", "G3", "A4", "G4"]);

    for text in ["Session", "Message", "1001", "User: Hi", "Agent: Hello!", "1002"] {
        assert!(shared.contains(&format!(">{text}</t>")), "missing {text}");
    }
}

#[test]
fn convert_writes_text() {
    let dir = TempDir::new().unwrap();
    let dump = write_dump(&dir);

    chatsheet(dir.path())
        .args(["convert", "--format", "text"])
        .arg(&dump)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "== 1001\nUser: Hi\nAgent: Hello!\n== 1002\n",
        ));
}

#[test]
fn convert_missing_dump_fails() {
    let dir = TempDir::new().unwrap();

    chatsheet(dir.path())
        .args(["convert", "does-not-exist.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read session dump"));
}

#[test]
fn fetch_requires_base_url() {
    let dir = TempDir::new().unwrap();

    chatsheet(dir.path())
        .args(["fetch", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no base URL configured"));
}

#[test]
fn fetch_rejects_blank_ids() {
    let dir = TempDir::new().unwrap();

    chatsheet(dir.path())
        .args(["fetch", ", ,", "--base-url", "http://127.0.0.1:9/"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no session ids given"));
}

#[tokio::test(flavor = "multi_thread")]
async fn fetch_exports_sessions_in_request_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/session/2"))
        .and(header("x-api-key", "from-config"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"sender": "user", "content": "second", "timestamp": "2024-01-01T00:00:00Z"}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/session/1"))
        .and(header("x-api-key", "from-config"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"sender": "agent", "content": "<p>first</p>", "timestamp": "2024-01-01T00:00:00Z"}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/session/3"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        format!(
            "[api]\nbase_url = \"{}/api/session/\"\napi_key = \"from-config\"\n",
            server.uri()
        ),
    )
    .unwrap();

    // The binary blocks; keep the mock server's runtime free to answer
    let config_dir = dir.path().to_path_buf();
    let output = tokio::task::spawn_blocking(move || {
        chatsheet(&config_dir)
            .args(["fetch", "2,3", "1"])
            .output()
            .unwrap()
    })
    .await
    .unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "Session,,,,,,Message\n2,,,,,,User: second\n1,,,,,,Agent: first\n"
    );
    assert!(String::from_utf8(output.stderr).unwrap().contains("failed to fetch session"));
}
