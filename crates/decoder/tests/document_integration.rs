//! Integration tests for decoding whole JSON and YAML documents.

use pretty_assertions::assert_eq;
use serde_json::json;
use strata_decoder::prelude::*;

#[derive(Debug, Clone, PartialEq)]
struct Pet {
    name: String,
    age: i64,
}

fn pet() -> impl Decode<Output = Pet> {
    map2(|name, age| Pet { name, age }, field("name", string()), field("age", int()))
}

#[derive(Debug, Clone, PartialEq)]
enum Listener {
    Tcp { host: String, port: i64 },
    Unix { socket: String },
}

#[derive(Debug, Clone, PartialEq)]
struct Service {
    name: String,
    replicas: i64,
    listeners: Vec<Listener>,
    labels: serde_json::Value,
    timeout_secs: Option<f64>,
}

fn listener() -> BoxDecoder<Listener> {
    field("kind", string())
        .then(|kind| match kind.as_str() {
            "tcp" => map2(
                |host, port| Listener::Tcp { host, port },
                optional_field("host", string(), "0.0.0.0".to_string()),
                field("port", int()),
            )
            .boxed(),
            "unix" => field("socket", string())
                .map(|socket| Listener::Unix { socket })
                .boxed(),
            other => fail(format!("unknown listener kind '{other}'")).boxed(),
        })
        .boxed()
}

fn service() -> impl Decode<Output = Service> {
    map5(
        |name, replicas, listeners, labels, timeout_secs| Service {
            name,
            replicas,
            listeners,
            labels,
            timeout_secs,
        },
        field("name", string()),
        optional_field("replicas", int(), 1),
        field("listeners", list(listener())),
        optional_field("labels", any_value(), json!({})),
        optional_field("timeout_secs", nullable(real().map(Some), None), None),
    )
}

// ============================================================================
// PET SCENARIO
// ============================================================================

#[test]
fn pet_from_json() {
    let out = decode_json(r#"{"name": "ace", "age": 3}"#, &pet()).unwrap();
    assert_eq!(out, Pet { name: "ace".into(), age: 3 });
}

#[test]
fn pet_with_string_age() {
    let err = decode_json(r#"{"name": "ace", "age": "3"}"#, &pet()).unwrap_err();

    assert_eq!(
        err.decode_error(),
        Some(&DecodeError::bad_type(Path::root().field("age"), "int", &json!("3")))
    );
    insta::assert_snapshot!(err.to_string(), @"expected int but found '3' in path 'age'");
}

#[test]
fn pet_missing_name_reports_first_failure() {
    let err = decode_json(r#"{"age": "x"}"#, &pet()).unwrap_err();
    assert_eq!(err.to_string(), "missing field 'name' in path '<root>'");
}

#[test]
fn pet_from_yaml() {
    let out = decode_yaml("name: ace\nage: 3\n", &pet()).unwrap();
    assert_eq!(out, Pet { name: "ace".into(), age: 3 });
}

#[test]
fn pet_root_not_a_mapping() {
    let err = decode_json("[1, 2]", &pet()).unwrap_err();
    assert_eq!(err.to_string(), "expected map but found '[1,2]' in path '<root>'");
}

// ============================================================================
// SERVICE CONFIG
// ============================================================================

const SERVICE_YAML: &str = r#"
name: gateway
replicas: 3
listeners:
  - kind: tcp
    port: 8080
  - kind: unix
    socket: /run/gateway.sock
labels:
  team: edge
timeout_secs: 2.5
"#;

#[test]
fn service_from_yaml() {
    let out = decode_yaml(SERVICE_YAML, &service()).unwrap();

    assert_eq!(
        out,
        Service {
            name: "gateway".into(),
            replicas: 3,
            listeners: vec![
                Listener::Tcp { host: "0.0.0.0".into(), port: 8080 },
                Listener::Unix { socket: "/run/gateway.sock".into() },
            ],
            labels: json!({"team": "edge"}),
            timeout_secs: Some(2.5),
        }
    );
}

#[test]
fn service_defaults() {
    let text = r#"{"name": "worker", "listeners": [], "timeout_secs": null}"#;
    let out = decode_json(text, &service()).unwrap();

    assert_eq!(out.replicas, 1);
    assert_eq!(out.labels, json!({}));
    assert_eq!(out.timeout_secs, None);
}

#[test]
fn service_bad_listener_path() {
    let text = r#"{
        "name": "gateway",
        "listeners": [
            {"kind": "tcp", "port": 80},
            {"kind": "tcp", "port": "http"}
        ]
    }"#;
    let err = decode_json(text, &service()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "expected int but found 'http' in path 'listeners[1].port'"
    );
}

#[test]
fn service_unknown_listener_kind() {
    let text = r#"{"name": "gateway", "listeners": [{"kind": "quic"}]}"#;
    let err = decode_json(text, &service()).unwrap_err();

    let failure = err.decode_error().unwrap();
    assert_eq!(failure.kind(), FailureKind::Custom);
    assert_eq!(failure.path().to_string(), "listeners[0]");
    assert_eq!(
        err.to_string(),
        "unknown listener kind 'quic' in path 'listeners[0]'"
    );
}

// ============================================================================
// FILES AND READERS
// ============================================================================

#[test]
fn decode_yaml_and_json_files() {
    let dir = tempfile::tempdir().unwrap();

    let yaml = dir.path().join("pet.yml");
    std::fs::write(&yaml, "name: ace\nage: 3\n").unwrap();
    assert_eq!(decode_file(&yaml, &pet()).unwrap().age, 3);

    let json = dir.path().join("pet.JSON");
    std::fs::write(&json, r#"{"name": "bo", "age": 5}"#).unwrap();
    assert_eq!(decode_file(&json, &pet()).unwrap().name, "bo");
}

#[test]
fn decode_file_unknown_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pet.toml");
    std::fs::write(&path, "name = 'ace'").unwrap();

    let err = decode_file(&path, &pet()).unwrap_err();
    assert!(matches!(err, DocumentError::UnsupportedFormat(ref ext) if ext == "toml"));
}

#[test]
fn decode_file_missing() {
    let dir = tempfile::tempdir().unwrap();
    let err = decode_file(dir.path().join("absent.json"), &pet()).unwrap_err();
    assert!(matches!(err, DocumentError::Io { .. }));
}

#[test]
fn decode_from_readers() {
    let json = std::io::Cursor::new(br#"{"name": "ace", "age": 3}"#.to_vec());
    assert_eq!(decode_json_reader(json, &pet()).unwrap().name, "ace");

    let yaml = std::io::Cursor::new(b"name: ace\nage: 4\n".to_vec());
    assert_eq!(decode_yaml_reader(yaml, &pet()).unwrap().age, 4);
}

#[test]
fn decode_document_by_format() {
    let out = decode_document("[1, 2]", DocumentFormat::Json, &list(int())).unwrap();
    assert_eq!(out, vec![1, 2]);

    let out = decode_document("- 1\n- 2\n", DocumentFormat::Yaml, &list(int())).unwrap();
    assert_eq!(out, vec![1, 2]);
}

#[test]
fn malformed_documents_are_syntax_errors() {
    assert!(decode_json("{\"name\":", &pet()).unwrap_err().is_syntax());
    assert!(decode_yaml("name: [unclosed", &pet()).unwrap_err().is_syntax());
}
