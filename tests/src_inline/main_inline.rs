use std::fs;
use std::io::{self, BufReader, Cursor, Read};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;
use crate::input::schema::parse_dataset;
use crate::model::Subject;
use crate::pipeline::RenderTarget;
use crate::pipeline::output::MESSAGE_FILE;
use crate::pipeline::selection::SelectionState;

const DATASET: &str = r#"{
    "names": ["940", "941", "943"],
    "metadata": [{"wfreq": 2}, {"wfreq": 1}, {"wfreq": null}],
    "samples": [
        {"otu_ids": [1], "sample_values": [1], "otu_labels": ["a"]},
        {"otu_ids": [2], "sample_values": [2], "otu_labels": ["b"]},
        {"otu_ids": [3], "sample_values": [3], "otu_labels": ["c"]}
    ]
}"#;

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("otu_dashboard_main_test_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[derive(Default)]
struct Recorder {
    rendered: Vec<String>,
    messages: Vec<String>,
}

impl RenderTarget for Recorder {
    fn render(&mut self, subject: &Subject) -> Result<(), DashboardError> {
        self.rendered.push(subject.name.clone());
        Ok(())
    }

    fn notify(&mut self, message: &str) -> Result<(), DashboardError> {
        self.messages.push(message.to_string());
        Ok(())
    }
}

struct BrokenPipe;

impl Read for BrokenPipe {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdin closed"))
    }
}

fn index() -> SubjectIndex {
    SubjectIndex::build(parse_dataset(DATASET.as_bytes(), "inline.json").unwrap())
}

fn render_args(data: &str, out: &Path, subject: Option<&str>) -> RunConfig {
    let out = out.display().to_string();
    let mut args = vec![
        "otu-dashboard",
        "render",
        "--data",
        data,
        "--out",
        out.as_str(),
        "--seed",
        "7",
    ];
    if let Some(subject) = subject {
        args.extend(["--subject", subject]);
    }
    parse_args(args).unwrap()
}

#[test]
fn test_session_applies_each_change() {
    let index = index();
    let mut controller = SelectionController::new(&index);
    let mut target = Recorder::default();
    controller.initialize("940", &mut target).unwrap();

    let events = Cursor::new("941\n\n941\n943\r\n999\n940\n");
    run_session(&mut controller, &mut target, events).unwrap();

    assert_eq!(target.rendered, vec!["940", "941", "943", "940"]);
    assert_eq!(target.messages.len(), 1);
    assert_eq!(
        controller.state(),
        &SelectionState::Selected("940".to_string())
    );
}

#[test]
fn test_session_empty_input_keeps_initial() {
    let index = index();
    let mut controller = SelectionController::new(&index);
    let mut target = Recorder::default();
    controller.initialize("941", &mut target).unwrap();

    run_session(&mut controller, &mut target, Cursor::new("")).unwrap();
    assert_eq!(target.rendered, vec!["941"]);
}

#[test]
fn test_session_skips_undecodable_line() {
    let index = index();
    let mut controller = SelectionController::new(&index);
    let mut target = Recorder::default();
    controller.initialize("940", &mut target).unwrap();

    let events = Cursor::new(b"941\n\xff\n943\n".to_vec());
    run_session(&mut controller, &mut target, events).unwrap();

    assert_eq!(target.rendered, vec!["940", "941", "943"]);
    assert_eq!(target.messages.len(), 1);
    assert!(target.messages[0].contains("line 2"));
    assert_eq!(controller.selected(), Some("943"));
}

#[test]
fn test_session_matches_names_exactly() {
    let index = index();
    let mut controller = SelectionController::new(&index);
    let mut target = Recorder::default();
    controller.initialize("940", &mut target).unwrap();

    run_session(&mut controller, &mut target, Cursor::new(" 941\n941 \n")).unwrap();

    assert_eq!(target.rendered, vec!["940"]);
    assert_eq!(
        target.messages,
        vec![
            "unknown subject selected:  941".to_string(),
            "unknown subject selected: 941 ".to_string(),
        ]
    );
    assert_eq!(controller.selected(), Some("940"));
}

#[test]
fn test_session_read_error_ends_session() {
    let index = index();
    let mut controller = SelectionController::new(&index);
    let mut target = Recorder::default();
    controller.initialize("940", &mut target).unwrap();

    let err = run_session(&mut controller, &mut target, BufReader::new(BrokenPipe)).unwrap_err();
    assert!(matches!(err, DashboardError::SelectionInput(_)));
    assert_eq!(controller.selected(), Some("940"));
}

#[tokio::test]
async fn test_run_render_writes_panels() {
    let dir = make_temp_dir();
    let data = dir.join("samples.json");
    fs::write(&data, DATASET).unwrap();
    let out = dir.join("out");

    run(render_args(&data.display().to_string(), &out, Some("941")))
        .await
        .unwrap();

    let gauge: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out.join("gauge.json")).unwrap()).unwrap();
    assert_eq!(gauge["data"][0]["value"], 1.0);
    assert!(out.join("bar.json").exists());
    assert!(out.join("bubble.json").exists());
    assert!(!out.join(MESSAGE_FILE).exists());
}

#[tokio::test]
async fn test_run_missing_data_writes_message() {
    let dir = make_temp_dir();
    let data = dir.join("absent.json");
    let out = dir.join("out");

    let err = run(render_args(&data.display().to_string(), &out, None))
        .await
        .unwrap_err();

    assert!(matches!(err, DashboardError::LoadFailure { .. }));
    let message = fs::read_to_string(out.join(MESSAGE_FILE)).unwrap();
    assert_eq!(message, format!("{err}\n"));
    assert!(!out.join("bar.json").exists());
}

#[tokio::test]
async fn test_run_unknown_subject_writes_message() {
    let dir = make_temp_dir();
    let data = dir.join("samples.json");
    fs::write(&data, DATASET).unwrap();
    let out = dir.join("out");

    let err = run(render_args(&data.display().to_string(), &out, Some("999")))
        .await
        .unwrap_err();

    assert!(matches!(err, DashboardError::UnknownSelection(ref name) if name == "999"));
    let message = fs::read_to_string(out.join(MESSAGE_FILE)).unwrap();
    assert_eq!(message, "unknown subject selected: 999\n");
    assert!(out.join("selector.json").exists());
    assert!(!out.join("sample-metadata.txt").exists());
}
