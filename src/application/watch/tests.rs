//! Tests for the watch module

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use notify::event::{AccessKind, CreateKind, DataChange, ModifyKind, RemoveKind};
use notify::{Event, EventKind};
use tempfile::tempdir;

use super::event::{WatchEvent, WatchOptions, POLL_INTERVAL_MS};
use super::use_case::{is_relevant_event, WatchUseCase};
use crate::application::rebuild::{RebuildOptions, RebuildReport, TemplateFailure};
use crate::compiler::{CompileError, DustCompiler};
use crate::domain::entities::CompiledTemplate;
use crate::domain::ports::TemplateCompiler;
use crate::domain::value_objects::TemplateMatcher;
use crate::error::FormpackError;
use crate::infrastructure::fs::LocalFs;

// === WatchEvent tests ===

#[test]
fn test_watch_event_to_json_started() {
    let event = WatchEvent::WatchStarted {
        source: "form_templates".to_string(),
        output: "static/js/templates.js".to_string(),
    };
    let json = event.to_json();
    assert!(json.contains("\"event\":\"watch_started\""));
    assert!(json.contains("\"command\":\"watch\""));
    assert!(json.contains("\"source\":\"form_templates\""));
    assert!(json.contains("\"output\":\"static/js/templates.js\""));
}

#[test]
fn test_watch_event_to_json_file_changed() {
    let event = WatchEvent::FileChanged {
        path: "form_templates/a.form".to_string(),
    };
    let json = event.to_json();
    assert!(json.contains("\"event\":\"file_changed\""));
    assert!(json.contains("\"path\":\"form_templates/a.form\""));
}

#[test]
fn test_watch_event_to_json_rebuild_complete() {
    let event = WatchEvent::RebuildComplete {
        compiled: 5,
        failed: 1,
        templates: 6,
        written: true,
    };
    let json = event.to_json();
    assert!(json.contains("\"event\":\"rebuild_complete\""));
    assert!(json.contains("\"compiled\":5"));
    assert!(json.contains("\"failed\":1"));
    assert!(json.contains("\"templates\":6"));
    assert!(json.contains("\"written\":true"));
}

#[test]
fn test_watch_event_to_json_unit_variants() {
    let json = WatchEvent::Shutdown.to_json();
    assert!(json.contains("\"event\":\"shutdown\""));
    assert!(json.contains("\"command\":\"watch\""));
    assert!(WatchEvent::RebuildStarted
        .to_json()
        .contains("\"event\":\"rebuild_started\""));
}

#[test]
fn test_watch_event_to_json_error() {
    let event = WatchEvent::Error {
        message: "Something \"failed\"".to_string(),
    };
    let json = event.to_json();
    assert!(json.contains("\"event\":\"error\""));
    assert!(json.contains("\\\"failed\\\""));
}

#[test]
fn test_events_from_report() {
    let report = RebuildReport {
        compiled: vec!["a".to_string()],
        failures: vec![TemplateFailure::new(
            "b",
            "form_templates/b.form",
            FormpackError::from(CompileError::new("b", "{#x}", "unclosed section 'x'", 1, 1)),
        )],
        retained: vec!["b".to_string()],
        templates: 2,
        write_error: Some("disk full".to_string()),
        ..Default::default()
    };

    let events = WatchEvent::from_report(&report);

    assert_eq!(
        events,
        vec![
            WatchEvent::TemplateFailed {
                name: "b".to_string(),
                message: "template 'b' at 1:1: unclosed section 'x'".to_string(),
                retained: true,
            },
            WatchEvent::Error {
                message: "disk full".to_string()
            },
            WatchEvent::RebuildComplete {
                compiled: 1,
                failed: 1,
                templates: 2,
                written: false,
            },
        ]
    );
}

#[test]
fn test_watch_options_defaults() {
    let options = WatchOptions::new(RebuildOptions::new("form_templates", "out.js"));

    assert_eq!(options.poll_interval, Duration::from_millis(POLL_INTERVAL_MS));
    assert_eq!(options.rebuild.source, PathBuf::from("form_templates"));
    assert_eq!(options.rebuild.output, PathBuf::from("out.js"));
}

// === Event filtering ===

fn event(kind: EventKind, path: &str) -> Event {
    Event::new(kind).add_path(PathBuf::from(path))
}

#[test]
fn test_create_and_modify_of_templates_are_relevant() {
    let matcher = TemplateMatcher::default();

    let created = event(EventKind::Create(CreateKind::File), "/t/a.form");
    assert_eq!(
        is_relevant_event(&created, &matcher),
        Some(Path::new("/t/a.form"))
    );

    let modified = event(
        EventKind::Modify(ModifyKind::Data(DataChange::Content)),
        "/t/b.form",
    );
    assert_eq!(
        is_relevant_event(&modified, &matcher),
        Some(Path::new("/t/b.form"))
    );
}

#[test]
fn test_other_events_are_ignored() {
    let matcher = TemplateMatcher::default();

    let removed = event(EventKind::Remove(RemoveKind::File), "/t/a.form");
    assert_eq!(is_relevant_event(&removed, &matcher), None);

    let accessed = event(EventKind::Access(AccessKind::Any), "/t/a.form");
    assert_eq!(is_relevant_event(&accessed, &matcher), None);

    let suppressed = event(EventKind::Create(CreateKind::File), "/t/#a.form#");
    assert_eq!(is_relevant_event(&suppressed, &matcher), None);

    let other = event(EventKind::Create(CreateKind::File), "/t/notes.txt");
    assert_eq!(is_relevant_event(&other, &matcher), None);
}

// === WatchUseCase tests ===

fn setup() -> (tempfile::TempDir, PathBuf, PathBuf) {
    let dir = tempdir().unwrap();
    let source = dir.path().join("form_templates");
    fs::create_dir_all(&source).unwrap();
    let output = dir.path().join("static").join("js").join("templates.js");
    (dir, source, output)
}

#[test]
fn test_watch_missing_directory_fails_before_events() {
    let dir = tempdir().unwrap();
    let options = WatchOptions::new(RebuildOptions::new(
        dir.path().join("missing"),
        dir.path().join("out.js"),
    ));

    let events: Arc<Mutex<Vec<WatchEvent>>> = Arc::new(Mutex::new(Vec::new()));
    let events_clone = events.clone();

    let mut use_case = WatchUseCase::new(LocalFs::new(), DustCompiler::new(), options);
    let err = use_case
        .start(Arc::new(AtomicBool::new(true)), |event| {
            events_clone.lock().unwrap().push(event);
        })
        .unwrap_err();

    assert!(matches!(err, FormpackError::DirectoryNotFound { .. }));
    assert!(events.lock().unwrap().is_empty());
}

#[test]
fn test_watch_initial_rebuild() {
    let (_dir, source, output) = setup();
    fs::write(source.join("a.form"), "Hello {name}").unwrap();
    fs::write(source.join("b.form"), "{#broken}").unwrap();

    let options = WatchOptions::new(RebuildOptions::new(&source, &output));

    let events: Arc<Mutex<Vec<WatchEvent>>> = Arc::new(Mutex::new(Vec::new()));
    let events_clone = events.clone();

    // Stop immediately after the initial rebuild
    let running = Arc::new(AtomicBool::new(false));

    let mut use_case = WatchUseCase::new(LocalFs::new(), DustCompiler::new(), options);
    use_case
        .start(running, |event| {
            events_clone.lock().unwrap().push(event);
        })
        .unwrap();

    let captured = events.lock().unwrap();
    assert!(matches!(captured[0], WatchEvent::WatchStarted { .. }));
    assert_eq!(captured[1], WatchEvent::RebuildStarted);
    assert!(matches!(
        captured[2],
        WatchEvent::TemplateFailed { ref name, retained: false, .. } if name == "b"
    ));
    assert_eq!(
        captured[3],
        WatchEvent::RebuildComplete {
            compiled: 1,
            failed: 1,
            templates: 1,
            written: true,
        }
    );
    assert_eq!(captured.last(), Some(&WatchEvent::Shutdown));

    let bundle = fs::read_to_string(&output).unwrap();
    assert!(bundle.contains("dust.register(\"a\""));
    assert!(!bundle.contains("dust.register(\"b\""));
    assert!(use_case.rebuild().registry().contains("a"));
}

fn wait_for(deadline: Duration, mut check: impl FnMut() -> bool) -> bool {
    let start = Instant::now();
    while start.elapsed() < deadline {
        if check() {
            return true;
        }
        std::thread::sleep(Duration::from_millis(25));
    }
    check()
}

#[test]
fn test_watch_rebuilds_on_change() {
    let (_dir, source, output) = setup();
    fs::write(source.join("a.form"), "A1").unwrap();

    let running = Arc::new(AtomicBool::new(true));
    let events: Arc<Mutex<Vec<WatchEvent>>> = Arc::new(Mutex::new(Vec::new()));

    let handle = {
        let running = running.clone();
        let events = events.clone();
        let options = WatchOptions::new(RebuildOptions::new(&source, &output));
        std::thread::spawn(move || {
            let mut use_case = WatchUseCase::new(LocalFs::new(), DustCompiler::new(), options);
            use_case.start(running, |event| events.lock().unwrap().push(event))
        })
    };

    let read = || fs::read_to_string(&output).unwrap_or_default();
    assert!(wait_for(Duration::from_secs(5), || read().contains("A1")));

    fs::write(source.join("b.form"), "B1").unwrap();
    assert!(wait_for(Duration::from_secs(5), || read().contains("B1")));

    fs::write(source.join("a.form"), "A2").unwrap();
    assert!(wait_for(Duration::from_secs(5), || read().contains("A2")));

    running.store(false, Ordering::SeqCst);
    handle.join().unwrap().unwrap();

    let bundle = read();
    assert!(!bundle.contains("A1"));
    let captured = events.lock().unwrap();
    assert!(captured
        .iter()
        .any(|e| matches!(e, WatchEvent::FileChanged { path } if path.ends_with("b.form"))));
    assert_eq!(captured.last(), Some(&WatchEvent::Shutdown));
}

/// Saves another template while the first compile of the initial rebuild
/// is still running.
struct SavesDuringFirstCompile {
    file: PathBuf,
    fired: AtomicBool,
}

impl TemplateCompiler for SavesDuringFirstCompile {
    fn compile(&self, name: &str, source: &str) -> Result<CompiledTemplate, CompileError> {
        if !self.fired.swap(true, Ordering::SeqCst) {
            fs::write(&self.file, "B").unwrap();
        }
        DustCompiler::new().compile(name, source)
    }
}

#[test]
fn test_watch_picks_up_change_during_initial_rebuild() {
    let (_dir, source, output) = setup();
    fs::write(source.join("a.form"), "A").unwrap();

    let running = Arc::new(AtomicBool::new(true));
    let handle = {
        let running = running.clone();
        let compiler = SavesDuringFirstCompile {
            file: source.join("b.form"),
            fired: AtomicBool::new(false),
        };
        let options = WatchOptions::new(RebuildOptions::new(&source, &output));
        std::thread::spawn(move || {
            let mut use_case = WatchUseCase::new(LocalFs::new(), compiler, options);
            use_case.start(running, |_| {})
        })
    };

    let read = || fs::read_to_string(&output).unwrap_or_default();
    let picked_up = wait_for(Duration::from_secs(5), || {
        read().contains("dust.register(\"b\"")
    });

    running.store(false, Ordering::SeqCst);
    handle.join().unwrap().unwrap();

    assert!(picked_up, "bundle: {}", read());
    assert!(read().contains("dust.register(\"a\""));
}
