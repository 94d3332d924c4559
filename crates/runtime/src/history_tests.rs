use super::*;
use serial_test::serial;
use tempfile::tempdir;

fn temp_log() -> (VisitLog, tempfile::TempDir) {
    let dir = tempdir().expect("create temp dir");
    let log = VisitLog::at(dir.path().join("nested").join("visits.log"));
    (log, dir)
}

#[test]
fn visit_event_new_stamps_version_and_time() {
    let before = Utc::now();
    let ev = VisitEvent::new("/home/user", 12);
    let after = Utc::now();

    assert_eq!(ev.version, HISTORY_VERSION);
    assert_eq!(ev.path, "/home/user");
    assert_eq!(ev.rows, 12);
    assert!(ev.timestamp >= before && ev.timestamp <= after);
}

#[test]
fn record_creates_parent_dirs_and_round_trips() {
    let (log, _dir) = temp_log();

    let ev = VisitEvent::new("/tmp", 3);
    log.record(ev.clone());

    assert!(log.path().exists());
    assert_eq!(log.recent(10), vec![ev]);
}

#[test]
fn recent_is_newest_first_and_limited() {
    let (log, _dir) = temp_log();

    for p in ["/a", "/b", "/c"] {
        log.record(VisitEvent::new(p, 0));
    }

    let paths: Vec<String> = log.recent(2).into_iter().map(|e| e.path).collect();
    assert_eq!(paths, vec!["/c".to_string(), "/b".to_string()]);
    assert_eq!(log.count(), 3);
}

#[test]
fn missing_file_reads_as_empty() {
    let (log, _dir) = temp_log();
    assert_eq!(log.count(), 0);
    assert!(log.recent(5).is_empty());
}

#[test]
fn clear_is_idempotent() {
    let (log, _dir) = temp_log();
    log.record(VisitEvent::new("/x", 1));
    assert!(log.path().exists());

    log.clear().expect("clear");
    assert!(!log.path().exists());
    log.clear().expect("second clear");
}

#[test]
fn malformed_lines_are_skipped() {
    let (log, _dir) = temp_log();
    fs::create_dir_all(log.path().parent().unwrap()).unwrap();
    fs::write(log.path(), "not json\n").unwrap();

    log.record(VisitEvent::new("/ok", 2));

    let events = log.recent(10);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].path, "/ok");
}

#[test]
#[serial]
fn new_respects_disable_env() {
    let tmp = tempdir().unwrap();
    unsafe { env::set_var("XDG_STATE_HOME", tmp.path()) };

    unsafe { env::remove_var(HISTORY_DISABLED_ENV) };
    assert!(VisitLog::new().is_some(), "enabled by default");

    for off in ["0", "false", "FALSE"] {
        unsafe { env::set_var(HISTORY_DISABLED_ENV, off) };
        assert!(VisitLog::new().is_none(), "{off} should disable history");
    }

    unsafe { env::set_var(HISTORY_DISABLED_ENV, "1") };
    assert!(VisitLog::new().is_some());

    unsafe { env::remove_var(HISTORY_DISABLED_ENV) };
    unsafe { env::remove_var("XDG_STATE_HOME") };
}
