//! Export Tests
//!
//! File layout, failure modes and sync/async equivalence.

use crate::*;
use tempfile::TempDir;

#[test]
fn test_log_export_single_line_layout() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("log.txt");
    let logger = logger();
    let id = logger.add(Severity::Info, "A", "hello").unwrap();

    let report = logger.export_log(&path).unwrap();
    assert_eq!(report.lines, 1);
    assert_eq!(report.path, path);

    let lines = read_lines(&path);
    assert_eq!(lines.len(), 1);
    let f = fields(&lines[0]);
    assert_eq!(f.len(), 6);
    assert_eq!(f[0], id.to_string());
    assert_eq!(f[2], "Info");
    assert_eq!(f[3], "A");
    assert_eq!(f[4], "hello");
    assert!(f[5].parse::<u64>().is_ok());
}

#[test]
fn test_export_of_empty_log_fails_without_creating_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.txt");

    let err = logger().export_log(&path).unwrap_err();
    assert!(err.is_empty_store());
    assert!(!path.exists());
}

#[test]
fn test_persisting_export_of_no_timers_fails() {
    let dir = TempDir::new().unwrap();
    let err = logger()
        .export_persisting(dir.path().join("p.txt"))
        .unwrap_err();
    assert!(err.is_empty_store());
}

#[test]
fn test_persisting_export_with_open_timer_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("p.txt");
    let logger = logger();
    let closed = logger.start_event(Severity::Info, "closed", "").unwrap();
    logger.stop_event(&closed).unwrap();
    let open = logger.start_event(Severity::Info, "open", "").unwrap();

    let err = logger.export_persisting(&path).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingStopRecord);
    assert_eq!(err.id(), Some(open));
    assert!(!path.exists());
}

#[test]
fn test_persisting_export_has_one_line_per_timer() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("p.txt");
    let logger = logger();
    let ids: Vec<_> = (0..3)
        .map(|i| logger.start_event(Severity::Error, format!("t{}", i), "m").unwrap())
        .collect();
    for id in &ids {
        logger.stop_event(id).unwrap();
    }

    logger.export_persisting(&path).unwrap();
    let lines = read_lines(&path);
    assert_eq!(lines.len(), 3);
    for (line, id) in lines.iter().zip(&ids) {
        let f = fields(line);
        assert_eq!(f.len(), 7);
        assert_eq!(f[0], id.to_string());
        let start: u64 = f[5].parse().unwrap();
        let stop: u64 = f[6].parse().unwrap();
        assert!(stop >= start);
    }
}

#[test]
fn test_export_lines_follow_insertion_order() {
    let logger = logger();
    let ids: Vec<_> = (0..50)
        .map(|i| logger.add(Severity::Info, "n", format!("{}", i)).unwrap())
        .collect();

    let text = String::from_utf8(logger.render_log().unwrap()).unwrap();
    let exported: Vec<String> = text.lines().map(|l| fields(l)[0].to_string()).collect();
    let expected: Vec<String> = ids.iter().map(|id| id.to_string()).collect();
    assert_eq!(exported, expected);
}

#[test]
fn test_embedded_tabs_and_newlines_stay_on_one_line() {
    let logger = logger();
    logger.add(Severity::Info, "a\tb", "line one\nline two").unwrap();

    let text = String::from_utf8(logger.render_log().unwrap()).unwrap();
    assert_eq!(text.lines().count(), 1);
    let line = text.lines().next().unwrap();
    assert_eq!(fields(line).len(), 6);
    assert!(line.contains("a\\tb"));
    assert!(line.contains("line one\\nline two"));
}

#[test]
fn test_custom_delimiter() {
    let logger = Logger::builder()
        .export_options(ExportOptions::new().delimiter("\t\t"))
        .build();
    logger.add(Severity::Info, "A", "b").unwrap();

    let text = String::from_utf8(logger.render_log().unwrap()).unwrap();
    assert_eq!(text.trim_end().split("\t\t").count(), 6);
}

#[test]
fn test_pipe_delimiter_inside_name_keeps_field_layout() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("pipes.txt");
    let logger = Logger::builder()
        .export_options(ExportOptions::new().delimiter("|"))
        .build();
    logger.add(Severity::Info, "a|b", "c").unwrap();

    logger.export_log(&path).unwrap();
    let lines = read_lines(&path);
    let f: Vec<&str> = lines[0].split('|').collect();
    assert_eq!(f.len(), 6);
    assert_eq!(f[3], "a\\u{7c}b");
    assert_eq!(f[4], "c");
}

#[test]
fn test_unusable_delimiter_is_rejected_at_export() {
    let logger = Logger::builder()
        .export_options(ExportOptions::new().delimiter("x"))
        .build();
    logger.add(Severity::Info, "A", "").unwrap();

    let err = logger.render_log().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidDelimiter);
}

#[test]
fn test_export_into_missing_directory_is_io_error() {
    let dir = TempDir::new().unwrap();
    let logger = logger();
    logger.add(Severity::Info, "A", "").unwrap();

    let err = logger
        .export_log(dir.path().join("missing").join("log.txt"))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);
}

#[tokio::test]
async fn test_async_export_matches_sync_export() {
    let dir = TempDir::new().unwrap();
    let sync_path = dir.path().join("sync.txt");
    let async_path = dir.path().join("async.txt");
    let logger = logger();
    for i in 0..100 {
        logger.add(Severity::Warning, "w", format!("{}", i)).unwrap();
    }

    logger.export_log(&sync_path).unwrap();
    let report = logger
        .export_log_async(&async_path)
        .unwrap()
        .wait()
        .await
        .unwrap();
    assert_eq!(report.lines, 100);
    assert_eq!(
        std::fs::read(&sync_path).unwrap(),
        std::fs::read(&async_path).unwrap()
    );
}

#[tokio::test]
async fn test_async_export_snapshots_at_call_time() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("snap.txt");
    let logger = logger();
    logger.add(Severity::Info, "before", "").unwrap();

    let handle = logger.export_log_async(&path).unwrap();
    logger.add(Severity::Info, "after", "").unwrap();
    let report = handle.wait().await.unwrap();

    assert_eq!(report.lines, 1);
    assert_eq!(read_lines(&path).len(), 1);
}

#[tokio::test]
async fn test_async_persisting_export_validates_before_spawning() {
    let dir = TempDir::new().unwrap();
    let logger = logger();
    logger.start_event(Severity::Info, "open", "").unwrap();

    let err = logger
        .export_persisting_async(dir.path().join("p.txt"))
        .unwrap_err();
    assert!(err.is_missing_stop());
}

#[test]
fn test_async_export_without_runtime_is_rejected() {
    let dir = TempDir::new().unwrap();
    let logger = logger();
    logger.add(Severity::Info, "A", "").unwrap();

    let err = logger.export_log_async(dir.path().join("x.txt")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NoRuntime);
}
