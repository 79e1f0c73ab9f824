//! General Log Tests
//!
//! add/get semantics, identifier uniqueness and store isolation.

use crate::*;
use std::collections::HashSet;

#[test]
fn test_add_then_get_returns_stored_fields() {
    let logger = logger();
    let id = logger.add(Severity::Info, "A", "hello").unwrap();

    let event = logger.get(&id).unwrap();
    assert_eq!(event.severity(), Severity::Info);
    assert_eq!(event.name(), "A");
    assert_eq!(event.message(), "hello");
}

#[test]
fn test_ids_are_unique() {
    let logger = logger();
    let ids: HashSet<EventId> = (0..1_000)
        .map(|i| logger.add(Severity::Warning, "n", format!("{}", i)).unwrap())
        .collect();
    assert_eq!(ids.len(), 1_000);
    assert_eq!(logger.log_store().len(), 1_000);
}

#[test]
fn test_get_unknown_id_names_operation_and_store() {
    let logger = logger();
    let id = EventId::new();

    let err = logger.get(&id).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(err.id(), Some(id));
    let text = err.to_string();
    assert!(text.contains("get"));
    assert!(text.contains("event log"));
    assert!(text.contains(&id.to_string()));
}

#[test]
fn test_elapsed_never_decreases() {
    let logger = logger();
    let mut last = 0;
    for i in 0..200 {
        let id = logger.add(Severity::Info, "tick", format!("{}", i)).unwrap();
        let elapsed = logger.get(&id).unwrap().elapsed_ms();
        assert!(elapsed >= last);
        last = elapsed;
    }
}

#[test]
fn test_every_severity_round_trips() {
    let logger = logger();
    for severity in Severity::ALL {
        let id = logger.add(severity, "s", "").unwrap();
        assert_eq!(logger.get(&id).unwrap().severity(), severity);
    }
}

#[test]
fn test_independent_loggers_do_not_share_records() {
    let a = logger();
    let b = logger();

    let id = a.add(Severity::Info, "only in a", "").unwrap();
    assert!(a.get(&id).is_ok());
    assert!(b.get(&id).unwrap_err().is_not_found());
    assert!(b.log_store().is_empty());
}

#[test]
fn test_timer_ids_are_not_in_general_log() {
    let logger = logger();
    let timer = logger.start_event(Severity::Info, "t", "").unwrap();
    assert!(logger.get(&timer).unwrap_err().is_not_found());
}

#[test]
fn test_console_and_trace_of_unknown_id_fail() {
    let logger = logger();
    let id = EventId::new();
    assert!(logger.log_to_console(&id).unwrap_err().is_not_found());
    assert!(logger.trace_event(&id).unwrap_err().is_not_found());
}

#[test]
fn test_console_sink_on_buffer_renders_record() {
    let logger = logger();
    let id = logger.add(Severity::Error, "disk", "full").unwrap();

    let sink = ConsoleSink::new(Vec::new()).plain();
    logger.emit_to(&id, &sink).unwrap();
    let out = String::from_utf8(sink.into_inner()).unwrap();
    assert!(out.starts_with("[ERROR]["));
    assert!(out.contains("[disk]"));
    assert!(out.trim_end().ends_with(": full"));
}
