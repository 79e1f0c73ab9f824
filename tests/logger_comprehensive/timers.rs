//! Timer Tests
//!
//! Start/stop protocol, state transitions and durations.

use crate::*;
use std::thread;
use std::time::Duration;

#[test]
fn test_start_stop_records_elapsed_in_order() {
    let logger = logger();
    let id = logger.start_event(Severity::Warning, "T", "m").unwrap();
    thread::sleep(Duration::from_millis(10));
    logger.stop_event(&id).unwrap();

    let start = logger.get_start(&id).unwrap();
    let stop = logger.get_stop(&id).unwrap();
    assert!(stop.elapsed_ms() >= start.elapsed_ms() + 10);
    assert_eq!(stop.severity(), Severity::Warning);
    assert_eq!(stop.name(), "T");
    assert_eq!(stop.message(), "m");
    assert!(logger.duration_ms(&id).unwrap() >= 10);
}

#[test]
fn test_stop_unknown_id_is_not_found() {
    let logger = logger();
    let err = logger.stop_event(&EventId::new()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(logger.stop_store().is_empty());
}

#[test]
fn test_second_stop_is_rejected_and_keeps_first_record() {
    let logger = logger();
    let id = logger.start_event(Severity::Info, "T", "").unwrap();
    logger.stop_event(&id).unwrap();
    let first = logger.get_stop(&id).unwrap().elapsed_ms();

    thread::sleep(Duration::from_millis(5));
    let err = logger.stop_event(&id).unwrap_err();
    assert!(err.is_already_stopped());
    assert_eq!(logger.get_stop(&id).unwrap().elapsed_ms(), first);
    assert_eq!(logger.stop_store().len(), 1);
}

#[test]
fn test_state_transitions() {
    let logger = logger();
    let unknown = EventId::new();
    assert_eq!(logger.timer_state(&unknown), TimerState::Unknown);

    let id = logger.start_event(Severity::Info, "T", "").unwrap();
    assert_eq!(logger.timer_state(&id), TimerState::Started);
    assert!(logger.timer_state(&id).is_open());

    logger.stop_event(&id).unwrap();
    assert_eq!(logger.timer_state(&id), TimerState::Stopped);
    assert!(!logger.timer_state(&id).is_open());
}

#[test]
fn test_get_stop_of_running_timer_is_not_found() {
    let logger = logger();
    let id = logger.start_event(Severity::Info, "T", "").unwrap();
    assert!(logger.get_stop(&id).unwrap_err().is_not_found());
    assert!(logger.duration_ms(&id).unwrap_err().is_missing_stop());
}

#[test]
fn test_stop_does_not_remove_start_record() {
    let logger = logger();
    let id = logger.start_event(Severity::Abort, "T", "").unwrap();
    logger.stop_event(&id).unwrap();
    assert!(logger.get_start(&id).is_ok());
    assert_eq!(logger.start_store().len(), 1);
}
