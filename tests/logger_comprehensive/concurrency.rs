//! Concurrency Tests
//!
//! Shared loggers under parallel writers, timers and exports.

use crate::*;
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

#[test]
fn test_two_writers_lose_nothing() {
    let logger = Arc::new(logger());
    let per_thread = 50_000;

    let handles: Vec<_> = (1..=2)
        .map(|t| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                let name = format!("Thread {}", t);
                (0..per_thread)
                    .map(|j| {
                        let message = format!("Attempt number {}", j);
                        logger.add(Severity::Info, name.as_str(), message).unwrap()
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let ids: HashSet<EventId> = handles
        .into_iter()
        .flat_map(|h| h.join().unwrap())
        .collect();
    assert_eq!(ids.len(), 2 * per_thread);
    assert_eq!(logger.log_store().len(), 2 * per_thread);

    let text = String::from_utf8(logger.render_log().unwrap()).unwrap();
    assert_eq!(text.lines().count(), 2 * per_thread);
}

#[test]
fn test_concurrent_adds_are_retrievable_field_for_field() {
    let logger = Arc::new(logger());
    let per_thread = 2_000;

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                (0..per_thread)
                    .map(|j| {
                        let severity = Severity::ALL[(t + j) % Severity::ALL.len()];
                        let name = format!("writer {}", t);
                        let message = format!("entry {}", j);
                        let id = logger
                            .add(severity, name.as_str(), message.as_str())
                            .unwrap();
                        (id, severity, name, message)
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let written: Vec<_> = handles
        .into_iter()
        .flat_map(|h| h.join().unwrap())
        .collect();
    assert_eq!(written.len(), 4 * per_thread);
    assert_eq!(logger.log_store().len(), 4 * per_thread);

    for (id, severity, name, message) in &written {
        let event = logger.get(id).unwrap();
        assert_eq!(event.severity(), *severity);
        assert_eq!(event.name(), name.as_str());
        assert_eq!(event.message(), message.as_str());
    }
}

#[test]
fn test_readers_run_alongside_writers() {
    let logger = Arc::new(logger());
    let seed = logger.add(Severity::Info, "seed", "").unwrap();

    let writer = {
        let logger = Arc::clone(&logger);
        thread::spawn(move || {
            for i in 0..5_000 {
                logger.add(Severity::Info, "w", format!("{}", i)).unwrap();
            }
        })
    };
    let reader = {
        let logger = Arc::clone(&logger);
        thread::spawn(move || {
            for _ in 0..5_000 {
                assert_eq!(logger.get(&seed).unwrap().name(), "seed");
            }
        })
    };

    writer.join().unwrap();
    reader.join().unwrap();
    assert_eq!(logger.log_store().len(), 5_001);
}

#[test]
fn test_parallel_timers_each_stop_once() {
    let logger = Arc::new(logger());

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..500 {
                    let id = logger
                        .start_event(Severity::Info, format!("t{}-{}", t, i), "")
                        .unwrap();
                    logger.stop_event(&id).unwrap();
                    assert!(logger.stop_event(&id).unwrap_err().is_already_stopped());
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(logger.start_store().len(), 4_000);
    assert_eq!(logger.stop_store().len(), 4_000);
    let text = String::from_utf8(logger.render_persisting().unwrap()).unwrap();
    assert_eq!(text.lines().count(), 4_000);
}

#[test]
fn test_export_during_writes_is_a_consistent_prefix() {
    let logger = Arc::new(logger());
    logger.add(Severity::Info, "first", "").unwrap();

    let writer = {
        let logger = Arc::clone(&logger);
        thread::spawn(move || {
            for i in 0..10_000 {
                logger.add(Severity::Info, "w", format!("{}", i)).unwrap();
            }
        })
    };

    let text = String::from_utf8(logger.render_log().unwrap()).unwrap();
    writer.join().unwrap();

    for line in text.lines() {
        assert_eq!(fields(line).len(), 6);
    }
    let count = text.lines().count();
    assert!(count >= 1 && count <= 10_001);
}
