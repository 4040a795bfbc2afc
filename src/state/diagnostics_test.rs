use std::cell::RefCell;

use super::*;

/// Keeps every emitted event in order.
#[derive(Default)]
struct RecordingSink {
    events: RefCell<Vec<DiagnosticEvent>>,
}

impl RecordingSink {
    fn events(&self) -> Vec<DiagnosticEvent> {
        self.events.borrow().clone()
    }
}

impl DiagnosticsSink for RecordingSink {
    fn emit(&self, event: DiagnosticEvent) {
        self.events.borrow_mut().push(event);
    }
}

fn tracker() -> ScrollDepthTracker {
    ScrollDepthTracker::new(vec![25, 50, 75, 100])
}

// =============================================================
// Scroll depth
// =============================================================

#[test]
fn milestones_fire_in_order_as_scroll_deepens() {
    let mut t = tracker();
    assert_eq!(t.record(10), Vec::<u8>::new());
    assert_eq!(t.record(30), vec![25]);
    assert_eq!(t.record(80), vec![50, 75]);
    assert_eq!(t.record(100), vec![100]);
    assert!(t.is_complete());
}

#[test]
fn fifty_percent_fires_once_across_scroll_back_and_forth() {
    let mut t = tracker();
    let mut fired_fifty = 0;
    for percent in [55, 20, 60, 40, 58, 52] {
        fired_fifty += t.record(percent).iter().filter(|m| **m == 50).count();
    }
    assert_eq!(fired_fifty, 1);
}

#[test]
fn scrolling_up_never_fires() {
    let mut t = tracker();
    t.record(60);
    assert!(t.record(30).is_empty());
    assert!(t.record(60).is_empty());
}

#[test]
fn unsorted_milestones_are_normalized() {
    let mut t = ScrollDepthTracker::new(vec![75, 25, 25, 50]);
    assert_eq!(t.record(100), vec![25, 50, 75]);
}

#[test]
fn scroll_percent_rounds() {
    assert_eq!(scroll_percent(500.0, 3000.0, 1000.0), Some(25));
    assert_eq!(scroll_percent(1999.0, 3000.0, 1000.0), Some(100));
}

#[test]
fn non_scrollable_document_has_no_percent() {
    assert_eq!(scroll_percent(0.0, 800.0, 800.0), None);
    assert_eq!(scroll_percent(0.0, 600.0, 800.0), None);
}

// =============================================================
// Interaction classes
// =============================================================

#[test]
fn interactive_class_matching() {
    let classes = vec!["btn".to_owned(), "card-link".to_owned(), "nav-link".to_owned()];
    assert!(is_interactive(["nav-link", "active"], &classes));
    assert!(is_interactive("btn btn-primary".split_whitespace(), &classes));
    assert!(!is_interactive(["card"], &classes));
    assert!(!is_interactive(std::iter::empty::<&str>(), &classes));
}

// =============================================================
// Sinks
// =============================================================

#[test]
fn recording_sink_keeps_events_in_order() {
    let sink = RecordingSink::default();
    sink.emit(DiagnosticEvent::PageView { path: "/".to_owned() });
    sink.emit(DiagnosticEvent::ScrollDepth { percent: 25 });
    assert_eq!(
        sink.events(),
        vec![DiagnosticEvent::PageView { path: "/".to_owned() }, DiagnosticEvent::ScrollDepth { percent: 25 }]
    );
}

#[test]
fn console_sink_accepts_every_event() {
    let sink = ConsoleSink;
    sink.emit(DiagnosticEvent::Error { kind: ErrorKind::Uncaught, message: "boom".to_owned() });
    sink.emit(DiagnosticEvent::PageLoad { millis: 12.0 });
}

#[test]
fn events_render_readable_messages() {
    assert_eq!(DiagnosticEvent::ScrollDepth { percent: 50 }.to_string(), "Scroll depth tracked: 50%");
    assert_eq!(
        DiagnosticEvent::Error { kind: ErrorKind::UnhandledRejection, message: "nope".to_owned() }.to_string(),
        "Unhandled promise rejection: nope"
    );
    assert_eq!(DiagnosticEvent::Interaction { label: "Home".to_owned() }.to_string(), "Interaction tracked: Home");
}
