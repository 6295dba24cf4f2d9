use codelab::core::{Clock, LocalDateTime, interpret};
use codelab::models::LineKind;

struct FixedClock(LocalDateTime);

impl Clock for FixedClock {
    fn now(&self) -> LocalDateTime {
        self.0.clone()
    }
}

fn clock() -> FixedClock {
    FixedClock(LocalDateTime {
        year: 2026,
        month: 10,
        day: 18,
        weekday: 0,
        hour: 23,
        minute: 59,
        second: 59,
        utc_offset_minutes: 0,
        zone_name: Some("Coordinated Universal Time".to_string()),
    })
}

#[test]
fn empty_line_is_a_noop() {
    let result = interpret("", &clock());
    assert!(result.output.is_empty());
    assert!(!result.clears_screen);
}

#[test]
fn dispatch_ignores_token_case() {
    assert_eq!(interpret("HELP", &clock()), interpret("help", &clock()));
    assert_eq!(interpret("Ls", &clock()), interpret("ls", &clock()));
}

#[test]
fn echo_keeps_payload_verbatim() {
    let result = interpret("echo Hello World", &clock());
    assert_eq!(result.output.len(), 1);
    assert_eq!(result.output[0].kind(), LineKind::Output);
    assert_eq!(result.output[0].as_str(), "Hello World");
}

#[test]
fn clear_requests_wipe() {
    let result = interpret("clear", &clock());
    assert!(result.output.is_empty());
    assert!(result.clears_screen);
}

#[test]
fn unknown_command_reports_error_then_hint() {
    let result = interpret("foo", &clock());
    assert!(!result.clears_screen);
    assert_eq!(result.output.len(), 2);
    assert_eq!(result.output[0].kind(), LineKind::Error);
    assert!(result.output[0].as_str().contains("foo"));
    assert_eq!(result.output[1].kind(), LineKind::Output);
    assert!(result.output[1].as_str().contains("help"));
}

#[test]
fn date_prints_timestamp_with_year() {
    let result = interpret("date", &clock());
    assert_eq!(result.output.len(), 1);
    let text = result.output[0].as_str();
    let fields: Vec<&str> = text.split_whitespace().collect();
    assert_eq!(&fields[..6], &["Sun", "Oct", "18", "2026", "23:59:59", "GMT+0000"]);
    assert!(text.ends_with(" (Coordinated Universal Time)"));
}

#[test]
fn help_lists_every_command() {
    let result = interpret("help", &clock());
    let body: Vec<&str> = result.output.iter().skip(1).map(|l| l.as_str()).collect();
    for (line, name) in body.iter().zip(["help", "clear", "ls", "echo", "date"]) {
        assert!(line.trim_start().starts_with(name), "{line} should start with {name}");
    }
    assert_eq!(body.len(), 5);
}
