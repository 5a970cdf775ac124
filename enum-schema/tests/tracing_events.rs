#![allow(clippy::unwrap_used)]
//! Tests for the `tracing` events emitted while building schemas.

use enum_schema::{ComponentsObject, EnumLike, build_schema};
use std::io::Write;
use std::sync::{Arc, Mutex};
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

/// Shared in-memory log sink.
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn output(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Captured {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn capture<T>(f: impl FnOnce() -> T) -> (T, String) {
    let sink = Captured::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .with_ansi(false)
        .with_writer(sink.clone())
        .finish();
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, sink.output())
}

#[test]
fn build_schema_logs_dropped_reverse_keys() {
    let enum_like: EnumLike = r#"{"Up":1,"1":"Up","Left":"left"}"#.parse().unwrap();
    let (_, logs) = capture(|| build_schema(&enum_like, &ComponentsObject::default()));
    assert!(logs.contains("skipping reverse-lookup entry"), "logs: {logs}");
    assert!(logs.contains("key=1"), "logs: {logs}");
    assert!(!logs.contains("key=Up"), "logs: {logs}");
}

#[test]
fn build_schema_logs_mixed_shape() {
    let enum_like: EnumLike = r#"{"Up":1,"1":"Up","Left":"left"}"#.parse().unwrap();
    let (_, logs) = capture(|| build_schema(&enum_like, &ComponentsObject::default()));
    assert!(logs.contains("mixed enum as type array"), "logs: {logs}");
    assert!(logs.contains("version=3.1.0"), "logs: {logs}");
}

#[test]
fn string_enum_logs_nothing_dropped() {
    let enum_like: EnumLike = r#"{"A":"a","B":"b"}"#.parse().unwrap();
    let (_, logs) = capture(|| enum_like.extract_values());
    assert!(!logs.contains("skipping reverse-lookup entry"), "logs: {logs}");
}
