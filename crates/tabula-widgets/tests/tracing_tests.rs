#![forbid(unsafe_code)]

//! Tracing span instrumentation tests.
//!
//! Spans enabled:
//!   cargo test -p tabula-widgets --features tracing --test tracing_tests
//!
//! Zero-overhead verification (no feature):
//!   cargo test -p tabula-widgets --test tracing_tests -- zero_overhead

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[cfg(feature = "tracing")]
use tabula_render::PlainSink;
use tabula_render::Render;
#[cfg(feature = "tracing")]
use tabula_widgets::{Pagination, TableSettings};
use tabula_widgets::Table;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;

// ============================================================================
// Test Infrastructure
// ============================================================================

/// A captured span with its metadata.
#[derive(Debug, Clone)]
#[allow(dead_code)]
struct CapturedSpan {
    name: String,
    fields: HashMap<String, String>,
}

/// A tracing Layer that records every new span.
struct SpanCapture {
    spans: Arc<Mutex<Vec<CapturedSpan>>>,
}

/// Visitor that extracts span fields.
struct FieldVisitor(Vec<(String, String)>);

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.0.push((field.name().to_string(), format!("{value:?}")));
    }

    fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
        self.0.push((field.name().to_string(), value.to_string()));
    }

    fn record_bool(&mut self, field: &tracing::field::Field, value: bool) {
        self.0.push((field.name().to_string(), value.to_string()));
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.0.push((field.name().to_string(), value.to_string()));
    }
}

impl<S> tracing_subscriber::Layer<S> for SpanCapture
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_new_span(
        &self,
        attrs: &tracing::span::Attributes<'_>,
        _id: &tracing::span::Id,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let mut visitor = FieldVisitor(Vec::new());
        attrs.record(&mut visitor);
        self.spans.lock().unwrap().push(CapturedSpan {
            name: attrs.metadata().name().to_string(),
            fields: visitor.0.into_iter().collect(),
        });
    }
}

/// Run `f` under a subscriber that captures spans, returning them.
fn with_captured_spans<F: FnOnce()>(f: F) -> Vec<CapturedSpan> {
    let spans = Arc::new(Mutex::new(Vec::new()));
    let layer = SpanCapture {
        spans: Arc::clone(&spans),
    };
    let subscriber = tracing_subscriber::registry().with(layer);
    tracing::subscriber::with_default(subscriber, f);
    let captured = spans.lock().unwrap().clone();
    captured
}

fn sample_table() -> Table {
    Table::from_rows([["Name", "Qty"], ["Pen", "2"], ["Ink", "7"], ["Pad", "1"]])
}

// ============================================================================
// Tests
// ============================================================================

#[test]
#[cfg(feature = "tracing")]
fn table_render_emits_widget_span() {
    let spans = with_captured_spans(|| {
        let table = sample_table().with_settings(TableSettings::default().with_row_indexes(true));
        table.render(&mut PlainSink::new()).unwrap();
    });

    let table_spans: Vec<_> = spans
        .iter()
        .filter(|s| s.name == "widget_render")
        .filter(|s| s.fields.get("widget").is_some_and(|w| w.contains("Table")))
        .collect();
    assert_eq!(table_spans.len(), 1, "spans: {spans:?}");
    assert_eq!(table_spans[0].fields.get("rows").map(String::as_str), Some("3"));
    assert_eq!(
        table_spans[0].fields.get("row_indexes").map(String::as_str),
        Some("true")
    );
}

#[test]
#[cfg(feature = "tracing")]
fn each_printed_page_gets_its_own_span() {
    let spans = with_captured_spans(|| {
        let mut pages = sample_table().paginate(1).unwrap();
        let mut sink = PlainSink::new();
        pages.print_current(&mut sink).unwrap();
        while pages.print_next(&mut sink).unwrap() {}
    });

    let count = spans.iter().filter(|s| s.name == "widget_render").count();
    assert_eq!(count, 3);
}

#[test]
fn zero_overhead_when_disabled() {
    let spans = with_captured_spans(|| {
        sample_table().render_to_string().unwrap();
    });
    let widget_spans: Vec<_> = spans.iter().filter(|s| s.name == "widget_render").collect();

    #[cfg(feature = "tracing")]
    assert!(
        !widget_spans.is_empty(),
        "With tracing feature, widget_render spans should be present"
    );

    #[cfg(not(feature = "tracing"))]
    assert!(
        widget_spans.is_empty(),
        "Without tracing feature, no widget_render spans should exist (got {})",
        widget_spans.len()
    );
}
