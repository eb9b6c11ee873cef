use std::sync::{Arc, Mutex};

use error_or::tracing_ext::TraceErrorsExt;
use error_or::{Error, ErrorOr};
use tracing::field::{Field, Visit};
use tracing::span::{Attributes, Id, Record};
use tracing::{Event, Metadata, Subscriber};

/// Records the `code` field of every event.
#[derive(Clone, Default)]
struct CodeRecorder {
    codes: Arc<Mutex<Vec<String>>>,
}

impl CodeRecorder {
    fn codes(&self) -> Vec<String> {
        self.codes.lock().unwrap().clone()
    }
}

struct CodeVisitor<'a>(&'a mut Option<String>);

impl Visit for CodeVisitor<'_> {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "code" {
            *self.0 = Some(value.to_string());
        }
    }

    fn record_debug(&mut self, _field: &Field, _value: &dyn std::fmt::Debug) {}
}

impl Subscriber for CodeRecorder {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn new_span(&self, _span: &Attributes<'_>) -> Id {
        Id::from_u64(1)
    }

    fn record(&self, _span: &Id, _values: &Record<'_>) {}

    fn record_follows_from(&self, _span: &Id, _follows: &Id) {}

    fn event(&self, event: &Event<'_>) {
        let mut code = None;
        event.record(&mut CodeVisitor(&mut code));
        if let Some(code) = code {
            self.codes.lock().unwrap().push(code);
        }
    }

    fn enter(&self, _span: &Id) {}

    fn exit(&self, _span: &Id) {}
}

#[test]
fn trace_errors_emits_one_event_per_error() {
    let recorder = CodeRecorder::default();
    let result = tracing::subscriber::with_default(recorder.clone(), || {
        ErrorOr::<u8>::from_errors(vec![
            Error::validation("email", "required"),
            Error::validation("name", "required"),
        ])
        .trace_errors()
    });

    assert_eq!(result.errors().len(), 2);
    assert_eq!(recorder.codes(), vec!["email".to_string(), "name".to_string()]);
}

#[test]
fn trace_errors_is_silent_for_values() {
    let recorder = CodeRecorder::default();
    let result =
        tracing::subscriber::with_default(recorder.clone(), || ErrorOr::ok(1).trace_errors());

    assert_eq!(result, ErrorOr::ok(1));
    assert!(recorder.codes().is_empty());
}

#[cfg(feature = "async")]
#[tokio::test]
async fn pending_results_are_traced_on_resolution() {
    use error_or::tracing_ext::FutureTraceExt;

    let recorder = CodeRecorder::default();
    let _guard = tracing::subscriber::set_default(recorder.clone());

    let failed = async { ErrorOr::<u8>::from_error(Error::not_found("User.NotFound", "missing")) }
        .in_span(tracing::info_span!("lookup"))
        .await;
    let ok = async { ErrorOr::ok(3u8) }.trace_errors().await;

    assert!(failed.is_error());
    assert_eq!(ok, ErrorOr::ok(3));
    assert_eq!(recorder.codes(), vec!["User.NotFound".to_string()]);
}
