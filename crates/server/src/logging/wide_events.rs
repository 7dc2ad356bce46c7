use std::fmt::Display;
use tracing::{Level, Span, field};

/// One span per handled event, carrying every attribute learned while handling it.
///
/// ```rust,ignore
/// let evt = WideEvent::new("attribute_submit");
/// evt.add("action", action.name());
/// evt.info("processed a request");
/// ```
///
/// Fields must be declared on the span up front for `record` to take effect, so the
/// set of keys is fixed in [`WideEvent::new`].
#[derive(Clone)]
pub struct WideEvent {
    span: Span,
}

impl WideEvent {
    pub fn new(name: &'static str) -> Self {
        let span = tracing::span!(
            Level::INFO,
            "wide_event",
            event.name = %name,
            action = field::Empty,
            body_bytes = field::Empty,
            error = field::Empty,
        );
        WideEvent { span }
    }

    pub fn span(&self) -> &Span {
        &self.span
    }

    /// Record `value` under one of the keys declared in [`WideEvent::new`].
    pub fn add<V: Display>(&self, key: &'static str, value: V) {
        self.span.record(key, field::display(value));
    }

    pub fn emit(&self, message: &str, level: Level) {
        self.span.in_scope(|| match level {
            Level::ERROR => tracing::event!(Level::ERROR, message = %message),
            Level::WARN => tracing::event!(Level::WARN, message = %message),
            Level::INFO => tracing::event!(Level::INFO, message = %message),
            Level::DEBUG => tracing::event!(Level::DEBUG, message = %message),
            _ => tracing::event!(Level::TRACE, message = %message),
        });
    }

    pub fn info(&self, message: &str) {
        self.emit(message, Level::INFO)
    }
    pub fn warn(&self, message: &str) {
        self.emit(message, Level::WARN)
    }
    pub fn error(&self, message: &str) {
        self.emit(message, Level::ERROR)
    }
}
