//! Shared test utilities used across hexlink crates.

pub mod tracing {
    //! Event recording utilities for asserting instrumentation in tests.
    use std::collections::HashMap;
    use std::fmt;
    use std::sync::{Arc, Mutex, PoisonError};

    use tracing::field::{Field, Visit};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::Layer;
    use tracing_subscriber::layer::Context;

    /// Layer that keeps every event it observes so tests can count and inspect
    /// diagnostics emitted by the engine.
    ///
    /// # Examples
    /// ```
    /// use hexlink_test_support::tracing::EventRecorder;
    /// use tracing_subscriber::layer::SubscriberExt;
    ///
    /// let recorder = EventRecorder::default();
    /// let subscriber = tracing_subscriber::registry().with(recorder.clone());
    /// tracing::subscriber::with_default(subscriber, || {
    ///     tracing::debug!(edges = 3_u64, "spanning forest rebuilt");
    /// });
    /// assert_eq!(recorder.count_message("spanning forest rebuilt"), 1);
    /// ```
    #[derive(Clone, Default)]
    pub struct EventRecorder {
        events: Arc<Mutex<Vec<RecordedEvent>>>,
    }

    impl EventRecorder {
        /// Returns a snapshot of the recorded events in emission order.
        #[must_use]
        pub fn events(&self) -> Vec<RecordedEvent> {
            self.events
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone()
        }

        /// Returns the events whose `message` field equals `message`.
        #[must_use]
        pub fn with_message(&self, message: &str) -> Vec<RecordedEvent> {
            self.events()
                .into_iter()
                .filter(|event| event.message() == Some(message))
                .collect()
        }

        /// Counts the events whose `message` field equals `message`.
        #[must_use]
        pub fn count_message(&self, message: &str) -> usize {
            self.with_message(message).len()
        }

        /// Discards everything recorded so far.
        pub fn clear(&self) {
            self.events
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clear();
        }
    }

    /// Snapshot of an emitted event.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct RecordedEvent {
        /// Level the event was emitted at.
        pub level: Level,
        /// Event target, usually the emitting module path.
        pub target: String,
        /// Structured fields rendered to strings, including `message`.
        pub fields: HashMap<String, String>,
    }

    impl RecordedEvent {
        /// Returns the formatted `message` field, if the event carried one.
        #[must_use]
        pub fn message(&self) -> Option<&str> {
            self.field("message")
        }

        /// Returns the rendered value of `name`.
        #[must_use]
        pub fn field(&self, name: &str) -> Option<&str> {
            self.fields.get(name).map(String::as_str)
        }
    }

    impl<S: Subscriber> Layer<S> for EventRecorder {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut fields = HashMap::new();
            event.record(&mut FieldCollector {
                fields: &mut fields,
            });
            self.events
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(RecordedEvent {
                    level: *event.metadata().level(),
                    target: event.metadata().target().to_owned(),
                    fields,
                });
        }
    }

    struct FieldCollector<'a> {
        fields: &'a mut HashMap<String, String>,
    }

    impl FieldCollector<'_> {
        fn insert(&mut self, field: &Field, value: String) {
            self.fields.insert(field.name().to_owned(), value);
        }
    }

    impl Visit for FieldCollector<'_> {
        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            self.insert(field, format!("{value:?}"));
        }

        fn record_str(&mut self, field: &Field, value: &str) {
            self.insert(field, value.to_owned());
        }

        fn record_bool(&mut self, field: &Field, value: bool) {
            self.insert(field, value.to_string());
        }

        fn record_i64(&mut self, field: &Field, value: i64) {
            self.insert(field, value.to_string());
        }

        fn record_u64(&mut self, field: &Field, value: u64) {
            self.insert(field, value.to_string());
        }
    }
}

pub mod ci;
