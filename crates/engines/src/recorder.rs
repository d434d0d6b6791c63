use shared::trace::TraceEvent;

/// Receives trace events in the order an engine produces them.
pub trait TraceSink {
    fn record(&mut self, event: TraceEvent);

    /// Engines skip building snapshots entirely when this is false.
    fn enabled(&self) -> bool {
        true
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoTrace;

impl TraceSink for NoTrace {
    fn record(&mut self, _event: TraceEvent) {}

    fn enabled(&self) -> bool {
        false
    }
}

impl<F> TraceSink for F
where
    F: FnMut(TraceEvent),
{
    fn record(&mut self, event: TraceEvent) {
        self(event)
    }
}

/// Append-only log of one sort's trace. Consuming it yields the events once, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraceRecorder {
    events: Vec<TraceEvent>,
}

impl TraceRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn pass_count(&self) -> usize {
        self.events.iter().filter(|e| e.is_pass_boundary()).count()
    }

    pub fn relocation_count(&self) -> usize {
        self.events.iter().filter(|e| e.moved_element()).count()
    }

    pub fn last_snapshot(&self) -> Option<&[i32]> {
        self.events.last().map(TraceEvent::snapshot)
    }

    pub fn into_events(self) -> Vec<TraceEvent> {
        self.events
    }
}

impl TraceSink for TraceRecorder {
    fn record(&mut self, event: TraceEvent) {
        self.events.push(event);
    }
}

impl IntoIterator for TraceRecorder {
    type Item = TraceEvent;
    type IntoIter = std::vec::IntoIter<TraceEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.into_iter()
    }
}
