use super::*;

/// Channel double that records every event the relay fires.
#[derive(Default)]
pub(super) struct RecordingChannel {
    events: Mutex<Vec<(String, Option<String>)>>,
}

impl RecordingChannel {
    pub(super) fn recorded(&self) -> Vec<(String, Option<String>)> {
        self.events.lock().expect("recorded events lock").clone()
    }
}

impl EventSink for RecordingChannel {
    fn send_event(&self, event: &str, payload: Option<String>) {
        self.events
            .lock()
            .expect("recorded events lock")
            .push((event.to_string(), payload));
    }
}
