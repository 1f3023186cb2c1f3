use super::*;

/// One-way event half of the channel. The relay only ever fires
/// fire-and-forget events through this; no acknowledgment, no retry.
pub(crate) trait EventSink: Send + Sync {
    fn send_event(&self, event: &str, payload: Option<String>);
}

/// Channel endpoint bound to one window, emitting window-scoped events
/// through the Tauri event system.
pub(crate) struct WindowChannel {
    app: tauri::AppHandle,
    label: String,
}

impl WindowChannel {
    pub(crate) fn new(app: tauri::AppHandle, label: String) -> Self {
        Self { app, label }
    }
}

impl EventSink for WindowChannel {
    fn send_event(&self, event: &str, payload: Option<String>) {
        let scoped = channel_event(event, &self.label);
        let _ = match payload {
            Some(path) => self.app.emit(&scoped, path),
            None => self.app.emit(&scoped, ()),
        };
    }
}

/// Scopes an event name to its owning window, e.g.
/// `myChannel/main/onFileOpened`.
pub(crate) fn channel_event(event: &str, label: &str) -> String {
    format!("{CHANNEL_NAME}/{label}/{event}")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub(crate) enum MethodReply {
    Ok { value: Option<String> },
    NotImplemented,
}

/// Synchronous request/response half of the channel. Unrecognized method
/// names answer `NotImplemented` rather than raising an error.
pub(crate) fn dispatch_method(relay: &mut FileOpenRelay, method: &str) -> MethodReply {
    match method {
        METHOD_GET_CURRENT_FILE => MethodReply::Ok {
            value: relay.fetch_current_file(),
        },
        _ => MethodReply::NotImplemented,
    }
}
